//! Mode configuration

use smol_str::SmolStr;

use crate::error::ModeError;
use crate::indent::{DEFAULT_FUNCTION_ANCHOR_OFFSET, DEFAULT_INDENT_UNIT, IndentTracker};
use crate::lexer::{DEFAULT_CONTINUATION_MARKER, DEFAULT_TAB_SIZE, TokenKind};

/// Host-supplied settings for a mode
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ModeConfig {
    /// Columns added per block level
    pub indent_unit: usize,
    /// Tab width used when measuring columns
    pub tab_size: usize,
    /// Added to a function marker's column to align continuation lines
    pub function_anchor_offset: usize,
    /// Tokens starting with this text continue the logical line
    pub continuation_marker: SmolStr,
    /// Lines starting with this text dedent to the enclosing block
    pub block_close_marker: SmolStr,
}

impl Default for ModeConfig {
    fn default() -> Self {
        Self {
            indent_unit: DEFAULT_INDENT_UNIT,
            tab_size: DEFAULT_TAB_SIZE,
            function_anchor_offset: DEFAULT_FUNCTION_ANCHOR_OFFSET,
            continuation_marker: SmolStr::new_static(DEFAULT_CONTINUATION_MARKER),
            block_close_marker: SmolStr::new_static(TokenKind::BLOCK_CLOSE),
        }
    }
}

impl ModeConfig {
    pub fn with_indent_unit(mut self, indent_unit: usize) -> Self {
        self.indent_unit = indent_unit;
        self
    }

    pub fn with_tab_size(mut self, tab_size: usize) -> Self {
        self.tab_size = tab_size;
        self
    }

    pub fn with_function_anchor_offset(mut self, offset: usize) -> Self {
        self.function_anchor_offset = offset;
        self
    }

    pub fn with_continuation_marker(mut self, marker: &str) -> Self {
        self.continuation_marker = SmolStr::new(marker);
        self
    }

    pub fn with_block_close_marker(mut self, marker: &str) -> Self {
        self.block_close_marker = SmolStr::new(marker);
        self
    }

    pub fn validate(&self) -> Result<(), ModeError> {
        if self.tab_size == 0 {
            return Err(ModeError::invalid_config("tab_size", "must be at least 1"));
        }
        if self.continuation_marker.is_empty() {
            return Err(ModeError::invalid_config(
                "continuation_marker",
                "must not be empty",
            ));
        }
        if self.block_close_marker.is_empty() {
            return Err(ModeError::invalid_config(
                "block_close_marker",
                "must not be empty",
            ));
        }
        Ok(())
    }

    /// Indentation tracker for these settings
    pub fn tracker(&self) -> IndentTracker {
        IndentTracker::new(self.indent_unit)
            .with_function_anchor_offset(self.function_anchor_offset)
            .with_block_close_marker(&self.block_close_marker)
    }
}
