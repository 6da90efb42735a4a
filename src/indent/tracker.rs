//! Indentation state machine.

use smol_str::SmolStr;
use tracing::{debug, trace};

use super::state::DocumentState;
use crate::lexer::{Token, TokenKind};

/// Default indent unit when the host supplies none
pub const DEFAULT_INDENT_UNIT: usize = 2;

/// Offset added to a function marker's column to form the alignment anchor;
/// the display width of the `Function` keyword.
pub const DEFAULT_FUNCTION_ANCHOR_OFFSET: usize = 8;

/// Threads [`DocumentState`] through tokens and answers indentation queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentTracker {
    indent_unit: usize,
    function_anchor_offset: usize,
    block_close_marker: SmolStr,
}

impl IndentTracker {
    pub fn new(indent_unit: usize) -> Self {
        Self {
            indent_unit,
            function_anchor_offset: DEFAULT_FUNCTION_ANCHOR_OFFSET,
            block_close_marker: SmolStr::new_static(TokenKind::BLOCK_CLOSE),
        }
    }

    pub fn with_function_anchor_offset(mut self, offset: usize) -> Self {
        self.function_anchor_offset = offset;
        self
    }

    pub fn with_block_close_marker(mut self, marker: &str) -> Self {
        self.block_close_marker = SmolStr::new(marker);
        self
    }

    pub fn indent_unit(&self) -> usize {
        self.indent_unit
    }

    pub fn function_anchor_offset(&self) -> usize {
        self.function_anchor_offset
    }

    /// Update `state` for `token`, found on a line indented `line_indentation`
    /// columns.
    pub fn advance(&self, state: &mut DocumentState, token: &Token, line_indentation: usize) {
        if state.at_eol {
            state.at_eol = false;
            state.line_contained_block_start = false;
        }

        match &token.kind {
            TokenKind::BlockOpen => state.line_contained_block_start = true,
            TokenKind::LineCont => state.continued_line = true,
            TokenKind::Function => {
                state.function_token_column =
                    token.column.saturating_sub(line_indentation) + self.function_anchor_offset;
            }
            TokenKind::BlockClose | TokenKind::Eol | TokenKind::Error | TokenKind::Named(_) => {}
        }

        // Follow the author's own indentation for the rest of the block, unless
        // this line opened the block and so sits at the parent level.
        let ends_line = match &token.kind {
            TokenKind::Eol => !state.continued_line,
            TokenKind::LineCont => true,
            TokenKind::BlockOpen
            | TokenKind::BlockClose
            | TokenKind::Function
            | TokenKind::Error
            | TokenKind::Named(_) => false,
        };
        if ends_line && !state.line_contained_block_start {
            state.block_indent[state.block_level] = line_indentation;
        }

        match &token.kind {
            TokenKind::Eol => {
                state.at_eol = true;
                state.continued_line = false;
                state.function_token_column = 0;
            }
            TokenKind::BlockOpen => {
                state.block_indent.push(line_indentation + self.indent_unit);
                state.block_level += 1;
            }
            TokenKind::BlockClose => {
                if state.block_level == 0 {
                    debug!(line = token.line, "block close without matching open ignored");
                } else {
                    state.block_indent.pop();
                    state.block_level -= 1;
                }
            }
            TokenKind::LineCont | TokenKind::Function | TokenKind::Error | TokenKind::Named(_) => {}
        }

        trace!(
            kind = %token.kind,
            level = state.block_level,
            indent = state.block_indent[state.block_level],
            continued = state.continued_line,
            "advanced"
        );
    }

    /// Indentation for a line whose text (after any indentation) is
    /// `next_line_text`. Does not touch `state`.
    pub fn query_indent(&self, state: &DocumentState, next_line_text: &str) -> usize {
        let text = next_line_text.trim_start();
        let closes_block =
            !self.block_close_marker.is_empty() && text.starts_with(self.block_close_marker.as_str());

        if closes_block {
            state.block_indent[state.block_level.saturating_sub(1)]
        } else if state.continued_line {
            state.block_indent[state.block_level] + state.function_token_column
        } else {
            state.block_indent[state.block_level]
        }
    }
}

impl Default for IndentTracker {
    fn default() -> Self {
        Self::new(DEFAULT_INDENT_UNIT)
    }
}
