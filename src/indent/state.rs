//! Per-document indentation state.

/// Indentation state of one buffer.
///
/// Threaded forward token by token; rebuilding it from [`DocumentState::new`]
/// over the same lines yields an equal value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "StateFields"))]
pub struct DocumentState {
    pub(crate) block_level: usize,
    /// Always `block_level + 1` entries
    pub(crate) block_indent: Vec<usize>,
    pub(crate) line_contained_block_start: bool,
    pub(crate) at_eol: bool,
    pub(crate) continued_line: bool,
    pub(crate) function_token_column: usize,
}

impl DocumentState {
    pub fn new() -> Self {
        Self {
            block_level: 0,
            block_indent: vec![0],
            line_contained_block_start: false,
            at_eol: false,
            continued_line: false,
            function_token_column: 0,
        }
    }

    /// Current nesting depth
    pub fn block_level(&self) -> usize {
        self.block_level
    }

    /// Column each nesting level aligns to, outermost first
    pub fn block_indent(&self) -> &[usize] {
        &self.block_indent
    }

    /// Column lines at the current level align to
    pub fn current_indent(&self) -> usize {
        self.block_indent[self.block_level]
    }

    pub fn line_contained_block_start(&self) -> bool {
        self.line_contained_block_start
    }

    pub fn at_eol(&self) -> bool {
        self.at_eol
    }

    pub fn continued_line(&self) -> bool {
        self.continued_line
    }

    /// Alignment anchor for continuation lines, relative to the block indent
    pub fn function_token_column(&self) -> usize {
        self.function_token_column
    }

    /// `block_indent` has exactly one entry per level plus the top level.
    pub fn is_consistent(&self) -> bool {
        self.block_indent.len() == self.block_level + 1
    }
}

impl Default for DocumentState {
    fn default() -> Self {
        Self::new()
    }
}

/// Unchecked field set a persisted state is read into
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct StateFields {
    block_level: usize,
    block_indent: Vec<usize>,
    line_contained_block_start: bool,
    at_eol: bool,
    continued_line: bool,
    function_token_column: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<StateFields> for DocumentState {
    type Error = crate::error::ModeError;

    fn try_from(fields: StateFields) -> Result<Self, Self::Error> {
        let state = Self {
            block_level: fields.block_level,
            block_indent: fields.block_indent,
            line_contained_block_start: fields.line_contained_block_start,
            at_eol: fields.at_eol,
            continued_line: fields.continued_line,
            function_token_column: fields.function_token_column,
        };
        if !state.is_consistent() {
            return Err(crate::error::ModeError::InconsistentState {
                block_level: state.block_level,
                entries: state.block_indent.len(),
            });
        }
        Ok(state)
    }
}
