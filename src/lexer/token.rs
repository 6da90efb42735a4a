//! Token kinds and tokens produced by the rule table.

use std::fmt;

use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

use crate::base::Position;

/// Kind of a token.
///
/// The structural kinds drive the indentation tracker; every other kind the
/// grammar defines is carried by name in [`TokenKind::Named`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// `{`
    BlockOpen,
    /// `}`
    BlockClose,
    /// A function-like keyword; continuation lines align after it
    Function,
    /// End of a physical line
    Eol,
    /// Line continuation marker (`...`)
    LineCont,
    /// Input no rule matched
    Error,
    /// Any other grammar kind (keyword, identifier, operator, ...)
    Named(SmolStr),
}

impl TokenKind {
    pub const BLOCK_OPEN: &'static str = "{";
    pub const BLOCK_CLOSE: &'static str = "}";
    pub const FUNCTION: &'static str = "FUNCTION";
    pub const EOL: &'static str = "EOL";
    pub const LINE_CONT: &'static str = "LINECONT";
    pub const ERROR: &'static str = "error";

    /// Resolve a grammar kind name to its kind.
    pub fn from_name(name: &str) -> Self {
        match name {
            Self::BLOCK_OPEN => Self::BlockOpen,
            Self::BLOCK_CLOSE => Self::BlockClose,
            Self::FUNCTION => Self::Function,
            Self::EOL => Self::Eol,
            Self::LINE_CONT => Self::LineCont,
            Self::ERROR => Self::Error,
            other => Self::Named(SmolStr::new(other)),
        }
    }

    /// The kind identifier, as the grammar names it.
    pub fn name(&self) -> &str {
        match self {
            Self::BlockOpen => Self::BLOCK_OPEN,
            Self::BlockClose => Self::BLOCK_CLOSE,
            Self::Function => Self::FUNCTION,
            Self::Eol => Self::EOL,
            Self::LineCont => Self::LINE_CONT,
            Self::Error => Self::ERROR,
            Self::Named(name) => name.as_str(),
        }
    }

    /// Eol and LineCont both end the tokens of a physical line.
    pub fn terminates_line(&self) -> bool {
        matches!(self, Self::Eol | Self::LineCont)
    }
}

impl From<&str> for TokenKind {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    pub text: SmolStr,
    /// Line the token was produced on
    pub line: u32,
    /// Byte offset of the token start within its line
    pub offset: TextSize,
    /// Visual column of the token start (tabs expanded)
    pub column: usize,
}

impl Token {
    /// Create a token at the start of `line`; the tokenizer places it.
    pub fn new(kind: impl Into<TokenKind>, text: &str, line: u32) -> Self {
        Self {
            kind: kind.into(),
            text: SmolStr::new(text),
            line,
            offset: TextSize::new(0),
            column: 0,
        }
    }

    /// Zero-width end-of-line token
    pub fn eol(line: u32, offset: TextSize, column: usize) -> Self {
        Self::new(TokenKind::Eol, "", line).at(offset, column)
    }

    pub(crate) fn at(mut self, offset: TextSize, column: usize) -> Self {
        self.offset = offset;
        self.column = column;
        self
    }

    pub(crate) fn reclassified(mut self, kind: TokenKind) -> Self {
        self.kind = kind;
        self
    }

    /// Byte range of the token within its line
    pub fn range(&self) -> TextRange {
        TextRange::at(self.offset, TextSize::of(self.text.as_str()))
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
