//! Cursor over a single line of source text.

use text_size::TextSize;

use crate::base::{indentation_width, visual_column};

/// Default tab width used for visual columns
pub const DEFAULT_TAB_SIZE: usize = 4;

/// Read position within one line (no trailing newline).
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    text: &'a str,
    line: u32,
    pos: usize,
    tab_size: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(text: &'a str, line: u32) -> Self {
        Self {
            text: text.trim_end_matches(['\n', '\r']),
            line,
            pos: 0,
            tab_size: DEFAULT_TAB_SIZE,
        }
    }

    pub fn with_tab_size(mut self, tab_size: usize) -> Self {
        self.tab_size = tab_size.max(1);
        self
    }

    /// The whole line
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Unconsumed remainder of the line
    pub fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    /// Byte offset of the read position
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn offset(&self) -> TextSize {
        TextSize::new(self.pos as u32)
    }

    pub fn eol(&self) -> bool {
        self.pos >= self.text.len()
    }

    pub fn sol(&self) -> bool {
        self.pos == 0
    }

    /// Visual column of the read position
    pub fn column(&self) -> usize {
        visual_column(self.text, self.pos, self.tab_size)
    }

    /// Visual width of the line's leading whitespace
    pub fn indentation(&self) -> usize {
        indentation_width(self.text, self.tab_size)
    }

    /// Consume `len` bytes. `len` must end on a char boundary of the rest.
    pub(crate) fn advance(&mut self, len: usize) {
        self.pos = (self.pos + len).min(self.text.len());
    }

    /// Consume one character and return it
    pub(crate) fn advance_char(&mut self) -> Option<&'a str> {
        let rest = self.rest();
        let len = rest.chars().next()?.len_utf8();
        self.pos += len;
        Some(&rest[..len])
    }
}
