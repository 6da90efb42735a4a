//! Column arithmetic for a single line of source text.

use unicode_width::UnicodeWidthChar;

/// Visual column of the byte offset `offset` in `line`.
///
/// Tabs advance to the next multiple of `tab_size`; every other character
/// advances by its display width. Offsets past the end of the line are
/// clamped to the line length.
pub fn visual_column(line: &str, offset: usize, tab_size: usize) -> usize {
    let end = offset.min(line.len());
    advance(0, line[..end].chars(), tab_size)
}

/// Visual width of the leading whitespace of `line`.
pub fn indentation_width(line: &str, tab_size: usize) -> usize {
    advance(
        0,
        line.chars().take_while(|c| *c == ' ' || *c == '\t'),
        tab_size,
    )
}

#[inline]
fn advance(start: usize, chars: impl Iterator<Item = char>, tab_size: usize) -> usize {
    let tab_size = tab_size.max(1);
    chars.fold(start, |col, c| {
        if c == '\t' {
            col + tab_size - col % tab_size
        } else {
            col + c.width().unwrap_or(0)
        }
    })
}
