//! Longest-match tokenizer over an ordered rule table.

use thiserror::Error;
use tracing::{debug, trace};

use super::cursor::LineCursor;
use super::rule::{Rule, RuleTable};
use super::token::{Token, TokenKind};

/// Default line continuation marker
pub const DEFAULT_CONTINUATION_MARKER: &str = "...";

/// No rule matches at the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no rule matches at line {line}, byte {position}")]
pub struct LexError {
    pub line: u32,
    pub position: usize,
}

/// Produce the next token at `cursor` and advance past it.
///
/// Every rule is tried at the read position; the strictly longest match wins
/// and equal lengths go to the earliest-registered rule. The cursor is left
/// untouched on error.
pub fn next_token(cursor: &mut LineCursor<'_>, rules: &RuleTable) -> Result<Token, LexError> {
    let rest = cursor.rest();

    let mut best: Option<(usize, usize, &Rule)> = None;
    for (index, rule) in rules.iter().enumerate() {
        let Some(len) = rule.pattern.match_len(rest) else {
            continue;
        };
        if best.is_none_or(|(_, max, _)| len > max) {
            best = Some((index, len, rule));
        }
    }

    let Some((index, len, rule)) = best else {
        return Err(LexError {
            line: cursor.line(),
            position: cursor.pos(),
        });
    };

    let offset = cursor.offset();
    let column = cursor.column();
    let text = &rest[..len];
    cursor.advance(len);

    trace!(rule = index, len, text, "rule selected");
    Ok(rule.apply(text, cursor.line()).at(offset, column))
}

/// Tokens of one physical line, as the indentation tracker must see them.
///
/// On top of [`next_token`] this loop:
/// - reclassifies any token starting with the continuation marker,
/// - turns an unmatched character into an [`TokenKind::Error`] token and
///   carries on after it,
/// - guarantees progress when only zero-length rules match mid-line,
/// - ends the line with exactly one [`TokenKind::Eol`] unless the line ended
///   in a continuation marker.
///
/// An empty line yields no tokens, so it leaves indentation state untouched.
/// A whitespace-only line is tokenized as usual.
pub struct LineTokens<'r, 'a> {
    cursor: LineCursor<'a>,
    rules: &'r RuleTable,
    continuation_marker: &'r str,
    /// Position of the last zero-width token that was not at end of line
    empty_at: Option<usize>,
    terminated: bool,
    finished: bool,
}

impl<'r, 'a> LineTokens<'r, 'a> {
    pub fn new(cursor: LineCursor<'a>, rules: &'r RuleTable) -> Self {
        let finished = cursor.text().is_empty();
        Self {
            cursor,
            rules,
            continuation_marker: DEFAULT_CONTINUATION_MARKER,
            empty_at: None,
            terminated: false,
            finished,
        }
    }

    pub fn with_continuation_marker(mut self, marker: &'r str) -> Self {
        self.continuation_marker = marker;
        self
    }

    pub fn cursor(&self) -> &LineCursor<'a> {
        &self.cursor
    }

    fn reclassify(&self, token: Token) -> Token {
        if !self.continuation_marker.is_empty()
            && token.text.starts_with(self.continuation_marker)
            && token.kind != TokenKind::LineCont
        {
            trace!(kind = %token.kind, "reclassified as line continuation");
            token.reclassified(TokenKind::LineCont)
        } else {
            token
        }
    }

    fn recover(&mut self, err: LexError) -> Token {
        let offset = self.cursor.offset();
        let column = self.cursor.column();
        let text = self.cursor.advance_char().unwrap_or_default();
        debug!(%err, text, "unmatched input marked as error");
        Token::new(TokenKind::Error, text, self.cursor.line()).at(offset, column)
    }

    fn end_of_line(&mut self) -> Token {
        let offset = self.cursor.offset();
        let column = self.cursor.column();
        match next_token(&mut self.cursor, self.rules) {
            Ok(token) if token.kind == TokenKind::Eol => token,
            _ => Token::eol(self.cursor.line(), offset, column),
        }
    }
}

impl Iterator for LineTokens<'_, '_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        if self.cursor.eol() {
            self.finished = true;
            if self.terminated {
                return None;
            }
            return Some(self.end_of_line());
        }

        let pos = self.cursor.pos();
        let result = if self.empty_at == Some(pos) {
            Err(LexError {
                line: self.cursor.line(),
                position: pos,
            })
        } else {
            next_token(&mut self.cursor, self.rules)
        };

        let token = match result {
            Ok(token) => self.reclassify(token),
            Err(err) => self.recover(err),
        };

        self.empty_at = (token.is_empty() && !self.cursor.eol()).then_some(pos);
        self.terminated = token.kind.terminates_line();
        Some(token)
    }
}
