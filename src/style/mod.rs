//! Display classes for tokens.
//!
//! A token's class is looked up by kind; kinds without an entry use their
//! own identifier, so the mapping is total.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::lexer::{Token, TokenKind};

/// Kind → display class table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleTable {
    classes: FxHashMap<TokenKind, SmolStr>,
}

impl StyleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `kind` to `class`, replacing any previous entry
    pub fn with(mut self, kind: impl Into<TokenKind>, class: &str) -> Self {
        self.insert(kind, class);
        self
    }

    /// Map every kind in `kinds` to `class`
    pub fn with_all<'k>(mut self, kinds: impl IntoIterator<Item = &'k str>, class: &str) -> Self {
        for kind in kinds {
            self.insert(kind, class);
        }
        self
    }

    pub fn insert(&mut self, kind: impl Into<TokenKind>, class: &str) {
        self.classes.insert(kind.into(), SmolStr::new(class));
    }

    /// Display class for `token`
    pub fn classify<'a>(&'a self, token: &'a Token) -> &'a str {
        self.classify_kind(&token.kind)
    }

    /// Display class for `kind`, falling back to the kind's identifier
    pub fn classify_kind<'a>(&'a self, kind: &'a TokenKind) -> &'a str {
        self.classes
            .get(kind)
            .map_or_else(|| kind.name(), SmolStr::as_str)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
