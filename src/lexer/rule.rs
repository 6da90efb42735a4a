//! Ordered pattern/action rule tables.

use std::fmt;

use regex::Regex;
use smol_str::SmolStr;

use super::token::{Token, TokenKind};
use crate::error::ModeError;

/// Builds a token from the matched text and the current line number.
pub type Action = Box<dyn Fn(&str, u32) -> Token + Send + Sync>;

/// Prefix matcher for a rule
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Exact text
    Literal(SmolStr),
    /// Regular expression anchored at the read position
    Regex(Regex),
}

impl Pattern {
    pub fn literal(text: &str) -> Self {
        Self::Literal(SmolStr::new(text))
    }

    /// Compile `pattern`, anchoring it to the start of the remaining input.
    pub fn regex(pattern: &str) -> Result<Self, ModeError> {
        Regex::new(&format!("^(?:{pattern})"))
            .map(Self::Regex)
            .map_err(|source| ModeError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })
    }

    /// Length in bytes of the match at the start of `input`, without consuming.
    ///
    /// A zero-length match is still a match.
    pub fn match_len(&self, input: &str) -> Option<usize> {
        match self {
            Self::Literal(text) => input.starts_with(text.as_str()).then_some(text.len()),
            Self::Regex(regex) => regex.find(input).map(|m| m.end()),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => write!(f, "{text:?}"),
            Self::Regex(regex) => write!(f, "/{}/", regex.as_str()),
        }
    }
}

/// A (pattern, action) pair
pub struct Rule {
    pub pattern: Pattern,
    action: Action,
}

impl Rule {
    pub fn new(pattern: Pattern, action: Action) -> Self {
        Self { pattern, action }
    }

    /// Rule whose action always produces `kind`
    pub fn token(pattern: Pattern, kind: impl Into<TokenKind>) -> Self {
        let kind = kind.into();
        Self::new(
            pattern,
            Box::new(move |text: &str, line: u32| Token::new(kind.clone(), text, line)),
        )
    }

    pub fn apply(&self, text: &str, line: u32) -> Token {
        (self.action)(text, line)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("pattern", &self.pattern)
            .finish_non_exhaustive()
    }
}

/// Rules in registration order. Order breaks ties between equal-length matches.
#[derive(Debug, Default)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Register a literal rule producing `kind`
    pub fn literal(mut self, text: &str, kind: impl Into<TokenKind>) -> Self {
        self.push(Rule::token(Pattern::literal(text), kind));
        self
    }

    /// Register a regex rule producing `kind`
    pub fn regex(mut self, pattern: &str, kind: impl Into<TokenKind>) -> Result<Self, ModeError> {
        self.push(Rule::token(Pattern::regex(pattern)?, kind));
        Ok(self)
    }

    /// Register a rule with a custom action
    pub fn rule(mut self, pattern: Pattern, action: Action) -> Self {
        self.push(Rule::new(pattern, action));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<Rule> for RuleTable {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}
