//! Editor mode: tokenizer, indentation tracker and style table wired together
//!
//! ```text
//! line text ──► LineTokens ──► Token ──► IndentTracker::advance(state)
//!                                 │
//!                                 └────► StyleTable::classify ──► class
//!
//! next line text ──► IndentTracker::query_indent(state) ──► column
//! ```
//!
//! The host owns one [`DocumentState`] per buffer and feeds it every line in
//! order. [`Mode::reparse`] rebuilds the same state from the document start.

mod config;

use smol_str::SmolStr;
use tracing::debug;

pub use config::ModeConfig;

use crate::error::ModeError;
use crate::grammar::equelle;
use crate::indent::{DocumentState, IndentTracker};
use crate::lexer::{LineCursor, LineTokens, RuleTable, Token};
use crate::style::StyleTable;

/// A token with its display class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledToken {
    pub token: Token,
    pub class: SmolStr,
}

/// A grammar's rules and styles under a host configuration
#[derive(Debug)]
pub struct Mode {
    rules: RuleTable,
    styles: StyleTable,
    tracker: IndentTracker,
    config: ModeConfig,
}

impl Mode {
    /// Equelle mode with default settings
    pub fn equelle() -> Result<Self, ModeError> {
        Self::equelle_with_config(ModeConfig::default())
    }

    pub fn equelle_with_config(config: ModeConfig) -> Result<Self, ModeError> {
        Self::new(equelle::rules()?, equelle::styles(), config)
    }

    pub fn new(rules: RuleTable, styles: StyleTable, config: ModeConfig) -> Result<Self, ModeError> {
        config.validate()?;
        debug!(rules = rules.len(), styles = styles.len(), ?config, "mode created");
        Ok(Self {
            rules,
            styles,
            tracker: config.tracker(),
            config,
        })
    }

    pub fn start_state(&self) -> DocumentState {
        DocumentState::new()
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn styles(&self) -> &StyleTable {
        &self.styles
    }

    pub fn tracker(&self) -> &IndentTracker {
        &self.tracker
    }

    pub fn config(&self) -> &ModeConfig {
        &self.config
    }

    /// Tokens of one line, without touching any state
    pub fn tokens<'a>(&'a self, line: u32, text: &'a str) -> LineTokens<'a, 'a> {
        let cursor = LineCursor::new(text, line).with_tab_size(self.config.tab_size);
        LineTokens::new(cursor, &self.rules)
            .with_continuation_marker(&self.config.continuation_marker)
    }

    /// Tokenize `text`, thread every token through `state`, and classify it.
    pub fn highlight_line(
        &self,
        state: &mut DocumentState,
        line: u32,
        text: &str,
    ) -> Vec<StyledToken> {
        let mut styled = Vec::new();
        self.scan_line(state, line, text, |token| {
            let class = SmolStr::new(self.styles.classify(&token));
            styled.push(StyledToken { token, class });
        });
        styled
    }

    /// Thread one line through `state` without classifying
    pub fn advance_line(&self, state: &mut DocumentState, line: u32, text: &str) {
        self.scan_line(state, line, text, |_| {});
    }

    fn scan_line(
        &self,
        state: &mut DocumentState,
        line: u32,
        text: &str,
        mut sink: impl FnMut(Token),
    ) {
        let tokens = self.tokens(line, text);
        let indentation = tokens.cursor().indentation();
        for token in tokens {
            self.tracker.advance(state, &token, indentation);
            sink(token);
        }
    }

    /// Column the line with text `text_after` (after its indentation) should
    /// start at.
    pub fn indent(&self, state: &DocumentState, text_after: &str) -> usize {
        self.tracker.query_indent(state, text_after)
    }

    /// State after every line of `text`, rebuilt from the start.
    pub fn reparse(&self, text: &str) -> DocumentState {
        let mut state = self.start_state();
        for (line, line_text) in text.lines().enumerate() {
            self.advance_line(&mut state, line as u32, line_text);
        }
        state
    }

    /// Suggested indentation for every line of `text`, each computed from the
    /// state after the lines before it as they are written.
    pub fn indent_lines(&self, text: &str) -> Vec<usize> {
        let mut state = self.start_state();
        let mut indents = Vec::new();
        for (line, line_text) in text.lines().enumerate() {
            indents.push(self.indent(&state, line_text));
            self.advance_line(&mut state, line as u32, line_text);
        }
        indents
    }
}
