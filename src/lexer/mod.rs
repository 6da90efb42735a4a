//! Rule-table tokenizer
//!
//! The grammar is an ordered list of (pattern, action) rules built at
//! startup. At each read position every rule is tried without consuming; the
//! longest match wins and ties go to the rule registered first.
//!
//! ```text
//! LineCursor ──► next_token(cursor, rules) ──► Token | LexError
//!                      ▲
//!                 LineTokens: error recovery, continuation
//!                 reclassification, end-of-line synthesis
//! ```

mod cursor;
mod rule;
mod token;
mod tokenizer;

pub use cursor::{DEFAULT_TAB_SIZE, LineCursor};
pub use rule::{Action, Pattern, Rule, RuleTable};
pub use token::{Token, TokenKind};
pub use tokenizer::{DEFAULT_CONTINUATION_MARKER, LexError, LineTokens, next_token};
