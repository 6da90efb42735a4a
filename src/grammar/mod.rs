//! Built-in grammars
//!
//! Each grammar is a code-owned [`RuleTable`](crate::lexer::RuleTable) plus
//! the [`StyleTable`](crate::style::StyleTable) for its kinds, assembled at
//! startup.

pub mod equelle;
