//! # equelle-mode
//!
//! Syntax highlighting and indentation mode for the Equelle DSL.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! mode      → Host-facing facade: highlight a line, query indentation
//!   ↓
//! grammar   → Built-in Equelle rule and style tables
//!   ↓
//! style     → Token kind → display class
//! indent    → DocumentState + IndentTracker state machine
//!   ↓
//! lexer     → Rule tables, longest-match tokenizer, line loop
//!   ↓
//! base      → Primitives (Position, TextSize, column arithmetic)
//! ```

// ============================================================================
// MODULES (dependency order: base → lexer → indent/style → grammar → mode)
// ============================================================================

/// Foundation types: Position, TextSize, column arithmetic
pub mod base;

/// Errors raised while assembling a mode
pub mod error;

/// Tokenizer: ordered rule tables, longest match, error recovery
pub mod lexer;

/// Indentation: per-buffer state and the tracker that threads it
pub mod indent;

/// Styles: token kind to display class
pub mod style;

/// Built-in grammars
pub mod grammar;

/// Mode facade for host editors
pub mod mode;

// Re-export commonly needed items
pub use error::ModeError;
pub use indent::{DocumentState, IndentTracker};
pub use lexer::{LexError, LineCursor, LineTokens, Rule, RuleTable, Token, TokenKind, next_token};
pub use mode::{Mode, ModeConfig, StyledToken};
pub use style::StyleTable;
