//! Foundation types for the Equelle mode.
//!
//! This module provides fundamental types used by the tokenizer and the
//! indentation tracker:
//! - [`Position`] - Line/visual-column positions of tokens
//! - [`TextSize`] - Byte offsets within a line
//! - [`visual_column`], [`indentation_width`] - Tab-aware column arithmetic
//!
//! This module has NO dependencies on other modules of this crate.

mod position;
mod text;

pub use position::Position;
pub use text::{indentation_width, visual_column};

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
