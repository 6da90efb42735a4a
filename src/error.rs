//! Error types for building a mode.
//!
//! Nothing on the tokenize/track path fails: unmatched input is recovered by
//! the line loop and unbalanced braces are clamped. These errors only come out
//! of table construction, configuration, and restoring persisted state.

use thiserror::Error;

/// Errors that can occur while assembling a mode.
#[derive(Debug, Error)]
pub enum ModeError {
    /// A rule pattern failed to compile.
    #[error("invalid rule pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A configuration value is out of range.
    #[error("invalid configuration: {field} {message}")]
    InvalidConfig {
        field: &'static str,
        message: String,
    },

    /// A restored document state has one indent entry per level missing
    /// or extra.
    #[error("inconsistent document state: block level {block_level} with {entries} indent entries")]
    InconsistentState { block_level: usize, entries: usize },
}

impl ModeError {
    /// Create an invalid configuration error.
    pub fn invalid_config(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            message: message.into(),
        }
    }
}
