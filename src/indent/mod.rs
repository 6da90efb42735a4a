//! Indentation tracking
//!
//! Block nesting, continuation lines and alignment anchors are accumulated
//! in a [`DocumentState`] as tokens stream past. Queries against that state
//! are pure, so hosts may ask on every keystroke.

mod state;
mod tracker;


pub use state::DocumentState;
pub use tracker::{DEFAULT_FUNCTION_ANCHOR_OFFSET, DEFAULT_INDENT_UNIT, IndentTracker};
