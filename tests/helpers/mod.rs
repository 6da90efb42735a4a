//! Shared helpers for the integration tests

pub mod mode_helpers;
