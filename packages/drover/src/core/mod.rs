//! Core infrastructure for Drover.
//!
//! This module provides foundational types used throughout the library:
//!
//! - [`error`] - Unified error types
//! - [`constants`] - Library constants and defaults
//! - [`prelude`] - Common re-exports for convenience

pub mod constants;
pub mod error;
pub mod prelude;

pub use error::{Error, Result};
