//! Integration tests for Drover.
//!
//! These tests start a real owner thread and drive a fake single-threaded
//! toolkit through the public API, the way a widget driver would.
//!
//! ## Running Integration Tests
//!
//! ```bash
//! cargo test -p drover --test integration
//!
//! # Run specific test module
//! cargo test -p drover --test integration timing__
//!
//! # With owner-thread tracing
//! RUST_LOG=drover=trace cargo test -p drover --test integration -- --nocapture
//! ```
//!
//! ## Test Organization
//!
//! Tests follow the naming convention `<module>__<test_name>` to allow filtering by module:
//! - `threading__*` - Owner-thread execution
//! - `timing__*` - Condition waits against asynchronous UI transitions
//! - `geometry__*` - Calculators fed with snapshots taken on the owner thread
//! - `config__*` - Building executors and waiters from configuration files

// Allow double-underscore naming for test modules (e.g., timing__wait)
#![allow(non_snake_case)]
// Relax clippy lints for integration tests - these are test utilities, not production code
#![allow(
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::wildcard_imports
)]

mod common;
mod framework;

mod config__load;
mod geometry__drivers;
mod threading__executor;
mod timing__wait;
