//! Test framework for Drover integration tests.
//!
//! Runs a real [`EventLoop`](drover::EventLoop) as the owner thread and puts
//! a fake toolkit on it that refuses to be touched from anywhere else.
//!
//! # Example
//!
//! ```rust,ignore
//! let test = Test::new();
//! test.update("enable button", |w| w.button_enabled = true);
//!
//! let enabled = test.read("button state", |w| w.button_enabled);
//! assert!(enabled);
//! ```


pub use test::Test;
pub use toolkit::{Toolkit, Widgets};
