//! Common test utilities and framework re-exports.

#![allow(dead_code)]

use std::time::Duration;

pub use drover::core::prelude::*;

pub use crate::framework::*;

/// Interval between simulated UI events.
pub const EVENT_INTERVAL: Duration = Duration::from_millis(5);
