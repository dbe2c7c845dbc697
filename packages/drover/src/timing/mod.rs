//! Condition waits.
//!
//! [`Waiter`] blocks the calling (test) thread until a [`Condition`] holds or a
//! [`Timeout`] elapses. Time comes from an injected [`Clock`] so polling logic
//! can be tested without real sleeps.

mod clock;
mod condition;
mod timeout;
mod waiter;

use std::time::Duration;

pub use clock::{Clock, ManualClock, SystemClock};
pub use condition::{Condition, Description, PredicateCondition, condition};
pub use timeout::Timeout;
pub use waiter::Waiter;

use crate::threading::ExecutionError;

/// Errors produced while waiting for a condition.
#[derive(Debug, thiserror::Error)]
pub enum WaitError {
    /// The condition did not hold before the timeout elapsed.
    #[error("Timed out after {timeout:?} waiting for {description}")]
    TimedOut { description: String, timeout: Duration },

    /// Evaluating the condition failed.
    #[error(transparent)]
    Execution(#[from] ExecutionError),

    #[error("Invalid timeout: {0}")]
    InvalidTimeout(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

impl WaitError {
    /// Description of the condition that timed out, if this is a timeout.
    #[must_use]
    pub fn timed_out_description(&self) -> Option<&str> {
        match self {
            Self::TimedOut { description, .. } => Some(description),
            _ => None,
        }
    }
}
