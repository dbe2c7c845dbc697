//! Configuration types.

use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::constants::{DEFAULT_POLL_INTERVAL, DEFAULT_TIMEOUT};
use crate::threading::ExecutionMode;

/// Root configuration structure for Drover.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DroverConfig {
    /// Default timeout and poll interval for condition waits.
    pub wait: WaitConfig,

    /// Where units of work run.
    pub executor: ExecutorConfig,
}

/// Condition wait defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct WaitConfig {
    /// Total time a wait may take, in milliseconds.
    /// Zero means the condition is evaluated exactly once.
    /// Default: 30000
    pub timeout_ms: u64,

    /// Time slept between two evaluations, in milliseconds.
    /// Must be greater than zero and no longer than the timeout.
    /// Default: 10
    pub poll_interval_ms: u64,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            timeout_ms: millis(DEFAULT_TIMEOUT),
            poll_interval_ms: millis(DEFAULT_POLL_INTERVAL),
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
const fn millis(duration: Duration) -> u64 { duration.as_millis() as u64 }

/// Executor defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ExecutorConfig {
    /// `ownerThread` marshals every unit onto the owner thread.
    /// `currentThread` runs units inline on the caller, for headless fakes.
    /// Default: `ownerThread`
    pub mode: ExecutionMode,
}
