//! Timeout-bound polling of conditions.
//!
//! A wait is a tiny state machine, `WAITING -> SATISFIED | TIMED_OUT`, with no
//! way back:
//!
//! 1. The condition is evaluated once, immediately. If it holds, the wait
//!    returns without sleeping.
//! 2. Otherwise the caller sleeps one poll interval (never past the deadline)
//!    and evaluates again.
//! 3. Once the elapsed time reaches the timeout with the condition still
//!    false, the description is computed and a [`WaitError::TimedOut`] is
//!    returned.
//!
//! Only the waiting thread sleeps. Predicates that read toolkit state go
//! through the [`Executor`](crate::threading::Executor), so the owner thread
//! keeps processing events between polls.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, trace};

use super::clock::{Clock, SystemClock};
use super::condition::Condition;
use super::timeout::Timeout;
use super::WaitError;
use crate::config::WaitConfig;
use crate::threading::ExecutionError;

enum Outcome {
    Satisfied { polls: u32 },
    TimedOut,
}

/// Waits for conditions using an injected clock.
#[derive(Clone)]
pub struct Waiter {
    clock: Arc<dyn Clock>,
    default_timeout: Timeout,
}

impl Waiter {
    /// Creates a waiter on the system clock with the default timeout.
    #[must_use]
    pub fn new() -> Self { Self::with_clock(Arc::new(SystemClock)) }

    /// Creates a waiter on `clock`.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            default_timeout: Timeout::default(),
        }
    }

    /// Creates a system-clock waiter whose default timeout comes from config.
    ///
    /// # Errors
    ///
    /// Returns [`WaitError::InvalidTimeout`] if the configured values are invalid.
    pub fn from_config(config: &WaitConfig) -> Result<Self, WaitError> {
        Ok(Self::new().with_default_timeout(Timeout::from_config(config)?))
    }

    /// Returns a copy using `timeout` when none is given per call.
    #[must_use]
    pub const fn with_default_timeout(mut self, timeout: Timeout) -> Self {
        self.default_timeout = timeout;
        self
    }

    /// The timeout used by [`Waiter::await_condition`].
    #[must_use]
    pub const fn default_timeout(&self) -> Timeout { self.default_timeout }

    /// Waits for `condition` using the default timeout.
    ///
    /// # Errors
    ///
    /// Same as [`Waiter::await_until`].
    pub fn await_condition<C: Condition>(&self, condition: C) -> Result<(), WaitError> {
        self.await_until(condition, self.default_timeout)
    }

    /// Waits until `condition` holds or `timeout` elapses.
    ///
    /// The condition's `done` hook runs before this returns, whatever the
    /// outcome, and the condition is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`WaitError::TimedOut`] with the condition's description if it
    /// never held, or [`WaitError::Execution`] if evaluating it failed.
    pub fn await_until<C: Condition>(&self, mut condition: C, timeout: Timeout) -> Result<(), WaitError> {
        let outcome = self.poll(timeout, || condition.test());

        let result = match outcome {
            Ok(Outcome::Satisfied { polls }) => {
                trace!(polls, "condition satisfied");
                Ok(())
            }
            Ok(Outcome::TimedOut) => {
                let description = condition.description();
                debug!(%description, %timeout, "timed out waiting for condition");
                Err(WaitError::TimedOut {
                    description,
                    timeout: timeout.duration(),
                })
            }
            Err(err) => Err(WaitError::Execution(err)),
        };

        condition.done();
        result
    }

    /// Waits until every condition holds in the same poll round.
    ///
    /// Conditions are evaluated in order and a round stops at the first one
    /// that does not hold.
    ///
    /// # Errors
    ///
    /// Returns [`WaitError::InvalidArguments`] for an empty list, otherwise the
    /// same errors as [`Waiter::await_until`]. A timeout lists every description.
    pub fn await_all<'a>(
        &self,
        mut conditions: Vec<Box<dyn Condition + 'a>>,
        timeout: Timeout,
    ) -> Result<(), WaitError> {
        if conditions.is_empty() {
            return Err(WaitError::InvalidArguments(
                "the list of conditions to wait for should not be empty".into(),
            ));
        }

        let outcome = self.poll(timeout, || {
            for condition in &mut conditions {
                if !condition.test()? {
                    return Ok(false);
                }
            }
            Ok(true)
        });

        let result = match outcome {
            Ok(Outcome::Satisfied { .. }) => Ok(()),
            Ok(Outcome::TimedOut) => {
                let descriptions: Vec<String> = conditions.iter_mut().map(|c| c.description()).collect();
                let description = format!("[{}]", descriptions.join(", "));
                debug!(%description, %timeout, "timed out waiting for conditions");
                Err(WaitError::TimedOut {
                    description,
                    timeout: timeout.duration(),
                })
            }
            Err(err) => Err(WaitError::Execution(err)),
        };

        for condition in &mut conditions {
            condition.done();
        }
        result
    }

    /// Sleeps the calling thread for `duration`.
    pub fn pause(&self, duration: Duration) { self.clock.sleep(duration); }

    fn poll<F>(&self, timeout: Timeout, mut satisfied: F) -> Result<Outcome, ExecutionError>
    where F: FnMut() -> Result<bool, ExecutionError> {
        let start = self.clock.now();
        let mut polls: u32 = 0;

        loop {
            if satisfied()? {
                return Ok(Outcome::Satisfied { polls });
            }

            let elapsed = self.clock.now().saturating_duration_since(start);
            let Some(remaining) = timeout.duration().checked_sub(elapsed).filter(|r| !r.is_zero()) else {
                return Ok(Outcome::TimedOut);
            };

            self.clock.sleep(timeout.poll_interval().min(remaining));
            polls += 1;
        }
    }
}

impl Default for Waiter {
    fn default() -> Self { Self::new() }
}

impl std::fmt::Debug for Waiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Waiter")
            .field("default_timeout", &self.default_timeout)
            .finish_non_exhaustive()
    }
}
