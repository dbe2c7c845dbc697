//! Timeout and poll interval for condition waits.

use std::fmt;
use std::time::Duration;

use super::WaitError;
use crate::config::WaitConfig;
use crate::core::constants::{DEFAULT_POLL_INTERVAL, DEFAULT_TIMEOUT};

/// How long to wait, and how often to re-check while waiting.
///
/// The poll interval is always positive and never longer than the timeout.
/// A zero timeout is allowed and means "check once, never poll".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeout {
    duration: Duration,
    poll_interval: Duration,
}

impl Timeout {
    /// Creates a timeout with an explicit poll interval.
    ///
    /// # Errors
    ///
    /// Returns [`WaitError::InvalidTimeout`] if `poll_interval` is zero, or longer
    /// than a non-zero `duration`.
    pub fn new(duration: Duration, poll_interval: Duration) -> Result<Self, WaitError> {
        if poll_interval.is_zero() {
            return Err(WaitError::InvalidTimeout("poll interval must be greater than zero".into()));
        }
        if !duration.is_zero() && poll_interval > duration {
            return Err(WaitError::InvalidTimeout(format!(
                "poll interval ({poll_interval:?}) must not exceed the timeout ({duration:?})"
            )));
        }
        Ok(Self { duration, poll_interval })
    }

    /// Creates a timeout using the default poll interval, shortened to fit
    /// `duration` when needed.
    #[must_use]
    pub fn of(duration: Duration) -> Self {
        let poll_interval = if duration.is_zero() {
            DEFAULT_POLL_INTERVAL
        } else {
            DEFAULT_POLL_INTERVAL.min(duration)
        };
        Self { duration, poll_interval }
    }

    /// Creates a timeout of `millis` milliseconds.
    #[must_use]
    pub fn millis(millis: u64) -> Self { Self::of(Duration::from_millis(millis)) }

    /// Creates a timeout of `seconds` seconds.
    #[must_use]
    pub fn seconds(seconds: u64) -> Self { Self::of(Duration::from_secs(seconds)) }

    /// A zero timeout: the condition is evaluated exactly once.
    #[must_use]
    pub const fn once() -> Self {
        Self {
            duration: Duration::ZERO,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Builds a timeout from the `wait` config section.
    ///
    /// # Errors
    ///
    /// Same as [`Timeout::new`].
    pub fn from_config(config: &WaitConfig) -> Result<Self, WaitError> {
        Self::new(
            Duration::from_millis(config.timeout_ms),
            Duration::from_millis(config.poll_interval_ms),
        )
    }

    /// Returns a copy polling every `poll_interval`.
    ///
    /// # Errors
    ///
    /// Same as [`Timeout::new`].
    pub fn with_poll_interval(self, poll_interval: Duration) -> Result<Self, WaitError> {
        Self::new(self.duration, poll_interval)
    }

    /// Total time allowed.
    #[must_use]
    pub const fn duration(&self) -> Duration { self.duration }

    /// Time slept between two evaluations.
    #[must_use]
    pub const fn poll_interval(&self) -> Duration { self.poll_interval }

    /// Returns `true` for a zero timeout.
    #[must_use]
    pub const fn is_once(&self) -> bool { self.duration.is_zero() }
}

impl Default for Timeout {
    fn default() -> Self {
        Self {
            duration: DEFAULT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl fmt::Display for Timeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{:?}", self.duration) }
}
