//! Time source used by condition waits.

use std::thread;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// Clock and sleep primitive.
///
/// Waits only ever sleep the calling thread, never the owner thread.
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> Instant;

    /// Blocks the calling thread for `duration`.
    fn sleep(&self, duration: Duration);
}

/// The real monotonic clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant { Instant::now() }

    fn sleep(&self, duration: Duration) { thread::sleep(duration); }
}

/// A clock that only advances when something sleeps on it.
///
/// Lets tests of polling code run instantly and count how many times the
/// waiter slept.
#[derive(Debug)]
pub struct ManualClock {
    origin: Instant,
    state: Mutex<ManualState>,
}

#[derive(Debug, Default)]
struct ManualState {
    elapsed: Duration,
    sleeps: Vec<Duration>,
}

impl ManualClock {
    /// Creates a clock frozen at the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            state: Mutex::new(ManualState::default()),
        }
    }

    /// Moves the clock forward without recording a sleep.
    pub fn advance(&self, duration: Duration) { self.state.lock().elapsed += duration; }

    /// Total time elapsed since the clock was created.
    #[must_use]
    pub fn elapsed(&self) -> Duration { self.state.lock().elapsed }

    /// Number of times [`Clock::sleep`] was called.
    #[must_use]
    pub fn sleep_count(&self) -> usize { self.state.lock().sleeps.len() }

    /// Every sleep requested so far, in order.
    #[must_use]
    pub fn sleeps(&self) -> Vec<Duration> { self.state.lock().sleeps.clone() }
}

impl Default for ManualClock {
    fn default() -> Self { Self::new() }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant { self.origin + self.state.lock().elapsed }

    fn sleep(&self, duration: Duration) {
        let mut state = self.state.lock();
        state.elapsed += duration;
        state.sleeps.push(duration);
    }
}
