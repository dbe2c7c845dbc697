//! The owner-thread capability the executor depends on.
//!
//! A toolkit integration supplies an [`OwnerThread`] that answers two
//! questions: "is the current thread the owner?" and "please run this job on
//! the owner". Drover ships [`EventLoop`](super::EventLoop) as a ready-made
//! implementation; toolkits with their own event queue implement the trait
//! directly on top of it.

use thiserror::Error;

/// A boxed job handed to the owner thread.
pub type Job = Box<dyn FnOnce() + Send + 'static>;

/// The owner thread refused a job.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{reason}")]
pub struct ScheduleError {
    reason: String,
}

impl ScheduleError {
    /// Creates a schedule error with the given reason.
    pub fn new(reason: impl Into<String>) -> Self { Self { reason: reason.into() } }

    /// The reason the job was refused.
    #[must_use]
    pub fn reason(&self) -> &str { &self.reason }
}

/// Scheduling primitive for the toolkit's single owner thread.
///
/// Implementations must run accepted jobs one at a time, in the order they
/// were scheduled.
///
/// # Example
///
/// ```ignore
/// struct ToolkitQueue { queue: toolkit::EventQueue }
///
/// impl OwnerThread for ToolkitQueue {
///     fn is_owner_thread(&self) -> bool { self.queue.is_dispatch_thread() }
///
///     fn schedule(&self, job: Job) -> Result<(), ScheduleError> {
///         self.queue.invoke_later(job).map_err(|e| ScheduleError::new(e.to_string()))
///     }
/// }
/// ```
pub trait OwnerThread: Send + Sync {
    /// Returns `true` when called from the owner thread itself.
    fn is_owner_thread(&self) -> bool;

    /// Queues `job` for execution on the owner thread and returns immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if the owner thread is no longer accepting work.
    fn schedule(&self, job: Job) -> Result<(), ScheduleError>;
}

/// An owner "thread" that is whichever thread is calling.
///
/// Jobs run immediately on the scheduling thread. Useful for drivers
/// exercised against headless fakes that have no threading rule at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineOwner;

impl OwnerThread for InlineOwner {
    fn is_owner_thread(&self) -> bool { true }

    fn schedule(&self, job: Job) -> Result<(), ScheduleError> {
        job();
        Ok(())
    }
}
