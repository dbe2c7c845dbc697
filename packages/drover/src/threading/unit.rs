//! Units of work: named queries and tasks.
//!
//! A unit is built by a caller, submitted to the [`Executor`](super::Executor)
//! once, executed exactly once and then discarded. The name is only used for
//! diagnostics (tracing spans and error messages).

use std::any::Any;
use std::borrow::Cow;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;

/// Boxed failure raised by a unit of work.
///
/// The original error value is kept intact so callers can downcast it.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

type Operation<T> = Box<dyn FnOnce() -> Result<T, BoxError> + Send + 'static>;

/// A unit of work panicked while running.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("panicked: {message}")]
pub struct OperationPanic {
    /// The panic payload, when it was a string.
    pub message: String,
}

impl OperationPanic {
    fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "<non-string panic payload>".to_string());
        Self { message }
    }
}

/// A read that produces a value on the owner thread.
pub struct Query<T> {
    name: Cow<'static, str>,
    operation: Operation<T>,
}

impl<T: Send + 'static> Query<T> {
    /// Creates a query from an infallible operation.
    pub fn new<F>(name: impl Into<Cow<'static, str>>, operation: F) -> Self
    where F: FnOnce() -> T + Send + 'static {
        Self {
            name: name.into(),
            operation: Box::new(move || Ok(operation())),
        }
    }

    /// Creates a query from an operation that may fail.
    ///
    /// The error returned by `operation` reaches the caller unchanged, wrapped
    /// in [`ExecutionError::Operation`](super::ExecutionError::Operation).
    pub fn fallible<F, E>(name: impl Into<Cow<'static, str>>, operation: F) -> Self
    where
        F: FnOnce() -> Result<T, E> + Send + 'static,
        E: Into<BoxError>,
    {
        Self {
            name: name.into(),
            operation: Box::new(move || operation().map_err(Into::into)),
        }
    }
}

impl<T> Query<T> {
    /// The diagnostic name of this query.
    #[must_use]
    pub fn name(&self) -> &str { &self.name }

    pub(crate) fn into_parts(self) -> (Cow<'static, str>, Unit<T>) {
        (self.name, Unit { operation: self.operation })
    }
}

impl<T> fmt::Debug for Query<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query").field("name", &self.name).finish_non_exhaustive()
    }
}

/// A mutation that runs on the owner thread and produces nothing.
pub struct Task {
    query: Query<()>,
}

impl Task {
    /// Creates a task from an infallible operation.
    pub fn new<F>(name: impl Into<Cow<'static, str>>, operation: F) -> Self
    where F: FnOnce() + Send + 'static {
        Self { query: Query::new(name, operation) }
    }

    /// Creates a task from an operation that may fail.
    pub fn fallible<F, E>(name: impl Into<Cow<'static, str>>, operation: F) -> Self
    where
        F: FnOnce() -> Result<(), E> + Send + 'static,
        E: Into<BoxError>,
    {
        Self {
            query: Query::fallible(name, operation),
        }
    }

    /// The diagnostic name of this task.
    #[must_use]
    pub fn name(&self) -> &str { self.query.name() }
}

impl From<Task> for Query<()> {
    fn from(task: Task) -> Self { task.query }
}

impl fmt::Debug for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task").field("name", &self.query.name).finish_non_exhaustive()
    }
}

/// The nameless, executable half of a unit of work.
pub(crate) struct Unit<T> {
    operation: Operation<T>,
}

impl<T> Unit<T> {
    /// Runs the operation, turning a panic into an [`OperationPanic`] failure.
    pub(crate) fn execute(self) -> Result<T, BoxError> {
        match panic::catch_unwind(AssertUnwindSafe(self.operation)) {
            Ok(result) => result,
            Err(payload) => Err(OperationPanic::from_payload(payload.as_ref()).into()),
        }
    }
}
