//! Runs queries and tasks on the owner thread.
//!
//! The [`Executor`] is the single funnel through which test code touches
//! toolkit state. From a caller thread it schedules the unit onto the owner
//! thread and blocks until the unit has finished; on the owner thread it runs
//! the unit in place so nested calls never deadlock.

use std::borrow::Cow;
use std::fmt;
use std::sync::{Arc, mpsc};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{trace, trace_span, warn};

use super::owner::{InlineOwner, Job, OwnerThread};
use super::unit::{BoxError, Query, Task};
use crate::config::ExecutorConfig;
use crate::timing::{Description, PredicateCondition};

/// Query name used by conditions whose description is computed lazily.
const LAZY_CONDITION_UNIT: &str = "evaluate condition";

/// Where units of work run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum ExecutionMode {
    /// Units run on the owner thread (inline when already there).
    #[default]
    OwnerThread,
    /// Units run on whichever thread submits them.
    CurrentThread,
}

/// Failures produced while running a unit of work.
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// The owner thread did not accept the unit, or dropped it unexecuted.
    #[error("Failed to dispatch '{unit}' to the owner thread: {reason}")]
    Dispatch { unit: String, reason: String },

    /// The unit itself failed; `source` is the original error.
    #[error("'{unit}' failed: {source}")]
    Operation {
        unit: String,
        #[source]
        source: BoxError,
    },
}

impl ExecutionError {
    /// Creates a dispatch error.
    pub fn dispatch(unit: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Dispatch {
            unit: unit.into(),
            reason: reason.into(),
        }
    }

    /// The name of the unit of work that failed.
    #[must_use]
    pub fn unit(&self) -> &str {
        match self {
            Self::Dispatch { unit, .. } | Self::Operation { unit, .. } => unit,
        }
    }

    /// Returns the original failure raised by the unit, if it has the given type.
    #[must_use]
    pub fn downcast_ref<E: std::error::Error + 'static>(&self) -> Option<&E> {
        match self {
            Self::Operation { source, .. } => source.downcast_ref::<E>(),
            Self::Dispatch { .. } => None,
        }
    }
}

/// Marshals units of work onto the owner thread.
///
/// Cloning is cheap; clones share the same owner thread.
#[derive(Clone)]
pub struct Executor {
    owner: Arc<dyn OwnerThread>,
    mode: ExecutionMode,
}

impl Executor {
    /// Creates an executor that runs units on `owner`.
    #[must_use]
    pub fn new(owner: Arc<dyn OwnerThread>) -> Self {
        Self {
            owner,
            mode: ExecutionMode::OwnerThread,
        }
    }

    /// Creates an executor that always runs units on the calling thread.
    #[must_use]
    pub fn current_thread() -> Self {
        Self {
            owner: Arc::new(InlineOwner),
            mode: ExecutionMode::CurrentThread,
        }
    }

    /// Creates an executor configured from the `executor` config section.
    #[must_use]
    pub fn from_config(owner: Arc<dyn OwnerThread>, config: &ExecutorConfig) -> Self {
        Self::new(owner).with_mode(config.mode)
    }

    /// Returns a copy of this executor using `mode`.
    #[must_use]
    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    /// The current execution mode.
    #[must_use]
    pub const fn mode(&self) -> ExecutionMode { self.mode }

    /// Returns `true` if a unit submitted now would run on the calling thread.
    #[must_use]
    pub fn runs_inline(&self) -> bool {
        self.mode == ExecutionMode::CurrentThread || self.owner.is_owner_thread()
    }

    /// Runs `query` and returns its value.
    ///
    /// Blocks until the query has finished on the owner thread.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionError::Dispatch`] if the owner thread could not run the
    /// query, or [`ExecutionError::Operation`] carrying the query's own failure.
    pub fn run_query<T: Send + 'static>(&self, query: Query<T>) -> Result<T, ExecutionError> {
        let (name, unit) = query.into_parts();
        let span = trace_span!("unit", name = %name);
        let _guard = span.enter();

        if self.runs_inline() {
            trace!("running inline");
            return unit.execute().map_err(|source| operation_failed(name, source));
        }

        let (tx, rx) = mpsc::sync_channel(1);
        let job: Job = Box::new(move || {
            // The caller only disappears if its thread died; nothing left to report to.
            let _ = tx.send(unit.execute());
        });

        trace!("scheduling on owner thread");
        if let Err(err) = self.owner.schedule(job) {
            warn!(unit = %name, error = %err, "owner thread refused unit of work");
            return Err(ExecutionError::dispatch(name, err.reason()));
        }

        match rx.recv() {
            Ok(result) => result.map_err(|source| operation_failed(name, source)),
            Err(_) => {
                warn!(unit = %name, "owner thread dropped unit of work before running it");
                Err(ExecutionError::dispatch(
                    name,
                    "owner thread dropped the unit of work before running it",
                ))
            }
        }
    }

    /// Runs `task` and waits for it to finish.
    ///
    /// # Errors
    ///
    /// Same as [`Executor::run_query`].
    pub fn run_task(&self, task: Task) -> Result<(), ExecutionError> { self.run_query(task.into()) }

    /// Shorthand for running an infallible [`Query`].
    ///
    /// # Errors
    ///
    /// Same as [`Executor::run_query`].
    pub fn query<T, F>(&self, name: impl Into<Cow<'static, str>>, operation: F) -> Result<T, ExecutionError>
    where
        T: Send + 'static,
        F: FnOnce() -> T + Send + 'static,
    {
        self.run_query(Query::new(name, operation))
    }

    /// Builds a condition whose predicate is evaluated on the owner thread.
    ///
    /// Every poll ships a fresh query through this executor, so the waiting
    /// thread never reads toolkit state directly. A fixed description doubles
    /// as the query name; a lazy one is only resolved on timeout, so polls are
    /// named `evaluate condition`.
    pub fn condition<F>(&self, description: impl Into<Description<'static>>, predicate: F) -> PredicateCondition<'static>
    where F: Fn() -> bool + Send + Sync + 'static {
        let description = description.into();
        let name = match &description {
            Description::Text(text) => text.clone(),
            Description::Lazy(_) => Cow::Borrowed(LAZY_CONDITION_UNIT),
        };
        let predicate = Arc::new(predicate);
        let executor = self.clone();

        PredicateCondition::fallible(description, move || {
            let predicate = Arc::clone(&predicate);
            executor.run_query(Query::new(name.clone(), move || (*predicate)()))
        })
    }
}

impl fmt::Debug for Executor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Executor").field("mode", &self.mode).finish_non_exhaustive()
    }
}

fn operation_failed(name: Cow<'static, str>, source: BoxError) -> ExecutionError {
    ExecutionError::Operation {
        unit: name.into_owned(),
        source,
    }
}
