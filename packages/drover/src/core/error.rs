//! Unified error types for Drover.
//!
//! Each module defines its own error type that converts into the base
//! [`Error`] type, so driver code can use a single `Result` alias while
//! still matching on the precise failure when it needs to.

use thiserror::Error;

use crate::config::ConfigError;
use crate::geometry::bounds::BoundsError;
use crate::threading::ExecutionError;
use crate::timing::WaitError;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Base error type for all Drover errors.
#[derive(Debug, Error)]
pub enum Error {
    /// A unit of work could not be dispatched, or failed while running.
    #[error(transparent)]
    Execution(#[from] ExecutionError),

    /// A condition wait timed out or was given invalid arguments.
    #[error(transparent)]
    Wait(#[from] WaitError),

    /// An index or cell precondition failed.
    #[error(transparent)]
    Bounds(#[from] BoundsError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl Error {
    /// Returns `true` if the owner thread could not accept or run a unit of work.
    ///
    /// Dispatch failures are infrastructure problems, unlike failures raised by
    /// the unit of work itself, and are never worth retrying.
    #[must_use]
    pub const fn is_dispatch_failure(&self) -> bool {
        matches!(
            self,
            Self::Execution(ExecutionError::Dispatch { .. })
                | Self::Wait(WaitError::Execution(ExecutionError::Dispatch { .. }))
        )
    }

    /// Returns `true` if a condition wait ran out of time.
    #[must_use]
    pub const fn is_timeout(&self) -> bool { matches!(self, Self::Wait(WaitError::TimedOut { .. })) }
}
