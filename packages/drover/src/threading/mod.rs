//! Owner-thread execution.
//!
//! The toolkit under test only allows its state to be touched from one owner
//! thread. This module provides:
//!
//! - [`OwnerThread`] - the injected "am I the owner / run this there" capability
//! - [`Query`] and [`Task`] - named units of work
//! - [`Executor`] - runs units on the owner thread and blocks until they finish
//! - [`EventLoop`] - a ready-made owner thread with a FIFO job queue

mod event_loop;
mod executor;
mod owner;
mod unit;

pub use event_loop::{EventLoop, EventLoopHandle};
pub use executor::{ExecutionError, ExecutionMode, Executor};
pub use owner::{InlineOwner, Job, OwnerThread, ScheduleError};
pub use unit::{BoxError, OperationPanic, Query, Task};
