//! Drover - cross-thread state access and condition waits for GUI test drivers.
//!
//! GUI toolkits usually require every widget read and write to happen on one
//! owner thread, while functional tests run on their own threads. Drover sits
//! between the two:
//!
//! - [`threading`] - runs queries and tasks on the owner thread and blocks the
//!   caller until they finish
//! - [`timing`] - polls described conditions until they hold or a timeout elapses
//! - [`geometry`] - pure calculators for scroll bar and split pane locations, plus
//!   index bounds validation
//! - [`cell`] - evaluates pluggable cell readers through the executor
//! - [`config`] - JSONC configuration for default timeouts and executor mode
//! - [`logging`] - opt-in `tracing` subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! let event_loop = EventLoop::start()?;
//! let executor = Executor::new(Arc::new(event_loop.handle()));
//!
//! let label = Arc::new(Mutex::new(String::from("idle")));
//! let observed = Arc::clone(&label);
//! executor.run_task(Task::new("start job", move || *label.lock() = "done".into()))?;
//!
//! let waiter = Waiter::new();
//! waiter.await_until(
//!     executor.condition("label reads 'done'", move || *observed.lock() == "done"),
//!     Timeout::seconds(5),
//! )?;
//! ```

pub mod cell;
pub mod config;
pub mod core;
pub mod geometry;
pub mod logging;
pub mod threading;
pub mod timing;
pub mod utils;

pub use crate::core::error::{Error, Result};
pub use crate::threading::{EventLoop, ExecutionError, ExecutionMode, Executor, OwnerThread, Query, Task};
pub use crate::timing::{Clock, Condition, SystemClock, Timeout, WaitError, Waiter};
