//! A dedicated owner thread fed by a FIFO job queue.
//!
//! [`EventLoop`] is the stand-alone [`OwnerThread`] implementation: it spawns
//! one named thread that runs scheduled jobs strictly in submission order.
//! Toolkits that already own an event queue implement [`OwnerThread`] on top
//! of it instead.
//!
//! # Shutdown
//!
//! Shutting down closes the queue: jobs accepted before the call still run,
//! jobs scheduled afterwards are refused with a [`ScheduleError`]. Dropping
//! the loop shuts it down and joins the thread.

use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, mpsc};
use std::thread::{self, JoinHandle, ThreadId};

use parking_lot::Mutex;
use tracing::{debug, error};

use super::executor::Executor;
use super::owner::{Job, OwnerThread, ScheduleError};
use crate::core::constants::OWNER_THREAD_NAME;
use crate::utils::thread::spawn_named_thread;

struct Shared {
    sender: Mutex<Option<mpsc::Sender<Job>>>,
    thread_id: ThreadId,
}

/// Owns the owner thread and its job queue.
pub struct EventLoop {
    shared: Arc<Shared>,
    thread: Option<JoinHandle<()>>,
}

impl EventLoop {
    /// Starts the owner thread.
    ///
    /// # Errors
    ///
    /// Returns the OS error if the thread could not be spawned.
    pub fn start() -> io::Result<Self> {
        let (tx, rx) = mpsc::channel::<Job>();
        let thread = spawn_named_thread(OWNER_THREAD_NAME, move || run_loop(&rx))?;

        let shared = Arc::new(Shared {
            sender: Mutex::new(Some(tx)),
            thread_id: thread.thread().id(),
        });

        Ok(Self {
            shared,
            thread: Some(thread),
        })
    }

    /// Returns a cloneable scheduling handle for this loop.
    #[must_use]
    pub fn handle(&self) -> EventLoopHandle {
        EventLoopHandle {
            shared: Arc::clone(&self.shared),
        }
    }

    /// Returns an executor that runs units on this loop.
    #[must_use]
    pub fn executor(&self) -> Executor { Executor::new(Arc::new(self.handle())) }

    /// The id of the owner thread.
    #[must_use]
    pub fn thread_id(&self) -> ThreadId { self.shared.thread_id }

    /// Returns `true` until [`EventLoop::shutdown`] has been called.
    #[must_use]
    pub fn is_running(&self) -> bool { self.shared.sender.lock().is_some() }

    /// Closes the queue and waits for already accepted jobs to finish.
    pub fn shutdown(mut self) { self.stop(); }

    fn stop(&mut self) {
        // Dropping the only sender ends the loop once the queue is drained.
        self.shared.sender.lock().take();

        let Some(thread) = self.thread.take() else {
            return;
        };

        if thread::current().id() == self.shared.thread_id {
            debug!("event loop stopped from its own thread, not joining");
            return;
        }

        if thread.join().is_err() {
            error!("owner thread terminated abnormally");
        }
    }
}

impl Drop for EventLoop {
    fn drop(&mut self) { self.stop(); }
}

/// Scheduling handle for an [`EventLoop`].
#[derive(Clone)]
pub struct EventLoopHandle {
    shared: Arc<Shared>,
}

impl OwnerThread for EventLoopHandle {
    fn is_owner_thread(&self) -> bool { thread::current().id() == self.shared.thread_id }

    fn schedule(&self, job: Job) -> Result<(), ScheduleError> {
        let sender = self.shared.sender.lock();
        let Some(sender) = sender.as_ref() else {
            return Err(ScheduleError::new("event loop has shut down"));
        };

        sender
            .send(job)
            .map_err(|_| ScheduleError::new("owner thread is no longer receiving jobs"))
    }
}

fn run_loop(rx: &mpsc::Receiver<Job>) {
    debug!("owner event loop started");
    let mut processed: u64 = 0;

    while let Ok(job) = rx.recv() {
        if panic::catch_unwind(AssertUnwindSafe(job)).is_err() {
            error!("job panicked on the owner thread");
        }
        processed += 1;
    }

    debug!(processed, "owner event loop stopped");
}
