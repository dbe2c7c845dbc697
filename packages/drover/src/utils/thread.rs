use std::io;
use std::thread::{self, JoinHandle};

use crate::core::constants::APP_NAME;

/// Spawns a thread named `drover-{name}`.
///
/// # Errors
///
/// Returns the OS error if the thread could not be created.
pub fn spawn_named_thread<F>(name: &str, task: F) -> io::Result<JoinHandle<()>>
where F: FnOnce() + Send + 'static {
    let thread_name = format!("{APP_NAME}-{name}");

    thread::Builder::new().name(thread_name.clone()).spawn(task).inspect_err(|err| {
        tracing::error!("Failed to spawn {thread_name}: {err}");
    })
}
