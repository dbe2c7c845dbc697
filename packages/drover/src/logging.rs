//! Logging initialization using the `tracing` crate.
//!
//! Drover only emits events; installing a subscriber is left to the test
//! harness. [`init`] is a ready-made one:
//! - Uses `RUST_LOG` environment variable for filtering
//! - Outputs to stderr, where test runners capture it
//! - Includes target and level, plus the thread name so owner-thread events
//!   stand out from caller-thread events

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use crate::core::constants::APP_NAME;

/// Builds the filter used when `RUST_LOG` is not set.
///
/// Default level is `info` for release builds and `debug` for debug builds.
fn default_filter() -> EnvFilter {
    let default_level = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };

    // Default: show debug+ for drover, warn+ for everything else
    EnvFilter::new(format!("warn,{APP_NAME}={default_level}"))
}

/// Installs a global tracing subscriber.
///
/// The log level can be controlled via the `RUST_LOG` environment variable:
/// - `RUST_LOG=trace` - Show every dispatched unit of work
/// - `RUST_LOG=drover=debug,warn` - Debug for drover, warn for others
///
/// Safe to call from every test: only the first call installs anything.
/// Returns `false` if a global subscriber was already set.
pub fn init() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter());

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(true)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(false)
        .compact();

    let installed = tracing_subscriber::registry().with(filter).with(subscriber).try_init().is_ok();
    if installed {
        tracing::debug!("drover logging initialized");
    }
    installed
}
