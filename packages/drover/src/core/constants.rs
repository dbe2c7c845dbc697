//! Library-wide constants.

use std::time::Duration;

/// The library name, used as the tracing target prefix and config directory name.
pub const APP_NAME: &str = "drover";

/// Environment variable that points at an explicit configuration file.
pub const CONFIG_ENV_VAR: &str = "DROVER_CONFIG";

/// Name given to the thread started by [`EventLoop`](crate::threading::EventLoop).
pub const OWNER_THREAD_NAME: &str = "owner";

/// How long a condition wait lasts when the caller does not say otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// How long the caller sleeps between two evaluations of a condition.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(10);
