//! Common re-exports for convenience.
//!
//! Driver code usually needs the executor, the waiter and the geometry
//! calculators together:
//!
//! ```ignore
//! use drover::core::prelude::*;
//! ```

pub use super::constants::{DEFAULT_POLL_INTERVAL, DEFAULT_TIMEOUT};
pub use super::error::{Error, Result};
pub use crate::cell::{CellReader, read_cell};
pub use crate::geometry::bounds::{
    check_cell_editable, check_cell_in_bounds, check_index_in_bounds, check_indices_in_bounds,
};
pub use crate::geometry::{Axis, Insets, Pane, Point, ScrollBarGeometry, Size, SplitPaneGeometry};
pub use crate::threading::{ExecutionError, Executor, OwnerThread, Query, Task};
pub use crate::timing::{Condition, Timeout, WaitError, Waiter, condition};
