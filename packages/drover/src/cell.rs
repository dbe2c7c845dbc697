//! Pluggable cell value readers.
//!
//! How a cell's value becomes text is a formatting policy owned by drivers:
//! one reader might render a checkbox as `"true"`, another a combo box as its
//! selected label. This module only defines the shape of such a reader and
//! evaluates it on the owner thread.

use std::sync::Arc;

use crate::threading::{ExecutionError, Executor, Query};

/// Turns a component's state into text.
///
/// `None` means the value cannot be expressed as text, which is not an error.
/// Any `Fn(&C) -> Option<String>` closure is a reader.
pub trait CellReader<C: ?Sized>: Send + Sync {
    fn value_of(&self, component: &C) -> Option<String>;
}

impl<C: ?Sized, F> CellReader<C> for F
where F: Fn(&C) -> Option<String> + Send + Sync
{
    fn value_of(&self, component: &C) -> Option<String> { self(component) }
}

/// Evaluates `reader` against `component` on the owner thread.
///
/// # Errors
///
/// Returns [`ExecutionError`] if the read could not be dispatched, or the
/// reader panicked.
pub fn read_cell<C, R>(
    executor: &Executor,
    component: &Arc<C>,
    reader: &Arc<R>,
) -> Result<Option<String>, ExecutionError>
where
    C: Send + Sync + ?Sized + 'static,
    R: CellReader<C> + ?Sized + 'static,
{
    let component = Arc::clone(component);
    let reader = Arc::clone(reader);
    executor.run_query(Query::new("read cell value", move || reader.value_of(&*component)))
}
