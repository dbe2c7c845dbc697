//! Index and cell precondition checks.
//!
//! Drivers run these before touching an item so a bad index fails fast with
//! the valid range in the message, instead of surfacing as a toolkit error
//! on the owner thread. Indices are signed because callers pass through
//! whatever the test supplied, negative values included.

use thiserror::Error;

/// A failed index or cell precondition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoundsError {
    /// The index is outside `[0, max]`.
    #[error("{item} <{index}> should be between <0> and <{max}>")]
    OutOfBounds {
        item: &'static str,
        index: isize,
        max: usize,
    },

    /// There are no items at all, so no index can be valid.
    #[error("Does not contain any {item}s")]
    Empty { item: &'static str },

    /// A batch check was given no indices.
    #[error("Expecting at least one {item} index")]
    EmptyBatch { item: &'static str },

    #[error("Expecting cell [{row}, {column}] to be editable")]
    NotEditable { row: usize, column: usize },
}

/// Checks that `index` addresses one of `count` items.
///
/// # Errors
///
/// Returns [`BoundsError::Empty`] when `count` is zero, whatever the index,
/// and [`BoundsError::OutOfBounds`] when the index is negative or too large.
pub fn check_index_in_bounds(index: isize, count: usize, item: &'static str) -> Result<usize, BoundsError> {
    if count == 0 {
        return Err(BoundsError::Empty { item });
    }
    usize::try_from(index)
        .ok()
        .filter(|&i| i < count)
        .ok_or(BoundsError::OutOfBounds {
            item,
            index,
            max: count - 1,
        })
}

/// Checks every index of a batch, in order. The first invalid one fails.
///
/// # Errors
///
/// Returns [`BoundsError::EmptyBatch`] for an empty slice, otherwise the
/// error of the first index rejected by [`check_index_in_bounds`].
pub fn check_indices_in_bounds(
    indices: &[isize],
    count: usize,
    item: &'static str,
) -> Result<Vec<usize>, BoundsError> {
    if indices.is_empty() {
        return Err(BoundsError::EmptyBatch { item });
    }
    indices.iter().map(|&index| check_index_in_bounds(index, count, item)).collect()
}

/// Checks that `(row, column)` addresses a cell of a `rows` x `columns` table.
///
/// An empty table is reported first, then the row, then the column.
///
/// # Errors
///
/// Returns [`BoundsError::Empty`] for a table without rows, or
/// [`BoundsError::OutOfBounds`] naming the offending coordinate.
pub fn check_cell_in_bounds(
    row: isize,
    column: isize,
    rows: usize,
    columns: usize,
) -> Result<(usize, usize), BoundsError> {
    let row = check_index_in_bounds(row, rows, "row")?;
    let column = check_index_in_bounds(column, columns, "column")?;
    Ok((row, column))
}

/// Checks that a cell can be edited.
///
/// `editable` is read by the caller on the owner thread.
///
/// # Errors
///
/// Returns [`BoundsError::NotEditable`] if it cannot.
pub const fn check_cell_editable(row: usize, column: usize, editable: bool) -> Result<(), BoundsError> {
    if editable {
        Ok(())
    } else {
        Err(BoundsError::NotEditable { row, column })
    }
}
