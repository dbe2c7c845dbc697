//! Integration tests for the calculators as widget drivers use them.
//!
//! A driver snapshots geometry on the owner thread, computes on the caller,
//! then acts on the owner thread again.
//!
//! ## Test Coverage
//! - Scroll bar thumb and arrow locations from a live scroll bar
//! - Moving a split pane divider to a clamped location
//! - Table cell validation, reading and editing

use std::sync::Arc;

use drover::geometry::BoundsError;

use crate::common::*;

#[test]
fn test_scroll_bar_thumb_follows_value() {
    let test = Test::new();
    test.update("scroll to middle", |w| w.scroll_value = 50);

    let (bar, value, minimum, maximum) = test.read("scroll bar snapshot", |w| {
        (w.scroll_bar, w.scroll_value, w.scroll_minimum, w.scroll_maximum)
    });

    assert_eq!(bar.thumb_location_for_value(value, minimum, maximum), Point::new(8, 100));
    assert_eq!(bar.unit_location_to_scroll_up(), Point::new(8, 8));
    assert_eq!(bar.block_location_to_scroll_down(), Point::new(8, 188));
}

#[test]
fn test_move_divider_is_clamped() {
    let test = Test::new();

    let (split, current) = test.read("split pane snapshot", |w| (w.split_pane, w.divider_location));
    let target = split.clamp_divider_location(1000);
    let (from, to) = split.divider_drag_path(current, target);

    assert_eq!(target, 240);
    assert_eq!(from, Point::new(100, 60));
    assert_eq!(to, Point::new(240, 60));

    test.update("set divider location", move |w| w.divider_location = target);
    assert_eq!(test.read("divider", |w| w.divider_location), 240);
}

#[test]
fn test_divider_of_pane_without_trailing_component_stays_at_zero() {
    let test = Test::new();
    test.update("remove trailing pane", |w| w.split_pane.trailing = None);

    let split = test.read("split pane snapshot", |w| w.split_pane);

    assert!(split.divider_range().is_degenerate());
    assert_eq!(split.clamp_divider_location(150), 0);
}

#[test]
fn test_read_valid_cell() {
    let test = Test::new();
    let (rows, columns) = test.read("table size", |w| (w.table.len(), w.table[0].len()));

    let (row, column) = check_cell_in_bounds(2, 2, rows, columns).unwrap();
    let reader = Arc::new(move |toolkit: &Toolkit| toolkit.with(|w| w.table[row][column].clone()));
    let value = read_cell(&test.executor(), &test.toolkit(), &reader).unwrap();

    assert_eq!(value.as_deref(), Some("bruised"));
}

#[test]
fn test_empty_cell_reads_as_none() {
    let test = Test::new();
    let reader = Arc::new(|toolkit: &Toolkit| toolkit.with(|w| w.table[1][2].clone()));

    assert_eq!(read_cell(&test.executor(), &test.toolkit(), &reader).unwrap(), None);
}

#[test]
fn test_out_of_range_cell_is_rejected_before_reading() {
    let test = Test::new();
    let (rows, columns) = test.read("table size", |w| (w.table.len(), w.table[0].len()));

    let err = check_cell_in_bounds(1, 3, rows, columns).unwrap_err();
    assert_eq!(err.to_string(), "column <3> should be between <0> and <2>");

    test.update("clear table", |w| w.table.clear());
    let rows = test.read("row count", |w| w.table.len());
    assert_eq!(check_cell_in_bounds(0, 0, rows, columns), Err(BoundsError::Empty { item: "row" }));
}

#[test]
fn test_edit_requires_editable_cell() {
    let test = Test::new();

    let editable = test.read("editable", |w| w.editable_columns[0]);
    let err = check_cell_editable(1, 0, editable).unwrap_err();
    assert_eq!(err.to_string(), "Expecting cell [1, 0] to be editable");

    let editable = test.read("editable", |w| w.editable_columns[1]);
    check_cell_editable(1, 1, editable).unwrap();
    test.update("edit quantity", |w| w.table[1][1] = Some("4".into()));
    assert_eq!(test.read("quantity", |w| w.table[1][1].clone()).as_deref(), Some("4"));
}

#[test]
fn test_batch_selection_is_validated_in_order() {
    let test = Test::new();
    let rows = test.read("row count", |w| w.table.len());

    assert_eq!(check_indices_in_bounds(&[0, 2], rows, "row"), Ok(vec![0, 2]));
    let err = check_indices_in_bounds(&[1, -1, 5], rows, "row").unwrap_err();
    assert_eq!(err.to_string(), "row <-1> should be between <0> and <2>");
}
