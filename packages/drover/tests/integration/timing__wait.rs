//! Integration tests for condition waits.
//!
//! UI transitions are simulated by events posted onto the owner thread from a
//! background thread, so every wait here races a real asynchronous change.
//!
//! ## Test Coverage
//! - Waiting for a progress bar to reach a value
//! - Waiting for several widgets at once
//! - Timeout messages built from live widget state
//! - Dispatch failures ending a wait early

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use drover::timing::Description;

use crate::common::*;

#[test]
fn test_wait_for_progress_to_complete() {
    let test = Test::new();
    let toolkit = test.toolkit();

    test.animate_progress(10, EVENT_INTERVAL);

    test.waiter()
        .await_condition(
            test.executor()
                .condition("progress bar to reach 100", move || toolkit.with(|w| w.progress == 100)),
        )
        .unwrap();

    assert_eq!(test.read("progress", |w| w.progress), 100);
}

#[test]
fn test_already_satisfied_condition_returns_immediately() {
    let test = Test::new();
    let toolkit = test.toolkit();
    let start = Instant::now();

    test.waiter()
        .await_condition(test.executor().condition("label to read 'idle'", move || {
            toolkit.with(|w| w.label == "idle")
        }))
        .unwrap();

    assert!(start.elapsed() < Duration::from_secs(1));
}

#[test]
fn test_wait_for_popup_and_button() {
    let test = Test::new();
    let executor = test.executor();

    let toolkit = test.toolkit();
    Toolkit::post_events(test.handle(), 2, EVENT_INTERVAL, move |step| {
        toolkit.with(|w| match step {
            1 => w.popup_visible = true,
            _ => w.button_enabled = true,
        });
    });

    let popup = test.toolkit();
    let button = test.toolkit();
    test.waiter()
        .await_all(
            vec![
                Box::new(executor.condition("popup to be visible", move || popup.with(|w| w.popup_visible)))
                    as Box<dyn Condition>,
                Box::new(executor.condition("button to be enabled", move || button.with(|w| w.button_enabled))),
            ],
            Timeout::seconds(5),
        )
        .unwrap();

    assert!(test.read("button", |w| w.button_enabled && w.popup_visible));
}

#[test]
fn test_timeout_description_reads_current_state() {
    let test = Test::new();
    let executor = test.executor();
    let toolkit = test.toolkit();
    let described = test.toolkit();
    let describing_executor = executor.clone();

    let condition = executor.condition(
        Description::lazy(move || {
            let progress = describing_executor
                .query("progress for description", move || described.with(|w| w.progress))
                .unwrap_or_default();
            format!("progress bar to reach 100 (currently {progress})")
        }),
        move || toolkit.with(|w| w.progress == 100),
    );

    let start = Instant::now();
    let err = test.waiter().await_until(condition, Timeout::millis(100)).unwrap_err();

    assert!(start.elapsed() >= Duration::from_millis(100));
    assert!(err.to_string().contains("progress bar to reach 100 (currently 0)"));
    assert!(Error::from(err).is_timeout());
}

#[test]
fn test_done_hook_runs_after_timeout() {
    let test = Test::new();
    let toolkit = test.toolkit();
    let released = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&released);

    let condition = test
        .executor()
        .condition("popup to be visible", move || toolkit.with(|w| w.popup_visible))
        .on_done(move || flag.store(true, Ordering::SeqCst));

    test.waiter().await_until(condition, Timeout::millis(30)).unwrap_err();

    assert!(released.load(Ordering::SeqCst));
}

#[test]
fn test_shutdown_during_wait_is_dispatch_failure() {
    let mut test = Test::new();
    let toolkit = test.toolkit();
    let condition = test.executor().condition("popup to be visible", move || toolkit.with(|w| w.popup_visible));
    test.shutdown();

    let err = Waiter::new().await_until(condition, Timeout::seconds(5)).unwrap_err();

    assert!(matches!(err, WaitError::Execution(ExecutionError::Dispatch { .. })));
}

#[test]
fn test_pause_blocks_caller_only() {
    let test = Test::new();
    let start = Instant::now();

    test.waiter().pause(Duration::from_millis(20));

    assert!(start.elapsed() >= Duration::from_millis(20));
    assert_eq!(test.read("label", |w| w.label.clone()), "idle");
}
