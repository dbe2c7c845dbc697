//! Integration tests for owner-thread execution.
//!
//! ## Test Coverage
//! - Queries and tasks reach the toolkit on the owner thread
//! - Failures keep their original type and message
//! - Nested calls from the owner thread run inline
//! - Concurrent callers are serialized
//! - A shut-down owner thread is a dispatch failure

use std::fmt;
use std::sync::Arc;
use std::thread;

use crate::common::*;

#[derive(Debug)]
struct WidgetDisabled(&'static str);

impl fmt::Display for WidgetDisabled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{} is disabled", self.0) }
}

impl std::error::Error for WidgetDisabled {}

#[test]
fn test_query_reads_toolkit_state() {
    let test = Test::new();
    assert_eq!(test.read("label text", |w| w.label.clone()), "idle");
}

#[test]
fn test_task_mutation_is_visible_to_later_queries() {
    let test = Test::new();

    test.update("set label", |w| w.label = "saved".into());

    assert_eq!(test.read("label text", |w| w.label.clone()), "saved");
}

#[test]
fn test_toolkit_rejects_caller_thread() {
    let test = Test::new();
    let toolkit = test.toolkit();

    let result = thread::spawn(move || toolkit.with(|w| w.progress)).join();

    assert!(result.is_err());
}

#[test]
fn test_operation_error_is_downcastable() {
    let test = Test::new();
    let toolkit = test.toolkit();

    let err = test
        .executor()
        .run_task(Task::fallible("click button", move || {
            if toolkit.with(|w| w.button_enabled) {
                Ok(())
            } else {
                Err(WidgetDisabled("OK button"))
            }
        }))
        .unwrap_err();

    assert_eq!(err.unit(), "click button");
    assert_eq!(err.downcast_ref::<WidgetDisabled>().map(|e| e.0), Some("OK button"));
    assert!(!Error::from(err).is_dispatch_failure());
}

#[test]
fn test_panic_on_owner_thread_reaches_caller() {
    let test = Test::new();
    let toolkit = test.toolkit();

    let err = test
        .executor()
        .query("read missing row", move || toolkit.with(|w| w.table[99].clone()))
        .unwrap_err();

    assert!(err.to_string().contains("read missing row"));
    assert!(err.to_string().contains("index out of bounds"));

    // The owner thread survived the panic.
    assert_eq!(test.read("progress", |w| w.progress), 0);
}

#[test]
fn test_nested_calls_do_not_deadlock() {
    let test = Test::new();
    let executor = test.executor();
    let inner = test.executor();
    let toolkit = test.toolkit();

    let label = executor
        .query("outer", move || {
            let toolkit_for_task = Arc::clone(&toolkit);
            inner
                .run_task(Task::new("inner task", move || {
                    toolkit_for_task.with(|w| w.label = "nested".into());
                }))
                .unwrap();
            inner.query("inner query", move || toolkit.with(|w| w.label.clone())).unwrap()
        })
        .unwrap();

    assert_eq!(label, "nested");
}

#[test]
fn test_concurrent_callers_are_serialized() {
    let test = Test::new();

    let callers: Vec<_> = (0..8)
        .map(|_| {
            let executor = test.executor();
            let toolkit = test.toolkit();
            thread::spawn(move || {
                for _ in 0..25 {
                    let toolkit = Arc::clone(&toolkit);
                    executor
                        .run_task(Task::new("increment", move || {
                            toolkit.with(|w| {
                                let current = w.progress;
                                thread::yield_now();
                                w.progress = current + 1;
                            });
                        }))
                        .unwrap();
                }
            })
        })
        .collect();

    for caller in callers {
        caller.join().unwrap();
    }

    assert_eq!(test.read("progress", |w| w.progress), 200);
}

#[test]
fn test_shut_down_owner_is_dispatch_failure() {
    let mut test = Test::new();
    let executor = test.executor();
    test.shutdown();

    let err = executor.query("read label", || 1).unwrap_err();

    assert!(matches!(err, ExecutionError::Dispatch { .. }));
    assert!(Error::from(err).is_dispatch_failure());
}

#[test]
fn test_current_thread_mode_runs_on_caller() {
    let toolkit = Toolkit::new(thread::current().id());
    let toolkit = Arc::new(toolkit);
    let executor = Executor::current_thread();

    let reader = Arc::clone(&toolkit);
    let label = executor.query("label", move || reader.with(|w| w.label.clone())).unwrap();

    assert_eq!(label, "idle");
    assert!(executor.runs_inline());
}
