//! Integration tests for configuration-driven setup.
//!
//! ## Test Coverage
//! - A JSONC file drives the waiter's default timeout
//! - Current-thread mode from config bypasses the owner thread
//! - Invalid wait settings are rejected

use std::io::Write;
use std::sync::Arc;
use std::thread;

use drover::config::{ConfigError, DroverConfig, load_config_from_path};
use drover::threading::ExecutionMode;

use crate::common::*;

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".jsonc").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_waiter_uses_configured_timeout() {
    let file = config_file(
        r#"{
            // fast-failing suite
            "wait": { "timeoutMs": 250, "pollIntervalMs": 5 }
        }"#,
    );
    let config = load_config_from_path(file.path()).unwrap();

    let waiter = Waiter::from_config(&config.wait).unwrap();

    assert_eq!(waiter.default_timeout().duration().as_millis(), 250);
    assert_eq!(waiter.default_timeout().poll_interval().as_millis(), 5);
}

#[test]
fn test_current_thread_mode_from_config() {
    let test = Test::new();
    let file = config_file(r#"{ "executor": { "mode": "currentThread" } }"#);
    let config = load_config_from_path(file.path()).unwrap();

    let owner: Arc<dyn OwnerThread> = Arc::new(test.handle());
    let executor = Executor::from_config(owner, &config.executor);
    let ran_on = executor.query("thread id", || thread::current().id()).unwrap();

    assert_eq!(executor.mode(), ExecutionMode::CurrentThread);
    assert_eq!(ran_on, thread::current().id());
}

#[test]
fn test_default_config_uses_owner_thread() {
    let test = Test::new();
    let owner: Arc<dyn OwnerThread> = Arc::new(test.handle());

    let executor = Executor::from_config(owner, &DroverConfig::default().executor);
    let ran_on = executor.query("thread id", || thread::current().id()).unwrap();

    assert_ne!(ran_on, thread::current().id());
}

#[test]
fn test_invalid_poll_interval_is_rejected() {
    let file = config_file(r#"{ "wait": { "timeoutMs": 10, "pollIntervalMs": 0 } }"#);
    let config = load_config_from_path(file.path()).unwrap();

    let err = Waiter::from_config(&config.wait).unwrap_err();

    assert!(matches!(err, WaitError::InvalidTimeout(_)));
}

#[test]
fn test_broken_file_is_a_config_error() {
    let file = config_file(r#"{ "wait": { "timeoutMs": "soon" } }"#);

    let err = load_config_from_path(file.path()).unwrap_err();

    assert!(matches!(err, ConfigError::ParseError(_)));
    assert!(Error::from(err).to_string().starts_with("Configuration error"));
}
