// crates/sdk-examples-core/src/runtime/tests.rs
// ============================================================================
// Module: SDK Runtime Guard Tests
// Description: Lifecycle events and teardown of the runtime guard.
// ============================================================================

//! ## Overview
//! Checks that the guard records one init and one shutdown event regardless of
//! how the scope is left, and that each example call is logged with its outcome.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    reason = "Test-only assertions favor direct unwrap/expect for clarity."
)]

use sdk_examples_mock::MockHttp;
use sdk_examples_mock::mock_sdk_config;

use super::*;
use crate::events::MemoryEventSink;

/// Returns recorded event identifiers in order.
fn event_names(sink: &MemoryEventSink) -> Vec<&'static str> {
    sink.events().iter().map(|event| event.event).collect()
}

#[test]
fn guard_records_init_calls_and_shutdown() {
    let sink = Arc::new(MemoryEventSink::default());
    {
        let runtime =
            SdkRuntime::with_sdk_config(mock_sdk_config(&MockHttp::new()), sink.clone()).unwrap();
        let value = runtime
            .block_on("sleepy", async {
                tokio::time::sleep(Duration::from_millis(1)).await;
                Ok::<_, ExampleError>(7)
            })
            .unwrap();
        assert_eq!(value, 7);
    }
    assert_eq!(event_names(&sink), vec!["sdk_init", "example_call", "sdk_shutdown"]);
    let call = &sink.events()[1];
    assert_eq!(call.operation, Some("sleepy"));
    assert_eq!(call.outcome, Some(EventOutcome::Ok));
    assert_eq!(call.region.as_deref(), Some("us-east-1"));
}

#[test]
fn failed_example_is_logged_and_guard_still_tears_down() {
    let sink = Arc::new(MemoryEventSink::default());
    let outcome = (|| -> Result<(), ExampleError> {
        let runtime =
            SdkRuntime::with_sdk_config(mock_sdk_config(&MockHttp::new()), sink.clone())?;
        runtime.block_on("rejects", async {
            Err::<(), _>(ExampleError::InvalidInput("bucket name is empty".to_string()))
        })?;
        Ok(())
    })();

    assert!(matches!(outcome, Err(ExampleError::InvalidInput(_))));
    let events = sink.events();
    assert_eq!(event_names(&sink), vec!["sdk_init", "example_call", "sdk_shutdown"]);
    assert_eq!(events[1].outcome, Some(EventOutcome::Error));
    assert_eq!(events[1].error_kind, Some("invalid_input"));
}

#[test]
fn init_rejects_invalid_settings() {
    let sink = Arc::new(MemoryEventSink::default());
    let settings = SdkSettings {
        endpoint: Some("http://localhost:4566".to_string()),
        ..SdkSettings::default()
    };
    let result = SdkRuntime::init(&settings, sink.clone());
    assert!(matches!(result, Err(ExampleError::InvalidInput(_))));
    assert!(sink.events().is_empty());
}

#[test]
fn init_applies_region_override() {
    let sink = Arc::new(MemoryEventSink::default());
    let settings = SdkSettings {
        region: Some("eu-central-1".to_string()),
        ..SdkSettings::default()
    };
    let runtime = SdkRuntime::init(&settings, sink.clone()).unwrap();
    assert_eq!(runtime.sdk_config().region().map(ToString::to_string).as_deref(), Some("eu-central-1"));
    drop(runtime);
    assert_eq!(event_names(&sink), vec!["sdk_init", "sdk_shutdown"]);
}

#[test]
fn from_config_rejects_unopenable_event_log() {
    let dir = tempfile::tempdir().unwrap();
    let config = crate::config::ExamplesConfig {
        events: crate::config::EventSettings {
            sink: crate::config::EventSinkKind::File,
            path: Some(dir.path().join("missing-dir").join("events.jsonl")),
        },
        ..crate::config::ExamplesConfig::default()
    };
    assert!(matches!(SdkRuntime::from_config(&config), Err(ExampleError::Io(_))));
}

#[test]
fn from_config_writes_lifecycle_to_file_sink() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("events.jsonl");
    let config = crate::config::ExamplesConfig {
        sdk: SdkSettings {
            region: Some("us-west-2".to_string()),
            ..SdkSettings::default()
        },
        events: crate::config::EventSettings {
            sink: crate::config::EventSinkKind::File,
            path: Some(log.clone()),
        },
        ..crate::config::ExamplesConfig::default()
    };
    drop(SdkRuntime::from_config(&config).unwrap());
    let text = std::fs::read_to_string(&log).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("\"sdk_init\""));
    assert!(lines[0].contains("us-west-2"));
    assert!(lines[1].contains("\"sdk_shutdown\""));
}
