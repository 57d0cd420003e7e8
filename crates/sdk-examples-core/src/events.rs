// crates/sdk-examples-core/src/events.rs
// ============================================================================
// Module: Example Events
// Description: Structured JSON-line events for SDK example execution.
// Purpose: Record runtime lifecycle and example outcomes without hard deps.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Every example invocation and SDK runtime transition is recorded as an
//! [`ExampleEvent`] through an [`EventSink`]. Sinks write one JSON object per
//! line so the output can be piped into any log pipeline. Sink failures are
//! swallowed: event logging never changes an example's outcome.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Serialize;

use crate::config::EventSettings;
use crate::config::EventSinkKind;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Outcome label for an example call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventOutcome {
    /// The call succeeded.
    Ok,
    /// The call failed.
    Error,
}

/// Structured event payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExampleEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Example operation name, when the event concerns one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<&'static str>,
    /// Outcome, when the event concerns a call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<EventOutcome>,
    /// Error kind label on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<&'static str>,
    /// Error message on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Region in effect, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl ExampleEvent {
    /// Creates an event with only its identifier and timestamp set.
    #[must_use]
    pub fn new(event: &'static str) -> Self {
        let timestamp_ms =
            SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis();
        Self {
            event,
            timestamp_ms,
            operation: None,
            outcome: None,
            error_kind: None,
            error: None,
            region: None,
        }
    }

    /// Creates an `example_call` event for `operation`.
    #[must_use]
    pub fn call(operation: &'static str, outcome: EventOutcome) -> Self {
        Self {
            operation: Some(operation),
            outcome: Some(outcome),
            ..Self::new("example_call")
        }
    }

    /// Attaches an error kind and message.
    #[must_use]
    pub fn with_error(mut self, kind: &'static str, message: impl Into<String>) -> Self {
        self.error_kind = Some(kind);
        self.error = Some(message.into());
        self
    }

    /// Attaches the effective region.
    #[must_use]
    pub fn with_region(mut self, region: Option<String>) -> Self {
        self.region = region;
        self
    }
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Destination for example events.
pub trait EventSink: Send + Sync {
    /// Records an event.
    fn record(&self, event: &ExampleEvent);
}

/// Event sink writing JSON lines to stderr.
pub struct StderrEventSink;

impl EventSink for StderrEventSink {
    fn record(&self, event: &ExampleEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// Event sink appending JSON lines to a file.
pub struct FileEventSink {
    /// File handle used for append-only logging.
    file: Mutex<std::fs::File>,
}

impl FileEventSink {
    /// Opens the event log in append mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl EventSink for FileEventSink {
    fn record(&self, event: &ExampleEvent) {
        if let Ok(payload) = serde_json::to_string(event)
            && let Ok(mut file) = self.file.lock()
        {
            let _ = writeln!(file, "{payload}");
            let _ = file.flush();
        }
    }
}

/// Event sink that discards events.
pub struct NoopEventSink;

impl EventSink for NoopEventSink {
    fn record(&self, _event: &ExampleEvent) {}
}

/// Event sink retaining events in memory for inspection.
#[derive(Default)]
pub struct MemoryEventSink {
    /// Recorded events in arrival order.
    events: Mutex<Vec<ExampleEvent>>,
}

impl MemoryEventSink {
    /// Returns a snapshot of the recorded events.
    #[must_use]
    pub fn events(&self) -> Vec<ExampleEvent> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl EventSink for MemoryEventSink {
    fn record(&self, event: &ExampleEvent) {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).push(event.clone());
    }
}

// ============================================================================
// SECTION: Construction
// ============================================================================

/// Builds the sink selected by `settings`.
///
/// # Errors
///
/// Returns an error when the file sink cannot open its log file.
pub fn sink_from_settings(settings: &EventSettings) -> io::Result<Arc<dyn EventSink>> {
    match (settings.sink, &settings.path) {
        (EventSinkKind::Stderr, _) => Ok(Arc::new(StderrEventSink)),
        (EventSinkKind::None, _) => Ok(Arc::new(NoopEventSink)),
        (EventSinkKind::File, Some(path)) => Ok(Arc::new(FileEventSink::new(path)?)),
        (EventSinkKind::File, None) => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "events.path is required for the file sink",
        )),
    }
}
