// crates/sdk-examples-core/src/runtime.rs
// ============================================================================
// Module: SDK Runtime Guard
// Description: Scoped acquisition of the async runtime and shared SDK config.
// Purpose: Initialize once, run examples synchronously, tear down on drop.
// Dependencies: aws-config, tokio
// ============================================================================

//! ## Overview
//! [`SdkRuntime`] owns everything an example binary needs process-wide: a
//! tokio runtime and the loaded [`SdkConfig`]. Teardown happens in `Drop`, so
//! early returns and error paths release the runtime exactly like the success
//! path. Each [`SdkRuntime::block_on`] call records an `example_call` event.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use aws_config::BehaviorVersion;
use aws_config::Region;
use aws_config::SdkConfig;
use tokio::runtime::Handle;
use tokio::runtime::Runtime;

use crate::config::ExamplesConfig;
use crate::config::SdkSettings;
use crate::error::ExampleError;
use crate::events::EventOutcome;
use crate::events::EventSink;
use crate::events::ExampleEvent;
use crate::events::sink_from_settings;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Grace period for in-flight tasks when the runtime shuts down.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

// ============================================================================
// SECTION: Runtime Guard
// ============================================================================

/// Process-wide SDK state with guaranteed teardown.
///
/// # Invariants
/// - `runtime` is `Some` until the guard is dropped.
/// - Exactly one `sdk_init` and one `sdk_shutdown` event are recorded.
pub struct SdkRuntime {
    /// Tokio runtime driving SDK futures.
    runtime: Option<Runtime>,
    /// Shared SDK configuration.
    sdk_config: SdkConfig,
    /// Event sink for lifecycle and call events.
    events: Arc<dyn EventSink>,
}

impl SdkRuntime {
    /// Builds the runtime and loads SDK configuration from `settings` and the
    /// standard provider chain.
    ///
    /// # Errors
    ///
    /// Returns [`ExampleError`] when settings are invalid or the runtime cannot
    /// start.
    pub fn init(settings: &SdkSettings, events: Arc<dyn EventSink>) -> Result<Self, ExampleError> {
        settings.validate().map_err(|err| ExampleError::InvalidInput(err.to_string()))?;
        let runtime = build_runtime()?;
        let sdk_config = runtime.block_on(load_sdk_config(settings));
        Ok(Self::started(runtime, sdk_config, events))
    }

    /// Builds the event sink and runtime described by a loaded config file.
    ///
    /// # Errors
    ///
    /// Returns [`ExampleError`] when the event sink cannot open or
    /// [`SdkRuntime::init`] fails.
    pub fn from_config(config: &ExamplesConfig) -> Result<Self, ExampleError> {
        let events =
            sink_from_settings(&config.events).map_err(|err| ExampleError::Io(err.to_string()))?;
        Self::init(&config.sdk, events)
    }

    /// Builds the runtime around an already-constructed SDK configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ExampleError::Runtime`] when the runtime cannot start.
    pub fn with_sdk_config(
        sdk_config: SdkConfig,
        events: Arc<dyn EventSink>,
    ) -> Result<Self, ExampleError> {
        let runtime = build_runtime()?;
        Ok(Self::started(runtime, sdk_config, events))
    }

    /// Records the init event and assembles the guard.
    fn started(runtime: Runtime, sdk_config: SdkConfig, events: Arc<dyn EventSink>) -> Self {
        events.record(&ExampleEvent::new("sdk_init").with_region(region_label(&sdk_config)));
        Self {
            runtime: Some(runtime),
            sdk_config,
            events,
        }
    }

    /// Returns the shared SDK configuration.
    #[must_use]
    pub const fn sdk_config(&self) -> &SdkConfig {
        &self.sdk_config
    }

    /// Runs one example to completion and records its outcome.
    ///
    /// # Errors
    ///
    /// Returns the example's error, or [`ExampleError::Runtime`] after
    /// shutdown.
    pub fn block_on<F, T>(&self, operation: &'static str, future: F) -> Result<T, ExampleError>
    where
        F: Future<Output = Result<T, ExampleError>>,
    {
        let runtime = self
            .runtime
            .as_ref()
            .ok_or_else(|| ExampleError::Runtime("sdk runtime closed".to_string()))?;
        let result = runtime.block_on(future);
        let event = match &result {
            Ok(_) => ExampleEvent::call(operation, EventOutcome::Ok),
            Err(err) => {
                ExampleEvent::call(operation, EventOutcome::Error).with_error(err.kind(), err.to_string())
            }
        };
        self.events.record(&event.with_region(region_label(&self.sdk_config)));
        result
    }
}

impl Drop for SdkRuntime {
    fn drop(&mut self) {
        if let Some(runtime) = self.runtime.take() {
            if Handle::try_current().is_ok() {
                let _ = std::thread::spawn(move || runtime.shutdown_timeout(SHUTDOWN_GRACE)).join();
            } else {
                runtime.shutdown_timeout(SHUTDOWN_GRACE);
            }
            self.events.record(&ExampleEvent::new("sdk_shutdown"));
        }
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Builds the multi-threaded runtime used by the guard.
fn build_runtime() -> Result<Runtime, ExampleError> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|err| ExampleError::Runtime(err.to_string()))
}

/// Loads shared SDK configuration honoring region and endpoint overrides.
pub async fn load_sdk_config(settings: &SdkSettings) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = &settings.region {
        loader = loader.region(Region::new(region.clone()));
    }
    if let Some(endpoint) = &settings.endpoint {
        loader = loader.endpoint_url(endpoint.trim());
    }
    loader.load().await
}

/// Returns the configured region as an owned label.
fn region_label(sdk_config: &SdkConfig) -> Option<String> {
    sdk_config.region().map(ToString::to_string)
}

#[cfg(test)]
mod tests;
