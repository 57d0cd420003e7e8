// crates/sdk-examples-core/src/lib.rs
// ============================================================================
// Module: SDK Examples Core Library
// Description: Shared configuration, runtime, events, and errors for examples.
// Purpose: Keep example crates focused on single SDK calls.
// Dependencies: aws-config, serde, tokio, toml, thiserror
// ============================================================================

//! ## Overview
//! The core crate carries the ambient pieces every example binary needs:
//! TOML configuration, the scoped SDK runtime, structured event sinks, console
//! writers, and the shared [`ExampleError`].

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod error;
pub mod events;
pub mod output;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::ConfigError;
pub use config::EventSettings;
pub use config::EventSinkKind;
pub use config::ExamplesConfig;
pub use config::FixtureSettings;
pub use config::SdkSettings;
pub use error::ExampleError;
pub use events::EventOutcome;
pub use events::EventSink;
pub use events::ExampleEvent;
pub use events::MemoryEventSink;
pub use events::NoopEventSink;
pub use events::sink_from_settings;
pub use runtime::SdkRuntime;
