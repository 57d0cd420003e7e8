// crates/sdk-examples-mock/src/lib.rs
// ============================================================================
// Module: SDK Examples Mock Library
// Description: Fixture-backed request interceptor for SDK example tests.
// Purpose: Exercise SDK examples without credentials or network access.
// Dependencies: aws-config, aws-smithy-runtime-api, serde_json, thiserror
// ============================================================================

//! ## Overview
//! This crate sits beneath SDK clients during tests. Fixtures are loaded from
//! disk, validated, queued in call order, and served to the SDK in place of
//! real HTTP responses.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod fixture;
pub mod harness;
pub mod session;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use fixture::FixtureError;
pub use fixture::FixtureFormat;
pub use fixture::FixtureResponse;
pub use fixture::MAX_FIXTURE_BYTES;
pub use fixture::resolve_fixture_path;
pub use harness::MOCK_REGION;
pub use harness::MockHarness;
pub use harness::mock_sdk_config;
pub use harness::precondition_error;
pub use session::EXHAUSTED_ERROR_TYPE;
pub use session::EXHAUSTED_STATUS;
pub use session::MockHttp;
pub use session::RecordedRequest;
pub use session::SessionError;
