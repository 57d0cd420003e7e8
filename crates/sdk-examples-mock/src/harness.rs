// crates/sdk-examples-mock/src/harness.rs
// ============================================================================
// Module: Mock Test Harness
// Description: Explicit per-test wiring of a mock session and SDK config.
// Purpose: Give each test its own session and client configuration.
// Dependencies: aws-config, aws-credential-types, aws-smithy-types
// ============================================================================

//! ## Overview
//! A [`MockHarness`] bundles one [`MockHttp`] session with an [`SdkConfig`]
//! whose HTTP client is that session. Tests build a harness, queue fixtures,
//! and pass the config to the example under test. Nothing is shared between
//! tests.
//!
//! The config carries static credentials and a fixed region so the SDK never
//! consults the environment, and retries are disabled so each SDK call maps to
//! exactly one intercepted request.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;
use std::path::PathBuf;

use aws_config::BehaviorVersion;
use aws_config::Region;
use aws_config::SdkConfig;
use aws_credential_types::Credentials;
use aws_credential_types::provider::SharedCredentialsProvider;
use aws_smithy_types::retry::RetryConfig;

use crate::fixture::FixtureError;
use crate::session::MockHttp;
use crate::session::SessionError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Region used by mocked SDK clients.
pub const MOCK_REGION: &str = "us-east-1";
/// Access key id used by mocked SDK clients.
const MOCK_ACCESS_KEY_ID: &str = "AKIDMOCKEXAMPLE";
/// Secret key used by mocked SDK clients.
const MOCK_SECRET_ACCESS_KEY: &str = "mock-secret-access-key";
/// Credential provider name reported by mocked SDK clients.
const MOCK_PROVIDER_NAME: &str = "sdk-examples-mock";

// ============================================================================
// SECTION: Harness
// ============================================================================

/// Per-test mock session plus the client configuration wired to it.
#[derive(Debug, Clone)]
pub struct MockHarness {
    /// Fixture-backed transport.
    mock: MockHttp,
    /// SDK configuration using the transport.
    sdk_config: SdkConfig,
}

impl MockHarness {
    /// Creates a harness resolving fixtures under `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::from_session(MockHttp::with_root(root))
    }

    /// Creates a harness around an existing session.
    #[must_use]
    pub fn from_session(mock: MockHttp) -> Self {
        let sdk_config = mock_sdk_config(&mock);
        Self {
            mock,
            sdk_config,
        }
    }

    /// Returns the mock session.
    #[must_use]
    pub const fn mock(&self) -> &MockHttp {
        &self.mock
    }

    /// Returns the SDK configuration wired to the mock session.
    #[must_use]
    pub const fn sdk_config(&self) -> &SdkConfig {
        &self.sdk_config
    }

    /// Returns the absolute path of a file under the fixture root.
    #[must_use]
    pub fn fixture_path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.mock.root().map_or_else(
            || relative.as_ref().to_path_buf(),
            |root| root.join(relative.as_ref()),
        )
    }

    /// Queues a fixture, panicking with a precondition message on failure.
    ///
    /// # Panics
    ///
    /// Panics when the fixture cannot be loaded; the test is invalid before
    /// the behavior under test runs.
    #[allow(clippy::panic, reason = "Fixture load failures abort the owning test.")]
    pub fn expect_fixture(&self, path: impl AsRef<Path>) {
        if let Err(err) = self.mock.add_response_with_body(path) {
            panic!("{}", precondition_error(&err));
        }
    }

    /// Ends the session, panicking when fixtures were left unused.
    ///
    /// # Panics
    ///
    /// Panics when the session reports unused fixtures.
    #[allow(clippy::panic, reason = "Unused fixtures fail the owning test.")]
    pub fn finish(&self) {
        if let Err(err) = self.mock.finish() {
            panic!("{}", session_error(&err));
        }
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Builds an SDK configuration that routes every request to `mock`.
#[must_use]
pub fn mock_sdk_config(mock: &MockHttp) -> SdkConfig {
    let credentials = Credentials::new(
        MOCK_ACCESS_KEY_ID,
        MOCK_SECRET_ACCESS_KEY,
        None,
        None,
        MOCK_PROVIDER_NAME,
    );
    SdkConfig::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new(MOCK_REGION))
        .credentials_provider(SharedCredentialsProvider::new(credentials))
        .retry_config(RetryConfig::disabled())
        .http_client(mock.clone())
        .build()
}

/// Renders the precondition message for a fixture load failure.
#[must_use]
pub fn precondition_error(err: &FixtureError) -> String {
    format!(
        "precondition failed: the mock fixture could not be loaded ({err}); the test cannot run \
         until the fixture is fixed"
    )
}

/// Renders the failure message for a session that ended with unused fixtures.
#[must_use]
pub fn session_error(err: &SessionError) -> String {
    format!("mock session ended with unconsumed responses: {err}")
}
