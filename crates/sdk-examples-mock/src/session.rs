// crates/sdk-examples-mock/src/session.rs
// ============================================================================
// Module: Mock HTTP Session
// Description: Fixture-backed HTTP client placed beneath SDK clients.
// Purpose: Answer SDK requests from queued fixtures without network I/O.
// Dependencies: aws-smithy-runtime-api, aws-smithy-types, thiserror
// ============================================================================

//! ## Overview
//! [`MockHttp`] implements the SDK's [`HttpClient`] seam. Tests queue
//! fixtures with [`MockHttp::add_response_with_body`]; every request the SDK
//! sends is recorded and answered with the next queued fixture in call order.
//! When the queue is empty the session answers with a fixed failure response
//! instead of faulting, so the SDK surfaces an ordinary operation error.
//!
//! Clones share one session. Hand a clone to the SDK config and keep the
//! original to inspect recorded requests and to [`MockHttp::finish`] the
//! session, which flags fixtures that no call consumed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::VecDeque;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

use aws_smithy_runtime_api::client::http::HttpClient;
use aws_smithy_runtime_api::client::http::HttpConnector;
use aws_smithy_runtime_api::client::http::HttpConnectorFuture;
use aws_smithy_runtime_api::client::http::HttpConnectorSettings;
use aws_smithy_runtime_api::client::http::SharedHttpConnector;
use aws_smithy_runtime_api::client::orchestrator::HttpRequest;
use aws_smithy_runtime_api::client::orchestrator::HttpResponse;
use aws_smithy_runtime_api::client::result::ConnectorError;
use aws_smithy_runtime_api::client::runtime_components::RuntimeComponents;
use aws_smithy_runtime_api::http::StatusCode;
use aws_smithy_types::body::SdkBody;
use thiserror::Error;

use crate::fixture::FixtureError;
use crate::fixture::FixtureResponse;
use crate::fixture::JSON_CONTENT_TYPE;
use crate::fixture::resolve_fixture_path;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Status served when no fixture remains for a call.
pub const EXHAUSTED_STATUS: u16 = 400;
/// Error type name carried in the exhausted-session response body.
pub const EXHAUSTED_ERROR_TYPE: &str = "MockFixtureExhausted";
/// Body served when no fixture remains for a call.
const EXHAUSTED_BODY: &str =
    r#"{"__type":"MockFixtureExhausted","message":"no fixture response remains for this call"}"#;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors reported when a session ends.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// Fixtures were registered but never served.
    #[error("unused fixtures: {}", format_paths(.0))]
    UnusedFixtures(Vec<PathBuf>),
}

/// Joins fixture paths for error display.
fn format_paths(paths: &[PathBuf]) -> String {
    paths.iter().map(|path| path.display().to_string()).collect::<Vec<_>>().join(", ")
}

// ============================================================================
// SECTION: Recorded Requests
// ============================================================================

/// A request intercepted by the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    /// HTTP method.
    pub method: String,
    /// Request URI.
    pub uri: String,
    /// Request headers in send order.
    pub headers: Vec<(String, String)>,
    /// Request body bytes (empty for streaming bodies).
    pub body: Vec<u8>,
    /// Fixture served for this request, if any.
    pub served_fixture: Option<PathBuf>,
}

impl RecordedRequest {
    /// Returns the first header value matching `name`, case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Returns the `X-Amz-Target` operation header for JSON protocols.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        self.header("x-amz-target")
    }

    /// Parses the request body as JSON.
    #[must_use]
    pub fn body_json(&self) -> Option<serde_json::Value> {
        serde_json::from_slice(&self.body).ok()
    }

    /// Returns true when the session had no fixture for this request.
    #[must_use]
    pub const fn was_exhausted(&self) -> bool {
        self.served_fixture.is_none()
    }
}

// ============================================================================
// SECTION: Session State
// ============================================================================

/// Mutable state shared by every clone of a session.
#[derive(Debug, Default)]
struct SessionState {
    /// Fixtures waiting to be served, in call order.
    pending: VecDeque<FixtureResponse>,
    /// Requests intercepted so far.
    requests: Vec<RecordedRequest>,
}

// ============================================================================
// SECTION: Mock HTTP Client
// ============================================================================

/// Fixture-backed HTTP client for SDK tests.
///
/// # Invariants
/// - Fixtures are served strictly in the order they were added.
/// - No request ever reaches the network.
#[derive(Debug, Clone, Default)]
pub struct MockHttp {
    /// Root used to resolve relative fixture paths.
    root: Option<PathBuf>,
    /// Shared session state.
    state: Arc<Mutex<SessionState>>,
}

impl MockHttp {
    /// Creates a session that resolves fixture paths as given.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session that resolves relative fixture paths under `root`.
    #[must_use]
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
            state: Arc::default(),
        }
    }

    /// Returns the fixture root, if any.
    #[must_use]
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Loads the fixture at `path` and queues it as the next response.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError`] when the fixture cannot be loaded. Nothing is
    /// queued on failure.
    pub fn add_response_with_body(&self, path: impl AsRef<Path>) -> Result<(), FixtureError> {
        let resolved = resolve_fixture_path(self.root(), path.as_ref())?;
        self.add_response(FixtureResponse::load(resolved)?);
        Ok(())
    }

    /// Loads the fixture at `path` and queues it with an explicit status.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError`] when the status is invalid or the fixture
    /// cannot be loaded.
    pub fn add_response_with_status(
        &self,
        path: impl AsRef<Path>,
        status: u16,
    ) -> Result<(), FixtureError> {
        let resolved = resolve_fixture_path(self.root(), path.as_ref())?;
        self.add_response(FixtureResponse::load_with_status(resolved, status)?);
        Ok(())
    }

    /// Queues an already-loaded fixture.
    pub fn add_response(&self, fixture: FixtureResponse) {
        self.lock().pending.push_back(fixture);
    }

    /// Returns the number of fixtures not yet served.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.lock().pending.len()
    }

    /// Returns true when every queued fixture has been served.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.lock().pending.is_empty()
    }

    /// Returns a snapshot of the intercepted requests.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.lock().requests.clone()
    }

    /// Records `request` and answers it from the queue.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorError`] when the fixture status cannot be converted
    /// into a response.
    pub fn respond(&self, request: &HttpRequest) -> Result<HttpResponse, ConnectorError> {
        let mut recorded = record(request);
        let mut state = self.lock();
        let fixture = state.pending.pop_front();
        recorded.served_fixture = fixture.as_ref().map(|fixture| fixture.path().to_path_buf());
        state.requests.push(recorded);
        drop(state);
        match fixture {
            Some(fixture) => {
                let content_type = fixture.format().content_type();
                build_response(fixture.status(), content_type, fixture.into_body())
            }
            None => build_response(
                EXHAUSTED_STATUS,
                JSON_CONTENT_TYPE,
                EXHAUSTED_BODY.as_bytes().to_vec(),
            ),
        }
    }

    /// Ends the session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::UnusedFixtures`] when fixtures were never served.
    pub fn finish(&self) -> Result<(), SessionError> {
        let unused: Vec<PathBuf> =
            self.lock().pending.drain(..).map(|fixture| fixture.path().to_path_buf()).collect();
        if unused.is_empty() { Ok(()) } else { Err(SessionError::UnusedFixtures(unused)) }
    }

    /// Locks the session state, recovering from a poisoned lock.
    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// ============================================================================
// SECTION: SDK Transport Seam
// ============================================================================

/// Connector handed to the SDK orchestrator for each operation.
#[derive(Debug)]
struct MockConnector {
    /// Session answering requests.
    session: MockHttp,
}

impl HttpConnector for MockConnector {
    fn call(&self, request: HttpRequest) -> HttpConnectorFuture {
        HttpConnectorFuture::ready(self.session.respond(&request))
    }
}

impl HttpClient for MockHttp {
    fn http_connector(
        &self,
        _settings: &HttpConnectorSettings,
        _components: &RuntimeComponents,
    ) -> SharedHttpConnector {
        SharedHttpConnector::new(MockConnector {
            session: self.clone(),
        })
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Copies the observable parts of a request.
fn record(request: &HttpRequest) -> RecordedRequest {
    RecordedRequest {
        method: request.method().to_string(),
        uri: request.uri().to_string(),
        headers: request
            .headers()
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect(),
        body: request.body().bytes().map(<[u8]>::to_vec).unwrap_or_default(),
        served_fixture: None,
    }
}

/// Builds an SDK response from a status, content type, and body.
fn build_response(
    status: u16,
    content_type: &'static str,
    body: Vec<u8>,
) -> Result<HttpResponse, ConnectorError> {
    let status =
        StatusCode::try_from(status).map_err(|err| ConnectorError::other(err.into(), None))?;
    let content_length = body.len().to_string();
    let mut response = HttpResponse::new(status, SdkBody::from(body));
    let _ = response.headers_mut().insert("content-type", content_type);
    let _ = response.headers_mut().insert("content-length", content_length);
    Ok(response)
}
