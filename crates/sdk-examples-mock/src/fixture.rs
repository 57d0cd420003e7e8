// crates/sdk-examples-mock/src/fixture.rs
// ============================================================================
// Module: Fixture Responses
// Description: On-disk fixture loading and validation for mocked SDK calls.
// Purpose: Turn recorded response bodies into immutable canned responses.
// Dependencies: serde_json, thiserror
// ============================================================================

//! ## Overview
//! A fixture is a recorded response body stored next to the tests that use
//! it, conventionally `mock_input/<OperationName>.json` for JSON-protocol
//! services and `mock_input/<OperationName>.xml` for REST-XML services.
//! Loading reads the file with a hard size cap, checks that the payload is
//! well-formed for its format, and produces a [`FixtureResponse`] that never
//! changes afterwards.
//!
//! A session root can be supplied so relative fixture paths resolve against
//! the crate under test and cannot escape it.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::ErrorKind;
use std::io::Read;
use std::path::Path;
use std::path::PathBuf;

use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Maximum fixture file size in bytes.
pub const MAX_FIXTURE_BYTES: usize = 1024 * 1024;
/// Status code served when a fixture does not specify one.
pub const DEFAULT_FIXTURE_STATUS: u16 = 200;
/// Content type served with JSON fixtures.
pub const JSON_CONTENT_TYPE: &str = "application/x-amz-json-1.1";
/// Content type served with XML fixtures.
pub const XML_CONTENT_TYPE: &str = "application/xml";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while loading a fixture.
///
/// # Invariants
/// - A failed load never enqueues a response.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// Fixture file does not exist.
    #[error("fixture not found: {0}")]
    NotFound(String),
    /// Fixture file could not be read.
    #[error("fixture io error: {path}: {message}")]
    Io {
        /// Fixture path.
        path: String,
        /// Underlying error message.
        message: String,
    },
    /// Fixture path resolved outside the session root.
    #[error("fixture path escapes session root: {0}")]
    OutsideRoot(String),
    /// Fixture extension is not a supported response format.
    #[error("unsupported fixture format: {0}")]
    UnsupportedFormat(String),
    /// Fixture content is not well-formed for its format.
    #[error("malformed fixture {path}: {reason}")]
    Malformed {
        /// Fixture path.
        path: String,
        /// Validation failure reason.
        reason: String,
    },
    /// Fixture exceeds the size cap.
    #[error("fixture too large: {path} ({actual_bytes} > {max_bytes})")]
    TooLarge {
        /// Fixture path.
        path: String,
        /// Maximum allowed bytes.
        max_bytes: usize,
        /// Actual size in bytes.
        actual_bytes: usize,
    },
    /// Requested status code is not a valid HTTP status.
    #[error("invalid fixture status code: {0}")]
    InvalidStatus(u16),
}

// ============================================================================
// SECTION: Fixture Format
// ============================================================================

/// Response body formats understood by the fixture loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureFormat {
    /// JSON body (awsJson protocols).
    Json,
    /// XML body (REST-XML protocols).
    Xml,
}

impl FixtureFormat {
    /// Derives the format from a fixture path extension.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::UnsupportedFormat`] for unknown extensions.
    pub fn from_path(path: &Path) -> Result<Self, FixtureError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "json" => Ok(Self::Json),
            "xml" => Ok(Self::Xml),
            _ => Err(FixtureError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Returns a short lowercase label for this format.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
        }
    }

    /// Returns the content type served for this format.
    #[must_use]
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Json => JSON_CONTENT_TYPE,
            Self::Xml => XML_CONTENT_TYPE,
        }
    }

    /// Checks that `bytes` is well-formed for this format.
    fn validate(self, bytes: &[u8]) -> Result<(), String> {
        match self {
            Self::Json => serde_json::from_slice::<serde_json::Value>(bytes)
                .map(|_| ())
                .map_err(|err| err.to_string()),
            Self::Xml => {
                let text = std::str::from_utf8(bytes).map_err(|_| "xml must be utf-8".to_string())?;
                check_xml_structure(text)
            }
        }
    }
}

// ============================================================================
// SECTION: Fixture Response
// ============================================================================

/// A canned response loaded from disk.
///
/// # Invariants
/// - `body` is well-formed for `format`.
/// - `status` is a valid HTTP status code (100..=599).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureResponse {
    /// Path the fixture was loaded from.
    path: PathBuf,
    /// Body format.
    format: FixtureFormat,
    /// HTTP status code to serve.
    status: u16,
    /// Raw response body.
    body: Vec<u8>,
}

impl FixtureResponse {
    /// Loads a fixture from `path` with the default status code.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError`] when the file is missing, unreadable, too large,
    /// or malformed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        Self::load_with_status(path, DEFAULT_FIXTURE_STATUS)
    }

    /// Loads a fixture from `path` served with `status`.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError`] when the status is invalid or the file cannot
    /// be loaded.
    pub fn load_with_status(path: impl AsRef<Path>, status: u16) -> Result<Self, FixtureError> {
        let path = path.as_ref();
        if !(100 ..= 599).contains(&status) {
            return Err(FixtureError::InvalidStatus(status));
        }
        let format = FixtureFormat::from_path(path)?;
        let body = read_with_limit(path)?;
        format.validate(&body).map_err(|reason| FixtureError::Malformed {
            path: path.display().to_string(),
            reason,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            format,
            status,
            body,
        })
    }

    /// Returns the path the fixture was loaded from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the body format.
    #[must_use]
    pub const fn format(&self) -> FixtureFormat {
        self.format
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Returns the raw body bytes.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Consumes the fixture, returning its body.
    #[must_use]
    pub fn into_body(self) -> Vec<u8> {
        self.body
    }
}

// ============================================================================
// SECTION: Path Resolution
// ============================================================================

/// Resolves a fixture path against an optional session root.
///
/// Absolute paths are accepted as-is when no root is configured. With a root,
/// the canonical path must stay inside the canonical root.
///
/// # Errors
///
/// Returns [`FixtureError`] when the file is missing or escapes the root.
pub fn resolve_fixture_path(root: Option<&Path>, path: &Path) -> Result<PathBuf, FixtureError> {
    let Some(root) = root else {
        return Ok(path.to_path_buf());
    };
    let joined = if path.is_absolute() { path.to_path_buf() } else { root.join(path) };
    let root = std::fs::canonicalize(root).map_err(|err| io_error(root, &err))?;
    let resolved = std::fs::canonicalize(&joined).map_err(|err| io_error(&joined, &err))?;
    if !resolved.starts_with(&root) {
        return Err(FixtureError::OutsideRoot(joined.display().to_string()));
    }
    Ok(resolved)
}

/// Reads a fixture file, failing once the size cap is exceeded.
fn read_with_limit(path: &Path) -> Result<Vec<u8>, FixtureError> {
    let file = std::fs::File::open(path).map_err(|err| io_error(path, &err))?;
    let file_len = file.metadata().map_err(|err| io_error(path, &err))?.len();
    let mut limited = file.take((MAX_FIXTURE_BYTES + 1) as u64);
    let mut bytes = Vec::new();
    limited.read_to_end(&mut bytes).map_err(|err| io_error(path, &err))?;
    if bytes.len() > MAX_FIXTURE_BYTES {
        return Err(FixtureError::TooLarge {
            path: path.display().to_string(),
            max_bytes: MAX_FIXTURE_BYTES,
            actual_bytes: usize::try_from(file_len).unwrap_or(usize::MAX).max(bytes.len()),
        });
    }
    Ok(bytes)
}

/// Maps an I/O error onto the fixture error taxonomy.
fn io_error(path: &Path, err: &std::io::Error) -> FixtureError {
    if err.kind() == ErrorKind::NotFound {
        FixtureError::NotFound(path.display().to_string())
    } else {
        FixtureError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}

// ============================================================================
// SECTION: XML Structure Check
// ============================================================================

/// Checks that `text` holds exactly one balanced root element.
///
/// This is a structural check only: tags must nest and close in order, the
/// optional prolog, comments, and declarations are skipped, and no element may
/// follow the root.
fn check_xml_structure(text: &str) -> Result<(), String> {
    let mut rest = text.strip_prefix('\u{feff}').unwrap_or(text).trim();
    if rest.is_empty() {
        return Err("xml document is empty".to_string());
    }
    let mut stack: Vec<&str> = Vec::new();
    let mut root_closed = false;
    while !rest.is_empty() {
        let Some(open) = rest.find('<') else {
            if stack.is_empty() && !rest.trim().is_empty() {
                return Err("text outside root element".to_string());
            }
            break;
        };
        if stack.is_empty() && !rest[.. open].trim().is_empty() {
            return Err("text outside root element".to_string());
        }
        rest = &rest[open ..];
        if let Some(body) = rest.strip_prefix("<!--") {
            let end = body.find("-->").ok_or_else(|| "unterminated comment".to_string())?;
            rest = &body[end + 3 ..];
            continue;
        }
        if let Some(body) = rest.strip_prefix("<![CDATA[") {
            if stack.is_empty() {
                return Err("cdata outside root element".to_string());
            }
            let end = body.find("]]>").ok_or_else(|| "unterminated cdata".to_string())?;
            rest = &body[end + 3 ..];
            continue;
        }
        let close = rest.find('>').ok_or_else(|| "unterminated tag".to_string())?;
        let tag = &rest[1 .. close];
        rest = &rest[close + 1 ..];
        if tag.starts_with('?') || tag.starts_with('!') {
            continue;
        }
        if let Some(name) = tag.strip_prefix('/') {
            let name = name.trim();
            match stack.pop() {
                Some(open_name) if open_name == name => {
                    if stack.is_empty() {
                        root_closed = true;
                    }
                }
                Some(open_name) => {
                    return Err(format!("mismatched closing tag </{name}> for <{open_name}>"));
                }
                None => return Err(format!("unexpected closing tag </{name}>")),
            }
            continue;
        }
        if root_closed {
            return Err("multiple root elements".to_string());
        }
        let self_closing = tag.ends_with('/');
        let name = tag.trim_end_matches('/').split_whitespace().next().unwrap_or_default();
        if name.is_empty() {
            return Err("empty tag name".to_string());
        }
        if self_closing {
            if stack.is_empty() {
                root_closed = true;
            }
        } else {
            stack.push(name);
        }
    }
    if let Some(open_name) = stack.last() {
        return Err(format!("unclosed element <{open_name}>"));
    }
    if !root_closed {
        return Err("xml document has no root element".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests;
