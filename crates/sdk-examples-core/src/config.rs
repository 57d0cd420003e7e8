// crates/sdk-examples-core/src/config.rs
// ============================================================================
// Module: SDK Examples Configuration
// Description: Configuration loading and validation for the example binaries.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: serde, toml, thiserror
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! The path comes from the caller, then `SDK_EXAMPLES_CONFIG`, then the
//! default file name. Only the default location may be absent, in which case
//! defaults apply; an explicit or environment path must exist.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
pub const DEFAULT_CONFIG_NAME: &str = "sdk-examples.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "SDK_EXAMPLES_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum region name length.
pub(crate) const MAX_REGION_LENGTH: usize = 64;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("config io error: {0}")]
    Io(String),
    /// Config file could not be parsed.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Config values failed validation.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Top-level configuration for the SDK example binaries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExamplesConfig {
    /// SDK client settings.
    #[serde(default)]
    pub sdk: SdkSettings,
    /// Structured event logging settings.
    #[serde(default)]
    pub events: EventSettings,
    /// Fixture settings used by offline checks.
    #[serde(default)]
    pub fixtures: FixtureSettings,
}

/// SDK client settings.
///
/// # Invariants
/// - `endpoint`, when set, uses `https://`, or `http://` with `allow_http`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SdkSettings {
    /// Region override (defaults to the SDK provider chain).
    #[serde(default)]
    pub region: Option<String>,
    /// Endpoint override for compatible services or local stacks.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Allow a cleartext `http://` endpoint.
    #[serde(default)]
    pub allow_http: bool,
    /// Use path-style bucket addressing for object storage.
    #[serde(default)]
    pub force_path_style: bool,
}

/// Event sink selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventSinkKind {
    /// JSON lines on stderr.
    #[default]
    Stderr,
    /// JSON lines appended to a file.
    File,
    /// Events are discarded.
    None,
}

/// Structured event logging settings.
///
/// # Invariants
/// - `path` is required when `sink = "file"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventSettings {
    /// Sink receiving events.
    #[serde(default)]
    pub sink: EventSinkKind,
    /// Log file path for the file sink.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Fixture settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixtureSettings {
    /// Root directory fixture paths resolve against.
    #[serde(default)]
    pub root: Option<PathBuf>,
}

// ============================================================================
// SECTION: Loading
// ============================================================================

/// Where a config path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigSource {
    /// Passed by the caller.
    Explicit,
    /// Taken from [`CONFIG_ENV_VAR`].
    Environment,
    /// The default file name.
    Default,
}

impl ExamplesConfig {
    /// Loads configuration from `path`, the environment, or the default file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (resolved, source) = resolve_path(path)?;
        validate_path(&resolved)?;
        if source == ConfigSource::Default && !resolved.exists() {
            let config = Self::default();
            config.validate()?;
            return Ok(config);
        }
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        Self::from_bytes(&bytes)
    }

    /// Parses and validates configuration from raw TOML bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the bytes are oversized, not UTF-8, not
    /// valid TOML, or fail validation.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.sdk.validate()?;
        self.events.validate()?;
        self.fixtures.validate()?;
        Ok(())
    }
}

impl SdkSettings {
    /// Validates SDK settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the region or endpoint is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(region) = &self.region {
            validate_region(region)?;
        }
        if let Some(endpoint) = &self.endpoint {
            let trimmed = endpoint.trim();
            if !(trimmed.starts_with("https://") || trimmed.starts_with("http://")) {
                return Err(ConfigError::Invalid(
                    "sdk.endpoint must include http:// or https://".to_string(),
                ));
            }
            if trimmed.starts_with("http://") && !self.allow_http {
                return Err(ConfigError::Invalid(
                    "sdk.endpoint uses http:// without allow_http".to_string(),
                ));
            }
        }
        Ok(())
    }
}

impl EventSettings {
    /// Validates event settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file sink has no usable path.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match (self.sink, &self.path) {
            (EventSinkKind::File, None) => {
                Err(ConfigError::Invalid("events.path is required for the file sink".to_string()))
            }
            (_, Some(path)) => validate_path_string("events.path", &path.to_string_lossy()),
            (_, None) => Ok(()),
        }
    }
}

impl FixtureSettings {
    /// Validates fixture settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the fixture root is unusable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(root) = &self.root {
            validate_path_string("fixtures.root", &root.to_string_lossy())?;
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from the argument, environment, or default.
fn resolve_path(path: Option<&Path>) -> Result<(PathBuf, ConfigSource), ConfigError> {
    if let Some(path) = path {
        return Ok((path.to_path_buf(), ConfigSource::Explicit));
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok((PathBuf::from(env_path), ConfigSource::Environment));
    }
    Ok((PathBuf::from(DEFAULT_CONFIG_NAME), ConfigSource::Default))
}

/// Validates the resolved path against length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Validates a path string against length constraints.
fn validate_path_string(field: &str, value: &str) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if trimmed.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    for component in Path::new(trimmed).components() {
        if component.as_os_str().len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid(format!("{field} path component too long")));
        }
    }
    Ok(())
}

/// Validates a region name (lowercase letters, digits, hyphens).
fn validate_region(region: &str) -> Result<(), ConfigError> {
    if region.is_empty() || region.len() > MAX_REGION_LENGTH {
        return Err(ConfigError::Invalid("sdk.region must be 1-64 characters".to_string()));
    }
    if !region.chars().all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-') {
        return Err(ConfigError::Invalid(
            "sdk.region may only contain lowercase letters, digits, and hyphens".to_string(),
        ));
    }
    Ok(())
}
