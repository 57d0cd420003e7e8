// crates/sdk-examples-s3/src/buckets.rs
// ============================================================================
// Module: Bucket Examples
// Description: Bucket listing and bucket-name validation.
// Purpose: List owned buckets and reject unusable names before SDK calls.
// Dependencies: aws-sdk-s3, sdk-examples-core
// ============================================================================

//! ## Overview
//! Lists the caller's buckets and checks bucket names against the
//! general-purpose naming rules before any object call is made.

// ============================================================================
// SECTION: Imports
// ============================================================================

use aws_sdk_s3::Client;
use aws_sdk_s3::primitives::DateTimeFormat;
use sdk_examples_core::ExampleError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Minimum bucket name length.
const MIN_BUCKET_NAME_LENGTH: usize = 3;
/// Maximum bucket name length.
const MAX_BUCKET_NAME_LENGTH: usize = 63;

// ============================================================================
// SECTION: Types
// ============================================================================

/// One bucket owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketListing {
    /// Bucket name.
    pub name: String,
    /// Creation time in RFC 3339 form, when reported.
    pub creation_date: Option<String>,
}

// ============================================================================
// SECTION: Operations
// ============================================================================

/// Lists the buckets owned by the caller.
///
/// # Errors
///
/// Returns [`ExampleError::Sdk`] when the SDK call fails.
pub async fn list_buckets(client: &Client) -> Result<Vec<BucketListing>, ExampleError> {
    let output =
        client.list_buckets().send().await.map_err(|err| ExampleError::sdk("list_buckets", err))?;
    Ok(output
        .buckets()
        .iter()
        .filter_map(|bucket| {
            bucket.name().map(|name| BucketListing {
                name: name.to_string(),
                creation_date: bucket
                    .creation_date()
                    .and_then(|date| date.fmt(DateTimeFormat::DateTime).ok()),
            })
        })
        .collect())
}

// ============================================================================
// SECTION: Validation
// ============================================================================

/// Checks a bucket name against the general-purpose naming rules.
///
/// Names are 3 to 63 characters of lowercase letters, digits, dots, and
/// hyphens, and start and end with a letter or digit.
///
/// # Errors
///
/// Returns [`ExampleError::InvalidInput`] describing the first violated rule.
pub fn validate_bucket_name(bucket: &str) -> Result<(), ExampleError> {
    if bucket.is_empty() {
        return Err(ExampleError::InvalidInput("bucket name is empty".to_string()));
    }
    if !(MIN_BUCKET_NAME_LENGTH ..= MAX_BUCKET_NAME_LENGTH).contains(&bucket.len()) {
        return Err(ExampleError::InvalidInput(format!(
            "bucket name must be {MIN_BUCKET_NAME_LENGTH}-{MAX_BUCKET_NAME_LENGTH} characters: \
             {bucket}"
        )));
    }
    let allowed = |ch: char| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '.' || ch == '-';
    if !bucket.chars().all(allowed) {
        return Err(ExampleError::InvalidInput(format!(
            "bucket name may only contain lowercase letters, digits, dots, and hyphens: {bucket}"
        )));
    }
    let edge = |ch: Option<char>| ch.is_some_and(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit());
    if !edge(bucket.chars().next()) || !edge(bucket.chars().last()) {
        return Err(ExampleError::InvalidInput(format!(
            "bucket name must start and end with a letter or digit: {bucket}"
        )));
    }
    if bucket.contains("..") {
        return Err(ExampleError::InvalidInput(format!(
            "bucket name must not contain adjacent dots: {bucket}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    //! Unit tests for bucket-name validation.
    #![allow(clippy::unwrap_used, reason = "Test-only assertions favor direct unwrap for clarity.")]

    use super::validate_bucket_name;

    #[test]
    fn accepts_conventional_names() {
        for name in ["abc", "my-bucket", "logs.2026.example", "a1b2c3"] {
            assert!(validate_bucket_name(name).is_ok(), "rejected {name}");
        }
        assert!(validate_bucket_name(&"a".repeat(63)).is_ok());
    }

    #[test]
    fn rejects_unusable_names() {
        let long = "a".repeat(64);
        for name in ["", "ab", long.as_str(), "My-Bucket", "under_score", "-lead", "trail.", "a..b"] {
            assert!(validate_bucket_name(name).is_err(), "accepted {name:?}");
        }
    }

    #[test]
    fn empty_name_message_is_specific() {
        let err = validate_bucket_name("").unwrap_err();
        assert_eq!(err.to_string(), "invalid input: bucket name is empty");
    }
}
