// crates/sdk-examples-s3/src/objects.rs
// ============================================================================
// Module: Object Listing Example
// Description: Lists the objects in one bucket.
// Purpose: Single-call object listing over a caller-supplied client.
// Dependencies: aws-sdk-s3, sdk-examples-core
// ============================================================================

//! ## Overview
//! One `ListObjects` call per invocation. The bucket name is validated locally
//! first, so an unusable name never reaches the network.

// ============================================================================
// SECTION: Imports
// ============================================================================

use aws_sdk_s3::Client;
use sdk_examples_core::ExampleError;

use crate::buckets::validate_bucket_name;

// ============================================================================
// SECTION: Types
// ============================================================================

/// One object in a bucket listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectListing {
    /// Object key.
    pub key: String,
    /// Object size in bytes, when reported.
    pub size: Option<i64>,
}

// ============================================================================
// SECTION: Operations
// ============================================================================

/// Lists the objects in `bucket` with a single `ListObjects` call.
///
/// # Errors
///
/// Returns [`ExampleError::InvalidInput`] for an unusable bucket name and
/// [`ExampleError::Sdk`] when the SDK call fails.
pub async fn list_objects(client: &Client, bucket: &str) -> Result<Vec<ObjectListing>, ExampleError> {
    validate_bucket_name(bucket)?;
    let output = client
        .list_objects()
        .bucket(bucket)
        .send()
        .await
        .map_err(|err| ExampleError::sdk("list_objects", err))?;
    Ok(output
        .contents()
        .iter()
        .filter_map(|object| {
            object.key().map(|key| ObjectListing {
                key: key.to_string(),
                size: object.size(),
            })
        })
        .collect())
}
