// crates/sdk-examples-s3/src/lib.rs
// ============================================================================
// Module: Object Storage Examples
// Description: Object storage examples built on explicit SDK config.
// Purpose: Expose bucket and object listing over a caller-supplied client.
// Dependencies: aws-config, aws-sdk-s3, sdk-examples-core
// ============================================================================

//! ## Overview
//! [`s3_client`] turns a shared [`SdkConfig`] into an object storage client,
//! optionally with path-style addressing for local compatible endpoints. The
//! examples validate bucket names before touching the network.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod buckets;
pub mod objects;

// ============================================================================
// SECTION: Imports
// ============================================================================

use aws_config::SdkConfig;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use buckets::BucketListing;
pub use buckets::list_buckets;
pub use buckets::validate_bucket_name;
pub use objects::ObjectListing;
pub use objects::list_objects;

// ============================================================================
// SECTION: Client
// ============================================================================

/// Builds an object storage client from `sdk_config`.
#[must_use]
pub fn s3_client(sdk_config: &SdkConfig, force_path_style: bool) -> aws_sdk_s3::Client {
    let config = aws_sdk_s3::config::Builder::from(sdk_config).force_path_style(force_path_style).build();
    aws_sdk_s3::Client::from_conf(config)
}
