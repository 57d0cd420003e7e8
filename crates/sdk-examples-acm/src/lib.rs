// crates/sdk-examples-acm/src/lib.rs
// ============================================================================
// Module: Certificate Manager Examples
// Description: Certificate manager examples built on explicit SDK config.
// Purpose: Expose one function per certificate operation.
// Dependencies: aws-config, aws-sdk-acm, sdk-examples-core
// ============================================================================

//! ## Overview
//! Callers build a client with [`acm_client`] from whatever [`SdkConfig`] they
//! hold: the shared config of an `SdkRuntime` in binaries, or a mock harness
//! config in tests.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod certificate;
pub mod material;

// ============================================================================
// SECTION: Imports
// ============================================================================

use aws_config::SdkConfig;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use certificate::CertificateDescription;
pub use certificate::CertificateListing;
pub use certificate::IssuedCertificate;
pub use certificate::delete_certificate;
pub use certificate::describe_certificate;
pub use certificate::get_certificate;
pub use certificate::import_certificate;
pub use certificate::import_certificate_from_files;
pub use certificate::list_certificates;
pub use certificate::validate_certificate_arn;
pub use material::CertificateFiles;
pub use material::CertificateMaterial;

// ============================================================================
// SECTION: Client
// ============================================================================

/// Builds a certificate manager client from `sdk_config`.
#[must_use]
pub fn acm_client(sdk_config: &SdkConfig) -> aws_sdk_acm::Client {
    aws_sdk_acm::Client::new(sdk_config)
}
