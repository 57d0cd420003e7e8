// crates/sdk-examples-acm/src/certificate.rs
// ============================================================================
// Module: Certificate Operations
// Description: Single-call certificate manager examples.
// Purpose: Import, inspect, list, export, and delete certificates.
// Dependencies: aws-sdk-acm, sdk-examples-core
// ============================================================================

//! ## Overview
//! Each function performs one certificate manager operation (listing follows
//! pagination) against a caller-supplied client. Inputs are checked before the
//! SDK is called, and responses are reduced to plain owned structs so callers
//! never touch SDK output types.

// ============================================================================
// SECTION: Imports
// ============================================================================

use aws_sdk_acm::Client;
use aws_sdk_acm::primitives::Blob;
use sdk_examples_core::ExampleError;

use crate::material::CertificateFiles;
use crate::material::CertificateMaterial;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Maximum accepted certificate ARN length.
const MAX_ARN_LENGTH: usize = 2048;
/// Upper bound on listing pages followed before giving up.
pub const MAX_LIST_PAGES: usize = 100;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Certificate details returned by describe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateDescription {
    /// Certificate ARN.
    pub arn: String,
    /// Primary domain name, if present.
    pub domain_name: Option<String>,
    /// Status label such as `ISSUED`.
    pub status: Option<String>,
    /// Certificate type label such as `IMPORTED`.
    pub certificate_type: Option<String>,
    /// Subject alternative names.
    pub subject_alternative_names: Vec<String>,
}

/// One entry of a certificate listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateListing {
    /// Certificate ARN.
    pub arn: String,
    /// Primary domain name, if present.
    pub domain_name: Option<String>,
    /// Status label, if present.
    pub status: Option<String>,
}

/// Exported certificate bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedCertificate {
    /// Leaf certificate PEM.
    pub certificate: String,
    /// Chain PEM, when the certificate has one.
    pub chain: Option<String>,
}

// ============================================================================
// SECTION: Operations
// ============================================================================

/// Imports certificate material and returns the new certificate ARN.
///
/// # Errors
///
/// Returns [`ExampleError`] when the SDK call fails or the response has no
/// ARN.
pub async fn import_certificate(
    client: &Client,
    material: &CertificateMaterial,
) -> Result<String, ExampleError> {
    const OPERATION: &str = "import_certificate";
    let output = client
        .import_certificate()
        .certificate(Blob::new(material.certificate.clone()))
        .certificate_chain(Blob::new(material.chain.clone()))
        .private_key(Blob::new(material.private_key.clone()))
        .send()
        .await
        .map_err(|err| ExampleError::sdk(OPERATION, err))?;
    output.certificate_arn().map(ToString::to_string).ok_or(ExampleError::MissingField {
        operation: OPERATION,
        field: "CertificateArn",
    })
}

/// Loads the PEM files and imports them.
///
/// # Errors
///
/// Returns [`ExampleError`] when loading fails or the import fails.
pub async fn import_certificate_from_files(
    client: &Client,
    files: &CertificateFiles,
) -> Result<String, ExampleError> {
    let material = CertificateMaterial::load(files)?;
    import_certificate(client, &material).await
}

/// Describes the certificate identified by `arn`.
///
/// # Errors
///
/// Returns [`ExampleError`] when the ARN is malformed or the SDK call fails.
pub async fn describe_certificate(
    client: &Client,
    arn: &str,
) -> Result<CertificateDescription, ExampleError> {
    const OPERATION: &str = "describe_certificate";
    validate_certificate_arn(arn)?;
    let output = client
        .describe_certificate()
        .certificate_arn(arn)
        .send()
        .await
        .map_err(|err| ExampleError::sdk(OPERATION, err))?;
    let detail = output.certificate().ok_or(ExampleError::MissingField {
        operation: OPERATION,
        field: "Certificate",
    })?;
    Ok(CertificateDescription {
        arn: detail.certificate_arn().unwrap_or(arn).to_string(),
        domain_name: detail.domain_name().map(ToString::to_string),
        status: detail.status().map(|status| status.as_str().to_string()),
        certificate_type: detail.r#type().map(|kind| kind.as_str().to_string()),
        subject_alternative_names: detail.subject_alternative_names().to_vec(),
    })
}

/// Lists every certificate, following `NextToken` pages.
///
/// # Errors
///
/// Returns [`ExampleError`] when a page request fails or more than
/// [`MAX_LIST_PAGES`] pages are returned.
pub async fn list_certificates(client: &Client) -> Result<Vec<CertificateListing>, ExampleError> {
    const OPERATION: &str = "list_certificates";
    let mut listings = Vec::new();
    let mut next_token: Option<String> = None;
    for _ in 0 .. MAX_LIST_PAGES {
        let output = client
            .list_certificates()
            .set_next_token(next_token.take())
            .send()
            .await
            .map_err(|err| ExampleError::sdk(OPERATION, err))?;
        for summary in output.certificate_summary_list() {
            let Some(arn) = summary.certificate_arn() else {
                continue;
            };
            listings.push(CertificateListing {
                arn: arn.to_string(),
                domain_name: summary.domain_name().map(ToString::to_string),
                status: summary.status().map(|status| status.as_str().to_string()),
            });
        }
        match output.next_token() {
            Some(token) if !token.is_empty() => next_token = Some(token.to_string()),
            _ => return Ok(listings),
        }
    }
    Err(ExampleError::Sdk {
        operation: OPERATION,
        message: format!("more than {MAX_LIST_PAGES} pages returned"),
    })
}

/// Exports the certificate and chain identified by `arn`.
///
/// # Errors
///
/// Returns [`ExampleError`] when the ARN is malformed, the SDK call fails, or
/// the response has no certificate body.
pub async fn get_certificate(client: &Client, arn: &str) -> Result<IssuedCertificate, ExampleError> {
    const OPERATION: &str = "get_certificate";
    validate_certificate_arn(arn)?;
    let output = client
        .get_certificate()
        .certificate_arn(arn)
        .send()
        .await
        .map_err(|err| ExampleError::sdk(OPERATION, err))?;
    let certificate = output.certificate().ok_or(ExampleError::MissingField {
        operation: OPERATION,
        field: "Certificate",
    })?;
    Ok(IssuedCertificate {
        certificate: certificate.to_string(),
        chain: output.certificate_chain().map(ToString::to_string),
    })
}

/// Deletes the certificate identified by `arn`.
///
/// # Errors
///
/// Returns [`ExampleError`] when the ARN is malformed or the SDK call fails.
pub async fn delete_certificate(client: &Client, arn: &str) -> Result<(), ExampleError> {
    const OPERATION: &str = "delete_certificate";
    validate_certificate_arn(arn)?;
    client
        .delete_certificate()
        .certificate_arn(arn)
        .send()
        .await
        .map_err(|err| ExampleError::sdk(OPERATION, err))?;
    Ok(())
}

// ============================================================================
// SECTION: Validation
// ============================================================================

/// Checks that `arn` looks like a certificate manager certificate ARN.
///
/// # Errors
///
/// Returns [`ExampleError::InvalidInput`] when the ARN is empty, too long, or
/// not an `acm` certificate ARN.
pub fn validate_certificate_arn(arn: &str) -> Result<(), ExampleError> {
    if arn.is_empty() || arn.len() > MAX_ARN_LENGTH {
        return Err(ExampleError::InvalidInput(format!(
            "certificate arn must be 1-{MAX_ARN_LENGTH} characters"
        )));
    }
    let mut parts = arn.splitn(6, ':');
    let prefix = parts.next();
    let _partition = parts.next();
    let service = parts.next();
    let _region = parts.next();
    let _account = parts.next();
    let resource = parts.next();
    match (prefix, service, resource) {
        (Some("arn"), Some("acm"), Some(resource))
            if resource.strip_prefix("certificate/").is_some_and(|id| !id.is_empty()) =>
        {
            Ok(())
        }
        _ => Err(ExampleError::InvalidInput(format!("not a certificate arn: {arn}"))),
    }
}
