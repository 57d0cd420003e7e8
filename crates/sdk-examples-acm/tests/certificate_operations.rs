// crates/sdk-examples-acm/tests/certificate_operations.rs
// ============================================================================
// Module: Certificate Operation Tests
// Description: Describe, list, export, and delete against fixture responses.
// ============================================================================

//! ## Overview
//! Covers the read and delete operations, including pagination and service
//! error mapping.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::use_debug,
    reason = "Test-only assertions favor direct unwrap/expect for clarity."
)]

use sdk_examples_acm::acm_client;
use sdk_examples_acm::delete_certificate;
use sdk_examples_acm::describe_certificate;
use sdk_examples_acm::get_certificate;
use sdk_examples_acm::list_certificates;
use sdk_examples_acm::validate_certificate_arn;
use sdk_examples_core::ExampleError;
use sdk_examples_mock::MockHarness;

const ARN: &str =
    "arn:aws:acm:us-east-1:123456789012:certificate/12345678-1234-1234-1234-123456789012";

/// Builds a harness resolving fixtures under this crate.
fn harness() -> MockHarness {
    MockHarness::new(env!("CARGO_MANIFEST_DIR"))
}

/// Returns the `X-Amz-Target` of each intercepted request.
fn targets(harness: &MockHarness) -> Vec<String> {
    harness
        .mock()
        .requests()
        .iter()
        .map(|request| request.target().unwrap_or_default().to_string())
        .collect()
}

#[tokio::test]
async fn describe_reduces_certificate_detail() {
    let harness = harness();
    harness.expect_fixture("mock_input/DescribeCertificate.json");
    let client = acm_client(harness.sdk_config());

    let description = describe_certificate(&client, ARN).await.unwrap();

    assert_eq!(description.arn, ARN);
    assert_eq!(description.domain_name.as_deref(), Some("www.example.com"));
    assert_eq!(description.status.as_deref(), Some("ISSUED"));
    assert_eq!(description.certificate_type.as_deref(), Some("IMPORTED"));
    assert_eq!(description.subject_alternative_names, vec!["www.example.com", "example.com"]);
    assert_eq!(targets(&harness), vec!["CertificateManager.DescribeCertificate"]);
    let body = harness.mock().requests()[0].body_json().unwrap();
    assert_eq!(body["CertificateArn"], ARN);
    harness.finish();
}

#[tokio::test]
async fn list_follows_next_token_pages() {
    let harness = harness();
    harness.expect_fixture("mock_input/ListCertificatesPage1.json");
    harness.expect_fixture("mock_input/ListCertificatesPage2.json");
    let client = acm_client(harness.sdk_config());

    let listings = list_certificates(&client).await.unwrap();

    assert_eq!(listings.len(), 2);
    assert_eq!(listings[0].arn, ARN);
    assert_eq!(listings[1].domain_name.as_deref(), Some("api.example.com"));
    assert_eq!(listings[1].status.as_deref(), Some("PENDING_VALIDATION"));

    let requests = harness.mock().requests();
    assert_eq!(requests.len(), 2);
    assert!(requests[0].body_json().unwrap().get("NextToken").is_none());
    assert_eq!(requests[1].body_json().unwrap()["NextToken"], "page-2");
    harness.finish();
}

#[tokio::test]
async fn get_returns_certificate_and_chain() {
    let harness = harness();
    harness.expect_fixture("mock_input/GetCertificate.json");
    let client = acm_client(harness.sdk_config());

    let issued = get_certificate(&client, ARN).await.unwrap();

    assert!(issued.certificate.contains("MIIBmockleaf"));
    assert!(issued.chain.unwrap().contains("MIIBmockchain"));
    assert_eq!(targets(&harness), vec!["CertificateManager.GetCertificate"]);
    harness.finish();
}

#[tokio::test]
async fn delete_succeeds_on_empty_response() {
    let harness = harness();
    harness.expect_fixture("mock_input/DeleteCertificate.json");
    let client = acm_client(harness.sdk_config());

    delete_certificate(&client, ARN).await.unwrap();

    assert_eq!(targets(&harness), vec!["CertificateManager.DeleteCertificate"]);
    harness.finish();
}

#[tokio::test]
async fn service_error_names_the_error_code() {
    let harness = harness();
    harness.mock().add_response_with_status("mock_input/ResourceNotFoundException.json", 400).unwrap();
    let client = acm_client(harness.sdk_config());

    let err = describe_certificate(&client, ARN).await.unwrap_err();

    assert!(matches!(err, ExampleError::Sdk { operation: "describe_certificate", .. }), "{err:?}");
    assert!(err.to_string().contains("ResourceNotFoundException"), "unexpected error: {err}");
    harness.finish();
}

#[tokio::test]
async fn malformed_arn_is_rejected_without_a_request() {
    let harness = harness();
    let client = acm_client(harness.sdk_config());

    let err = delete_certificate(&client, "certificate/1234").await.unwrap_err();

    assert!(matches!(err, ExampleError::InvalidInput(_)), "unexpected error: {err:?}");
    assert!(harness.mock().requests().is_empty());
}

#[test]
fn arn_validation_cases() {
    assert!(validate_certificate_arn(ARN).is_ok());
    assert!(validate_certificate_arn("arn:aws-cn:acm:cn-north-1:123456789012:certificate/abc").is_ok());
    for arn in [
        "",
        "arn:aws:s3:::bucket",
        "arn:aws:acm:us-east-1:123456789012:certificate/",
        "arn:aws:acm:us-east-1:123456789012",
    ] {
        assert!(validate_certificate_arn(arn).is_err(), "accepted {arn:?}");
    }
}
