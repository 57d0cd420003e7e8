// crates/sdk-examples-s3/tests/list_objects.rs
// ============================================================================
// Module: Object Storage Mock Tests
// Description: Object and bucket listing against fixture responses.
// ============================================================================

//! ## Overview
//! Runs the listing examples against a [`MockHarness`] rooted at this crate.
//! Responses use the REST-XML fixtures under `mock_input/`.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::use_debug,
    reason = "Test-only assertions favor direct unwrap/expect for clarity."
)]

use sdk_examples_core::ExampleError;
use sdk_examples_mock::MockHarness;
use sdk_examples_s3::list_buckets;
use sdk_examples_s3::list_objects;
use sdk_examples_s3::s3_client;

/// Builds a harness resolving fixtures under this crate.
fn harness() -> MockHarness {
    MockHarness::new(env!("CARGO_MANIFEST_DIR"))
}

#[tokio::test]
async fn list_objects_returns_fixture_keys() {
    let harness = harness();
    harness.expect_fixture("mock_input/ListObjects.xml");
    let client = s3_client(harness.sdk_config(), false);

    let objects = list_objects(&client, "example-bucket").await.unwrap();

    let keys: Vec<&str> = objects.iter().map(|object| object.key.as_str()).collect();
    assert_eq!(keys, vec!["reports/2026-01.csv", "reports/2026-02.csv"]);
    assert_eq!(objects[1].size, Some(4096));

    let requests = harness.mock().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert!(requests[0].uri.contains("example-bucket"), "uri: {}", requests[0].uri);
    harness.finish();
}

#[tokio::test]
async fn path_style_puts_bucket_in_the_path() {
    let harness = harness();
    harness.expect_fixture("mock_input/ListObjects.xml");
    let client = s3_client(harness.sdk_config(), true);

    list_objects(&client, "example-bucket").await.unwrap();

    let uri = harness.mock().requests()[0].uri.clone();
    assert!(uri.contains("/example-bucket"), "uri: {uri}");
    assert!(!uri.contains("example-bucket.s3"), "uri: {uri}");
    harness.finish();
}

#[tokio::test]
async fn missing_bucket_surfaces_service_error_code() {
    let harness = harness();
    harness.mock().add_response_with_status("mock_input/NoSuchBucket.xml", 404).unwrap();
    let client = s3_client(harness.sdk_config(), false);

    let err = list_objects(&client, "missing-bucket").await.unwrap_err();

    assert!(matches!(err, ExampleError::Sdk { operation: "list_objects", .. }), "{err:?}");
    assert!(err.to_string().contains("NoSuchBucket"), "unexpected error: {err}");
    harness.finish();
}

#[tokio::test]
async fn empty_bucket_name_fails_without_a_request() {
    let harness = harness();
    let client = s3_client(harness.sdk_config(), false);

    let err = list_objects(&client, "").await.unwrap_err();

    assert!(matches!(err, ExampleError::InvalidInput(_)), "unexpected error: {err:?}");
    assert!(harness.mock().requests().is_empty());
}

#[tokio::test]
async fn exhausted_session_fails_the_listing() {
    let harness = harness();
    let client = s3_client(harness.sdk_config(), false);

    let err = list_objects(&client, "example-bucket").await.unwrap_err();

    assert!(matches!(err, ExampleError::Sdk { .. }), "unexpected error: {err:?}");
    assert!(harness.mock().requests()[0].was_exhausted());
}

#[tokio::test]
async fn list_buckets_returns_names_and_dates() {
    let harness = harness();
    harness.expect_fixture("mock_input/ListBuckets.xml");
    let client = s3_client(harness.sdk_config(), false);

    let buckets = list_buckets(&client).await.unwrap();

    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[0].name, "example-bucket");
    assert_eq!(buckets[1].name, "example-logs");
    assert!(buckets[1].creation_date.as_deref().is_some_and(|date| date.starts_with("2026-03-15")));
    harness.finish();
}
