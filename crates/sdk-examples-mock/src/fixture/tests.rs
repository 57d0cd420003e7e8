// crates/sdk-examples-mock/src/fixture/tests.rs
// ============================================================================
// Module: Fixture Tests
// Description: Unit tests for fixture format detection and XML checks.
// ============================================================================

//! ## Overview
//! Exercises the structural XML check and format detection directly.

#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::panic,
    reason = "Test-only assertions favor direct unwrap/expect for clarity."
)]

use super::*;

#[test]
fn format_from_extension() {
    assert_eq!(
        FixtureFormat::from_path(Path::new("mock_input/ImportCertificate.json")).unwrap(),
        FixtureFormat::Json
    );
    assert_eq!(
        FixtureFormat::from_path(Path::new("mock_input/ListObjects.XML")).unwrap(),
        FixtureFormat::Xml
    );
    assert!(matches!(
        FixtureFormat::from_path(Path::new("mock_input/MockCertificate.pem")),
        Err(FixtureError::UnsupportedFormat(_))
    ));
    assert!(matches!(
        FixtureFormat::from_path(Path::new("mock_input/NoExtension")),
        Err(FixtureError::UnsupportedFormat(_))
    ));
}

#[test]
fn xml_accepts_prolog_comments_and_self_closing() {
    let doc = r#"<?xml version="1.0" encoding="UTF-8"?>
<!-- recorded -->
<ListBucketResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Name>bucket</Name>
  <Prefix/>
  <Contents><Key>a.txt</Key></Contents>
</ListBucketResult>
"#;
    check_xml_structure(doc).unwrap();
    check_xml_structure("<Empty/>").unwrap();
}

#[test]
fn xml_accepts_byte_order_mark() {
    check_xml_structure("\u{feff}<ListBucketResult></ListBucketResult>").unwrap();
    check_xml_structure("\u{feff}<?xml version=\"1.0\"?>\n<Empty/>").unwrap();
    assert!(check_xml_structure("\u{feff}").is_err());
}

#[test]
fn xml_rejects_broken_documents() {
    assert!(check_xml_structure("").is_err());
    assert!(check_xml_structure("   ").is_err());
    assert!(check_xml_structure("not xml").is_err());
    assert!(check_xml_structure("<a><b></a></b>").is_err());
    assert!(check_xml_structure("<a>").is_err());
    assert!(check_xml_structure("</a>").is_err());
    assert!(check_xml_structure("<a></a><b></b>").is_err());
    assert!(check_xml_structure("<a></a> trailing").is_err());
    assert!(check_xml_structure("<?xml version=\"1.0\"?>").is_err());
    assert!(check_xml_structure("<a><!-- open </a>").is_err());
}

#[test]
fn invalid_status_is_rejected_before_reading() {
    let err = FixtureResponse::load_with_status("does/not/matter.json", 42).unwrap_err();
    assert!(matches!(err, FixtureError::InvalidStatus(42)));
}

#[test]
fn content_type_follows_format() {
    assert_eq!(FixtureFormat::Json.content_type(), JSON_CONTENT_TYPE);
    assert_eq!(FixtureFormat::Xml.content_type(), XML_CONTENT_TYPE);
}
