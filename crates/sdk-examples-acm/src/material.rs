// crates/sdk-examples-acm/src/material.rs
// ============================================================================
// Module: Certificate Material
// Description: Local PEM loading for certificate import.
// Purpose: Read certificate, chain, and key files with strict limits.
// Dependencies: sdk-examples-core
// ============================================================================

//! ## Overview
//! Certificate import takes three local PEM files. Each file is read with a
//! size cap, must be UTF-8, and must carry the PEM armor expected for its
//! role. Content beyond the armor is left for the service to judge.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::ErrorKind;
use std::io::Read;
use std::path::Path;
use std::path::PathBuf;

use sdk_examples_core::ExampleError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Maximum size of a single PEM file in bytes.
pub const MAX_PEM_BYTES: usize = 64 * 1024;
/// Armor line opening a certificate block.
const CERTIFICATE_BEGIN: &str = "-----BEGIN CERTIFICATE-----";
/// Armor line closing a certificate block.
const CERTIFICATE_END: &str = "-----END CERTIFICATE-----";

// ============================================================================
// SECTION: Types
// ============================================================================

/// Paths of the PEM files used for an import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateFiles {
    /// Leaf certificate PEM.
    pub certificate: PathBuf,
    /// Intermediate chain PEM.
    pub chain: PathBuf,
    /// Private key PEM.
    pub private_key: PathBuf,
}

/// Loaded PEM contents ready for import.
///
/// # Invariants
/// - Every field holds PEM-armored UTF-8 text of at most [`MAX_PEM_BYTES`].
#[derive(Clone, PartialEq, Eq)]
pub struct CertificateMaterial {
    /// Leaf certificate PEM bytes.
    pub certificate: Vec<u8>,
    /// Chain PEM bytes.
    pub chain: Vec<u8>,
    /// Private key PEM bytes.
    pub private_key: Vec<u8>,
}

impl std::fmt::Debug for CertificateMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CertificateMaterial")
            .field("certificate_bytes", &self.certificate.len())
            .field("chain_bytes", &self.chain.len())
            .field("private_key", &"<redacted>")
            .finish()
    }
}

impl CertificateMaterial {
    /// Loads and checks the three PEM files.
    ///
    /// # Errors
    ///
    /// Returns [`ExampleError`] when a file is missing, oversized, not UTF-8,
    /// or lacks the expected PEM armor.
    pub fn load(files: &CertificateFiles) -> Result<Self, ExampleError> {
        let certificate = read_pem(&files.certificate)?;
        check_certificate_armor(&files.certificate, &certificate)?;
        let chain = read_pem(&files.chain)?;
        check_certificate_armor(&files.chain, &chain)?;
        let private_key = read_pem(&files.private_key)?;
        check_private_key_armor(&files.private_key, &private_key)?;
        Ok(Self {
            certificate: certificate.into_bytes(),
            chain: chain.into_bytes(),
            private_key: private_key.into_bytes(),
        })
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads a PEM file as UTF-8 text under the size cap.
fn read_pem(path: &Path) -> Result<String, ExampleError> {
    let file = std::fs::File::open(path).map_err(|err| {
        if err.kind() == ErrorKind::NotFound {
            ExampleError::InvalidInput(format!("pem file not found: {}", path.display()))
        } else {
            ExampleError::Io(format!("{}: {err}", path.display()))
        }
    })?;
    let mut limited = file.take((MAX_PEM_BYTES + 1) as u64);
    let mut bytes = Vec::new();
    limited
        .read_to_end(&mut bytes)
        .map_err(|err| ExampleError::Io(format!("{}: {err}", path.display())))?;
    if bytes.len() > MAX_PEM_BYTES {
        return Err(ExampleError::InvalidInput(format!(
            "pem file exceeds {MAX_PEM_BYTES} bytes: {}",
            path.display()
        )));
    }
    String::from_utf8(bytes).map_err(|_| {
        ExampleError::InvalidInput(format!("pem file must be utf-8: {}", path.display()))
    })
}

/// Requires at least one complete certificate block.
fn check_certificate_armor(path: &Path, text: &str) -> Result<(), ExampleError> {
    let begin = text.find(CERTIFICATE_BEGIN);
    let end = text.rfind(CERTIFICATE_END);
    match (begin, end) {
        (Some(begin), Some(end)) if begin < end => Ok(()),
        _ => Err(ExampleError::InvalidInput(format!(
            "not a PEM certificate: {}",
            path.display()
        ))),
    }
}

/// Requires a private key block (PKCS#8, RSA, or EC armor).
fn check_private_key_armor(path: &Path, text: &str) -> Result<(), ExampleError> {
    let Some(begin) = text.find("-----BEGIN ") else {
        return Err(not_a_key(path));
    };
    let header_end = text[begin ..].find('\n').map_or(text.len(), |offset| begin + offset);
    let label = text[begin .. header_end].trim_end();
    if !label.ends_with("PRIVATE KEY-----") {
        return Err(not_a_key(path));
    }
    let end_label = label.replacen("BEGIN", "END", 1);
    if !text[header_end ..].contains(&end_label) {
        return Err(not_a_key(path));
    }
    Ok(())
}

/// Error for files without private key armor.
fn not_a_key(path: &Path) -> ExampleError {
    ExampleError::InvalidInput(format!("not a PEM private key: {}", path.display()))
}
