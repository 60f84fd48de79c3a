//! Content fingerprints for policy documents
//!
//! A fingerprint is the SHA256 of a policy's canonical JSON bytes. Taken
//! over the normalized form, it is the same for every document in an
//! equivalence class, so callers can cache comparison results or suppress
//! diffs by hash instead of re-running the full comparison.

use crate::canonical::canonical_policy;
use crate::error::CanonicalError;
use crate::normalize::{normalize_policy, NormalizeError};
use rampeq_core::{parse_policy, ParseError, Policy};
use sha2::{Digest, Sha256};
use std::fmt::Write;
use thiserror::Error;

/// Errors from the single-document fingerprint pipeline
#[derive(Debug, Error)]
pub enum FingerprintError {
    #[error("parsing policy failed: {0}")]
    Parse(#[from] ParseError),

    #[error("normalizing policy failed: {0}")]
    Normalize(#[from] NormalizeError),

    #[error("canonicalizing policy failed: {0}")]
    Canonical(#[from] CanonicalError),
}

/// SHA256 of raw bytes as a 64-character lowercase hex string.
pub fn hash_bytes(data: &[u8]) -> String {
    let digest = Sha256::digest(data);

    let mut hex = String::with_capacity(digest.len() * 2);
    for byte in digest {
        write!(hex, "{byte:02x}").expect("writing to a String cannot fail");
    }
    hex
}

/// Fingerprint a parsed policy: SHA256 of its canonical JSON.
///
/// The policy should already be normalized if the fingerprint is meant to
/// coincide across equivalent documents; [`fingerprint_document`] does the
/// whole pipeline in one call.
///
/// # Errors
///
/// Returns [`CanonicalError`] if canonical rendering fails.
pub fn fingerprint(policy: &Policy) -> Result<String, CanonicalError> {
    let canonical = canonical_policy(policy)?;
    Ok(hash_bytes(canonical.as_bytes()))
}

/// Parse, normalize, and fingerprint a policy document string.
///
/// Semantically equivalent documents produce the same fingerprint.
///
/// # Example
///
/// ```rust
/// use rampeq_canonical::fingerprint_document;
///
/// let authored = r#"{"Version":"1","Statement":[{"Effect":"Allow","Principal":{"ram":"acs:ram::123:root"}}]}"#;
/// let echoed = r#"{"Version":"1","Statement":[{"Effect":"Allow","Principal":{"RAM":["acs:ram::123:root"]}}]}"#;
///
/// let a = fingerprint_document(authored).unwrap();
/// let b = fingerprint_document(echoed).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 64);
/// ```
pub fn fingerprint_document(text: &str) -> Result<String, FingerprintError> {
    let policy = parse_policy(text)?;
    let normalized = normalize_policy(policy)?;
    Ok(fingerprint(&normalized)?)
}
