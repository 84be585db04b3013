//! # Content Fingerprinting
//!
//! The message the secure element signs is not the raw content but a
//! fingerprint of it: the content bytes are hex-encoded (uppercase), that
//! string is SHA-256 hashed, and the digest is rendered as lowercase hex.
//! The verifier must fingerprint identically or recovery lands on a wrong
//! key.

use sha2::{Digest, Sha256};

/// Fingerprint content for signing: uppercase hex → SHA-256 → lowercase hex.
pub fn fingerprint(content: &[u8]) -> String {
    let hex_form = hex::encode_upper(content);
    hex::encode(Sha256::digest(hex_form.as_bytes()))
}

/// Colon-separated uppercase SHA-256 fingerprint, X.509 style. Used as the
/// certificate-fingerprint half of the registration identity.
pub fn certificate_fingerprint(material: &[u8]) -> String {
    let digest = Sha256::digest(material);
    digest
        .iter()
        .map(|byte| format!("{byte:02X}"))
        .collect::<Vec<_>>()
        .join(":")
}
