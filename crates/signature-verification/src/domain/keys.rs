//! # Key Canonicalization (secp256k1 point compression)
//!
//! The two key provenances in play — recovery from a signature, and the hex
//! report of a secure element — arrive in different serializations. Both are
//! normalized here into the canonical 33-byte compressed SEC1 form before
//! any comparison, to avoid false negatives from padding or prefix
//! differences.
//!
//! The secure element's report is untrusted input: it may carry a `0x`
//! prefix, may lack the SEC1 `0x04` marker in front of the raw coordinates,
//! and may have lost leading zero bytes to an integer conversion upstream.

use k256::ecdsa::VerifyingKey;
use subtle::ConstantTimeEq;

use super::errors::VerifyError;

/// Length of a compressed SEC1 point: parity byte + x-coordinate.
pub const COMPRESSED_KEY_LEN: usize = 33;

const UNCOMPRESSED_KEY_LEN: usize = 65;
const COORDINATE_LEN: usize = 32;
const SEC1_UNCOMPRESSED_TAG: u8 = 0x04;

/// A secp256k1 public key in canonical compressed form.
///
/// Layout: `0x02` (even y) or `0x03` (odd y), followed by the 32-byte
/// x-coordinate. Construction always goes through curve validation, so a
/// value of this type is guaranteed to be a real, non-identity curve point.
#[derive(Clone, Copy, Debug)]
pub struct CompressedPublicKey([u8; COMPRESSED_KEY_LEN]);

impl CompressedPublicKey {
    /// Compress a recovered verifying key.
    pub fn from_point(key: &VerifyingKey) -> Self {
        let point = key.to_encoded_point(true);
        let mut bytes = [0u8; COMPRESSED_KEY_LEN];
        bytes.copy_from_slice(point.as_bytes());
        Self(bytes)
    }

    /// Decode a SEC1-encoded point (compressed or uncompressed) and
    /// re-encode it in compressed form.
    ///
    /// Rejects anything that is not a valid non-identity point on
    /// secp256k1.
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self, VerifyError> {
        let key =
            VerifyingKey::from_sec1_bytes(bytes).map_err(|_| VerifyError::InvalidCurvePoint)?;
        Ok(Self::from_point(&key))
    }

    /// Canonicalize an untrusted hex report of a public key.
    ///
    /// Accepted shapes, after stripping an optional `0x` prefix:
    /// - 65 bytes starting with `0x04` (standard uncompressed SEC1)
    /// - 33 bytes starting with `0x02`/`0x03` (already compressed)
    /// - 64 bytes of raw `x || y` coordinates (marker byte missing)
    /// - fewer than 64 bytes of raw coordinates (leading zeros dropped by
    ///   an upstream integer conversion) — left-padded back to 64
    ///
    /// Odd-length hex is left-padded with one zero digit before decoding.
    pub fn from_hex(report: &str) -> Result<Self, VerifyError> {
        let trimmed = report.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        let padded;
        let digits = if digits.len() % 2 == 1 {
            padded = format!("0{digits}");
            &padded
        } else {
            digits
        };

        let bytes = hex::decode(digits).map_err(|_| VerifyError::InvalidCurvePoint)?;
        let sec1 = normalize_sec1(bytes)?;
        Self::from_sec1_bytes(&sec1)
    }

    /// Raw compressed bytes.
    pub fn as_bytes(&self) -> &[u8; COMPRESSED_KEY_LEN] {
        &self.0
    }

    /// Lowercase hex of the compressed form, for diagnostics.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// The secp256k1 base point, compressed. Test fixture for the known
    /// private-key-1 scenario.
    #[cfg(test)]
    pub(crate) fn generator() -> Self {
        Self::from_hex("0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798")
            .expect("generator point is on the curve")
    }
}

impl PartialEq for CompressedPublicKey {
    fn eq(&self, other: &Self) -> bool {
        // Constant-structure comparison: no early exit on the first
        // differing byte.
        self.0.ct_eq(&other.0).into()
    }
}

impl Eq for CompressedPublicKey {}

/// Restore a standard SEC1 encoding from the shapes secure elements emit.
fn normalize_sec1(bytes: Vec<u8>) -> Result<Vec<u8>, VerifyError> {
    match bytes.len() {
        UNCOMPRESSED_KEY_LEN if bytes[0] == SEC1_UNCOMPRESSED_TAG => Ok(bytes),
        COMPRESSED_KEY_LEN if matches!(bytes[0], 0x02 | 0x03) => Ok(bytes),
        len if len == 2 * COORDINATE_LEN => {
            let mut sec1 = Vec::with_capacity(UNCOMPRESSED_KEY_LEN);
            sec1.push(SEC1_UNCOMPRESSED_TAG);
            sec1.extend_from_slice(&bytes);
            Ok(sec1)
        }
        len if len > 0 && len < 2 * COORDINATE_LEN => {
            let mut sec1 = vec![0u8; UNCOMPRESSED_KEY_LEN];
            sec1[0] = SEC1_UNCOMPRESSED_TAG;
            sec1[UNCOMPRESSED_KEY_LEN - len..].copy_from_slice(&bytes);
            Ok(sec1)
        }
        _ => Err(VerifyError::InvalidCurvePoint),
    }
}
