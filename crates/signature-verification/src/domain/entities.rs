//! # Domain Entities
//!
//! Core data structures for message signature verification.

use serde::{Deserialize, Serialize};

use super::errors::VerifyError;
use super::keys::CompressedPublicKey;

/// Length of a serialized signature: `r (32) || s (32) || v (1)`.
pub const SIGNATURE_LEN: usize = 65;

/// ECDSA signature on the secp256k1 curve, parsed from a 65-byte buffer.
///
/// Invariant: after parsing, `v` is always the normalized recovery id
/// (`0` or `1`); the legacy `27`/`28` encoding is accepted on input only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EcdsaSignature {
    /// R component (32 bytes, big-endian)
    pub r: [u8; 32],
    /// S component (32 bytes, big-endian)
    pub s: [u8; 32],
    /// Normalized recovery id (0 or 1)
    pub v: u8,
}

/// Outcome of comparing the recovered signer key against the claimed key.
///
/// Cryptographic mismatches and malformed inputs are both reported here as
/// `verified == false` with the cause attached; only caller bugs outside
/// the verification contract surface as hard errors elsewhere.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationOutcome {
    /// Whether the signature was produced by the holder of the claimed key.
    pub verified: bool,
    /// The signer key recovered from the signature, in canonical form.
    pub recovered_key: Option<CompressedPublicKey>,
    /// Cause of rejection, for diagnostics.
    pub error: Option<VerifyError>,
}

impl VerificationOutcome {
    /// A successful verification: recovered and claimed keys matched.
    pub fn verified(recovered_key: CompressedPublicKey) -> Self {
        Self {
            verified: true,
            recovered_key: Some(recovered_key),
            error: None,
        }
    }

    /// A key mismatch: both keys were valid but differ.
    pub fn mismatch(recovered_key: CompressedPublicKey) -> Self {
        Self {
            verified: false,
            recovered_key: Some(recovered_key),
            error: None,
        }
    }

    /// A rejection caused by a verification error.
    pub fn rejected(error: VerifyError) -> Self {
        Self {
            verified: false,
            recovered_key: None,
            error: Some(error),
        }
    }
}
