//! # Verification Errors
//!
//! Error taxonomy for the verification core. All of these are caught at the
//! service boundary and folded into a non-verified outcome; none may surface
//! as a panic, because verification gates a trust decision the caller must
//! be able to branch on synchronously.

use thiserror::Error;

/// Errors that can occur while verifying a message signature.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VerifyError {
    /// The signature buffer is not the expected 65-byte `r || s || v` layout.
    #[error("Malformed signature: expected 65 bytes, got {len}")]
    MalformedSignature { len: usize },

    /// The recovery identifier is outside `{0, 1, 27, 28}`.
    #[error("Invalid recovery id: {0}")]
    InvalidRecoveryId(u8),

    /// Public key recovery failed (degenerate `r`/`s`, `r` not a curve
    /// x-coordinate, or identity result).
    #[error("Failed to recover public key from signature")]
    RecoveryFailure,

    /// The claimed public key does not decode to a valid secp256k1 point.
    #[error("Claimed key is not a valid secp256k1 point")]
    InvalidCurvePoint,

    /// The claimed key could not be fetched from the key source.
    #[error("Key source unavailable: {0}")]
    KeySource(String),
}
