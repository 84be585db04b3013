//! # Signature Parsing and Public-Key Recovery (secp256k1)
//!
//! Parses the external signer's 65-byte `r || s || v` buffer and recovers
//! the signer's public key from it via standard ECDSA public-key recovery.
//!
//! Recovery is pure and deterministic: identical `(hash, signature)` inputs
//! always yield the identical point or the identical failure, in O(1) curve
//! operations regardless of input content.

use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use shared_types::Hash;
use zeroize::Zeroize;

use super::entities::{EcdsaSignature, SIGNATURE_LEN};
use super::errors::VerifyError;

/// Parse a 65-byte signature buffer into its components.
///
/// The recovery identifier is normalized on the way in: legacy `27`/`28`
/// become `0`/`1`, `0`/`1` pass through, anything else is rejected.
pub fn parse_signature(bytes: &[u8]) -> Result<EcdsaSignature, VerifyError> {
    if bytes.len() != SIGNATURE_LEN {
        return Err(VerifyError::MalformedSignature { len: bytes.len() });
    }

    let mut r = [0u8; 32];
    let mut s = [0u8; 32];
    r.copy_from_slice(&bytes[..32]);
    s.copy_from_slice(&bytes[32..64]);
    let v = normalize_recovery_id(bytes[64])?;

    Ok(EcdsaSignature { r, s, v })
}

/// Recover the signer's public key from a parsed signature.
///
/// `message_hash` is the Keccak-256 digest of the canonical personal-message
/// payload. Fails with `RecoveryFailure` when `r` or `s` is zero or out of
/// scalar range, when `r` is not a valid curve x-coordinate, or when the
/// recovered point is the identity.
pub fn recover_public_key(
    message_hash: &Hash,
    signature: &EcdsaSignature,
) -> Result<VerifyingKey, VerifyError> {
    let mut scratch = [0u8; 64];
    scratch[..32].copy_from_slice(&signature.r);
    scratch[32..].copy_from_slice(&signature.s);

    // Scalar range checks (r, s in [1, n-1]) happen inside the parse.
    let mut sig = match Signature::from_slice(&scratch) {
        Ok(sig) => {
            scratch.zeroize();
            sig
        }
        Err(_) => {
            scratch.zeroize();
            return Err(VerifyError::RecoveryFailure);
        }
    };

    // Normalize to low-S and flip the recovery id to match; the backend
    // only recovers from normalized signatures.
    let mut v = signature.v;
    if let Some(normalized) = sig.normalize_s() {
        sig = normalized;
        v ^= 1;
    }

    let recovery_id =
        RecoveryId::try_from(v).map_err(|_| VerifyError::InvalidRecoveryId(signature.v))?;

    VerifyingKey::recover_from_prehash(message_hash, &sig, recovery_id)
        .map_err(|_| VerifyError::RecoveryFailure)
}

/// Map `v` onto a recovery id.
///
/// Valid inputs: 0, 1, 27, 28.
fn normalize_recovery_id(v: u8) -> Result<u8, VerifyError> {
    match v {
        0 | 1 => Ok(v),
        27 | 28 => Ok(v - 27),
        other => Err(VerifyError::InvalidRecoveryId(other)),
    }
}
