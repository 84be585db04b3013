//! # Verification Pipeline
//!
//! Top-level orchestration over the domain primitives: canonicalize the
//! message, hash it, parse the signature, recover the signer's key, compress
//! both keys, compare.
//!
//! Every failure along the pipeline is folded into a non-verified outcome
//! with the cause attached. A caller gating a trust decision must be able to
//! branch on the result synchronously; nothing here is allowed to escape as
//! a panic or an unhandled error.

use super::ecdsa::{parse_signature, recover_public_key};
use super::entities::VerificationOutcome;
use super::keys::CompressedPublicKey;
use super::message::personal_message_hash;

/// Verify that `signature_bytes` over `message` was produced by the holder
/// of the key reported in `claimed_key_hex`.
///
/// Returns `verified == true` only if every step succeeds and the two
/// compressed keys are byte-identical. Any cryptographic mismatch or
/// malformed input yields `verified == false` with a diagnostic cause —
/// never an error, never a panic.
pub fn verify_message(
    message: &[u8],
    signature_bytes: &[u8],
    claimed_key_hex: &str,
) -> VerificationOutcome {
    let hash = personal_message_hash(message);

    let signature = match parse_signature(signature_bytes) {
        Ok(sig) => sig,
        Err(err) => return VerificationOutcome::rejected(err),
    };

    let recovered = match recover_public_key(&hash, &signature) {
        Ok(key) => CompressedPublicKey::from_point(&key),
        Err(err) => return VerificationOutcome::rejected(err),
    };

    let claimed = match CompressedPublicKey::from_hex(claimed_key_hex) {
        Ok(key) => key,
        Err(err) => return VerificationOutcome::rejected(err),
    };

    if recovered == claimed {
        VerificationOutcome::verified(recovered)
    } else {
        VerificationOutcome::mismatch(recovered)
    }
}
