//! # Message Canonicalization (personal_sign)
//!
//! Reconstructs the exact byte sequence an Ethereum-compatible signer hashes
//! before signing an arbitrary message. Getting this byte-for-byte right is
//! load-bearing: a canonicalization mismatch does not error, it recovers a
//! wrong key and verification silently (correctly) rejects.

use sha3::{Digest, Keccak256};
use shared_types::Hash;

/// Fixed prefix Ethereum-compatible signers prepend before hashing.
pub const PERSONAL_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n";

/// Canonical signed payload: `prefix || decimal_len(message) || message`.
pub fn personal_message(message: &[u8]) -> Vec<u8> {
    let len = message.len().to_string();
    let mut payload =
        Vec::with_capacity(PERSONAL_MESSAGE_PREFIX.len() + len.len() + message.len());
    payload.extend_from_slice(PERSONAL_MESSAGE_PREFIX);
    payload.extend_from_slice(len.as_bytes());
    payload.extend_from_slice(message);
    payload
}

/// Keccak-256 hash of the canonical personal-message payload.
pub fn personal_message_hash(message: &[u8]) -> Hash {
    keccak256(&personal_message(message))
}

/// Keccak-256 hash function.
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}
