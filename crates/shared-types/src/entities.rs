//! # Core Domain Entities
//!
//! Defines the entities shared across the attestation crates.
//!
//! ## Clusters
//!
//! - **Digests**: `Hash`
//! - **Secure element identity**: `UniqueId`, `CoinType`
//! - **Signing payload**: `SignRequest`, `SignMessage`

use serde::{Deserialize, Serialize};

/// A 32-byte hash (Keccak-256 or SHA-256 depending on context).
pub type Hash = [u8; 32];

/// Opaque registration identifier handed out by the secure element.
///
/// `0` means "not registered"; the secure element never issues it.
pub type UniqueId = i64;

/// SLIP-44 coin type selecting the key family inside the secure element.
pub type CoinType = u32;

/// Coin type for Ethereum keys (SLIP-44).
pub const COIN_TYPE_ETHEREUM: CoinType = 60;

/// The message body of a signing request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignMessage {
    /// The content digest to be signed, as a lowercase hex string.
    pub msg: String,
}

/// The JSON template handed to the secure element's signing call.
///
/// The element signs the Ethereum personal-message form of `message.msg`;
/// everything else in the envelope is opaque to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignRequest {
    /// The message to sign.
    pub message: SignMessage,
}

impl SignRequest {
    /// Build a signing request for a content digest.
    pub fn for_digest(digest: impl Into<String>) -> Self {
        Self {
            message: SignMessage {
                msg: digest.into(),
            },
        }
    }

    /// The digest carried by this request.
    pub fn digest(&self) -> &str {
        &self.message.msg
    }
}
