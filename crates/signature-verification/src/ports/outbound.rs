//! # Outbound Ports (Driven Ports / SPI)
//!
//! Traits that define dependencies the verification core needs.

use shared_types::{CoinType, UniqueId};
use thiserror::Error;

/// Error from the claimed-key source.
#[derive(Debug, Error)]
pub enum KeySourceError {
    /// The source could not be reached or failed internally.
    #[error("Key source unavailable: {0}")]
    Unavailable(String),

    /// No key exists for this identity and coin type.
    #[error("No key for identity {unique_id} and coin type {coin_type}")]
    UnknownIdentity {
        unique_id: UniqueId,
        coin_type: CoinType,
    },
}

/// Source of the claimed public key — the trust anchor whose report is
/// verified, not believed.
///
/// The returned string is an untrusted hex report; the core canonicalizes
/// it before any comparison.
#[async_trait::async_trait]
pub trait SignerKeySource: Send + Sync {
    /// Fetch the public key the source claims for `(unique_id, coin_type)`.
    async fn send_public_key(
        &self,
        unique_id: UniqueId,
        coin_type: CoinType,
    ) -> Result<String, KeySourceError>;
}
