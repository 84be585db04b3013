//! # Port Adapters
//!
//! Implementations connecting the crates: the verification core's
//! claimed-key port is served by the secure-element manager.

use std::sync::Arc;

use secure_element::SecureElementManager;
use shared_types::{CoinType, UniqueId};
use signature_verification::{KeySourceError, SignerKeySource};

/// Serves the verification core's `SignerKeySource` port from the
/// secure-element manager.
pub struct SecureElementKeySource {
    manager: Arc<SecureElementManager>,
}

impl SecureElementKeySource {
    /// Wrap a manager handle.
    pub fn new(manager: Arc<SecureElementManager>) -> Self {
        Self { manager }
    }
}

#[async_trait::async_trait]
impl SignerKeySource for SecureElementKeySource {
    async fn send_public_key(
        &self,
        unique_id: UniqueId,
        coin_type: CoinType,
    ) -> Result<String, KeySourceError> {
        let registered = self
            .manager
            .unique_id()
            .await
            .map_err(|err| KeySourceError::Unavailable(err.to_string()))?;

        if registered != unique_id {
            return Err(KeySourceError::UnknownIdentity {
                unique_id,
                coin_type,
            });
        }

        self.manager
            .send_public_key(coin_type)
            .await
            .map_err(|err| KeySourceError::Unavailable(err.to_string()))
    }
}
