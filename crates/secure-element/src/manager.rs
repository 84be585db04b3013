//! # Secure Element Manager
//!
//! The single owned handle to the secure element. One mutex serializes
//! every element operation to one at a time; initialization (init +
//! register + identity persistence) happens exactly once, and every other
//! operation fails with `NotInitialized` until it has.
//!
//! The manager never blocks a caller's thread: it is async throughout, and
//! callers on any runtime worker simply await their turn.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use shared_types::{CoinType, UniqueId};

use crate::element::{AppIdentity, SecureElement};
use crate::errors::SecureElementError;
use crate::store::IdentityStore;

struct ManagerState {
    initialized: bool,
    unique_id: UniqueId,
}

/// Serialized, init-guarded front to a `SecureElement`.
pub struct SecureElementManager {
    element: Arc<dyn SecureElement>,
    identity_store: Arc<dyn IdentityStore>,
    // Held across element calls: guards the state AND serializes access.
    state: Mutex<ManagerState>,
}

impl SecureElementManager {
    /// Create a manager over an element and an identity store.
    pub fn new(element: Arc<dyn SecureElement>, identity_store: Arc<dyn IdentityStore>) -> Self {
        Self {
            element,
            identity_store,
            state: Mutex::new(ManagerState {
                initialized: false,
                unique_id: 0,
            }),
        }
    }

    /// Initialize the element session and register the application,
    /// exactly once. Subsequent and concurrent calls return the same
    /// identifier without touching the element again.
    pub async fn ensure_initialized(
        &self,
        identity: &AppIdentity,
    ) -> Result<UniqueId, SecureElementError> {
        let mut state = self.state.lock().await;
        if state.initialized {
            return Ok(state.unique_id);
        }

        self.element.init().await?;

        match self.identity_store.load() {
            Ok(Some(previous)) => debug!(previous, "found persisted registration id"),
            Ok(None) => debug!("no persisted registration id"),
            Err(err) => warn!(%err, "identity store unreadable, re-registering"),
        }

        let unique_id = self.element.register(identity).await?;
        if let Err(err) = self.identity_store.save(unique_id) {
            // Registration is stable for a given identity, so a failed save
            // costs a re-registration next run, nothing more.
            warn!(%err, "failed to persist registration id");
        }

        state.initialized = true;
        state.unique_id = unique_id;
        info!(unique_id, "secure element initialized and registered");

        Ok(unique_id)
    }

    /// The registered identifier.
    pub async fn unique_id(&self) -> Result<UniqueId, SecureElementError> {
        let state = self.state.lock().await;
        Self::require_initialized(&state)?;
        Ok(state.unique_id)
    }

    /// Provision a fresh seed.
    pub async fn create_seed(&self) -> Result<(), SecureElementError> {
        let state = self.state.lock().await;
        Self::require_initialized(&state)?;
        self.element.create_seed(state.unique_id).await
    }

    /// Restore a backed-up seed.
    pub async fn restore_seed(&self) -> Result<(), SecureElementError> {
        let state = self.state.lock().await;
        Self::require_initialized(&state)?;
        self.element.restore_seed(state.unique_id).await
    }

    /// Erase the seed.
    pub async fn clear_seed(&self) -> Result<(), SecureElementError> {
        let state = self.state.lock().await;
        Self::require_initialized(&state)?;
        self.element.clear_seed(state.unique_id).await
    }

    /// Whether a seed is provisioned. Identifier `0` means "never
    /// registered" and short-circuits to `false`.
    pub async fn seed_exists(&self) -> Result<bool, SecureElementError> {
        let state = self.state.lock().await;
        Self::require_initialized(&state)?;
        if state.unique_id == 0 {
            return Ok(false);
        }
        self.element.seed_exists(state.unique_id).await
    }

    /// Sign a `SignRequest` payload with the key for `coin_type`.
    pub async fn sign_message(
        &self,
        coin_type: CoinType,
        payload_json: &str,
    ) -> Result<Vec<u8>, SecureElementError> {
        let state = self.state.lock().await;
        Self::require_initialized(&state)?;
        self.element
            .sign_message(state.unique_id, coin_type, payload_json)
            .await
    }

    /// The element's public-key report for `coin_type`.
    pub async fn send_public_key(
        &self,
        coin_type: CoinType,
    ) -> Result<String, SecureElementError> {
        let state = self.state.lock().await;
        Self::require_initialized(&state)?;
        self.element
            .send_public_key(state.unique_id, coin_type)
            .await
    }

    fn require_initialized(state: &ManagerState) -> Result<(), SecureElementError> {
        if state.initialized {
            Ok(())
        } else {
            Err(SecureElementError::NotInitialized)
        }
    }
}
