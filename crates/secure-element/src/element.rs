//! # Secure Element Trait
//!
//! Abstraction over the vendor secure-element SDK. Implementations hold the
//! actual device handle; callers go through `SecureElementManager`, which
//! serializes access and enforces the init-before-use protocol.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared_types::{CoinType, UniqueId};

use crate::errors::SecureElementError;

/// Inputs the element needs to register a calling application.
///
/// The element treats both fields as opaque; together they pin the
/// registration (and therefore the issued `UniqueId`) to one application
/// identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppIdentity {
    /// Package / application name.
    pub package_name: String,
    /// Fingerprint of the application's signing certificate.
    pub certificate_fingerprint: String,
}

impl AppIdentity {
    /// Create a registration identity.
    pub fn new(package_name: impl Into<String>, certificate_fingerprint: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            certificate_fingerprint: certificate_fingerprint.into(),
        }
    }
}

/// The secure element: an isolated environment holding seed material and
/// signing on its behalf.
///
/// All operations are external calls with device-dependent latency; the
/// manager serializes them to one at a time.
#[async_trait]
pub trait SecureElement: Send + Sync {
    /// Bring up the element session. Idempotent at the SDK level, but the
    /// manager calls it exactly once.
    async fn init(&self) -> Result<(), SecureElementError>;

    /// Register the calling application, yielding its opaque identifier.
    /// Registration is stable: the same identity yields the same id.
    async fn register(&self, identity: &AppIdentity) -> Result<UniqueId, SecureElementError>;

    /// Provision a fresh random seed for this identity.
    async fn create_seed(&self, unique_id: UniqueId) -> Result<(), SecureElementError>;

    /// Restore a previously backed-up seed for this identity.
    async fn restore_seed(&self, unique_id: UniqueId) -> Result<(), SecureElementError>;

    /// Erase the seed for this identity.
    async fn clear_seed(&self, unique_id: UniqueId) -> Result<(), SecureElementError>;

    /// Whether a seed is provisioned for this identity.
    async fn seed_exists(&self, unique_id: UniqueId) -> Result<bool, SecureElementError>;

    /// Sign the message carried in `payload_json` (the `SignRequest`
    /// template) with the key for `coin_type`.
    ///
    /// Returns the 65-byte `r || s || v` signature buffer.
    async fn sign_message(
        &self,
        unique_id: UniqueId,
        coin_type: CoinType,
        payload_json: &str,
    ) -> Result<Vec<u8>, SecureElementError>;

    /// Report the public key for `(unique_id, coin_type)` as a hex string.
    ///
    /// The report's exact shape is SDK-defined (it may carry a `0x` prefix
    /// and lack the SEC1 marker byte); consumers must canonicalize it.
    async fn send_public_key(
        &self,
        unique_id: UniqueId,
        coin_type: CoinType,
    ) -> Result<String, SecureElementError>;
}
