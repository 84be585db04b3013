//! # Secure Element Errors
//!
//! Typed taxonomy over the element SDK's status codes. Unlike verification
//! mismatches, these are hard errors: a call on an uninitialized manager or
//! a missing seed is a caller bug or an environment fault, not a negative
//! verification result.

use shared_types::UniqueId;
use thiserror::Error;

/// Errors from secure-element operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SecureElementError {
    /// An operation was attempted before `ensure_initialized` succeeded.
    #[error("Secure element not initialized")]
    NotInitialized,

    /// The on-device secure-element service predates the SDK.
    #[error("Secure element service too old, device update required")]
    ServiceTooOld,

    /// The trusted-execution API predates the SDK.
    #[error("Trusted execution API too old, device update required")]
    TrustZoneApiTooOld,

    /// Device integrity check failed.
    #[error("Device integrity check failed (tampered)")]
    DeviceTampered,

    /// No seed has been provisioned for this identity.
    #[error("No seed provisioned for identity {0}")]
    SeedMissing(UniqueId),

    /// A seed is already provisioned for this identity.
    #[error("Seed already provisioned for identity {0}")]
    SeedExists(UniqueId),

    /// The element returned a nonzero status not covered above.
    #[error("Secure element call failed with status {code}")]
    Sdk { code: i32 },

    /// The public-key query failed.
    #[error("Public key query failed: {0}")]
    KeyQuery(String),

    /// The signing call failed.
    #[error("Signing failed: {0}")]
    Signing(String),
}
