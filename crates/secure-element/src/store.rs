//! # Identity Store Port
//!
//! Outbound port persisting the opaque registration identifier between
//! runs. The runtime provides the file-backed implementation.

use shared_types::UniqueId;
use thiserror::Error;

/// Error from the identity store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Reading or writing the backing storage failed.
    #[error("Preference store I/O failed: {0}")]
    Io(String),

    /// The stored data did not parse.
    #[error("Preference store corrupt: {0}")]
    Corrupt(String),
}

/// Persistence for the secure element's registration identifier.
pub trait IdentityStore: Send + Sync {
    /// The previously persisted identifier, if any.
    fn load(&self) -> Result<Option<UniqueId>, StoreError>;

    /// Persist the identifier.
    fn save(&self, unique_id: UniqueId) -> Result<(), StoreError>;
}
