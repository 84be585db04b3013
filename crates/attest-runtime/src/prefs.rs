//! # File-Backed Preferences
//!
//! JSON preference file implementing the secure-element crate's
//! `IdentityStore` port. The only persisted datum is the opaque
//! registration identifier.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use secure_element::{IdentityStore, StoreError};
use shared_types::UniqueId;

#[derive(Debug, Default, Serialize, Deserialize)]
struct Preferences {
    unique_id: Option<UniqueId>,
}

/// Preference store persisted as `preferences.json` under the data
/// directory.
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    /// Create a store rooted at `data_dir`.
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("preferences.json"),
        }
    }

    fn read(&self) -> Result<Preferences, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => {
                serde_json::from_str(&raw).map_err(|err| StoreError::Corrupt(err.to_string()))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Preferences::default()),
            Err(err) => Err(StoreError::Io(err.to_string())),
        }
    }
}

impl IdentityStore for FilePreferences {
    fn load(&self) -> Result<Option<UniqueId>, StoreError> {
        Ok(self.read()?.unique_id)
    }

    fn save(&self, unique_id: UniqueId) -> Result<(), StoreError> {
        let preferences = Preferences {
            unique_id: Some(unique_id),
        };

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|err| StoreError::Io(err.to_string()))?;
        }

        let raw = serde_json::to_string_pretty(&preferences)
            .map_err(|err| StoreError::Corrupt(err.to_string()))?;
        std::fs::write(&self.path, raw).map_err(|err| StoreError::Io(err.to_string()))
    }
}
