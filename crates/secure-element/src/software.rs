//! # Software Secure Element
//!
//! Deterministic in-process element for tests and the demo runtime. It
//! mimics the shapes the hardware SDK produces — legacy `27`/`28` recovery
//! bytes, public-key reports without the SEC1 marker — so the verification
//! core's normalization paths get exercised end to end.
//!
//! This is a test double, not a TEE: seed material lives in process memory.

use std::collections::HashMap;
use std::sync::Mutex;

use k256::ecdsa::SigningKey;
use sha2::{Digest, Sha256};
use tracing::debug;

use shared_types::{CoinType, SignRequest, UniqueId};
use signature_verification::personal_message_hash;

use crate::element::{AppIdentity, SecureElement};
use crate::errors::SecureElementError;

#[derive(Default)]
struct ElementState {
    init_calls: u32,
    seeds: HashMap<UniqueId, [u8; 32]>,
}

/// In-process secure element backed by k256 software keys.
#[derive(Default)]
pub struct SoftwareSecureElement {
    state: Mutex<ElementState>,
}

impl SoftwareSecureElement {
    /// Create an element with no provisioned seeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `init` calls observed. Test hook for the one-shot-init
    /// guarantee.
    pub fn init_count(&self) -> u32 {
        self.state.lock().unwrap().init_calls
    }

    fn seed_for(&self, unique_id: UniqueId) -> Result<[u8; 32], SecureElementError> {
        self.state
            .lock()
            .unwrap()
            .seeds
            .get(&unique_id)
            .copied()
            .ok_or(SecureElementError::SeedMissing(unique_id))
    }
}

/// Registration is stable: the identifier is a pure function of the
/// application identity, like the hardware SDK's per-app registration.
fn derive_unique_id(identity: &AppIdentity) -> UniqueId {
    let digest = Sha256::new()
        .chain_update(identity.package_name.as_bytes())
        .chain_update(b":")
        .chain_update(identity.certificate_fingerprint.as_bytes())
        .finalize();

    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    // Positive and nonzero; 0 is the "unregistered" sentinel.
    let id = (u64::from_be_bytes(bytes) >> 1) as i64;
    if id == 0 {
        1
    } else {
        id
    }
}

/// The deterministic "cloud backup" seed restore_seed recovers.
fn backup_seed(unique_id: UniqueId) -> [u8; 32] {
    Sha256::new()
        .chain_update(b"software-element backup seed")
        .chain_update(unique_id.to_be_bytes())
        .finalize()
        .into()
}

/// Derive the signing key for one coin type from the seed.
fn derive_signing_key(seed: &[u8; 32], coin_type: CoinType) -> SigningKey {
    let mut candidate: [u8; 32] = Sha256::new()
        .chain_update(b"software-element signing key")
        .chain_update(seed)
        .chain_update(coin_type.to_be_bytes())
        .finalize()
        .into();

    // Rehash until the digest lands in scalar range; in practice the first
    // candidate almost always does.
    loop {
        match SigningKey::from_bytes(&candidate.into()) {
            Ok(key) => return key,
            Err(_) => candidate = Sha256::digest(candidate).into(),
        }
    }
}

#[async_trait::async_trait]
impl SecureElement for SoftwareSecureElement {
    async fn init(&self) -> Result<(), SecureElementError> {
        let mut state = self.state.lock().unwrap();
        state.init_calls += 1;
        Ok(())
    }

    async fn register(&self, identity: &AppIdentity) -> Result<UniqueId, SecureElementError> {
        let unique_id = derive_unique_id(identity);
        debug!(unique_id, package = %identity.package_name, "registered application");
        Ok(unique_id)
    }

    async fn create_seed(&self, unique_id: UniqueId) -> Result<(), SecureElementError> {
        let mut state = self.state.lock().unwrap();
        if state.seeds.contains_key(&unique_id) {
            return Err(SecureElementError::SeedExists(unique_id));
        }

        let mut seed = [0u8; 32];
        rand::RngCore::fill_bytes(&mut rand::thread_rng(), &mut seed);
        state.seeds.insert(unique_id, seed);
        Ok(())
    }

    async fn restore_seed(&self, unique_id: UniqueId) -> Result<(), SecureElementError> {
        let mut state = self.state.lock().unwrap();
        if state.seeds.contains_key(&unique_id) {
            return Err(SecureElementError::SeedExists(unique_id));
        }

        state.seeds.insert(unique_id, backup_seed(unique_id));
        Ok(())
    }

    async fn clear_seed(&self, unique_id: UniqueId) -> Result<(), SecureElementError> {
        self.state.lock().unwrap().seeds.remove(&unique_id);
        Ok(())
    }

    async fn seed_exists(&self, unique_id: UniqueId) -> Result<bool, SecureElementError> {
        Ok(self.state.lock().unwrap().seeds.contains_key(&unique_id))
    }

    async fn sign_message(
        &self,
        unique_id: UniqueId,
        coin_type: CoinType,
        payload_json: &str,
    ) -> Result<Vec<u8>, SecureElementError> {
        let request: SignRequest = serde_json::from_str(payload_json)
            .map_err(|err| SecureElementError::Signing(format!("malformed payload: {err}")))?;

        let seed = self.seed_for(unique_id)?;
        let key = derive_signing_key(&seed, coin_type);

        let hash = personal_message_hash(request.digest().as_bytes());
        let (sig, recid) = key
            .sign_prehash_recoverable(&hash)
            .map_err(|err| SecureElementError::Signing(err.to_string()))?;

        // Legacy encoding, like the hardware SDK: v = recovery id + 27.
        let mut buffer = sig.to_bytes().to_vec();
        buffer.push(recid.to_byte() + 27);
        Ok(buffer)
    }

    async fn send_public_key(
        &self,
        unique_id: UniqueId,
        coin_type: CoinType,
    ) -> Result<String, SecureElementError> {
        let seed = self.seed_for(unique_id)?;
        let key = derive_signing_key(&seed, coin_type);

        // Raw x || y coordinates, 0x-prefixed, no SEC1 marker byte.
        let point = key.verifying_key().to_encoded_point(false);
        Ok(format!("0x{}", hex::encode(&point.as_bytes()[1..])))
    }
}
