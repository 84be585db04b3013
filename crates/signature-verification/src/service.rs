//! # Message Verification Service
//!
//! Application service layer that implements the `MessageVerificationApi`
//! trait and drives the claimed-key source.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`MessageVerificationApi`)
//! - Uses the outbound port (`SignerKeySource`) to fetch the claimed key
//! - Delegates cryptographic operations to the domain layer

use tracing::{debug, warn};

use crate::domain::ecdsa::{parse_signature, recover_public_key};
use crate::domain::entities::VerificationOutcome;
use crate::domain::errors::VerifyError;
use crate::domain::keys::CompressedPublicKey;
use crate::domain::message::personal_message_hash;
use crate::domain::verifier;
use crate::ports::inbound::MessageVerificationApi;
use crate::ports::outbound::SignerKeySource;
use shared_types::{CoinType, UniqueId};

/// Message verification service.
///
/// The key source is the trust anchor under scrutiny: its report is fetched
/// through the outbound port and then verified against the key recovered
/// from the signature itself.
pub struct MessageVerificationService<K: SignerKeySource> {
    key_source: K,
}

impl<K: SignerKeySource> MessageVerificationService<K> {
    /// Create a new verification service over a claimed-key source.
    pub fn new(key_source: K) -> Self {
        Self { key_source }
    }

    /// Verify a signature against the key the source claims for
    /// `(unique_id, coin_type)`.
    ///
    /// A key-source failure folds into a non-verified outcome: the caller
    /// gates a trust decision on this result, so the routine fails closed
    /// rather than propagating infrastructure errors.
    pub async fn verify_with_source(
        &self,
        unique_id: UniqueId,
        coin_type: CoinType,
        message: &[u8],
        signature_bytes: &[u8],
    ) -> VerificationOutcome {
        let claimed_key_hex = match self.key_source.send_public_key(unique_id, coin_type).await {
            Ok(report) => report,
            Err(err) => {
                warn!(unique_id, coin_type, %err, "claimed-key fetch failed");
                return VerificationOutcome::rejected(VerifyError::KeySource(err.to_string()));
            }
        };

        self.verify_message(message, signature_bytes, &claimed_key_hex)
    }
}

impl<K: SignerKeySource> MessageVerificationApi for MessageVerificationService<K> {
    fn verify_message(
        &self,
        message: &[u8],
        signature_bytes: &[u8],
        claimed_key_hex: &str,
    ) -> VerificationOutcome {
        let outcome = verifier::verify_message(message, signature_bytes, claimed_key_hex);

        match (&outcome.error, outcome.verified) {
            (Some(cause), _) => warn!(%cause, "verification rejected"),
            (None, false) => warn!("verification rejected: signer key mismatch"),
            (None, true) => debug!("verification passed"),
        }

        outcome
    }

    fn recover_signer_key(
        &self,
        message: &[u8],
        signature_bytes: &[u8],
    ) -> Result<CompressedPublicKey, VerifyError> {
        let hash = personal_message_hash(message);
        let signature = parse_signature(signature_bytes)?;
        let recovered = recover_public_key(&hash, &signature)?;
        Ok(CompressedPublicKey::from_point(&recovered))
    }
}
