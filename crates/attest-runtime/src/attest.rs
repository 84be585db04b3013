//! # Attest Flow
//!
//! The end-to-end path: fingerprint the content, have the secure element
//! sign it, then verify the signature against the element's own public-key
//! report.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use secure_element::SecureElementManager;
use shared_types::{SignRequest, COIN_TYPE_ETHEREUM};
use signature_verification::{MessageVerificationService, VerificationOutcome};

use crate::adapters::SecureElementKeySource;
use crate::content;

/// Sign and verify one content file. The manager must already be
/// initialized with a provisioned seed.
pub async fn attest_file(
    manager: &SecureElementManager,
    verifier: &MessageVerificationService<SecureElementKeySource>,
    path: &Path,
) -> Result<VerificationOutcome> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("reading content file {}", path.display()))?;

    let digest = content::fingerprint(&bytes);
    info!(path = %path.display(), %digest, "content fingerprinted");

    let request = SignRequest::for_digest(digest.clone());
    let payload = serde_json::to_string(&request).context("encoding signing payload")?;
    info!(%payload, "signing payload assembled");

    let signature = manager
        .sign_message(COIN_TYPE_ETHEREUM, &payload)
        .await
        .context("secure element signing call")?;
    info!(signature = %hex::encode(&signature), "secure element produced signature");

    let unique_id = manager.unique_id().await.context("reading registration id")?;
    let outcome = verifier
        .verify_with_source(unique_id, COIN_TYPE_ETHEREUM, digest.as_bytes(), &signature)
        .await;

    Ok(outcome)
}
