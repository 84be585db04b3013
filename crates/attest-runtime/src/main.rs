//! # tz-attest Runtime Entry Point
//!
//! Signs a content file with the (software) secure element and verifies the
//! signature against the element's own public-key report. Exit code 0 means
//! the signature verified; anything else is "not verified".

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use attest_runtime::adapters::SecureElementKeySource;
use attest_runtime::attest::attest_file;
use attest_runtime::config::RuntimeConfig;
use attest_runtime::content;
use attest_runtime::prefs::FilePreferences;
use secure_element::{AppIdentity, SecureElementManager, SoftwareSecureElement};
use signature_verification::MessageVerificationService;

#[tokio::main]
async fn main() -> Result<()> {
    let config = RuntimeConfig::from_env();

    // Initialize logging
    let level = Level::from_str(&config.log_level).unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let path = std::env::args()
        .nth(1)
        .context("usage: attest-runtime <content-file>")?;

    info!("===========================================");
    info!("  tz-attest Runtime v0.1.0");
    info!("===========================================");
    info!("Data Dir: {:?}", config.data_dir);

    // Construct the collaborators once; everything downstream borrows them.
    let preferences = Arc::new(FilePreferences::new(&config.data_dir));
    let element = Arc::new(SoftwareSecureElement::new());
    let manager = Arc::new(SecureElementManager::new(element, preferences));

    let identity = AppIdentity::new(
        config.package_name.clone(),
        content::certificate_fingerprint(config.package_name.as_bytes()),
    );
    let unique_id = manager
        .ensure_initialized(&identity)
        .await
        .context("secure element initialization")?;
    info!(unique_id, "registered with secure element");

    if manager.seed_exists().await? {
        info!("seed already provisioned");
    } else {
        manager.create_seed().await.context("seed creation")?;
        info!("seed created");
    }

    let verifier =
        MessageVerificationService::new(SecureElementKeySource::new(Arc::clone(&manager)));

    let outcome = attest_file(&manager, &verifier, Path::new(&path)).await?;

    if outcome.verified {
        info!("signature verified against secure-element key");
        Ok(())
    } else {
        error!(cause = ?outcome.error, "signature verification failed");
        std::process::exit(1);
    }
}
