//! # Secure Element Flow Tests
//!
//! Manager behavior across the crate boundary: serialized access under
//! concurrency, init preconditions, and the seed lifecycle as the runtime
//! drives it.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use attest_runtime::content;
    use attest_runtime::prefs::FilePreferences;
    use secure_element::{
        AppIdentity, SecureElementError, SecureElementManager, SoftwareSecureElement,
    };
    use shared_types::{SignRequest, COIN_TYPE_ETHEREUM};

    fn identity() -> AppIdentity {
        AppIdentity::new(
            "io.tzattest.demo",
            content::certificate_fingerprint(b"io.tzattest.demo"),
        )
    }

    fn manager(dir: &std::path::Path) -> Arc<SecureElementManager> {
        Arc::new(SecureElementManager::new(
            Arc::new(SoftwareSecureElement::new()),
            Arc::new(FilePreferences::new(dir)),
        ))
    }

    /// Every operation before `ensure_initialized` is a hard error, not a
    /// verification result.
    #[tokio::test]
    async fn test_uninitialized_manager_rejects_operations() {
        let dir = tempfile::tempdir().unwrap();
        let manager = manager(dir.path());

        assert_eq!(
            manager.seed_exists().await,
            Err(SecureElementError::NotInitialized)
        );
        assert_eq!(
            manager.send_public_key(COIN_TYPE_ETHEREUM).await,
            Err(SecureElementError::NotInitialized)
        );
    }

    /// Concurrent signing requests are serialized by the manager and all
    /// complete with consistent results.
    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_signing_is_serialized() {
        let dir = tempfile::tempdir().unwrap();
        let manager = manager(dir.path());
        manager.ensure_initialized(&identity()).await.unwrap();
        manager.create_seed().await.unwrap();

        let payload =
            serde_json::to_string(&SignRequest::for_digest(content::fingerprint(b"content")))
                .unwrap();

        let tasks: Vec<_> = (0..16)
            .map(|_| {
                let manager = Arc::clone(&manager);
                let payload = payload.clone();
                tokio::spawn(async move {
                    manager.sign_message(COIN_TYPE_ETHEREUM, &payload).await
                })
            })
            .collect();

        for task in tasks {
            let signature = task.await.unwrap().unwrap();
            assert_eq!(signature.len(), 65);
        }
    }

    /// Seed lifecycle as the runtime drives it: absent → created → cleared
    /// → restored; signing only works while a seed exists.
    #[tokio::test]
    async fn test_seed_lifecycle_gates_signing() {
        let dir = tempfile::tempdir().unwrap();
        let manager = manager(dir.path());
        let unique_id = manager.ensure_initialized(&identity()).await.unwrap();

        let payload = serde_json::to_string(&SignRequest::for_digest("aa")).unwrap();

        assert_eq!(
            manager.sign_message(COIN_TYPE_ETHEREUM, &payload).await,
            Err(SecureElementError::SeedMissing(unique_id))
        );

        manager.create_seed().await.unwrap();
        assert!(manager
            .sign_message(COIN_TYPE_ETHEREUM, &payload)
            .await
            .is_ok());

        manager.clear_seed().await.unwrap();
        assert_eq!(
            manager.sign_message(COIN_TYPE_ETHEREUM, &payload).await,
            Err(SecureElementError::SeedMissing(unique_id))
        );

        manager.restore_seed().await.unwrap();
        assert!(manager
            .sign_message(COIN_TYPE_ETHEREUM, &payload)
            .await
            .is_ok());
    }

    /// A restored seed yields the same signing key on every element
    /// instance, so attestations keep verifying after seed recovery.
    #[tokio::test]
    async fn test_restore_reproduces_key_across_instances() {
        let dir_a = tempfile::tempdir().unwrap();
        let dir_b = tempfile::tempdir().unwrap();

        let manager_a = manager(dir_a.path());
        manager_a.ensure_initialized(&identity()).await.unwrap();
        manager_a.restore_seed().await.unwrap();

        let manager_b = manager(dir_b.path());
        manager_b.ensure_initialized(&identity()).await.unwrap();
        manager_b.restore_seed().await.unwrap();

        assert_eq!(
            manager_a.send_public_key(COIN_TYPE_ETHEREUM).await.unwrap(),
            manager_b.send_public_key(COIN_TYPE_ETHEREUM).await.unwrap()
        );
    }
}
