//! # Verification Flow Tests
//!
//! The whole stack end to end: content fingerprinting, secure-element
//! signing, and verification of the result against the element's own
//! public-key report.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use k256::ecdsa::SigningKey;

    use attest_runtime::adapters::SecureElementKeySource;
    use attest_runtime::content;
    use attest_runtime::prefs::FilePreferences;
    use secure_element::{AppIdentity, SecureElementManager, SoftwareSecureElement};
    use shared_types::{SignRequest, COIN_TYPE_ETHEREUM};
    use signature_verification::{
        personal_message_hash, verify_message, MessageVerificationService, VerifyError,
    };

    // Compressed public keys for private keys 1 and 2: the secp256k1 base
    // point G and 2G.
    const PUBKEY_OF_ONE: &str =
        "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";
    const PUBKEY_OF_TWO: &str =
        "02c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5";

    fn identity() -> AppIdentity {
        AppIdentity::new(
            "io.tzattest.demo",
            content::certificate_fingerprint(b"io.tzattest.demo"),
        )
    }

    async fn ready_stack(
        data_dir: &std::path::Path,
    ) -> (
        Arc<SecureElementManager>,
        MessageVerificationService<SecureElementKeySource>,
        i64,
    ) {
        let manager = Arc::new(SecureElementManager::new(
            Arc::new(SoftwareSecureElement::new()),
            Arc::new(FilePreferences::new(data_dir)),
        ));
        let unique_id = manager.ensure_initialized(&identity()).await.unwrap();
        manager.create_seed().await.unwrap();

        let verifier =
            MessageVerificationService::new(SecureElementKeySource::new(Arc::clone(&manager)));
        (manager, verifier, unique_id)
    }

    fn sign_personal(key: &SigningKey, message: &[u8]) -> Vec<u8> {
        let hash = personal_message_hash(message);
        let (sig, recid) = key.sign_prehash_recoverable(&hash).unwrap();
        let mut bytes = sig.to_bytes().to_vec();
        bytes.push(recid.to_byte());
        bytes
    }

    // =========================================================================
    // END-TO-END FLOW
    // =========================================================================

    /// The full attest path: fingerprint → template → element signing →
    /// verification against the element's key report.
    #[tokio::test]
    async fn test_end_to_end_sign_and_verify() {
        let dir = tempfile::tempdir().unwrap();
        let (manager, verifier, unique_id) = ready_stack(dir.path()).await;

        let digest = content::fingerprint(b"some photo bytes");
        let payload = serde_json::to_string(&SignRequest::for_digest(digest.clone())).unwrap();
        let signature = manager
            .sign_message(COIN_TYPE_ETHEREUM, &payload)
            .await
            .unwrap();

        let outcome = verifier
            .verify_with_source(unique_id, COIN_TYPE_ETHEREUM, digest.as_bytes(), &signature)
            .await;

        assert!(outcome.verified);
        assert!(outcome.error.is_none());
    }

    /// A signature over one content must not verify for different content.
    #[tokio::test]
    async fn test_end_to_end_rejects_other_content() {
        let dir = tempfile::tempdir().unwrap();
        let (manager, verifier, unique_id) = ready_stack(dir.path()).await;

        let digest = content::fingerprint(b"original content");
        let payload = serde_json::to_string(&SignRequest::for_digest(digest)).unwrap();
        let signature = manager
            .sign_message(COIN_TYPE_ETHEREUM, &payload)
            .await
            .unwrap();

        let other_digest = content::fingerprint(b"tampered content");
        let outcome = verifier
            .verify_with_source(
                unique_id,
                COIN_TYPE_ETHEREUM,
                other_digest.as_bytes(),
                &signature,
            )
            .await;

        assert!(!outcome.verified);
    }

    /// Registration identifiers survive a runtime restart via the
    /// preference file, and the element re-issues the same id.
    #[tokio::test]
    async fn test_registration_survives_restart() {
        let dir = tempfile::tempdir().unwrap();

        let (_, _, first_id) = ready_stack(dir.path()).await;

        // "Restart": fresh manager over the same preference directory.
        let manager = Arc::new(SecureElementManager::new(
            Arc::new(SoftwareSecureElement::new()),
            Arc::new(FilePreferences::new(dir.path())),
        ));
        let second_id = manager.ensure_initialized(&identity()).await.unwrap();

        assert_eq!(first_id, second_id);
    }

    // =========================================================================
    // KNOWN-VECTOR SCENARIO
    // =========================================================================

    /// Private key 1, message "hello": the recovered, compressed key must be
    /// the compressed base point, and verification must agree only with it.
    #[test]
    fn test_known_vector_private_key_one() {
        let mut secret = [0u8; 32];
        secret[31] = 1;
        let key = SigningKey::from_bytes(&secret.into()).unwrap();

        let signature = sign_personal(&key, b"hello");

        let outcome = verify_message(b"hello", &signature, PUBKEY_OF_ONE);
        assert!(outcome.verified);
        assert_eq!(
            outcome.recovered_key.unwrap().to_hex(),
            PUBKEY_OF_ONE
        );

        // A valid but different claimed key must not verify.
        let outcome = verify_message(b"hello", &signature, PUBKEY_OF_TWO);
        assert!(!outcome.verified);
        assert!(outcome.error.is_none());
    }

    /// The claimed key matches regardless of which serialization the trust
    /// anchor reports it in.
    #[test]
    fn test_known_vector_accepts_uncompressed_report() {
        let mut secret = [0u8; 32];
        secret[31] = 1;
        let key = SigningKey::from_bytes(&secret.into()).unwrap();
        let signature = sign_personal(&key, b"hello");

        let uncompressed = key.verifying_key().to_encoded_point(false);
        let raw_report = hex::encode(&uncompressed.as_bytes()[1..]);
        let prefixed_report = format!("0x{raw_report}");

        assert!(verify_message(b"hello", &signature, &raw_report).verified);
        assert!(verify_message(b"hello", &signature, &prefixed_report).verified);
    }

    // =========================================================================
    // NEGATIVE CONTROLS
    // =========================================================================

    /// Flipping any single bit of the signature must reject.
    #[test]
    fn test_signature_bit_flips_reject() {
        let key = SigningKey::random(&mut rand::thread_rng());
        let claimed = hex::encode(key.verifying_key().to_encoded_point(true).as_bytes());
        let message = b"bit flip controls";
        let signature = sign_personal(&key, message);

        for byte_index in 0..signature.len() {
            let mut mutated = signature.clone();
            mutated[byte_index] ^= 0x80;
            let outcome = verify_message(message, &mutated, &claimed);
            assert!(
                !outcome.verified,
                "bit flip in byte {byte_index} must not verify"
            );
        }
    }

    /// Signing without the personal-message prefix must not verify against
    /// the prefixing verifier.
    #[test]
    fn test_prefix_mismatch_rejects() {
        let key = SigningKey::random(&mut rand::thread_rng());
        let claimed = hex::encode(key.verifying_key().to_encoded_point(true).as_bytes());

        let raw_hash = signature_verification::keccak256(b"hello");
        let (sig, recid) = key.sign_prehash_recoverable(&raw_hash).unwrap();
        let mut signature = sig.to_bytes().to_vec();
        signature.push(recid.to_byte());

        assert!(!verify_message(b"hello", &signature, &claimed).verified);
    }

    /// Malformed signature buffers fold into a diagnostic, never a panic.
    #[test]
    fn test_malformed_signatures_fold_to_false() {
        let key = SigningKey::random(&mut rand::thread_rng());
        let claimed = hex::encode(key.verifying_key().to_encoded_point(true).as_bytes());

        for len in [0usize, 1, 32, 64, 66, 130] {
            let outcome = verify_message(b"msg", &vec![0u8; len], &claimed);
            assert!(!outcome.verified);
            assert_eq!(
                outcome.error,
                Some(VerifyError::MalformedSignature { len })
            );
        }
    }

    // =========================================================================
    // DETERMINISM
    // =========================================================================

    /// Identical inputs give identical outcomes, also under concurrency.
    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_verification_is_deterministic_under_concurrency() {
        let key = SigningKey::random(&mut rand::thread_rng());
        let claimed = hex::encode(key.verifying_key().to_encoded_point(true).as_bytes());
        let signature = sign_personal(&key, b"concurrent");

        let baseline = verify_message(b"concurrent", &signature, &claimed);
        assert!(baseline.verified);

        let tasks: Vec<_> = (0..16)
            .map(|_| {
                let signature = signature.clone();
                let claimed = claimed.clone();
                tokio::spawn(async move { verify_message(b"concurrent", &signature, &claimed) })
            })
            .collect();

        for task in tasks {
            assert_eq!(task.await.unwrap(), baseline);
        }
    }
}
