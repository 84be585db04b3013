//! # Message Signature Verification
//!
//! Verifies Ethereum personal-message signatures against a public key
//! reported by an external trust anchor (a secure element), without trusting
//! that report at face value: the signer's key is recovered from the
//! signature itself and compared in canonical compressed form.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Pure cryptographic logic, no I/O
//! - **Ports Layer** (`ports/`): Trait definitions for inbound/outbound interfaces
//! - **Service Layer** (`service.rs`): Wires domain logic to ports
//!
//! ## Supported Contract
//!
//! Exactly one signing convention is supported: the Ethereum
//! `personal_sign` standard. Messages are prefixed with
//! `"\x19Ethereum Signed Message:\n" || decimal length` before Keccak-256
//! hashing, and the recovery identifier is accepted as `{0, 1}` or the
//! legacy `{27, 28}` and normalized to `{0, 1}`. Prefix-free hashing and
//! hex-encoded recovery identifiers are deliberately not supported.
//!
//! ## Security Notes
//!
//! - **Fail closed**: every cryptographic failure folds into a non-verified
//!   outcome; verification never panics on untrusted input.
//! - **Canonical comparison**: keys are compared as decoded, curve-validated
//!   33-byte compressed points, never as raw hex strings.

pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use domain::ecdsa::{parse_signature, recover_public_key};
pub use domain::entities::{EcdsaSignature, VerificationOutcome};
pub use domain::errors::VerifyError;
pub use domain::keys::CompressedPublicKey;
pub use domain::message::{keccak256, personal_message, personal_message_hash};
pub use domain::verifier::verify_message;
pub use ports::inbound::MessageVerificationApi;
pub use ports::outbound::{KeySourceError, SignerKeySource};
pub use service::MessageVerificationService;
