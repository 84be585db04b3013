//! # tz-attest Runtime
//!
//! The demo runtime around the attestation core. Flow per run:
//!
//! 1. Initialize the secure-element manager (one-shot init + registration,
//!    identifier persisted to the preference store)
//! 2. Ensure a seed is provisioned
//! 3. Fingerprint the input content
//! 4. Have the secure element sign the fingerprint (personal-message form)
//! 5. Verify the signature against the element's own public-key report —
//!    trust is established by recovery and comparison, not by the report
//!
//! ## Modular Structure
//!
//! - `config` — environment-driven runtime configuration
//! - `content` — content fingerprinting (hex + SHA-256)
//! - `prefs` — JSON preference file implementing the identity store port
//! - `adapters` — port implementations connecting the crates
//! - `attest` — the end-to-end flow

pub mod adapters;
pub mod attest;
pub mod config;
pub mod content;
pub mod prefs;
