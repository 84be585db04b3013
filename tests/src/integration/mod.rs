//! # Integration Tests
//!
//! Cross-crate flows: the verification core driven through the
//! secure-element manager and the runtime's adapters.

pub mod secure_element_flow;
pub mod verification_flow;
