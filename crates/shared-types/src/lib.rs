//! # Shared Types Crate
//!
//! This crate contains the domain entities shared between the attestation
//! crates: digest and identity aliases plus the JSON signing template the
//! secure element consumes.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-crate types are defined here.
//! - **No behavior**: Pure data; cryptographic and I/O logic live in the
//!   crates that own those concerns.

pub mod entities;

pub use entities::*;
