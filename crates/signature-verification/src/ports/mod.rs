//! # Ports Layer
//!
//! Trait definitions for this crate's interfaces:
//! - **Inbound** (`inbound.rs`): the verification API offered to callers
//! - **Outbound** (`outbound.rs`): the claimed-key source this crate needs

pub mod inbound;
pub mod outbound;
