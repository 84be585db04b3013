//! # tz-attest Test Suite
//!
//! Unified test crate for cross-crate flows.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── verification_flow.rs   # sign → verify across the whole stack
//!     └── secure_element_flow.rs # manager init, serialization, lifecycle
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p attest-tests
//!
//! # By category
//! cargo test -p attest-tests integration::
//! ```
//!
//! Unit tests live next to the code they test, inside each crate.

#![allow(dead_code)]

pub mod integration;
