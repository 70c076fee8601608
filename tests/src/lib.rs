//! Integration test framework for nasgmm
//!
//! Shared helpers for the cross-crate tests.
//!
//! # Components
//!
//! - [`test_fixtures`] - Sample configuration and IE values
//! - [`test_utils`] - Logging setup and hex helpers
//!
//! # Test Categories
//!
//! 1. **IE sequences** - Optional IE blocks decoded in arbitrary order
//! 2. **EMM-AS flow** - Messages and security data handed to the AS

pub mod test_fixtures;
pub mod test_utils;

pub use test_fixtures::{
    attach_capabilities, dispatch_optional_ies, encode_optional_ies, OptionalIes, SAMPLE_CONFIG_YAML,
};
pub use test_utils::{hex_to_bytes, init_test_logging, TestResult};
