//! Test utility functions for integration tests

use tracing_subscriber::{fmt, EnvFilter};

/// Result type for integration tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Initialize logging for tests
///
/// Uses RUST_LOG if set, otherwise traces the codec crate so failing tests
/// show the IE decode log.
pub fn init_test_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,nasgmm_nas=trace"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Parse a hex string, ignoring spaces
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    hex::decode(hex.replace(' ', "")).expect("valid hex in test vector")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_bytes() {
        assert_eq!(hex_to_bytes("5e 05 3a"), vec![0x5E, 0x05, 0x3A]);
        assert!(hex_to_bytes("").is_empty());
    }

    #[test]
    fn test_init_test_logging_twice() {
        init_test_logging();
        init_test_logging();
    }
}
