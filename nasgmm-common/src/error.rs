//! Error types for nasgmm

use thiserror::Error;

/// Error types for the nasgmm support library.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A PLMN digit was not an ASCII decimal digit.
    #[error("Invalid {field} digit: 0x{value:02X}")]
    InvalidDigit {
        /// Which identifier the digit belongs to ("MCC" or "MNC")
        field: &'static str,
        /// Offending byte
        value: u8,
    },

    /// File I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors.
    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(err: &Error) -> &'static str {
        match err {
            Error::Config(_) => "config",
            Error::InvalidDigit { .. } => "digit",
            Error::Io(_) => "io",
            Error::YamlParse(_) => "yaml",
        }
    }

    #[test]
    fn test_error_sources() {
        let io: Error = std::io::Error::from(std::io::ErrorKind::NotFound).into();
        assert_eq!(kind(&io), "io");

        let yaml: Error = serde_yaml::from_str::<u8>("[").unwrap_err().into();
        assert_eq!(kind(&yaml), "yaml");

        let config = Error::Config("MCC 1000 out of range".into());
        assert_eq!(kind(&config), "config");
        assert_eq!(config.to_string(), "Configuration error: MCC 1000 out of range");
    }

    #[test]
    fn test_invalid_digit_display() {
        let err = Error::InvalidDigit {
            field: "MNC",
            value: 0x0F,
        };
        assert_eq!(kind(&err), "digit");
        assert_eq!(err.to_string(), "Invalid MNC digit: 0x0F");
    }
}
