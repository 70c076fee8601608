//! Configuration for NAS codec hosts
//!
//! Loaded from YAML; all fields are optional and default to the built-in
//! behaviour.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::logging::LogLevel;
use crate::mcc_mnc::MncLengthTable;

/// An operator-supplied MCC/MNC assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MccMncEntry {
    /// Mobile Country Code
    pub mcc: u16,
    /// Mobile Network Code as written, two or three digits ("01", "310")
    pub mnc: String,
}

/// Top level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NasConfig {
    /// Default log level, overridden by `RUST_LOG`
    pub log_level: LogLevel,
    /// Extra networks consulted before the E.212 list
    pub mcc_mnc_overrides: Vec<MccMncEntry>,
}

impl NasConfig {
    /// Parses a configuration from a YAML string.
    ///
    /// # Example
    /// ```
    /// use nasgmm_common::{LogLevel, NasConfig};
    ///
    /// let yaml = r#"
    /// log_level: trace
    /// mcc_mnc_overrides:
    ///   - mcc: 999
    ///     mnc: "123"
    /// "#;
    ///
    /// let config = NasConfig::from_yaml(yaml).unwrap();
    /// assert_eq!(config.log_level, LogLevel::Trace);
    /// assert_eq!(config.mcc_mnc_overrides.len(), 1);
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self, Error> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration from a YAML file.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Serializes the configuration to a YAML string.
    pub fn to_yaml(&self) -> Result<String, Error> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Builds the MNC length table with the configured overrides.
    pub fn mnc_table(&self) -> MncLengthTable {
        self.mcc_mnc_overrides
            .iter()
            .fold(MncLengthTable::new(), |table, entry| {
                table.with_entry(entry.mcc, entry.mnc.clone())
            })
    }

    fn validate(&self) -> Result<(), Error> {
        for entry in &self.mcc_mnc_overrides {
            if entry.mcc > 999 {
                return Err(Error::Config(format!("MCC {} out of range", entry.mcc)));
            }
            let digits_ok = entry.mnc.bytes().all(|b| b.is_ascii_digit());
            if !digits_ok || !(2..=3).contains(&entry.mnc.len()) {
                return Err(Error::Config(format!(
                    "MNC {:?} for MCC {} must be 2 or 3 digits",
                    entry.mnc, entry.mcc
                )));
            }
        }
        Ok(())
    }
}
