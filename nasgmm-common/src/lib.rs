//! Common types and utilities for nasgmm
//!
//! This crate provides the pieces shared by the NAS codec and its callers:
//! scalar bit-field helpers, PLMN handling with the ITU-T E.212 MNC length
//! table, configuration loading and logging setup.

pub mod bit_field;
pub mod config;
pub mod error;
pub mod logging;
pub mod mcc_mnc;
pub mod types;

pub use bit_field::{get_bits, mask, put_bits, read_u16_be, read_u32_be, write_u16_be, write_u32_be};
pub use config::{MccMncEntry, NasConfig};
pub use error::Error;
pub use logging::{
    format_hex_compact, format_hex_dump, init_logging, init_logging_with_filter, log_nas_ie,
    log_nas_message, Direction, HexDump, LogLevel,
};
pub use mcc_mnc::{find_mnc_length, MncLengthTable, MCC_MNC_LIST};
pub use types::Plmn;
