//! Logging infrastructure for nasgmm
//!
//! Configurable logging on top of the `tracing` crate, NAS message and IE
//! logging helpers, and hex dump formatting for debugging codec output.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::Level;
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

/// Verbosity of the codec diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Per-IE decode and encode traces
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    const ALL: [LogLevel; 5] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
    ];

    /// Directive name understood by `EnvFilter`
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_ascii_lowercase();
        if wanted == "warning" {
            return Ok(LogLevel::Warn);
        }
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == wanted)
            .ok_or_else(|| format!("unknown log level: {s}"))
    }
}

/// Initialize the tracing subscriber with the specified log level.
///
/// Call once at startup. `RUST_LOG` overrides `level` when set.
///
/// # Example
///
/// ```
/// use nasgmm_common::logging::{init_logging, LogLevel};
///
/// init_logging(LogLevel::Debug);
/// ```
pub fn init_logging(level: LogLevel) {
    init_logging_with_filter(level.as_str());
}

/// Initialize logging with a custom filter string.
///
/// # Example
///
/// ```
/// use nasgmm_common::logging::init_logging_with_filter;
///
/// // Info everywhere, IE decode traces for the codec crate
/// init_logging_with_filter("info,nasgmm_nas=trace");
/// ```
pub fn init_logging_with_filter(filter: &str) {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => EnvFilter::new(filter),
    };

    // Keeps the first subscriber if one is already installed.
    if tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_span_events(FmtSpan::NONE)
        .try_init()
        .is_err()
    {
        tracing::debug!("tracing subscriber already installed");
    }
}

/// Message direction for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Received from the peer (decode path)
    Rx,
    /// Sent to the peer (encode path)
    Tx,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Rx => "RX",
            Direction::Tx => "TX",
        })
    }
}

/// Log a NAS message at debug level with a hex dump at trace level.
///
/// # Example
///
/// ```
/// use nasgmm_common::logging::{log_nas_message, Direction};
///
/// log_nas_message(Direction::Rx, "Detach Accept", &[0x07, 0x46]);
/// ```
pub fn log_nas_message(direction: Direction, msg_type: &str, data: &[u8]) {
    tracing::debug!(%direction, msg_type, len = data.len(), "NAS message");
    tracing::trace!(%direction, msg_type, hex = %HexDump(data), "NAS message bytes");
}

/// Log a single encoded or decoded information element at trace level.
pub fn log_nas_ie(direction: Direction, ie: &str, data: &[u8]) {
    tracing::trace!(%direction, ie, len = data.len(), hex = %HexDump(data), "NAS IE");
}

/// Displays a byte slice as contiguous lowercase hex
pub struct HexDump<'a>(pub &'a [u8]);

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

/// Format bytes as a hex dump with offset, hex and ASCII columns.
///
/// ```
/// use nasgmm_common::logging::format_hex_dump;
///
/// let dump = format_hex_dump(&[0x5E, 0x05, 0x3A]);
/// assert!(dump.starts_with("00000000  5e 05 3a"));
/// ```
pub fn format_hex_dump(data: &[u8]) -> String {
    if data.is_empty() {
        return String::from("(empty)");
    }

    let mut lines = Vec::with_capacity(data.len().div_ceil(16));

    for (row, chunk) in data.chunks(16).enumerate() {
        let mut line = format!("{:08x}  ", row * 16);

        for i in 0..16 {
            if i == 8 {
                line.push(' ');
            }
            match chunk.get(i) {
                Some(byte) => line.push_str(&format!("{byte:02x} ")),
                None => line.push_str("   "),
            }
        }

        line.push_str(" |");
        line.extend(chunk.iter().map(|&b| {
            if b.is_ascii_graphic() || b == b' ' {
                b as char
            } else {
                '.'
            }
        }));
        line.push('|');
        lines.push(line);
    }

    lines.join("\n")
}

/// Format bytes as a compact hex string, optionally grouped.
///
/// ```
/// use nasgmm_common::logging::format_hex_compact;
///
/// let data = [0x31, 0x03, 0xE5, 0xE0];
/// assert_eq!(format_hex_compact(&data, 0), "3103e5e0");
/// assert_eq!(format_hex_compact(&data, 2), "3103 e5e0");
/// ```
pub fn format_hex_compact(data: &[u8], group_size: usize) -> String {
    if group_size == 0 {
        return hex::encode(data);
    }

    data.chunks(group_size)
        .map(hex::encode)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_from_str() {
        assert_eq!("trace".parse::<LogLevel>().unwrap(), LogLevel::Trace);
        assert_eq!("DEBUG".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_log_level_display_roundtrip() {
        for level in LogLevel::ALL {
            assert_eq!(level.to_string().parse::<LogLevel>().unwrap(), level);
        }
        assert_eq!(LogLevel::Warn.as_str(), "warn");
    }

    #[test]
    fn test_log_level_into_tracing() {
        assert_eq!(Level::from(LogLevel::Trace), Level::TRACE);
        assert_eq!(Level::from(LogLevel::Error), Level::ERROR);
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::Rx.to_string(), "RX");
        assert_eq!(Direction::Tx.to_string(), "TX");
    }

    #[test]
    fn test_hex_dump_empty() {
        assert_eq!(format_hex_dump(&[]), "(empty)");
    }

    #[test]
    fn test_hex_dump_ascii_column() {
        let dump = format_hex_dump(b"Hi");
        assert!(dump.contains("48 69"));
        assert!(dump.ends_with("|Hi|"));
    }

    #[test]
    fn test_hex_dump_two_rows() {
        let data: Vec<u8> = (0u8..20).collect();
        let dump = format_hex_dump(&data);
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("00000010  10 11 12 13"));
    }

    #[test]
    fn test_hex_dump_display() {
        assert_eq!(HexDump(&[0xA1, 0x0F]).to_string(), "a10f");
    }

    #[test]
    fn test_hex_compact() {
        assert_eq!(format_hex_compact(&[0x01, 0x06], 0), "0106");
        assert_eq!(format_hex_compact(&[0x5E, 0x05, 0x3A], 1), "5e 05 3a");
    }
}
