//! EMM message header
//!
//! Plain EPS mobility management messages start with a 2 octet header
//! (3GPP TS 24.301 Section 9.1). A security protected message carries a MAC
//! and sequence number after its first octet instead, so only security
//! header type 0 is accepted here:
//!
//! ```text
//! +------------------+------------------+------------------+
//! | Security header  |    Protocol      |   Message Type   |
//! | type (4 bits)    | discriminator (4)|    (1 byte)      |
//! +------------------+------------------+------------------+
//! ```

use bytes::{Buf, BufMut};
use thiserror::Error;

use crate::enums::{EmmMessageType, ProtocolDiscriminator, SecurityHeaderType};

/// EMM header decoding errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    #[error("Buffer too short: expected at least {expected} bytes, got {actual}")]
    BufferTooShort { expected: usize, actual: usize },

    #[error("Invalid protocol discriminator: 0x{0:X}")]
    InvalidProtocolDiscriminator(u8),

    #[error("Protocol discriminator mismatch: expected {expected:?}, got {actual:?}")]
    ProtocolDiscriminatorMismatch {
        expected: ProtocolDiscriminator,
        actual: ProtocolDiscriminator,
    },

    #[error("Invalid security header type: 0x{0:X}")]
    InvalidSecurityHeaderType(u8),

    #[error("Security protected message ({0:?}) where a plain header was expected")]
    SecurityProtected(SecurityHeaderType),

    #[error("Invalid message type: 0x{0:02X}")]
    InvalidMessageType(u8),

    #[error("Unexpected message type: expected {expected:?}, got {actual:?}")]
    UnexpectedMessageType {
        expected: EmmMessageType,
        actual: EmmMessageType,
    },
}

/// Plain EMM message header
///
/// The security header type is always "not protected". Protected messages
/// have to be unwrapped by the security layer before their inner plain
/// message reaches [`PlainEmmHeader::decode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlainEmmHeader {
    /// Message type
    pub message_type: EmmMessageType,
}

impl PlainEmmHeader {
    /// Size of the plain EMM header in bytes
    pub const SIZE: usize = 2;

    /// Create a new unprotected header
    pub fn new(message_type: EmmMessageType) -> Self {
        Self { message_type }
    }

    /// Decode a plain EMM header
    pub fn decode<B: Buf>(buf: &mut B) -> Result<Self, HeaderError> {
        if buf.remaining() < Self::SIZE {
            return Err(HeaderError::BufferTooShort {
                expected: Self::SIZE,
                actual: buf.remaining(),
            });
        }

        let octet = buf.get_u8();
        let pd = ProtocolDiscriminator::try_from(octet & 0x0F)
            .map_err(|_| HeaderError::InvalidProtocolDiscriminator(octet & 0x0F))?;
        if pd != ProtocolDiscriminator::EpsMobilityManagement {
            return Err(HeaderError::ProtocolDiscriminatorMismatch {
                expected: ProtocolDiscriminator::EpsMobilityManagement,
                actual: pd,
            });
        }

        let sht = SecurityHeaderType::try_from(octet >> 4)
            .map_err(|_| HeaderError::InvalidSecurityHeaderType(octet >> 4))?;
        if sht.is_protected() {
            return Err(HeaderError::SecurityProtected(sht));
        }

        let mt = buf.get_u8();
        let message_type =
            EmmMessageType::try_from(mt).map_err(|_| HeaderError::InvalidMessageType(mt))?;

        Ok(Self { message_type })
    }

    /// Decode a header and require a specific message type
    pub fn decode_expecting<B: Buf>(
        buf: &mut B,
        expected: EmmMessageType,
    ) -> Result<Self, HeaderError> {
        let header = Self::decode(buf)?;
        if header.message_type != expected {
            return Err(HeaderError::UnexpectedMessageType {
                expected,
                actual: header.message_type,
            });
        }
        Ok(header)
    }

    /// Encode the header
    pub fn encode<B: BufMut>(&self, buf: &mut B) {
        let sht: u8 = SecurityHeaderType::NotProtected.into();
        let pd: u8 = ProtocolDiscriminator::EpsMobilityManagement.into();
        buf.put_u8((sht << 4) | pd);
        buf.put_u8(self.message_type.into());
    }
}
