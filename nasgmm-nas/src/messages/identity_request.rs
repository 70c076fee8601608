//! IDENTITY REQUEST (3GPP TS 24.301 Section 8.2.18)
//!
//! ```text
//! +--------+--------+------------------+------------------+
//! | header (2 octets)| spare half octet | identity type 2  |
//! +--------+--------+------------------+------------------+
//! ```

use bytes::BufMut;
use nasgmm_common::logging::{log_nas_message, Direction};

use crate::codec::{commit_scratch, put_positional, take_positional, CodecResult};
use crate::enums::{EmmMessageType, IdentityType2Value};
use crate::header::PlainEmmHeader;
use crate::ies::IdentityType2;

/// IDENTITY REQUEST message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IdentityRequest {
    /// Requested identity
    pub identity_type: IdentityType2,
}

impl IdentityRequest {
    /// Encoded length
    pub const LENGTH: usize = PlainEmmHeader::SIZE + 1;

    /// Create an IDENTITY REQUEST for the given identity
    pub fn new(identity: IdentityType2Value) -> Self {
        Self {
            identity_type: identity.into(),
        }
    }

    /// Decode a complete message
    pub fn decode(buf: &[u8]) -> CodecResult<Self> {
        let mut cursor = buf;
        PlainEmmHeader::decode_expecting(&mut cursor, EmmMessageType::IdentityRequest)?;
        // Spare half octet shares the octet; IdentityType2 only reads the low nibble
        let identity_type = take_positional::<IdentityType2>(&mut cursor)?;
        log_nas_message(Direction::Rx, "Identity Request", buf);
        Ok(Self { identity_type })
    }

    /// Encode the message, returning the number of bytes written
    pub fn encode<B: BufMut>(&self, buf: &mut B) -> CodecResult<usize> {
        let mut out = Vec::with_capacity(Self::LENGTH);
        PlainEmmHeader::new(EmmMessageType::IdentityRequest).encode(&mut out);
        put_positional(&mut out, &self.identity_type)?;
        commit_scratch(buf, &out)?;
        log_nas_message(Direction::Tx, "Identity Request", &out);
        Ok(out.len())
    }
}
