//! DETACH ACCEPT (3GPP TS 24.301 Section 8.2.10)
//!
//! Header only. Sent by the network in reply to a UE initiated detach and
//! by the UE in reply to a network initiated one.

use bytes::BufMut;
use nasgmm_common::logging::{log_nas_message, Direction};

use crate::codec::{commit_scratch, CodecResult};
use crate::enums::EmmMessageType;
use crate::header::PlainEmmHeader;

/// DETACH ACCEPT message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DetachAccept;

impl DetachAccept {
    /// Encoded length
    pub const LENGTH: usize = PlainEmmHeader::SIZE;

    /// Create a DETACH ACCEPT
    pub fn new() -> Self {
        Self
    }

    /// Decode a complete message
    pub fn decode(buf: &[u8]) -> CodecResult<Self> {
        let mut cursor = buf;
        PlainEmmHeader::decode_expecting(&mut cursor, EmmMessageType::DetachAccept)?;
        if !cursor.is_empty() {
            tracing::debug!(trailing = cursor.len(), "ignoring octets after DETACH ACCEPT");
        }
        log_nas_message(Direction::Rx, "Detach Accept", buf);
        Ok(Self)
    }

    /// Encode the message, returning the number of bytes written
    pub fn encode<B: BufMut>(&self, buf: &mut B) -> CodecResult<usize> {
        let mut out = Vec::with_capacity(Self::LENGTH);
        PlainEmmHeader::new(EmmMessageType::DetachAccept).encode(&mut out);
        commit_scratch(buf, &out)?;
        log_nas_message(Direction::Tx, "Detach Accept", &out);
        Ok(out.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::CodecError;
    use crate::header::HeaderError;

    #[test]
    fn test_detach_accept_encode() {
        let mut buf = Vec::new();
        assert_eq!(DetachAccept::new().encode(&mut buf), Ok(2));
        assert_eq!(buf, vec![0x07, 0x46]);
    }

    #[test]
    fn test_detach_accept_decode() {
        let msg = DetachAccept::decode(&[0x07, 0x46]).unwrap();
        assert_eq!(msg, DetachAccept::new());
    }

    #[test]
    fn test_detach_accept_wrong_type() {
        assert!(matches!(
            DetachAccept::decode(&[0x07, 0x55, 0x01]),
            Err(CodecError::Header(HeaderError::UnexpectedMessageType { .. }))
        ));
    }

    #[test]
    fn test_detach_accept_protected_rejected() {
        assert!(matches!(
            DetachAccept::decode(&[0x27, 0x46]),
            Err(CodecError::Header(HeaderError::SecurityProtected(_)))
        ));
    }

    #[test]
    fn test_detach_accept_truncated() {
        assert!(matches!(
            DetachAccept::decode(&[0x07]),
            Err(CodecError::Header(HeaderError::BufferTooShort { .. }))
        ));
    }
}
