//! Half-octet Information Elements
//!
//! Each of these IEs fits in one octet. The value sits in the low bits and,
//! when the IE is tagged, the IEI occupies the high nibble of the same octet.
//! Untagged, the high nibble belongs to whatever shares the octet and is
//! neither checked on decode nor written on encode.
//!
//! Based on 3GPP TS 24.008 Section 10.5.5.

use nasgmm_common::bit_field::{get_bits, put_bits};

use crate::codec::{
    check_decode_len, check_encode_capacity, check_iei, CodecResult, PositionalIe, TaggedIe,
};
use crate::enums::{IdentityType2Value, ImeisvRequestValue, TmsiStatusValue};

const HALF_OCTET_MASK: u8 = 0xF0;

fn decode_half_octet(buf: &[u8], iei: Option<u8>) -> CodecResult<u8> {
    check_decode_len(buf, 1)?;
    if let Some(iei) = iei {
        check_iei(buf[0], iei, HALF_OCTET_MASK)?;
    }
    Ok(buf[0])
}

fn encode_half_octet(buf: &mut [u8], iei: Option<u8>, value: u8) -> CodecResult<usize> {
    check_encode_capacity(buf, 1)?;
    buf[0] = iei.map_or(0, |iei| iei & HALF_OCTET_MASK) | value;
    Ok(1)
}

// ============================================================================
// TMSI status (10.5.5.4)
// ============================================================================

/// TMSI status
///
/// ```text
///   8   7   6   5   4   3   2   1
/// +---------------+-----------+---+
/// |      IEI      |   spare   | S |
/// +---------------+-----------+---+
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TmsiStatus {
    /// TMSI flag, 0..=1
    pub tmsi_status: u8,
}

impl TmsiStatus {
    /// Create a new TMSI status IE
    pub fn new(tmsi_status: u8) -> Self {
        Self { tmsi_status }
    }

    /// Typed view of the flag
    pub fn value(&self) -> TmsiStatusValue {
        if self.tmsi_status & 0x1 == 1 {
            TmsiStatusValue::ValidTmsi
        } else {
            TmsiStatusValue::NoValidTmsi
        }
    }
}

impl From<TmsiStatusValue> for TmsiStatus {
    fn from(value: TmsiStatusValue) -> Self {
        Self::new(value.into())
    }
}

impl TaggedIe for TmsiStatus {
    const NAME: &'static str = "TMSI status";
    const IEI: u8 = 0x90;
    const IEI_MASK: u8 = HALF_OCTET_MASK;
    const MIN_LENGTH: usize = 1;
    const MAX_LENGTH: usize = 1;

    fn decode(buf: &[u8], iei: Option<u8>) -> CodecResult<(Self, usize)> {
        let octet = decode_half_octet(buf, iei)?;
        let ie = Self::new(get_bits(octet, 0, 1));
        tracing::trace!(ie = Self::NAME, tmsi_status = ie.tmsi_status, "decoded");
        Ok((ie, 1))
    }

    fn encode(&self, buf: &mut [u8], iei: Option<u8>) -> CodecResult<usize> {
        encode_half_octet(buf, iei, put_bits(self.tmsi_status, 0, 1))
    }
}

// ============================================================================
// Identity type 2 (10.5.5.9)
// ============================================================================

/// Identity type 2
///
/// Only ever sent as a mandatory half-octet, so it implements
/// [`PositionalIe`] and has no IEI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IdentityType2 {
    /// Type of identity, 0..=7
    pub type_of_identity: u8,
}

impl IdentityType2 {
    /// Create a new Identity type 2 IE
    pub fn new(type_of_identity: u8) -> Self {
        Self { type_of_identity }
    }

    /// Typed view of the identity, `None` for reserved codes
    pub fn identity(&self) -> Option<IdentityType2Value> {
        IdentityType2Value::try_from(self.type_of_identity).ok()
    }
}

impl From<IdentityType2Value> for IdentityType2 {
    fn from(value: IdentityType2Value) -> Self {
        Self::new(value.into())
    }
}

impl PositionalIe for IdentityType2 {
    const NAME: &'static str = "Identity type 2";
    const LENGTH: usize = 1;

    fn decode(buf: &[u8]) -> CodecResult<(Self, usize)> {
        let octet = decode_half_octet(buf, None)?;
        let ie = Self::new(get_bits(octet, 0, 3));
        tracing::trace!(ie = Self::NAME, type_of_identity = ie.type_of_identity, "decoded");
        Ok((ie, Self::LENGTH))
    }

    fn encode(&self, buf: &mut [u8]) -> CodecResult<usize> {
        encode_half_octet(buf, None, put_bits(self.type_of_identity, 0, 3))
    }
}

// ============================================================================
// IMEISV request (10.5.5.10)
// ============================================================================

/// IMEISV request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImeisvRequest {
    /// IMEISV request value, 0..=7
    pub imeisv_request: u8,
}

impl ImeisvRequest {
    /// Create a new IMEISV request IE
    pub fn new(imeisv_request: u8) -> Self {
        Self { imeisv_request }
    }

    /// Typed view of the request, `None` for reserved codes
    pub fn value(&self) -> Option<ImeisvRequestValue> {
        ImeisvRequestValue::try_from(self.imeisv_request).ok()
    }
}

impl From<ImeisvRequestValue> for ImeisvRequest {
    fn from(value: ImeisvRequestValue) -> Self {
        Self::new(value.into())
    }
}

impl TaggedIe for ImeisvRequest {
    const NAME: &'static str = "IMEISV request";
    const IEI: u8 = 0xC0;
    const IEI_MASK: u8 = HALF_OCTET_MASK;
    const MIN_LENGTH: usize = 1;
    const MAX_LENGTH: usize = 1;

    fn decode(buf: &[u8], iei: Option<u8>) -> CodecResult<(Self, usize)> {
        let octet = decode_half_octet(buf, iei)?;
        let ie = Self::new(get_bits(octet, 0, 3));
        tracing::trace!(ie = Self::NAME, imeisv_request = ie.imeisv_request, "decoded");
        Ok((ie, 1))
    }

    fn encode(&self, buf: &mut [u8], iei: Option<u8>) -> CodecResult<usize> {
        encode_half_octet(buf, iei, put_bits(self.imeisv_request, 0, 3))
    }
}
