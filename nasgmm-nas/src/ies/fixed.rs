//! Fixed-length Information Elements
//!
//! These IEs have a body of known size preceded, when tagged, by a full
//! IEI octet. There is no length octet.
//!
//! Based on 3GPP TS 24.008 Section 10.5.5.

use nasgmm_common::bit_field::{
    get_bits, put_bits, read_u16_be, read_u32_be, write_u16_be, write_u32_be,
};

use crate::codec::{
    check_decode_len, check_encode_capacity, check_iei, iei_len, CodecResult, TaggedIe,
};

/// Checks input length and the optional IEI octet; returns the body offset.
fn decode_fixed_prefix(buf: &[u8], iei: Option<u8>, body_len: usize) -> CodecResult<usize> {
    let offset = iei_len(iei);
    check_decode_len(buf, offset + body_len)?;
    if let Some(iei) = iei {
        check_iei(buf[0], iei, 0xFF)?;
    }
    Ok(offset)
}

/// Checks output capacity and writes the optional IEI octet; returns the body offset.
fn encode_fixed_prefix(buf: &mut [u8], iei: Option<u8>, body_len: usize) -> CodecResult<usize> {
    let offset = iei_len(iei);
    check_encode_capacity(buf, offset + body_len)?;
    if let Some(iei) = iei {
        buf[0] = iei;
    }
    Ok(offset)
}

// ============================================================================
// DRX parameter (10.5.5.6)
// ============================================================================

/// DRX parameter
///
/// ```text
///   8   7   6   5   4   3   2   1
/// +-------------------------------+
/// |   SPLIT PG CYCLE CODE         |  octet 1
/// +---------------+---+-----------+
/// | CN coefficient| S | non-DRX   |  octet 2
/// +---------------+---+-----------+
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrxParameter {
    /// SPLIT PG CYCLE CODE, full octet
    pub split_pg_cycle_code: u8,
    /// CN specific DRX cycle length coefficient, 0..=15
    pub cn_coefficient: u8,
    /// SPLIT on CCCH, 0..=1
    pub split_on_ccch: u8,
    /// Non-DRX timer, 0..=7
    pub non_drx_timer: u8,
}

impl DrxParameter {
    /// Body length in octets
    pub const BODY_LENGTH: usize = 2;

    /// Create a new DRX parameter IE
    pub fn new(split_pg_cycle_code: u8, cn_coefficient: u8, split_on_ccch: u8, non_drx_timer: u8) -> Self {
        Self {
            split_pg_cycle_code,
            cn_coefficient,
            split_on_ccch,
            non_drx_timer,
        }
    }
}

impl TaggedIe for DrxParameter {
    const NAME: &'static str = "DRX parameter";
    const IEI: u8 = 0x5C;
    const MIN_LENGTH: usize = Self::BODY_LENGTH;
    const MAX_LENGTH: usize = Self::BODY_LENGTH + 1;

    fn decode(buf: &[u8], iei: Option<u8>) -> CodecResult<(Self, usize)> {
        let offset = decode_fixed_prefix(buf, iei, Self::BODY_LENGTH)?;
        let [octet1, octet2] = read_u16_be(&buf[offset..]).to_be_bytes();
        let ie = Self {
            split_pg_cycle_code: octet1,
            cn_coefficient: get_bits(octet2, 4, 4),
            split_on_ccch: get_bits(octet2, 3, 1),
            non_drx_timer: get_bits(octet2, 0, 3),
        };
        tracing::trace!(ie = Self::NAME, value = ?ie, "decoded");
        Ok((ie, offset + Self::BODY_LENGTH))
    }

    fn encode(&self, buf: &mut [u8], iei: Option<u8>) -> CodecResult<usize> {
        let offset = encode_fixed_prefix(buf, iei, Self::BODY_LENGTH)?;
        let octet2 = put_bits(self.cn_coefficient, 4, 4)
            | put_bits(self.split_on_ccch, 3, 1)
            | put_bits(self.non_drx_timer, 0, 3);
        write_u16_be(
            &mut buf[offset..],
            u16::from_be_bytes([self.split_pg_cycle_code, octet2]),
        );
        Ok(offset + Self::BODY_LENGTH)
    }
}

// ============================================================================
// P-TMSI signature (10.5.5.8)
// ============================================================================

/// P-TMSI signature
///
/// Carried as a big-endian 32-bit field; the signature itself is 24 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PtmsiSignature {
    /// Signature value
    pub value: u32,
}

impl PtmsiSignature {
    /// Body length in octets
    pub const BODY_LENGTH: usize = 4;

    /// Create a new P-TMSI signature IE
    pub fn new(value: u32) -> Self {
        Self { value }
    }
}

impl TaggedIe for PtmsiSignature {
    const NAME: &'static str = "P-TMSI signature";
    const IEI: u8 = 0x19;
    const MIN_LENGTH: usize = Self::BODY_LENGTH;
    const MAX_LENGTH: usize = Self::BODY_LENGTH + 1;

    fn decode(buf: &[u8], iei: Option<u8>) -> CodecResult<(Self, usize)> {
        let offset = decode_fixed_prefix(buf, iei, Self::BODY_LENGTH)?;
        let ie = Self::new(read_u32_be(&buf[offset..]));
        tracing::trace!(ie = Self::NAME, value = ie.value, "decoded");
        Ok((ie, offset + Self::BODY_LENGTH))
    }

    fn encode(&self, buf: &mut [u8], iei: Option<u8>) -> CodecResult<usize> {
        let offset = encode_fixed_prefix(buf, iei, Self::BODY_LENGTH)?;
        write_u32_be(&mut buf[offset..], self.value);
        Ok(offset + Self::BODY_LENGTH)
    }
}
