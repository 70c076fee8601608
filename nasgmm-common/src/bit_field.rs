//! Scalar field helpers for sub-octet and big-endian values.
//!
//! NAS information elements pack several small fields into one octet at
//! positions fixed by 3GPP TS 24.008. These helpers keep all of that explicit
//! shift-and-mask work in one place. Bit offsets count from the least
//! significant bit (bit 1 of a 3GPP octet diagram is offset 0 here).
//!
//! # Example
//! ```
//! use nasgmm_common::bit_field::{get_bits, put_bits};
//!
//! // CN coefficient (4 bits at offset 4) | split on CCCH (1 bit at offset 3)
//! let octet = put_bits(0x3, 4, 4) | put_bits(1, 3, 1) | put_bits(0x2, 0, 3);
//! assert_eq!(octet, 0x3A);
//! assert_eq!(get_bits(octet, 4, 4), 0x3);
//! ```

use bytes::{Buf, BufMut};

/// Returns a mask with the low `width` bits set.
///
/// `width` is clamped to 8.
#[inline]
pub const fn mask(width: u32) -> u8 {
    if width >= 8 {
        0xFF
    } else {
        ((1u16 << width) - 1) as u8
    }
}

/// Extracts a `width`-bit field starting at bit `offset` of `octet`.
#[inline]
pub const fn get_bits(octet: u8, offset: u32, width: u32) -> u8 {
    (octet >> offset) & mask(width)
}

/// Places the low `width` bits of `value` at bit `offset`.
///
/// Bits of `value` above `width` are discarded, so out-of-range field values
/// can never spill into a neighbouring field.
#[inline]
pub const fn put_bits(value: u8, offset: u32, width: u32) -> u8 {
    (value & mask(width)) << offset
}

/// Reads a big-endian `u16` from the first two bytes of `buf`.
///
/// The caller guarantees `buf.len() >= 2`.
#[inline]
pub fn read_u16_be(mut buf: &[u8]) -> u16 {
    buf.get_u16()
}

/// Reads a big-endian `u32` from the first four bytes of `buf`.
///
/// The caller guarantees `buf.len() >= 4`.
#[inline]
pub fn read_u32_be(mut buf: &[u8]) -> u32 {
    buf.get_u32()
}

/// Writes `value` big-endian into the first two bytes of `buf`.
///
/// The caller guarantees `buf.len() >= 2`.
#[inline]
pub fn write_u16_be(mut buf: &mut [u8], value: u16) {
    buf.put_u16(value);
}

/// Writes `value` big-endian into the first four bytes of `buf`.
///
/// The caller guarantees `buf.len() >= 4`.
#[inline]
pub fn write_u32_be(mut buf: &mut [u8], value: u32) {
    buf.put_u32(value);
}
