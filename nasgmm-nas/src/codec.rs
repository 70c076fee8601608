//! IE encoding/decoding traits and the shared guard discipline
//!
//! Every information element codec in this crate goes through the same
//! checks before it touches a byte:
//!
//! - decode: enough input for the minimum encoding, then the optional IEI
//!   (full octet or high nibble), then the declared length of a TLV body
//! - encode: enough output capacity for the whole IE before anything is written
//!
//! Length-prefixed encoders reserve their length octet with a [`LengthSlot`]
//! and commit it once the body is complete.
//!
//! # Traits
//!
//! - [`TaggedIe`]: IEs that may appear with or without their IEI
//! - [`PositionalIe`]: IEs that are only ever mandatory and untagged
//!
//! # Example
//!
//! ```rust
//! use nasgmm_nas::codec::TaggedIe;
//! use nasgmm_nas::ies::DrxParameter;
//!
//! let drx = DrxParameter::new(0x05, 0x3, 1, 0x2);
//! let mut buf = [0u8; DrxParameter::MAX_LENGTH];
//! let n = drx.encode(&mut buf, Some(0x5E)).unwrap();
//! assert_eq!(&buf[..n], &[0x5E, 0x05, 0x3A]);
//!
//! let (decoded, consumed) = DrxParameter::decode(&buf, Some(0x5E)).unwrap();
//! assert_eq!((decoded, consumed), (drx, 3));
//! ```

use bytes::BufMut;
use nasgmm_common::logging::{log_nas_ie, Direction};
use thiserror::Error;

use crate::header::HeaderError;

/// Errors that can occur during NAS encoding/decoding
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Not enough input for decoding, or not enough room for encoding
    #[error("Buffer too short: expected at least {expected} bytes, got {actual}")]
    BufferTooShort {
        /// Required bytes
        expected: usize,
        /// Bytes available
        actual: usize,
    },

    /// The octet at the IEI position does not carry the expected IEI
    #[error("Unexpected IEI: expected 0x{expected:02X}, got 0x{actual:02X}")]
    UnexpectedIei {
        /// Expected IEI (after masking)
        expected: u8,
        /// IEI found on the wire (after masking)
        actual: u8,
    },

    /// A length octet is inconsistent with the input or the IE definition
    #[error("Length mismatch: declared {declared} bytes, {available} allowed")]
    LengthMismatch {
        /// Length declared by the length octet (or computed on encode)
        declared: usize,
        /// Bytes actually available or permitted
        available: usize,
    },

    /// Internal contract breach in an encoder; never caused by wire data
    #[error("Invariant violation: {0}")]
    InvariantViolation(&'static str),

    /// Message header error
    #[error(transparent)]
    Header(#[from] HeaderError),
}

/// Result type for NAS codec operations
pub type CodecResult<T> = Result<T, CodecError>;

/// Largest IE any encoder in this crate can emit (IEI + length + 255 octets).
pub const MAX_IE_SCRATCH: usize = 2 + u8::MAX as usize;

// ============================================================================
// Guards
// ============================================================================

/// Fails with [`CodecError::BufferTooShort`] unless `buf` holds `min` bytes.
#[inline]
pub fn check_decode_len(buf: &[u8], min: usize) -> CodecResult<()> {
    if buf.len() < min {
        return Err(CodecError::BufferTooShort {
            expected: min,
            actual: buf.len(),
        });
    }
    Ok(())
}

/// Fails with [`CodecError::BufferTooShort`] unless `buf` can take `required` bytes.
#[inline]
pub fn check_encode_capacity(buf: &[u8], required: usize) -> CodecResult<()> {
    check_decode_len(buf, required)
}

/// Compares `octet` with `expected` under `mask`.
///
/// `mask` is `0xFF` for full-octet IEIs and `0xF0` for half-octet ones.
#[inline]
pub fn check_iei(octet: u8, expected: u8, mask: u8) -> CodecResult<()> {
    if octet & mask != expected & mask {
        return Err(CodecError::UnexpectedIei {
            expected: expected & mask,
            actual: octet & mask,
        });
    }
    Ok(())
}

/// Fails with [`CodecError::LengthMismatch`] when `declared` exceeds `available`.
#[inline]
pub fn check_ie_length(declared: usize, available: usize) -> CodecResult<()> {
    if declared > available {
        return Err(CodecError::LengthMismatch {
            declared,
            available,
        });
    }
    Ok(())
}

/// Number of octets an IEI occupies when it has its own octet.
#[inline]
pub const fn iei_len(iei: Option<u8>) -> usize {
    if iei.is_some() {
        1
    } else {
        0
    }
}

// ============================================================================
// Length backpatch
// ============================================================================

/// A reserved length octet awaiting its value.
///
/// Created after the IEI (if any) has been written, committed once the
/// whole body is in place. Dropping it uncommitted leaves the encode
/// incomplete, so encoders must either commit or return an error.
#[derive(Debug)]
#[must_use = "a reserved length octet must be committed"]
pub struct LengthSlot {
    index: usize,
}

impl LengthSlot {
    /// Reserves the octet at `*encoded` and advances past it.
    pub fn reserve(encoded: &mut usize) -> Self {
        let slot = Self { index: *encoded };
        *encoded += 1;
        slot
    }

    /// Index of the reserved octet.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Writes the body length (`encoded - index - 1`) into the reserved octet.
    ///
    /// # Returns
    /// * `Ok(body_len)` on success
    /// * `Err(CodecError::LengthMismatch)` if the body exceeds 255 octets
    /// * `Err(CodecError::InvariantViolation)` if the slot lies outside `buf`
    ///   or past `encoded`
    pub fn commit(self, buf: &mut [u8], encoded: usize) -> CodecResult<u8> {
        if encoded <= self.index || encoded > buf.len() {
            return Err(CodecError::InvariantViolation(
                "length slot committed outside the encoded region",
            ));
        }
        let body = encoded - self.index - 1;
        let len = u8::try_from(body).map_err(|_| CodecError::LengthMismatch {
            declared: body,
            available: u8::MAX as usize,
        })?;
        buf[self.index] = len;
        Ok(len)
    }
}

// ============================================================================
// IE traits
// ============================================================================

/// An information element that may be sent with or without its IEI.
///
/// Whether the IEI is present is decided by the message, so every call takes
/// `iei: Option<u8>`:
/// - `None`: the IE is mandatory at a fixed position and carries no IEI
/// - `Some(iei)`: the IE carries `iei`; decode checks it under
///   [`IEI_MASK`](Self::IEI_MASK), encode writes it
///
/// Messages normally pass `Some(Self::IEI)`.
pub trait TaggedIe: Sized {
    /// Human readable IE name for diagnostics
    const NAME: &'static str;
    /// Standard IEI
    const IEI: u8;
    /// Mask applied when matching the IEI (`0xF0` for half-octet IEIs)
    const IEI_MASK: u8 = 0xFF;
    /// Minimum encoded length without IEI
    const MIN_LENGTH: usize;
    /// Maximum encoded length with IEI
    const MAX_LENGTH: usize;

    /// Decode from the start of `buf`.
    ///
    /// # Returns
    /// * `Ok((value, consumed))` on success
    /// * `Err(CodecError)` if the input is short, mistagged or malformed
    fn decode(buf: &[u8], iei: Option<u8>) -> CodecResult<(Self, usize)>;

    /// Encode to the start of `buf`.
    ///
    /// # Returns
    /// * `Ok(written)` on success
    /// * `Err(CodecError::BufferTooShort)` if `buf` cannot hold the IE;
    ///   nothing is written in that case
    fn encode(&self, buf: &mut [u8], iei: Option<u8>) -> CodecResult<usize>;
}

/// An information element that only ever appears untagged at a fixed
/// position (e.g. Identity type 2). There is no way to ask for its IEI.
pub trait PositionalIe: Sized {
    /// Human readable IE name for diagnostics
    const NAME: &'static str;
    /// Encoded length
    const LENGTH: usize;

    /// Decode from the start of `buf`.
    fn decode(buf: &[u8]) -> CodecResult<(Self, usize)>;

    /// Encode to the start of `buf`.
    fn encode(&self, buf: &mut [u8]) -> CodecResult<usize>;
}

// ============================================================================
// Cursor helpers
// ============================================================================

/// Decodes a [`TaggedIe`] at `cursor` and advances the cursor past it.
///
/// The cursor is left untouched on error.
pub fn take_ie<T: TaggedIe>(cursor: &mut &[u8], iei: Option<u8>) -> CodecResult<T> {
    let (value, consumed) = T::decode(cursor, iei)?;
    log_nas_ie(Direction::Rx, T::NAME, &cursor[..consumed]);
    *cursor = &cursor[consumed..];
    Ok(value)
}

/// Decodes a [`PositionalIe`] at `cursor` and advances the cursor past it.
pub fn take_positional<T: PositionalIe>(cursor: &mut &[u8]) -> CodecResult<T> {
    let (value, consumed) = T::decode(cursor)?;
    log_nas_ie(Direction::Rx, T::NAME, &cursor[..consumed]);
    *cursor = &cursor[consumed..];
    Ok(value)
}

/// Encodes a [`TaggedIe`] and appends it to `out`.
///
/// The IE is built in a scratch buffer first, so `out` only grows when the
/// whole IE, length octet included, was encoded successfully.
pub fn put_ie<T: TaggedIe, B: BufMut>(out: &mut B, ie: &T, iei: Option<u8>) -> CodecResult<usize> {
    let mut scratch = [0u8; MAX_IE_SCRATCH];
    let written = ie.encode(&mut scratch, iei)?;
    log_nas_ie(Direction::Tx, T::NAME, &scratch[..written]);
    commit_scratch(out, &scratch[..written])?;
    Ok(written)
}

/// Encodes a [`PositionalIe`] and appends it to `out`.
pub fn put_positional<T: PositionalIe, B: BufMut>(out: &mut B, ie: &T) -> CodecResult<usize> {
    let mut scratch = [0u8; MAX_IE_SCRATCH];
    let written = ie.encode(&mut scratch)?;
    log_nas_ie(Direction::Tx, T::NAME, &scratch[..written]);
    commit_scratch(out, &scratch[..written])?;
    Ok(written)
}

/// Appends `encoded` to `out` only if all of it fits.
pub(crate) fn commit_scratch<B: BufMut>(out: &mut B, encoded: &[u8]) -> CodecResult<()> {
    if out.remaining_mut() < encoded.len() {
        return Err(CodecError::BufferTooShort {
            expected: encoded.len(),
            actual: out.remaining_mut(),
        });
    }
    out.put_slice(encoded);
    Ok(())
}
