//! GMM/EMM NAS information element codec
//!
//! Decoding and encoding of the 3GPP TS 24.008 GMM information elements
//! used by EPS mobility management (3GPP TS 24.301) messages.
//!
//! # Overview
//!
//! Every IE codec returns the number of octets it consumed or produced so a
//! message assembler can walk a buffer IE by IE. Whether an IE carries its
//! IEI is decided by the message, not by the IE, so optionally tagged IEs
//! take `iei: Option<u8>` on every call. IEs that are never tagged implement
//! [`PositionalIe`] instead and have no IEI argument at all.
//!
//! Codecs never read past their input, never write partially into a buffer
//! that is too small, and report every wire problem as a [`CodecError`].
//!
//! # Example
//!
//! ```rust
//! use bytes::BytesMut;
//! use nasgmm_nas::codec::{put_ie, take_ie, TaggedIe};
//! use nasgmm_nas::ies::{TmsiStatus, VoiceDomainPreferenceAndUeUsageSetting};
//!
//! let mut out = BytesMut::new();
//! put_ie(&mut out, &TmsiStatus::new(1), Some(TmsiStatus::IEI)).unwrap();
//! put_ie(&mut out, &VoiceDomainPreferenceAndUeUsageSetting::new(2, 1), None).unwrap();
//! assert_eq!(&out[..], &[0x91, 0x01, 0x06]);
//!
//! let mut cursor = &out[..];
//! let tmsi: TmsiStatus = take_ie(&mut cursor, Some(TmsiStatus::IEI)).unwrap();
//! let vdp: VoiceDomainPreferenceAndUeUsageSetting = take_ie(&mut cursor, None).unwrap();
//! assert_eq!(tmsi.tmsi_status, 1);
//! assert_eq!(vdp.voice_domain_for_eutran, 2);
//! assert!(cursor.is_empty());
//! ```

pub mod codec;
pub mod enums;
pub mod header;
pub mod ies;
pub mod messages;
pub mod sap;

#[cfg(test)]
mod capture_tests;

pub use codec::{CodecError, CodecResult, LengthSlot, PositionalIe, TaggedIe};
pub use enums::{
    EmmMessageType, IdentityType2Value, ImeisvRequestValue, ProtocolDiscriminator,
    SecurityHeaderType, TmsiStatusValue, UeUsageSetting, VoiceDomainForEutran,
};
pub use header::{HeaderError, PlainEmmHeader};
pub use ies::{
    DrxParameter, IdentityType2, ImeisvRequest, MsNetworkCapability, PtmsiSignature, TmsiStatus,
    VoiceDomainPreferenceAndUeUsageSetting,
};
pub use messages::{DetachAccept, IdentityRequest};
