//! GMM Information Elements
//!
//! Implementations of the GMM information elements of 3GPP TS 24.008
//! Section 10.5.5 that EMM messages reuse.
//!
//! ## IE shapes
//!
//! - Half-octet, IEI in the high nibble when tagged - [`type1`]
//! - Fixed-length body, separate IEI octet when tagged - [`fixed`]
//! - Length-prefixed body, separate IEI octet when tagged - [`tlv`]

pub mod fixed;
pub mod tlv;
pub mod type1;

pub use fixed::{DrxParameter, PtmsiSignature};
pub use tlv::{MsNetworkCapability, VoiceDomainPreferenceAndUeUsageSetting};
pub use type1::{IdentityType2, ImeisvRequest, TmsiStatus};
