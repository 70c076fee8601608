//! NAS protocol enumerations
//!
//! Based on 3GPP TS 24.007, TS 24.008 and TS 24.301

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Protocol Discriminator (low nibble of the first octet)
/// 3GPP TS 24.007 Section 11.2.3.1.1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum ProtocolDiscriminator {
    /// EPS session management messages
    EpsSessionManagement = 0x2,
    /// EPS mobility management messages
    EpsMobilityManagement = 0x7,
    /// GPRS mobility management messages
    GprsMobilityManagement = 0x8,
}

/// Security Header Type (high nibble of the first octet)
/// 3GPP TS 24.301 Section 9.3.1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive, Default)]
#[repr(u8)]
pub enum SecurityHeaderType {
    /// Plain NAS message, not security protected
    #[default]
    NotProtected = 0x0,
    /// Integrity protected
    IntegrityProtected = 0x1,
    /// Integrity protected and ciphered
    IntegrityProtectedAndCiphered = 0x2,
    /// Integrity protected with new EPS security context
    IntegrityProtectedWithNewSecurityContext = 0x3,
    /// Integrity protected and ciphered with new EPS security context
    IntegrityProtectedAndCipheredWithNewSecurityContext = 0x4,
    /// Security header for the SERVICE REQUEST message
    ServiceRequest = 0xC,
}

impl SecurityHeaderType {
    /// Returns true if the message is security protected
    pub fn is_protected(&self) -> bool {
        !matches!(self, SecurityHeaderType::NotProtected)
    }

    /// Returns true if the message is ciphered
    pub fn is_ciphered(&self) -> bool {
        matches!(
            self,
            SecurityHeaderType::IntegrityProtectedAndCiphered
                | SecurityHeaderType::IntegrityProtectedAndCipheredWithNewSecurityContext
        )
    }
}

/// EMM Message Type
/// 3GPP TS 24.301 Section 9.8
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum EmmMessageType {
    // Attach / detach
    AttachRequest = 0x41,
    AttachAccept = 0x42,
    AttachComplete = 0x43,
    AttachReject = 0x44,
    DetachRequest = 0x45,
    DetachAccept = 0x46,

    // Tracking area update
    TrackingAreaUpdateRequest = 0x48,
    TrackingAreaUpdateAccept = 0x49,
    TrackingAreaUpdateComplete = 0x4A,
    TrackingAreaUpdateReject = 0x4B,

    // Service
    ExtendedServiceRequest = 0x4C,
    ServiceReject = 0x4E,

    // Identification and security
    GutiReallocationCommand = 0x50,
    GutiReallocationComplete = 0x51,
    AuthenticationRequest = 0x52,
    AuthenticationResponse = 0x53,
    AuthenticationReject = 0x54,
    IdentityRequest = 0x55,
    IdentityResponse = 0x56,
    AuthenticationFailure = 0x5C,
    SecurityModeCommand = 0x5D,
    SecurityModeComplete = 0x5E,
    SecurityModeReject = 0x5F,

    // Miscellaneous
    EmmStatus = 0x60,
    EmmInformation = 0x61,
    DownlinkNasTransport = 0x62,
    UplinkNasTransport = 0x63,
}

/// Type of identity requested in Identity type 2
/// 3GPP TS 24.008 Section 10.5.5.9
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum IdentityType2Value {
    /// IMSI
    #[default]
    Imsi = 0b001,
    /// IMEI
    Imei = 0b010,
    /// IMEISV
    Imeisv = 0b011,
    /// TMSI
    Tmsi = 0b100,
}

/// IMEISV request value
/// 3GPP TS 24.008 Section 10.5.5.10
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum ImeisvRequestValue {
    /// IMEISV not requested
    #[default]
    NotRequested = 0b000,
    /// IMEISV requested
    Requested = 0b001,
}

/// TMSI status flag
/// 3GPP TS 24.008 Section 10.5.5.4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum TmsiStatusValue {
    /// No valid TMSI available
    #[default]
    NoValidTmsi = 0,
    /// Valid TMSI available
    ValidTmsi = 1,
}

/// Voice domain preference for E-UTRAN
/// 3GPP TS 24.008 Section 10.5.5.28
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum VoiceDomainForEutran {
    /// CS Voice only
    #[default]
    CsVoiceOnly = 0b00,
    /// IMS PS Voice only
    ImsPsVoiceOnly = 0b01,
    /// CS voice preferred, IMS PS Voice as secondary
    CsVoicePreferred = 0b10,
    /// IMS PS voice preferred, CS Voice as secondary
    ImsPsVoicePreferred = 0b11,
}

/// UE's usage setting
/// 3GPP TS 24.008 Section 10.5.5.28
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum UeUsageSetting {
    /// Voice centric
    #[default]
    VoiceCentric = 0,
    /// Data centric
    DataCentric = 1,
}
