//! Length-prefixed Information Elements
//!
//! Layout is an optional IEI octet, one length octet, then the body. The
//! length octet counts body octets only.
//!
//! Based on 3GPP TS 24.008 Section 10.5.5.

use nasgmm_common::bit_field::{get_bits, put_bits};

use crate::codec::{
    check_decode_len, check_encode_capacity, check_iei, check_ie_length, iei_len, CodecError,
    CodecResult, LengthSlot, TaggedIe,
};
use crate::enums::{UeUsageSetting, VoiceDomainForEutran};

/// Validates the prefix of a length-prefixed IE and returns its body.
///
/// `body_range` is the inclusive range of legal body lengths.
fn decode_tlv_body(
    buf: &[u8],
    iei: Option<u8>,
    body_range: (usize, usize),
) -> CodecResult<(&[u8], usize)> {
    let offset = iei_len(iei);
    check_decode_len(buf, offset + 1 + body_range.0)?;
    if let Some(iei) = iei {
        check_iei(buf[0], iei, 0xFF)?;
    }

    let ielen = buf[offset] as usize;
    let body_start = offset + 1;
    check_ie_length(ielen, buf.len() - body_start)?;
    if ielen < body_range.0 || ielen > body_range.1 {
        return Err(CodecError::LengthMismatch {
            declared: ielen,
            available: body_range.1,
        });
    }

    Ok((&buf[body_start..body_start + ielen], body_start + ielen))
}

// ============================================================================
// MS network capability (10.5.5.12)
// ============================================================================

/// MS network capability
///
/// The body is 1 to 8 octets. Only the first three are interpreted; fields
/// of octets the sender left out stay zero.
///
/// ```text
/// octet 1: GEA1 | SM-DC | SM-GC | UCS2 | SS-SI (2) | SoLSA | REVLI
/// octet 2: PFC  | GEA2..GEA7 (6)                            | LCS-VA
/// octet 3: PS-HO UTRAN | PS-HO E-UTRAN | EMM-CPC | ISR | SRVCC | EPC | NF | GERAN-NS
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MsNetworkCapability {
    // octet 1
    /// GEA/1 supported
    pub gea1: u8,
    /// SM capabilities via dedicated channels
    pub sm_dedicated: u8,
    /// SM capabilities via GPRS channels
    pub sm_gprs: u8,
    /// UCS2 support
    pub ucs2: u8,
    /// SS screening indicator, 0..=3
    pub ss_screening: u8,
    /// SoLSA capability
    pub solsa: u8,
    /// Revision level indicator
    pub revision_level: u8,

    // octet 2
    /// PFC feature mode
    pub pfc: u8,
    /// GEA/2 to GEA/7 bitmap (GEA/2 in bit 5), 0..=63
    pub extended_gea: u8,
    /// LCS VA capability
    pub lcs_va: u8,

    // octet 3
    /// PS inter-RAT HO from GERAN to UTRAN Iu mode
    pub ps_ho_utran: u8,
    /// PS inter-RAT HO from GERAN to E-UTRAN S1 mode
    pub ps_ho_eutran: u8,
    /// EMM combined procedures capability
    pub emm_combined_procedures: u8,
    /// ISR support
    pub isr: u8,
    /// SRVCC to GERAN/UTRAN capability
    pub srvcc: u8,
    /// EPC capability
    pub epc: u8,
    /// NF capability
    pub notification: u8,
    /// GERAN network sharing capability
    pub geran_network_sharing: u8,
}

impl MsNetworkCapability {
    /// Largest body accepted on decode
    pub const MAX_BODY_LENGTH: usize = 8;
    /// Body length written on encode
    pub const ENCODED_BODY_LENGTH: usize = 3;

    fn apply_octet1(&mut self, b: u8) {
        self.gea1 = get_bits(b, 7, 1);
        self.sm_dedicated = get_bits(b, 6, 1);
        self.sm_gprs = get_bits(b, 5, 1);
        self.ucs2 = get_bits(b, 4, 1);
        self.ss_screening = get_bits(b, 2, 2);
        self.solsa = get_bits(b, 1, 1);
        self.revision_level = get_bits(b, 0, 1);
    }

    fn apply_octet2(&mut self, b: u8) {
        self.pfc = get_bits(b, 7, 1);
        self.extended_gea = get_bits(b, 1, 6);
        self.lcs_va = get_bits(b, 0, 1);
    }

    fn apply_octet3(&mut self, b: u8) {
        self.ps_ho_utran = get_bits(b, 7, 1);
        self.ps_ho_eutran = get_bits(b, 6, 1);
        self.emm_combined_procedures = get_bits(b, 5, 1);
        self.isr = get_bits(b, 4, 1);
        self.srvcc = get_bits(b, 3, 1);
        self.epc = get_bits(b, 2, 1);
        self.notification = get_bits(b, 1, 1);
        self.geran_network_sharing = get_bits(b, 0, 1);
    }

    fn octets(&self) -> [u8; Self::ENCODED_BODY_LENGTH] {
        [
            put_bits(self.gea1, 7, 1)
                | put_bits(self.sm_dedicated, 6, 1)
                | put_bits(self.sm_gprs, 5, 1)
                | put_bits(self.ucs2, 4, 1)
                | put_bits(self.ss_screening, 2, 2)
                | put_bits(self.solsa, 1, 1)
                | put_bits(self.revision_level, 0, 1),
            put_bits(self.pfc, 7, 1) | put_bits(self.extended_gea, 1, 6) | put_bits(self.lcs_va, 0, 1),
            put_bits(self.ps_ho_utran, 7, 1)
                | put_bits(self.ps_ho_eutran, 6, 1)
                | put_bits(self.emm_combined_procedures, 5, 1)
                | put_bits(self.isr, 4, 1)
                | put_bits(self.srvcc, 3, 1)
                | put_bits(self.epc, 2, 1)
                | put_bits(self.notification, 1, 1)
                | put_bits(self.geran_network_sharing, 0, 1),
        ]
    }
}

impl TaggedIe for MsNetworkCapability {
    const NAME: &'static str = "MS network capability";
    const IEI: u8 = 0x31;
    const MIN_LENGTH: usize = 2;
    const MAX_LENGTH: usize = 2 + Self::MAX_BODY_LENGTH;

    fn decode(buf: &[u8], iei: Option<u8>) -> CodecResult<(Self, usize)> {
        let (body, consumed) = decode_tlv_body(buf, iei, (1, Self::MAX_BODY_LENGTH))?;
        tracing::trace!(ie = Self::NAME, ielen = body.len(), "decoding");

        let mut ie = Self::default();
        ie.apply_octet1(body[0]);
        if body.len() > 1 {
            ie.apply_octet2(body[1]);
            if body.len() > 2 {
                ie.apply_octet3(body[2]);
            }
        }
        if body.len() > Self::ENCODED_BODY_LENGTH {
            tracing::trace!(
                ie = Self::NAME,
                skipped = body.len() - Self::ENCODED_BODY_LENGTH,
                "uninterpreted octets"
            );
        }

        Ok((ie, consumed))
    }

    fn encode(&self, buf: &mut [u8], iei: Option<u8>) -> CodecResult<usize> {
        let body = self.octets();
        check_encode_capacity(buf, iei_len(iei) + 1 + body.len())?;

        let mut encoded = 0;
        if let Some(iei) = iei {
            buf[encoded] = iei;
            encoded += 1;
        }
        let slot = LengthSlot::reserve(&mut encoded);
        buf[encoded..encoded + body.len()].copy_from_slice(&body);
        encoded += body.len();
        slot.commit(buf, encoded)?;

        Ok(encoded)
    }
}

// ============================================================================
// Voice domain preference and UE's usage setting (10.5.5.28)
// ============================================================================

/// Voice domain preference and UE's usage setting
///
/// ```text
///   8   7   6   5   4   3   2   1
/// +-------------------+---+-------+
/// |       spare       | U |  VDP  |
/// +-------------------+---+-------+
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VoiceDomainPreferenceAndUeUsageSetting {
    /// Voice domain preference for E-UTRAN, 0..=3
    pub voice_domain_for_eutran: u8,
    /// UE's usage setting, 0..=1
    pub ue_usage_setting: u8,
}

impl VoiceDomainPreferenceAndUeUsageSetting {
    /// Body length in octets
    pub const BODY_LENGTH: usize = 1;

    /// Create a new IE
    pub fn new(voice_domain_for_eutran: u8, ue_usage_setting: u8) -> Self {
        Self {
            voice_domain_for_eutran,
            ue_usage_setting,
        }
    }

    /// Typed view of the voice domain preference
    pub fn voice_domain(&self) -> VoiceDomainForEutran {
        VoiceDomainForEutran::try_from(get_bits(self.voice_domain_for_eutran, 0, 2))
            .unwrap_or_default()
    }

    /// Typed view of the usage setting
    pub fn usage(&self) -> UeUsageSetting {
        UeUsageSetting::try_from(get_bits(self.ue_usage_setting, 0, 1)).unwrap_or_default()
    }
}

impl From<(VoiceDomainForEutran, UeUsageSetting)> for VoiceDomainPreferenceAndUeUsageSetting {
    fn from((voice_domain, usage): (VoiceDomainForEutran, UeUsageSetting)) -> Self {
        Self::new(voice_domain.into(), usage.into())
    }
}

impl TaggedIe for VoiceDomainPreferenceAndUeUsageSetting {
    const NAME: &'static str = "Voice domain preference and UE's usage setting";
    const IEI: u8 = 0x5D;
    const MIN_LENGTH: usize = 1 + Self::BODY_LENGTH;
    const MAX_LENGTH: usize = 2 + Self::BODY_LENGTH;

    fn decode(buf: &[u8], iei: Option<u8>) -> CodecResult<(Self, usize)> {
        let (body, consumed) =
            decode_tlv_body(buf, iei, (Self::BODY_LENGTH, Self::BODY_LENGTH))?;
        let ie = Self {
            voice_domain_for_eutran: get_bits(body[0], 0, 2),
            ue_usage_setting: get_bits(body[0], 2, 1),
        };
        tracing::trace!(ie = Self::NAME, value = ?ie, "decoded");
        Ok((ie, consumed))
    }

    fn encode(&self, buf: &mut [u8], iei: Option<u8>) -> CodecResult<usize> {
        check_encode_capacity(buf, iei_len(iei) + 1 + Self::BODY_LENGTH)?;

        let mut encoded = 0;
        if let Some(iei) = iei {
            buf[encoded] = iei;
            encoded += 1;
        }
        let slot = LengthSlot::reserve(&mut encoded);
        buf[encoded] = put_bits(self.ue_usage_setting, 2, 1) | put_bits(self.voice_domain_for_eutran, 0, 2);
        encoded += 1;
        slot.commit(buf, encoded)?;

        Ok(encoded)
    }
}
