//! Test fixtures
//!
//! A small optional-IE block in the style of the ATTACH REQUEST tail, plus a
//! sample configuration.

use bytes::BytesMut;
use nasgmm_nas::codec::{check_decode_len, check_ie_length, put_ie, take_ie, CodecResult, TaggedIe};
use nasgmm_nas::ies::{
    DrxParameter, MsNetworkCapability, PtmsiSignature, TmsiStatus,
    VoiceDomainPreferenceAndUeUsageSetting,
};

/// Configuration used by the cross-crate tests
pub const SAMPLE_CONFIG_YAML: &str = r#"
log_level: debug
mcc_mnc_overrides:
  - mcc: 999
    mnc: "701"
  - mcc: 1
    mnc: "02"
"#;

/// Optional IEs that may follow the mandatory part of an attach
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionalIes {
    pub ptmsi_signature: Option<PtmsiSignature>,
    pub drx_parameter: Option<DrxParameter>,
    pub ms_network_capability: Option<MsNetworkCapability>,
    pub tmsi_status: Option<TmsiStatus>,
    pub voice_domain: Option<VoiceDomainPreferenceAndUeUsageSetting>,
    /// IEIs that were not recognised and were skipped
    pub skipped: Vec<u8>,
}

/// Capabilities of a typical LTE handset
pub fn attach_capabilities() -> OptionalIes {
    OptionalIes {
        ptmsi_signature: Some(PtmsiSignature::new(0x0012_3456)),
        drx_parameter: Some(DrxParameter::new(0x0A, 0x6, 0, 0)),
        ms_network_capability: Some(MsNetworkCapability {
            gea1: 1,
            sm_dedicated: 1,
            sm_gprs: 1,
            ss_screening: 1,
            revision_level: 1,
            pfc: 1,
            extended_gea: 0b11_0000,
            ps_ho_eutran: 1,
            emm_combined_procedures: 1,
            srvcc: 1,
            epc: 1,
            ..Default::default()
        }),
        tmsi_status: Some(TmsiStatus::new(0)),
        voice_domain: Some(VoiceDomainPreferenceAndUeUsageSetting::new(3, 0)),
        skipped: Vec::new(),
    }
}

fn put_optional<T: TaggedIe>(out: &mut BytesMut, ie: &Option<T>) -> CodecResult<()> {
    if let Some(ie) = ie {
        put_ie(out, ie, Some(T::IEI))?;
    }
    Ok(())
}

/// Encodes the present IEs in message order, each with its IEI
pub fn encode_optional_ies(ies: &OptionalIes) -> CodecResult<BytesMut> {
    let mut out = BytesMut::new();
    put_optional(&mut out, &ies.ptmsi_signature)?;
    put_optional(&mut out, &ies.drx_parameter)?;
    put_optional(&mut out, &ies.ms_network_capability)?;
    put_optional(&mut out, &ies.tmsi_status)?;
    put_optional(&mut out, &ies.voice_domain)?;
    Ok(out)
}

/// Decodes optional IEs in whatever order they arrive.
///
/// Unknown IEIs are skipped following 3GPP TS 24.007 Section 11.2.4: an IEI
/// with bit 8 set is a single octet IE, anything else is followed by a
/// length octet.
pub fn dispatch_optional_ies(buf: &[u8]) -> CodecResult<OptionalIes> {
    let mut ies = OptionalIes::default();
    let mut cursor = buf;

    while let Some(&octet) = cursor.first() {
        if octet & TmsiStatus::IEI_MASK == TmsiStatus::IEI {
            ies.tmsi_status = Some(take_ie(&mut cursor, Some(TmsiStatus::IEI))?);
            continue;
        }
        match octet {
            iei if iei == PtmsiSignature::IEI => {
                ies.ptmsi_signature = Some(take_ie(&mut cursor, Some(iei))?)
            }
            iei if iei == DrxParameter::IEI => {
                ies.drx_parameter = Some(take_ie(&mut cursor, Some(iei))?)
            }
            iei if iei == MsNetworkCapability::IEI => {
                ies.ms_network_capability = Some(take_ie(&mut cursor, Some(iei))?)
            }
            iei if iei == VoiceDomainPreferenceAndUeUsageSetting::IEI => {
                ies.voice_domain = Some(take_ie(&mut cursor, Some(iei))?)
            }
            _ if octet & 0x80 != 0 => {
                ies.skipped.push(octet);
                cursor = &cursor[1..];
            }
            _ => {
                check_decode_len(cursor, 2)?;
                let len = cursor[1] as usize;
                check_ie_length(len, cursor.len() - 2)?;
                ies.skipped.push(octet);
                cursor = &cursor[2 + len..];
            }
        }
    }

    Ok(ies)
}
