//! Wire vector tests
//!
//! Byte sequences taken from 3GPP TS 24.008 / 24.301 coding examples and
//! from EMM traces, checked against every IE codec with and without IEI.

#[cfg(test)]
mod tests {
    use bytes::BytesMut;

    use crate::codec::{put_ie, take_ie, CodecError, PositionalIe, TaggedIe};
    use crate::enums::IdentityType2Value;
    use crate::ies::{
        DrxParameter, IdentityType2, ImeisvRequest, MsNetworkCapability, PtmsiSignature,
        TmsiStatus, VoiceDomainPreferenceAndUeUsageSetting,
    };
    use crate::messages::{DetachAccept, IdentityRequest};

    // ========================================================================
    // Helper Functions
    // ========================================================================

    /// Parse hex string to bytes
    fn hex_to_bytes(hex: &str) -> Vec<u8> {
        hex::decode(hex.replace(' ', "")).unwrap()
    }

    /// Encode with a generous buffer and return the written bytes
    fn encode_tagged<T: TaggedIe>(ie: &T, iei: Option<u8>) -> Vec<u8> {
        let mut buf = [0u8; 16];
        let n = ie.encode(&mut buf, iei).unwrap();
        buf[..n].to_vec()
    }

    /// Round trip through encode/decode, checking byte counts agree
    fn assert_roundtrip<T>(ie: T)
    where
        T: TaggedIe + PartialEq + std::fmt::Debug,
    {
        for iei in [None, Some(T::IEI)] {
            let encoded = encode_tagged(&ie, iei);
            let (decoded, consumed) = T::decode(&encoded, iei).unwrap();
            assert_eq!(decoded, ie, "{} iei={iei:?}", T::NAME);
            assert_eq!(consumed, encoded.len(), "{} iei={iei:?}", T::NAME);
        }
    }

    /// Every strict prefix shorter than the minimum must be rejected as short
    fn assert_short_prefixes_rejected<T: TaggedIe + std::fmt::Debug>(wire: &[u8], iei: Option<u8>, min: usize) {
        for len in 0..min {
            let result = T::decode(&wire[..len], iei);
            assert!(
                matches!(result, Err(CodecError::BufferTooShort { .. })),
                "{} len={len}: {result:?}",
                T::NAME
            );
        }
    }

    // ========================================================================
    // Scenario vectors
    // ========================================================================

    #[test]
    fn test_voice_domain_vector() {
        let ie = VoiceDomainPreferenceAndUeUsageSetting::new(2, 1);
        assert_eq!(encode_tagged(&ie, None), hex_to_bytes("0106"));
        assert_eq!(
            VoiceDomainPreferenceAndUeUsageSetting::decode(&hex_to_bytes("0106"), None),
            Ok((ie, 2))
        );
    }

    #[test]
    fn test_tmsi_status_vector() {
        assert_eq!(encode_tagged(&TmsiStatus::new(1), Some(0xA0)), hex_to_bytes("a1"));
        assert_eq!(TmsiStatus::decode(&[0xA1], Some(0xA0)), Ok((TmsiStatus::new(1), 1)));
        assert!(matches!(
            TmsiStatus::decode(&[0xA1], Some(0xB0)),
            Err(CodecError::UnexpectedIei { .. })
        ));
    }

    #[test]
    fn test_drx_parameter_vector() {
        let drx = DrxParameter::new(0x05, 0x3, 1, 0x2);
        assert_eq!(encode_tagged(&drx, Some(0x5E)), hex_to_bytes("5e 05 3a"));
        assert_eq!(DrxParameter::decode(&hex_to_bytes("5e053a"), Some(0x5E)), Ok((drx, 3)));
    }

    /// MS network capability from an attach request trace:
    /// GEA1, SM-DC, SM-GC, SS-SI=01, REVLI / PFC, GEA2+GEA3 / E-UTRAN HO,
    /// EMM-CPC, SRVCC, EPC
    #[test]
    fn test_ms_network_capability_trace() {
        let wire = hex_to_bytes("31 03 e5 e0 6c");
        let (cap, n) = MsNetworkCapability::decode(&wire, Some(MsNetworkCapability::IEI)).unwrap();
        assert_eq!(n, 5);
        assert_eq!((cap.gea1, cap.sm_dedicated, cap.sm_gprs), (1, 1, 1));
        assert_eq!(cap.ss_screening, 1);
        assert_eq!(cap.revision_level, 1);
        assert_eq!(cap.extended_gea, 0b11_0000);
        assert_eq!((cap.ps_ho_eutran, cap.emm_combined_procedures, cap.srvcc, cap.epc), (1, 1, 1, 1));
        assert_eq!(encode_tagged(&cap, Some(MsNetworkCapability::IEI)), wire);
    }

    #[test]
    fn test_ms_network_capability_short_form_reencodes_long() {
        // A two octet capability is re-encoded with all three octets
        let (cap, n) = MsNetworkCapability::decode(&hex_to_bytes("02 e5 e0"), None).unwrap();
        assert_eq!(n, 3);
        assert_eq!(encode_tagged(&cap, None), hex_to_bytes("03 e5 e0 00"));
    }

    // ========================================================================
    // Bounds and tag rejection
    // ========================================================================

    #[test]
    fn test_bounds_rejection_all_ies() {
        assert_short_prefixes_rejected::<TmsiStatus>(&[0x91], Some(0x90), 1);
        assert_short_prefixes_rejected::<ImeisvRequest>(&[0xC1], None, 1);
        assert_short_prefixes_rejected::<DrxParameter>(&hex_to_bytes("5c053a"), Some(0x5C), 3);
        assert_short_prefixes_rejected::<DrxParameter>(&hex_to_bytes("053a"), None, 2);
        assert_short_prefixes_rejected::<PtmsiSignature>(&hex_to_bytes("1900abcdef"), Some(0x19), 5);
        assert_short_prefixes_rejected::<PtmsiSignature>(&hex_to_bytes("00abcdef"), None, 4);
        assert_short_prefixes_rejected::<MsNetworkCapability>(&hex_to_bytes("3101e5"), Some(0x31), 3);
        assert_short_prefixes_rejected::<VoiceDomainPreferenceAndUeUsageSetting>(
            &hex_to_bytes("0106"),
            None,
            2,
        );
        assert!(matches!(
            IdentityType2::decode(&[]),
            Err(CodecError::BufferTooShort { .. })
        ));
    }

    #[test]
    fn test_tag_rejection_all_ies() {
        let cases: [(&str, Result<(), CodecError>); 6] = [
            ("tmsi", TmsiStatus::decode(&[0x81], Some(TmsiStatus::IEI)).map(|_| ())),
            ("imeisv", ImeisvRequest::decode(&[0xE1], Some(ImeisvRequest::IEI)).map(|_| ())),
            ("drx", DrxParameter::decode(&hex_to_bytes("5d053a"), Some(DrxParameter::IEI)).map(|_| ())),
            ("ptmsi", PtmsiSignature::decode(&hex_to_bytes("1800abcdef"), Some(0x19)).map(|_| ())),
            ("mnc", MsNetworkCapability::decode(&hex_to_bytes("3201e5"), Some(0x31)).map(|_| ())),
            (
                "vdp",
                VoiceDomainPreferenceAndUeUsageSetting::decode(&hex_to_bytes("5c0106"), Some(0x5D))
                    .map(|_| ()),
            ),
        ];
        for (name, result) in cases {
            assert!(matches!(result, Err(CodecError::UnexpectedIei { .. })), "{name}");
        }
    }

    // ========================================================================
    // Exhaustive round trips over the small field ranges
    // ========================================================================

    #[test]
    fn test_roundtrip_half_octet_ies() {
        for v in 0..=1 {
            assert_roundtrip(TmsiStatus::new(v));
        }
        for v in 0..=7 {
            assert_roundtrip(ImeisvRequest::new(v));
        }
    }

    #[test]
    fn test_roundtrip_drx_parameter() {
        for code in [0x00, 0x05, 0x41, 0xFF] {
            for coef in 0..=15 {
                for split in 0..=1 {
                    for timer in 0..=7 {
                        assert_roundtrip(DrxParameter::new(code, coef, split, timer));
                    }
                }
            }
        }
    }

    #[test]
    fn test_roundtrip_ptmsi_signature() {
        for value in [0, 1, 0x00FF_FFFF, 0x0012_3456, u32::MAX] {
            assert_roundtrip(PtmsiSignature::new(value));
        }
    }

    #[test]
    fn test_roundtrip_voice_domain() {
        for vd in 0..=3 {
            for usage in 0..=1 {
                assert_roundtrip(VoiceDomainPreferenceAndUeUsageSetting::new(vd, usage));
            }
        }
    }

    #[test]
    fn test_roundtrip_ms_network_capability_every_octet_value() {
        for b in 0..=u8::MAX {
            let wire = [0x03, b, b, b];
            let (cap, n) = MsNetworkCapability::decode(&wire, None).unwrap();
            assert_eq!(n, 4);
            assert_eq!(encode_tagged(&cap, None), wire);
            assert_roundtrip(cap);
        }
    }

    // ========================================================================
    // Cursor helpers
    // ========================================================================

    #[test]
    fn test_optional_ie_sequence() {
        let mut out = BytesMut::new();
        put_ie(&mut out, &PtmsiSignature::new(0x00AB_CDEF), Some(PtmsiSignature::IEI)).unwrap();
        put_ie(&mut out, &DrxParameter::new(0x0A, 0, 0, 0), Some(DrxParameter::IEI)).unwrap();
        put_ie(&mut out, &TmsiStatus::new(0), Some(TmsiStatus::IEI)).unwrap();
        assert_eq!(&out[..], &hex_to_bytes("19 00abcdef 5c 0a00 90")[..]);

        let mut cursor = &out[..];
        let sig: PtmsiSignature = take_ie(&mut cursor, Some(PtmsiSignature::IEI)).unwrap();
        let drx: DrxParameter = take_ie(&mut cursor, Some(DrxParameter::IEI)).unwrap();
        let tmsi: TmsiStatus = take_ie(&mut cursor, Some(TmsiStatus::IEI)).unwrap();
        assert_eq!(sig.value, 0x00AB_CDEF);
        assert_eq!(drx.split_pg_cycle_code, 0x0A);
        assert_eq!(tmsi.tmsi_status, 0);
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_take_ie_leaves_cursor_on_error() {
        // declares a 5 octet body but only one follows
        let wire = hex_to_bytes("5d 05 06");
        let mut cursor = &wire[..];
        let result = take_ie::<VoiceDomainPreferenceAndUeUsageSetting>(&mut cursor, Some(0x5D));
        assert!(matches!(result, Err(CodecError::LengthMismatch { declared: 5, available: 1 })));
        assert_eq!(cursor.len(), 3);
    }

    #[test]
    fn test_put_ie_full_output_untouched() {
        let mut backing = [0u8; 2];
        let mut out = &mut backing[..];
        let result = put_ie(&mut out, &PtmsiSignature::new(1), None);
        assert!(matches!(
            result,
            Err(CodecError::BufferTooShort { expected: 4, actual: 2 })
        ));
        assert_eq!(backing, [0, 0]);
    }

    #[test]
    fn test_message_encode_full_output_untouched() {
        let mut backing = [0xAAu8; 1];
        let mut out = &mut backing[..];
        assert_eq!(
            DetachAccept::new().encode(&mut out),
            Err(CodecError::BufferTooShort { expected: 2, actual: 1 })
        );
        assert_eq!(backing, [0xAA]);

        let mut backing = [0xAAu8; 2];
        let mut out = &mut backing[..];
        assert_eq!(
            IdentityRequest::new(IdentityType2Value::Imsi).encode(&mut out),
            Err(CodecError::BufferTooShort { expected: 3, actual: 2 })
        );
        assert_eq!(backing, [0xAA, 0xAA]);
    }

    #[test]
    fn test_message_encode_exact_output() {
        let mut backing = [0u8; 3];
        let mut out = &mut backing[..];
        assert_eq!(IdentityRequest::new(IdentityType2Value::Imei).encode(&mut out), Ok(3));
        assert!(out.is_empty());
        assert_eq!(backing, [0x07, 0x55, 0x02]);
    }
}
