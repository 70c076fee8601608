//! Optional IE block integration tests
//!
//! Encodes and decodes blocks of tagged IEs the way a message assembler
//! walks them, including reordered and unknown IEs.

use integration_tests::{
    attach_capabilities, dispatch_optional_ies, encode_optional_ies, hex_to_bytes,
    init_test_logging, OptionalIes, TestResult,
};
use nasgmm_common::logging::{format_hex_compact, log_nas_message, Direction};
use nasgmm_nas::codec::{take_ie, TaggedIe};
use nasgmm_nas::ies::{DrxParameter, MsNetworkCapability, TmsiStatus};
use nasgmm_nas::CodecError;

#[test]
fn test_attach_capabilities_wire_format() -> TestResult {
    init_test_logging();

    let encoded = encode_optional_ies(&attach_capabilities())?;
    log_nas_message(Direction::Tx, "optional IEs", &encoded);
    assert_eq!(
        &encoded[..],
        &hex_to_bytes("19 00123456 5c 0a60 31 03 e5e06c 90 5d 01 03")[..]
    );
    assert_eq!(format_hex_compact(&encoded[..5], 0), "1900123456");
    Ok(())
}

#[test]
fn test_attach_capabilities_roundtrip() -> TestResult {
    init_test_logging();

    let expected = attach_capabilities();
    let encoded = encode_optional_ies(&expected)?;
    let decoded = dispatch_optional_ies(&encoded)?;
    assert_eq!(decoded, expected);
    Ok(())
}

#[test]
fn test_reordered_block_with_unknown_ies() -> TestResult {
    init_test_logging();

    // TMSI status, unknown TLV 0x57, VDP, unknown single octet 0xC1, DRX
    let wire = hex_to_bytes("91 57 02 aa bb 5d 01 06 c1 5c 05 3a");
    let ies = dispatch_optional_ies(&wire)?;

    assert_eq!(ies.tmsi_status, Some(TmsiStatus::new(1)));
    assert_eq!(ies.drx_parameter, Some(DrxParameter::new(0x05, 0x3, 1, 0x2)));
    assert_eq!(ies.voice_domain.map(|v| (v.voice_domain_for_eutran, v.ue_usage_setting)), Some((2, 1)));
    assert_eq!(ies.skipped, vec![0x57, 0xC1]);
    assert!(ies.ptmsi_signature.is_none());
    Ok(())
}

#[test]
fn test_truncated_block_is_rejected() {
    init_test_logging();

    let mut wire = encode_optional_ies(&attach_capabilities()).unwrap().to_vec();
    // Cut the VDP body
    wire.truncate(wire.len() - 1);

    let result = dispatch_optional_ies(&wire);
    assert!(matches!(result, Err(CodecError::BufferTooShort { .. })));
}

#[test]
fn test_corrupted_length_is_rejected() {
    init_test_logging();

    // MS network capability claiming 6 octets with 3 present
    let wire = hex_to_bytes("31 06 e5 e0 6c");
    assert!(matches!(
        dispatch_optional_ies(&wire),
        Err(CodecError::LengthMismatch { declared: 6, available: 3 })
    ));
}

#[test]
fn test_unknown_tlv_overrunning_buffer() {
    init_test_logging();

    let wire = hex_to_bytes("57 09 aa");
    assert!(matches!(
        dispatch_optional_ies(&wire),
        Err(CodecError::LengthMismatch { declared: 9, available: 1 })
    ));
}

#[test]
fn test_empty_block() -> TestResult {
    assert_eq!(dispatch_optional_ies(&[])?, OptionalIes::default());
    Ok(())
}

#[test]
fn test_short_ms_network_capability_in_sequence() -> TestResult {
    init_test_logging();

    // A pre-Rel-8 handset sending a single octet capability followed by DRX
    let wire = hex_to_bytes("31 01 e5 5c 0a 00");
    let mut cursor = &wire[..];
    let cap: MsNetworkCapability = take_ie(&mut cursor, Some(MsNetworkCapability::IEI))?;
    let drx: DrxParameter = take_ie(&mut cursor, Some(DrxParameter::IEI))?;

    assert_eq!(cap.gea1, 1);
    assert_eq!(cap.extended_gea, 0);
    assert_eq!(cap.epc, 0);
    assert_eq!(drx.split_pg_cycle_code, 0x0A);
    assert!(cursor.is_empty());
    Ok(())
}
