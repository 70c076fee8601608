//! EMM-AS integration tests
//!
//! Builds the primitives EMM hands to the access stratum from encoded
//! messages, configuration and security context.

use bytes::{Bytes, BytesMut};
use integration_tests::{init_test_logging, TestResult, SAMPLE_CONFIG_YAML};
use nasgmm_common::{LogLevel, NasConfig, Plmn};
use nasgmm_nas::enums::IdentityType2Value;
use nasgmm_nas::sap::emm_as::{
    DataDelivered, EmmAs, EmmAsBase, EmmAsCellInfo, EmmAsData, EmmAsPrimitive, EmmAsRelease,
    EmmAsSecurity, EmmAsSecurityData, EpsSecurityContext, EpsSecurityContextType, NasCount,
    NasDataKind, ReleaseCause, SecurityMsgType, KNAS_SIZE, KSI_NO_KEY_AVAILABLE,
};
use nasgmm_nas::{DetachAccept, IdentityRequest};

fn full_context() -> EpsSecurityContext {
    EpsSecurityContext {
        context_type: EpsSecurityContextType::FullNative,
        ksi: 1,
        dl_count: NasCount::new(0, 4),
        ul_count: NasCount::new(0, 2),
        knas_enc: [0x11; KNAS_SIZE],
        knas_int: [0x22; KNAS_SIZE],
    }
}

#[test]
fn test_config_drives_plmn_decoding() -> TestResult {
    init_test_logging();

    let config = NasConfig::from_yaml(SAMPLE_CONFIG_YAML)?;
    assert_eq!(config.log_level, LogLevel::Debug);
    let table = config.mnc_table();

    // Override makes 999-701 a three digit network
    let plmn = Plmn::from_digits(*b"999", *b"701", &table)?;
    assert_eq!(plmn, Plmn::new(999, 701, true));

    // Override for 001-02 wins over the trailing digit
    let plmn = Plmn::from_digits(*b"001", *b"023", &table)?;
    assert_eq!(plmn, Plmn::new(1, 2, false));

    // Built-in list still applies
    let plmn = Plmn::from_digits(*b"722", *b"310", &table)?;
    assert!(plmn.long_mnc);

    let mut info = EmmAsCellInfo::default();
    info.base.ue_id = 3;
    info.found = true;
    info.tac = 0x0001;
    info.cell_id = 0x0000_0101;
    assert!(info.add_plmn(plmn));
    let page = EmmAs::PageInd(info);
    assert_eq!(page.primitive(), EmmAsPrimitive::PageInd);
    assert_eq!(page.ue_id(), 3);
    Ok(())
}

#[test]
fn test_identification_request_primitive() -> TestResult {
    init_test_logging();

    let request = IdentityRequest::new(IdentityType2Value::Imei);
    let mut out = BytesMut::new();
    request.encode(&mut out)?;

    let ctx = full_context();
    let primitive = EmmAs::SecurityReq(EmmAsSecurity {
        base: EmmAsBase {
            ue_id: 17,
            emm_cause: None,
        },
        sctx: EmmAsSecurityData::from_context(Some(&ctx), false, true),
        msg_type: SecurityMsgType::Ident,
        identity_type: Some(request.identity_type),
        imeisv_request: None,
        nas_msg: out.freeze(),
    });

    assert_eq!(u16::from(primitive.primitive()), 201);
    let EmmAs::SecurityReq(security) = primitive else {
        panic!("expected a security request");
    };
    assert!(security.sctx.is_protected());
    assert_eq!(security.sctx.count, 4);
    assert_eq!(security.sctx.knas_enc, Some([0x11; KNAS_SIZE]));

    let decoded = IdentityRequest::decode(&security.nas_msg)?;
    assert_eq!(decoded.identity_type.identity(), Some(IdentityType2Value::Imei));
    Ok(())
}

#[test]
fn test_detach_accept_data_indication() -> TestResult {
    init_test_logging();

    let mut out = BytesMut::new();
    DetachAccept::new().encode(&mut out)?;

    let indication = EmmAs::DataInd(EmmAsData {
        base: EmmAsBase {
            ue_id: 5,
            emm_cause: None,
        },
        sctx: EmmAsSecurityData::from_context(None, false, false),
        delivered: DataDelivered::Delivered,
        nas_data: Some(NasDataKind::DetachAccept),
        nas_msg: out.freeze(),
    });

    let EmmAs::DataInd(data) = &indication else {
        panic!("expected a data indication");
    };
    assert_eq!(data.sctx.ksi, KSI_NO_KEY_AVAILABLE);
    assert!(!data.sctx.is_protected());
    assert_eq!(DetachAccept::decode(&data.nas_msg)?, DetachAccept::new());
    assert_eq!(indication.primitive(), EmmAsPrimitive::DataInd);
    Ok(())
}

#[test]
fn test_release_after_authentication_failure() {
    init_test_logging();

    let release = EmmAs::ReleaseReq(EmmAsRelease {
        base: EmmAsBase {
            ue_id: 9,
            emm_cause: Some(0x14),
        },
        cause: ReleaseCause::Authentication,
    });
    assert_eq!(u16::from(release.primitive()), 208);
    assert_eq!(release.ue_id(), 9);
}

#[test]
fn test_corrupted_nas_message_in_primitive() {
    init_test_logging();

    let data = EmmAsData {
        base: EmmAsBase::default(),
        sctx: EmmAsSecurityData::default(),
        delivered: DataDelivered::Delivered,
        nas_data: None,
        nas_msg: Bytes::from_static(&[0x07, 0x55]),
    };
    assert!(IdentityRequest::decode(&data.nas_msg).is_err());
    assert!(DetachAccept::decode(&data.nas_msg).is_err());
}
