//! EMMAS service access point
//!
//! Primitives exchanged between the EPS mobility management sublayer and the
//! access stratum. EMM hands down NAS messages to send together with the
//! security parameters to protect them with; the AS hands up received
//! messages, delivery reports and cell information.

use bytes::Bytes;
use nasgmm_common::Plmn;
use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::ies::{IdentityType2, ImeisvRequest};

/// NAS key set identifier meaning "no key is available"
pub const KSI_NO_KEY_AVAILABLE: u8 = 0x07;

/// Size of the NAS ciphering and integrity keys
pub const KNAS_SIZE: usize = 16;

/// Most PLMNs reported in one cell information primitive
pub const EMM_AS_PLMN_LIST_SIZE: usize = 6;

/// EMMAS primitive identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u16)]
pub enum EmmAsPrimitive {
    /// EMM->AS: security request
    SecurityReq = 201,
    /// AS->EMM: security indication
    SecurityInd,
    /// EMM->AS: security response
    SecurityRes,
    /// EMM->AS: security reject
    SecurityRej,
    /// EMM->AS: connection establish request
    EstablishReq,
    /// AS->EMM: connection establish confirm
    EstablishCnf,
    /// AS->EMM: connection establish reject
    EstablishRej,
    /// EMM->AS: connection release request
    ReleaseReq,
    /// AS->EMM: connection release indication
    ReleaseInd,
    /// EMM->AS: data transfer request
    DataReq,
    /// AS->EMM: data transfer indication
    DataInd,
    /// AS->EMM: paging indication
    PageInd,
    /// AS->EMM: status indication
    StatusInd,
    ErabSetupReq,
    ErabSetupCnf,
    ErabSetupRej,
    ErabModifyReq,
    ErabModifyCnf,
    ErabModifyRej,
    ErabReleaseReq,
    ErabReleaseCnf,
}

// ============================================================================
// Security context
// ============================================================================

/// NAS COUNT (3GPP TS 24.301 Section 4.4.3.1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NasCount {
    /// Overflow counter (16 bits)
    pub overflow: u16,
    /// Sequence number (8 bits)
    pub seq_num: u8,
}

impl NasCount {
    /// Create a new NAS count
    pub fn new(overflow: u16, seq_num: u8) -> Self {
        Self { overflow, seq_num }
    }

    /// 32-bit value used as crypto input: `[0x00][overflow][seq_num]`
    pub fn as_u32(&self) -> u32 {
        (u32::from(self.overflow) << 8) | u32::from(self.seq_num)
    }
}

/// Kind of EPS security context held for a UE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EpsSecurityContextType {
    /// Authentication done, keys not yet taken into use
    #[default]
    Partial,
    /// Native context taken into use by a security mode control procedure
    FullNative,
    /// Context mapped from a UMTS security context
    Mapped,
}

/// EPS security context as held by the procedure layer
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EpsSecurityContext {
    /// Context type
    pub context_type: EpsSecurityContextType,
    /// eKSI
    pub ksi: u8,
    /// Downlink NAS COUNT
    pub dl_count: NasCount,
    /// Uplink NAS COUNT
    pub ul_count: NasCount,
    /// NAS ciphering key
    pub knas_enc: [u8; KNAS_SIZE],
    /// NAS integrity key
    pub knas_int: [u8; KNAS_SIZE],
}

impl EpsSecurityContext {
    /// Whether the context can protect messages
    pub fn is_usable(&self) -> bool {
        matches!(
            self.context_type,
            EpsSecurityContextType::FullNative | EpsSecurityContextType::Mapped
        )
    }
}

/// Security parameters attached to a primitive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmmAsSecurityData {
    /// The context was just taken into use
    pub is_new: bool,
    /// NAS key set identifier
    pub ksi: u8,
    /// Sequence number
    pub sqn: u8,
    /// NAS COUNT
    pub count: u32,
    /// Ciphering key, present only for ciphered messages
    pub knas_enc: Option<[u8; KNAS_SIZE]>,
    /// Integrity key
    pub knas_int: Option<[u8; KNAS_SIZE]>,
}

impl Default for EmmAsSecurityData {
    fn default() -> Self {
        Self {
            is_new: false,
            ksi: KSI_NO_KEY_AVAILABLE,
            sqn: 0,
            count: 0,
            knas_enc: None,
            knas_int: None,
        }
    }
}

impl EmmAsSecurityData {
    /// Builds the security data for a downlink message.
    ///
    /// Without a usable context the message goes out unprotected and the KSI
    /// is [`KSI_NO_KEY_AVAILABLE`]. Otherwise the downlink count is copied,
    /// the integrity key is always included and the ciphering key only when
    /// `is_ciphered` is set.
    pub fn from_context(context: Option<&EpsSecurityContext>, is_new: bool, is_ciphered: bool) -> Self {
        match context {
            Some(ctx) if ctx.is_usable() => Self {
                is_new,
                ksi: ctx.ksi,
                sqn: ctx.dl_count.seq_num,
                count: ctx.dl_count.as_u32(),
                knas_enc: is_ciphered.then_some(ctx.knas_enc),
                knas_int: Some(ctx.knas_int),
            },
            _ => {
                tracing::trace!("no usable EPS security context, sending unprotected");
                Self::default()
            }
        }
    }

    /// Whether the message will be integrity protected
    pub fn is_protected(&self) -> bool {
        self.knas_int.is_some()
    }
}

// ============================================================================
// Primitive payloads
// ============================================================================

/// Type of security message carried by a security primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum SecurityMsgType {
    /// Identification
    Ident = 0x01,
    /// Authentication
    Auth = 0x02,
    /// Security mode command
    Smc = 0x03,
}

/// Reason for releasing the NAS signalling connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum ReleaseCause {
    /// Authentication failure
    Authentication = 0x01,
    /// Detach requested
    Detach = 0x02,
}

/// NAS message carried by a connection establishment primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum NasInfo {
    Attach = 0x01,
    Detach = 0x02,
    Tau = 0x03,
    ServiceRequest = 0x04,
    ExtendedServiceRequest = 0x05,
    DetachRequest = 0x06,
    NoMessage = 0xFF,
}

/// NAS message carried by a data transfer primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum NasDataKind {
    /// Attach complete
    Attach = 0x01,
    /// Detach accept
    DetachAccept = 0x02,
    /// Tracking area update accept
    Tau = 0x03,
    /// Attach accept
    AttachAccept = 0x04,
    /// Network initiated detach request
    DetachRequest = 0x06,
}

/// Delivery report for a data transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum DataDelivered {
    /// Lower layer failure
    #[default]
    LowerLayerFailure = 0,
    /// Delivered
    Delivered = 1,
    /// Not delivered because of a handover
    NotDeliveredDueToHo = 2,
}

/// Fields shared by every primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmmAsBase {
    /// UE lower layer identifier
    pub ue_id: u32,
    /// EMM cause, if the primitive reports a failure
    pub emm_cause: Option<u8>,
}

/// Security request/indication/response/reject
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmmAsSecurity {
    pub base: EmmAsBase,
    /// Security parameters
    pub sctx: EmmAsSecurityData,
    /// Which security message is carried
    pub msg_type: SecurityMsgType,
    /// Requested identity for identification
    pub identity_type: Option<IdentityType2>,
    /// IMEISV request for security mode command
    pub imeisv_request: Option<ImeisvRequest>,
    /// Encoded NAS message
    pub nas_msg: Bytes,
}

/// Connection establishment request/confirm/reject
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmmAsEstablish {
    pub base: EmmAsBase,
    /// Security parameters
    pub sctx: EmmAsSecurityData,
    /// Selected PLMN
    pub plmn: Option<Plmn>,
    /// Contained in an initial message
    pub is_initial: bool,
    /// Which NAS message is carried
    pub nas_info: NasInfo,
    /// Encoded NAS message
    pub nas_msg: Bytes,
}

/// Connection release request/indication
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmmAsRelease {
    pub base: EmmAsBase,
    /// Release cause
    pub cause: ReleaseCause,
}

/// Data transfer request/indication
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmmAsData {
    pub base: EmmAsBase,
    /// Security parameters
    pub sctx: EmmAsSecurityData,
    /// Delivery report
    pub delivered: DataDelivered,
    /// Which NAS message is carried, if known
    pub nas_data: Option<NasDataKind>,
    /// Encoded NAS message
    pub nas_msg: Bytes,
}

/// E-RAB setup/modify/release request carrying an ESM message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmmAsBearerContextReq {
    pub base: EmmAsBase,
    /// EPS bearer identity
    pub ebi: u8,
    /// Retransmission in progress
    pub retry: bool,
    /// Retransmissions so far
    pub retx_count: u32,
    /// Security parameters
    pub sctx: EmmAsSecurityData,
    /// Encoded NAS message
    pub nas_msg: Bytes,
}

/// E-RAB setup/modify reject
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmmAsErabReject {
    /// UE lower layer identifier
    pub ue_id: u32,
    /// EPS bearer identity
    pub ebi: u8,
    /// The bearer has to be removed
    pub remove_bearer: bool,
}

/// Status indication
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmmAsStatus {
    pub base: EmmAsBase,
    /// Security parameters
    pub sctx: EmmAsSecurityData,
}

/// Cell information for paging indications
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmmAsCellInfo {
    pub base: EmmAsBase,
    /// A suitable cell was found
    pub found: bool,
    plmn_ids: Vec<Plmn>,
    /// Radio access technology bitmap
    pub rat: u8,
    /// Tracking area code
    pub tac: u16,
    /// E-UTRAN cell identity
    pub cell_id: u32,
}

impl EmmAsCellInfo {
    /// Available PLMNs
    pub fn plmn_ids(&self) -> &[Plmn] {
        &self.plmn_ids
    }

    /// Adds a PLMN; returns `false` when the list already holds
    /// [`EMM_AS_PLMN_LIST_SIZE`] entries.
    pub fn add_plmn(&mut self, plmn: Plmn) -> bool {
        if self.plmn_ids.len() >= EMM_AS_PLMN_LIST_SIZE {
            return false;
        }
        self.plmn_ids.push(plmn);
        true
    }
}

/// A primitive with its payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmmAs {
    SecurityReq(EmmAsSecurity),
    SecurityInd(EmmAsSecurity),
    SecurityRes(EmmAsSecurity),
    SecurityRej(EmmAsSecurity),
    EstablishReq(EmmAsEstablish),
    EstablishCnf(EmmAsEstablish),
    EstablishRej(EmmAsEstablish),
    ReleaseReq(EmmAsRelease),
    ReleaseInd(EmmAsRelease),
    DataReq(EmmAsData),
    DataInd(EmmAsData),
    PageInd(EmmAsCellInfo),
    StatusInd(EmmAsStatus),
    ErabSetupReq(EmmAsBearerContextReq),
    ErabSetupCnf(EmmAsBase),
    ErabSetupRej(EmmAsErabReject),
    ErabModifyReq(EmmAsBearerContextReq),
    ErabModifyCnf(EmmAsBase),
    ErabModifyRej(EmmAsErabReject),
    ErabReleaseReq(EmmAsBearerContextReq),
    ErabReleaseCnf(EmmAsBase),
}

impl EmmAs {
    /// Primitive identifier of this message
    pub fn primitive(&self) -> EmmAsPrimitive {
        match self {
            EmmAs::SecurityReq(_) => EmmAsPrimitive::SecurityReq,
            EmmAs::SecurityInd(_) => EmmAsPrimitive::SecurityInd,
            EmmAs::SecurityRes(_) => EmmAsPrimitive::SecurityRes,
            EmmAs::SecurityRej(_) => EmmAsPrimitive::SecurityRej,
            EmmAs::EstablishReq(_) => EmmAsPrimitive::EstablishReq,
            EmmAs::EstablishCnf(_) => EmmAsPrimitive::EstablishCnf,
            EmmAs::EstablishRej(_) => EmmAsPrimitive::EstablishRej,
            EmmAs::ReleaseReq(_) => EmmAsPrimitive::ReleaseReq,
            EmmAs::ReleaseInd(_) => EmmAsPrimitive::ReleaseInd,
            EmmAs::DataReq(_) => EmmAsPrimitive::DataReq,
            EmmAs::DataInd(_) => EmmAsPrimitive::DataInd,
            EmmAs::PageInd(_) => EmmAsPrimitive::PageInd,
            EmmAs::StatusInd(_) => EmmAsPrimitive::StatusInd,
            EmmAs::ErabSetupReq(_) => EmmAsPrimitive::ErabSetupReq,
            EmmAs::ErabSetupCnf(_) => EmmAsPrimitive::ErabSetupCnf,
            EmmAs::ErabSetupRej(_) => EmmAsPrimitive::ErabSetupRej,
            EmmAs::ErabModifyReq(_) => EmmAsPrimitive::ErabModifyReq,
            EmmAs::ErabModifyCnf(_) => EmmAsPrimitive::ErabModifyCnf,
            EmmAs::ErabModifyRej(_) => EmmAsPrimitive::ErabModifyRej,
            EmmAs::ErabReleaseReq(_) => EmmAsPrimitive::ErabReleaseReq,
            EmmAs::ErabReleaseCnf(_) => EmmAsPrimitive::ErabReleaseCnf,
        }
    }

    /// UE lower layer identifier
    pub fn ue_id(&self) -> u32 {
        match self {
            EmmAs::SecurityReq(p) | EmmAs::SecurityInd(p) | EmmAs::SecurityRes(p) | EmmAs::SecurityRej(p) => {
                p.base.ue_id
            }
            EmmAs::EstablishReq(p) | EmmAs::EstablishCnf(p) | EmmAs::EstablishRej(p) => p.base.ue_id,
            EmmAs::ReleaseReq(p) | EmmAs::ReleaseInd(p) => p.base.ue_id,
            EmmAs::DataReq(p) | EmmAs::DataInd(p) => p.base.ue_id,
            EmmAs::PageInd(p) => p.base.ue_id,
            EmmAs::StatusInd(p) => p.base.ue_id,
            EmmAs::ErabSetupReq(p) | EmmAs::ErabModifyReq(p) | EmmAs::ErabReleaseReq(p) => p.base.ue_id,
            EmmAs::ErabSetupCnf(b) | EmmAs::ErabModifyCnf(b) | EmmAs::ErabReleaseCnf(b) => b.ue_id,
            EmmAs::ErabSetupRej(r) | EmmAs::ErabModifyRej(r) => r.ue_id,
        }
    }
}
