//! Service access points between EMM and the layers around it

pub mod emm_as;

pub use emm_as::{
    EmmAs, EmmAsBase, EmmAsBearerContextReq, EmmAsCellInfo, EmmAsData, EmmAsErabReject,
    EmmAsEstablish, EmmAsPrimitive, EmmAsRelease, EmmAsSecurity, EmmAsSecurityData, EmmAsStatus,
    EpsSecurityContext, EpsSecurityContextType, NasCount,
};
