//! EMM message assemblers
//!
//! Each message decodes its header and then its IEs in the order fixed by
//! 3GPP TS 24.301 Section 8.2, advancing a cursor by the length every IE
//! codec reports.

pub mod detach_accept;
pub mod identity_request;

pub use detach_accept::DetachAccept;
pub use identity_request::IdentityRequest;
