//! Email backend implementations
//!
//! - **SMTP**: Send emails via an SMTP relay using `lettre`

pub mod smtp;
