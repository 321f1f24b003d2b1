//! Email error types

use thiserror::Error;

/// Errors that can occur while sending an email
///
/// Every variant carries a human-readable description; callers never need
/// to distinguish between them beyond displaying the message.
#[derive(Debug, Error)]
pub enum EmailError {
    /// SMTP transport settings failed validation
    #[error("invalid SMTP configuration: {0}")]
    InvalidTransport(String),

    /// Email payload failed validation
    #[error("invalid email: {0}")]
    InvalidPayload(String),

    /// Invalid email address format
    #[error("invalid email address: {0}")]
    InvalidAddress(String),

    /// Attachment declares an unparseable MIME type
    #[error("invalid attachment content type: {0}")]
    InvalidContentType(String),

    /// Transport message could not be assembled
    #[error("failed to build email: {0}")]
    Build(String),

    /// SMTP exchange failed (network, authentication, timeout or relay rejection)
    #[error("SMTP error: {0}")]
    Transmission(String),
}

impl EmailError {
    /// Create a transmission error from a string message
    #[must_use]
    pub fn transmission<T: Into<String>>(msg: T) -> Self {
        Self::Transmission(msg.into())
    }

    /// Create a message assembly error from a string message
    #[must_use]
    pub fn build<T: Into<String>>(msg: T) -> Self {
        Self::Build(msg.into())
    }
}

impl From<lettre::error::Error> for EmailError {
    fn from(err: lettre::error::Error) -> Self {
        Self::build(err.to_string())
    }
}

impl From<lettre::transport::smtp::Error> for EmailError {
    fn from(err: lettre::transport::smtp::Error) -> Self {
        Self::transmission(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_descriptive() {
        assert_eq!(
            EmailError::InvalidAddress("nope".to_string()).to_string(),
            "invalid email address: nope"
        );
        assert_eq!(
            EmailError::transmission("connection refused").to_string(),
            "SMTP error: connection refused"
        );
    }
}
