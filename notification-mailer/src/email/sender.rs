//! Email sender trait and the validating send pipeline

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};
use validator::Validate;

use super::{ConnectionSettings, EmailError, EmailMessage, MailTransport, OutgoingMail};
use crate::config::TransportConfig;

/// Trait for sending emails
///
/// Implemented by [`EmailService`]; the HTTP layer depends only on this trait.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Send an email
    ///
    /// # Errors
    ///
    /// Returns `EmailError` describing the first validation or transmission
    /// problem encountered.
    async fn send(&self, email: EmailMessage) -> Result<(), EmailError>;
}

/// Validates, assembles and transmits emails
///
/// Each call runs a straight-line pipeline that stops at the first failure:
///
/// 1. validate the transport configuration
/// 2. validate the payload
/// 3. assemble the outgoing mail with the configured sender identity
/// 4. transmit it over a dedicated connection
///
/// The configuration is revalidated on every call.
pub struct EmailService<T> {
    config: Arc<TransportConfig>,
    transport: T,
}

impl<T: MailTransport> EmailService<T> {
    /// Create a new service
    #[must_use]
    pub fn new(config: impl Into<Arc<TransportConfig>>, transport: T) -> Self {
        Self {
            config: config.into(),
            transport,
        }
    }

    async fn run(&self, email: EmailMessage) -> Result<(), EmailError> {
        self.config
            .validate()
            .map_err(|e| EmailError::InvalidTransport(e.to_string()))?;

        email
            .validate()
            .map_err(|e| EmailError::InvalidPayload(e.to_string()))?;

        let settings = ConnectionSettings::from_config(&self.config)?;
        let mail = OutgoingMail::compose(&self.config, email)?;

        debug!(
            to = mail.to.len(),
            cc = mail.cc.len(),
            bcc = mail.bcc.len(),
            attachments = mail.attachments.len(),
            "Email assembled"
        );

        self.transport.transmit(&settings, mail).await
    }
}

#[async_trait]
impl<T: MailTransport> EmailSender for EmailService<T> {
    async fn send(&self, email: EmailMessage) -> Result<(), EmailError> {
        let result = self.run(email).await;

        match &result {
            Ok(()) => debug!("Email handed to SMTP relay"),
            Err(e) => warn!(error = %e, "Email not sent"),
        }

        result
    }
}
