//! SMTP backend for sending emails
//!
//! Uses the `lettre` crate to send emails via an SMTP relay. A new transport
//! is built for every call and dropped when the call returns, so each send
//! owns a dedicated connection.

use async_trait::async_trait;
use lettre::{
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    AsyncSmtpTransport, AsyncTransport, Tokio1Executor,
};
use tracing::debug;

use crate::email::{ConnectionSettings, EmailError, MailTransport, OutgoingMail};

/// SMTP transport backed by lettre
///
/// # Examples
///
/// ```rust,no_run
/// use notification_mailer::config::TransportConfig;
/// use notification_mailer::email::{EmailSender, EmailService, SmtpTransport};
///
/// # fn example(config: TransportConfig) {
/// let service = EmailService::new(config, SmtpTransport::new());
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SmtpTransport;

impl SmtpTransport {
    /// Create a new SMTP transport
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Create a lettre transport from connection settings
    fn create_transport(
        settings: &ConnectionSettings,
    ) -> Result<AsyncSmtpTransport<Tokio1Executor>, EmailError> {
        let mut transport = if settings.ssl {
            let tls_parameters = TlsParameters::new(settings.host.clone())
                .map_err(|e| EmailError::transmission(format!("TLS parameters error: {e}")))?;

            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)?
                .tls(Tls::Required(tls_parameters))
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&settings.host)
        };

        if let Some((username, password)) = &settings.credentials {
            transport = transport.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(transport
            .port(settings.port)
            .timeout(Some(settings.timeout))
            .build())
    }
}

#[async_trait]
impl MailTransport for SmtpTransport {
    async fn transmit(&self, settings: &ConnectionSettings, mail: OutgoingMail) -> Result<(), EmailError> {
        let message = mail.into_message()?;
        let transport = Self::create_transport(settings)?;

        debug!(
            host = %settings.host,
            port = settings.port,
            ssl = settings.ssl,
            timeout_ms = settings.timeout_ms(),
            "Opening SMTP connection"
        );

        transport.send(message).await?;

        Ok(())
    }
}
