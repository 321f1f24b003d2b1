//! Transport abstraction
//!
//! [`MailTransport`] is the seam between the send pipeline and the network.
//! Each call opens its own connection from [`ConnectionSettings`], transmits a
//! single [`OutgoingMail`] and releases everything before returning.

use std::time::Duration;

use async_trait::async_trait;

use super::{EmailError, OutgoingMail};
use crate::config::TransportConfig;

/// Parameters for opening one SMTP connection
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    /// SMTP relay hostname
    pub host: String,

    /// SMTP relay port
    pub port: u16,

    /// Username and password, if authentication is configured
    pub credentials: Option<(String, String)>,

    /// Require TLS
    pub ssl: bool,

    /// Connection timeout
    pub timeout: Duration,
}

impl ConnectionSettings {
    /// Derive connection settings from a transport configuration
    ///
    /// # Errors
    ///
    /// Returns `EmailError::InvalidTransport` if the port does not fit a TCP port.
    pub fn from_config(config: &TransportConfig) -> Result<Self, EmailError> {
        let port = u16::try_from(config.port)
            .map_err(|_| EmailError::InvalidTransport(format!("port {} is out of range", config.port)))?;

        Ok(Self {
            host: config.host.clone(),
            port,
            credentials: config.credentials(),
            ssl: config.ssl,
            timeout: config.timeout(),
        })
    }

    /// Connection timeout in milliseconds
    #[must_use]
    pub fn timeout_ms(&self) -> u128 {
        self.timeout.as_millis()
    }
}

impl std::fmt::Debug for ConnectionSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.credentials.as_ref().map(|(user, _)| user))
            .field("ssl", &self.ssl)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// Sends one assembled mail over a freshly opened connection
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Open a connection, transmit `mail` and close the connection
    ///
    /// # Errors
    ///
    /// Returns `EmailError::Transmission` on network, authentication, timeout
    /// or relay failures, and `EmailError::Build` if the mail cannot be encoded.
    async fn transmit(&self, settings: &ConnectionSettings, mail: OutgoingMail) -> Result<(), EmailError>;
}
