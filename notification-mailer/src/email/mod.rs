//! Email sending over an SMTP relay
//!
//! This module holds the whole send pipeline:
//! - [`EmailMessage`]: the inbound payload, with validation rules
//! - [`OutgoingMail`]: the assembled, transport-ready message
//! - [`MailTransport`]: the connection seam, implemented by [`SmtpTransport`]
//! - [`EmailService`]: validation, assembly and transmission behind [`EmailSender`]
//!
//! # Examples
//!
//! ```rust,no_run
//! use notification_mailer::config::TransportConfig;
//! use notification_mailer::email::{EmailMessage, EmailSender, EmailService, Recipient, SmtpTransport};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = TransportConfig {
//!     host: "smtp.example.com".to_string(),
//!     username: "noreply@example.com".to_string(),
//!     password: "secret".to_string(),
//!     ..TransportConfig::default()
//! };
//! let service = EmailService::new(config, SmtpTransport::new());
//!
//! let email = EmailMessage {
//!     subject: "Welcome!".to_string(),
//!     body: "<h1>Welcome to our app!</h1>".to_string(),
//!     to: vec![Recipient::new("user@example.com")],
//!     ..EmailMessage::default()
//! };
//!
//! service.send(email).await?;
//! # Ok(())
//! # }
//! ```

mod backend;
mod builder;
mod error;
mod message;
mod sender;
mod transport;

pub use backend::smtp::SmtpTransport;
pub use builder::{OutgoingAttachment, OutgoingMail};
pub use error::EmailError;
pub use message::{EmailMessage, FileAttachment, Recipient};
pub use sender::{EmailSender, EmailService};
pub use transport::{ConnectionSettings, MailTransport};

#[cfg(test)]
pub use sender::MockEmailSender;
#[cfg(test)]
pub use transport::MockMailTransport;
