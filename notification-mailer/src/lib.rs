//! notification-mailer: HTTP-triggered email sending
//!
//! A single endpoint, `POST /emails`, accepts an email payload, validates the
//! SMTP configuration and the message, assembles a MIME message and submits
//! it synchronously to an SMTP relay. There is no queueing, retry or
//! persistence.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use notification_mailer::{
//!     config::MailerConfig,
//!     email::{EmailService, SmtpTransport},
//!     server,
//!     state::AppState,
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = MailerConfig::load()?;
//!     let service = EmailService::new(config.smtp.clone(), SmtpTransport::new());
//!
//!     server::serve(AppState::new(service), &config.server).await
//! }
//! ```

pub mod config;
pub mod email;
pub mod handlers;
pub mod observability;
pub mod server;
pub mod state;
