//! Application state management

use std::sync::Arc;

use crate::email::EmailSender;

/// Application state shared by every request
///
/// Holds the email sender behind a trait object so handlers can be exercised
/// with any [`EmailSender`] implementation.
///
/// # Example
///
/// ```rust,no_run
/// use notification_mailer::{
///     config::TransportConfig,
///     email::{EmailService, SmtpTransport},
///     state::AppState,
/// };
///
/// let service = EmailService::new(TransportConfig::default(), SmtpTransport::new());
/// let state = AppState::new(service);
/// ```
#[derive(Clone)]
pub struct AppState {
    sender: Arc<dyn EmailSender>,
}

impl AppState {
    /// Create application state around an email sender
    pub fn new(sender: impl EmailSender + 'static) -> Self {
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Get the email sender
    #[must_use]
    pub fn sender(&self) -> &dyn EmailSender {
        self.sender.as_ref()
    }
}
