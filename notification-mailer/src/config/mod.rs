//! Configuration management for notification-mailer
//!
//! Configuration is loaded once at startup from multiple sources with clear
//! precedence:
//!
//! 1. Environment variables (highest priority, `MAILER_` prefix, `__` for nesting)
//! 2. `./config.toml` (development)
//! 3. `~/.config/notification-mailer/config.toml` (user config, XDG)
//! 4. `/etc/notification-mailer/config.toml` (system config)
//! 5. Hardcoded defaults (fallback)
//!
//! Environment variable format: `MAILER_SECTION__FIELD_NAME`
//! - Use `__` (double underscore) to separate nested sections
//! - Use `_` (single underscore) within field names
//! - Example: `MAILER_SMTP__HOST=smtp.example.com`
//!
//! # Example Configuration
//!
//! ```toml
//! # config.toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//! body_limit_bytes = 26214400
//!
//! [smtp]
//! host = "smtp.example.com"
//! port = 587
//! username = "notifications@example.com"
//! password = "secret"
//! display_name = "Example Notifications"
//! ssl = true
//! timeout = 30
//! ```

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

const ENV_PREFIX: &str = "MAILER_";
const APP_DIR: &str = "notification-mailer";

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Interface to bind
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Maximum accepted request body size in bytes (base64 attachments included)
    pub body_limit_bytes: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            body_limit_bytes: 25 * 1024 * 1024,
        }
    }
}

impl ServerSettings {
    /// Socket address string suitable for `TcpListener::bind`
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// SMTP transport settings
///
/// Supplied once from configuration and shared read-only for the lifetime of
/// the process. The `username` is also the sender address of every message.
///
/// `port` is wider than `u16` so out-of-range values reach validation instead
/// of failing at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct TransportConfig {
    /// SMTP relay hostname
    #[validate(length(min = 1, message = "SMTP host must not be empty"))]
    pub host: String,

    /// SMTP relay port (usually 587 for STARTTLS)
    #[validate(range(min = 1, max = 65535, message = "SMTP port must be between 1 and 65535"))]
    pub port: u32,

    /// SMTP username, also used as the sender address
    #[validate(email(message = "SMTP username must be a valid sender email address"))]
    pub username: String,

    /// SMTP password; empty disables authentication
    pub password: String,

    /// Display name of the sender
    pub display_name: String,

    /// Require TLS on the SMTP connection
    pub ssl: bool,

    /// Connection timeout in seconds
    #[validate(range(min = 1, message = "SMTP timeout must be at least one second"))]
    pub timeout: u64,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: 587,
            username: String::new(),
            password: String::new(),
            display_name: String::new(),
            ssl: true,
            timeout: 30,
        }
    }
}

impl TransportConfig {
    /// Connection timeout converted from configured seconds to milliseconds
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout.saturating_mul(1000))
    }

    /// Credentials to authenticate with, if a password is configured
    #[must_use]
    pub fn credentials(&self) -> Option<(String, String)> {
        if self.password.is_empty() {
            None
        } else {
            Some((self.username.clone(), self.password.clone()))
        }
    }
}

/// Complete notification-mailer configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MailerConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerSettings,

    /// SMTP transport settings
    #[serde(default)]
    pub smtp: TransportConfig,
}

impl MailerConfig {
    /// Load configuration from all standard locations
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default configuration cannot be serialized to TOML
    /// - A configuration file cannot be read or parsed
    /// - Configuration values fail type conversion
    pub fn load() -> anyhow::Result<Self> {
        let mut figment = Figment::new()
            // 5. Start with defaults (lowest priority)
            .merge(Toml::string(&toml::to_string(&Self::default())?));

        // 4. System config
        let system_config = PathBuf::from("/etc").join(APP_DIR).join("config.toml");
        if system_config.exists() {
            figment = figment.merge(Toml::file(&system_config));
        }

        // 3. User config
        let user_config = Self::recommended_path();
        if user_config.exists() {
            figment = figment.merge(Toml::file(&user_config));
        }

        // 2. Local config
        let local_config = PathBuf::from("./config.toml");
        if local_config.exists() {
            figment = figment.merge(Toml::file(&local_config));
        }

        // 1. Environment variables
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true));

        Ok(figment.extract()?)
    }

    /// Load configuration from a specific file
    ///
    /// Defaults apply for anything the file leaves out, and environment
    /// variables still override the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file contains invalid TOML or values fail type
    /// conversion.
    pub fn load_from(path: &str) -> anyhow::Result<Self> {
        let config = Figment::new()
            .merge(Toml::string(&toml::to_string(&Self::default())?))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true))
            .extract()?;

        Ok(config)
    }

    /// Get the recommended XDG config path
    ///
    /// Returns `~/.config/notification-mailer/config.toml` where a config
    /// directory is known, `./config.toml` otherwise.
    #[must_use]
    pub fn recommended_path() -> PathBuf {
        dirs::config_dir().map_or_else(
            || PathBuf::from("./config.toml"),
            |config_dir| config_dir.join(APP_DIR).join("config.toml"),
        )
    }
}
