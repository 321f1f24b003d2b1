//! notification-mailer server binary

use clap::Parser;
use notification_mailer::{
    config::MailerConfig,
    email::{EmailService, SmtpTransport},
    observability, server,
    state::AppState,
};
use validator::Validate;

/// HTTP-triggered email sending service
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Load configuration from this file instead of the standard locations
    #[arg(short, long, value_name = "PATH")]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    observability::init()?;

    let config = match cli.config.as_deref() {
        Some(path) => MailerConfig::load_from(path)?,
        None => MailerConfig::load()?,
    };

    tracing::info!(
        smtp_host = %config.smtp.host,
        smtp_port = config.smtp.port,
        ssl = config.smtp.ssl,
        timeout_secs = config.smtp.timeout,
        "Configuration loaded"
    );

    // Every send revalidates; this is only a startup warning.
    if let Err(e) = config.smtp.validate() {
        tracing::warn!(error = %e, "SMTP configuration is invalid; every send will fail");
    }

    let service = EmailService::new(config.smtp, SmtpTransport::new());

    server::serve(AppState::new(service), &config.server).await
}
