//! Router construction and the serve loop

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::{
    config::ServerSettings,
    handlers,
    state::AppState,
};

/// Build the application router
///
/// Routes:
/// - `POST /emails`: send an email
/// - `GET /health`: liveness probe
pub fn router(state: AppState, settings: &ServerSettings) -> Router {
    Router::new()
        .route("/emails", post(handlers::submit))
        .route("/health", get(handlers::liveness))
        .layer(DefaultBodyLimit::max(settings.body_limit_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the listener cannot be bound or the server fails.
pub async fn serve(state: AppState, settings: &ServerSettings) -> anyhow::Result<()> {
    let addr = settings.bind_addr();
    let listener = TcpListener::bind(&addr).await?;

    info!(%addr, "Server listening");

    axum::serve(listener, router(state, settings))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolve on Ctrl+C or, on Unix, SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
