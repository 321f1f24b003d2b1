//! Email submission endpoint
//!
//! `POST /emails` hands the payload to the configured [`EmailSender`] and
//! maps the outcome to a status code. The handler itself performs no
//! validation; a body that does not deserialize is answered with
//! `400 Bad Request` like any other rejected payload.
//!
//! [`EmailSender`]: crate::email::EmailSender

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use tracing::debug;

use crate::{email::EmailMessage, state::AppState};

/// Send an email
///
/// Responds `200 OK` with an empty body once the relay accepted the message,
/// or `400 Bad Request` with the failure message as plain text.
pub async fn submit(
    State(state): State<AppState>,
    payload: Result<Json<EmailMessage>, JsonRejection>,
) -> Response {
    let email = match payload {
        Ok(Json(email)) => email,
        Err(rejection) => {
            debug!(error = %rejection.body_text(), "Email payload rejected");
            return (StatusCode::BAD_REQUEST, rejection.body_text()).into_response();
        }
    };

    match state.sender().send(email).await {
        Ok(()) => StatusCode::OK.into_response(),
        Err(e) => (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    }
}
