use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use northlight_content::ContentError;
use serde_json::json;
use thiserror::Error;

use crate::email::EmailError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("missing required fields")]
    MissingFields,

    #[error("invalid email format")]
    InvalidEmail,

    #[error("email provider rejected the send: {0}")]
    SendFailed(String),

    #[error("content error: {0}")]
    Content(#[from] ContentError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<EmailError> for AppError {
    fn from(err: EmailError) -> Self {
        // The provider answered and said no; everything else is an
        // unexpected failure and takes the generic path.
        let detail = err.to_string();
        match err {
            EmailError::Provider { .. } => AppError::SendFailed(detail),
            EmailError::Transport(_) | EmailError::Template(_) => AppError::Internal(detail),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Validation errors are actionable by the submitter and surfaced
        // verbatim; upstream and internal detail goes to the logs only.
        let (status, message) = match &self {
            AppError::MissingFields => (StatusCode::BAD_REQUEST, "Missing required fields"),
            AppError::InvalidEmail => (StatusCode::BAD_REQUEST, "Invalid email format"),
            AppError::SendFailed(detail) => {
                tracing::error!(error = %detail, "email provider returned an error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to send email")
            }
            AppError::Content(err) => {
                tracing::error!(error = %err, "content source request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to load content")
            }
            AppError::Internal(detail) => {
                tracing::error!(error = %detail, "contact submission failed unexpectedly");
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to send message")
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
