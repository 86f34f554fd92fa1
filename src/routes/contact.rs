use std::sync::LazyLock;

use axum::{Json, body::Bytes, extract::State};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::email;
use crate::error::AppError;
use crate::routes::AppState;

/// Deliberately permissive: anything of the shape `local@domain.tld` passes.
/// Tightening this would start rejecting addresses the form has always
/// accepted.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("hard-coded pattern compiles")
});

/// One form submission as received from the browser. Fields arrive optional
/// so that an absent key is a validation error, not a parse error.
#[derive(Debug, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug)]
struct ValidSubmission {
    name: String,
    email: String,
    company: Option<String>,
    message: String,
}

impl ContactSubmission {
    /// Ordered validation: presence first, then email shape. First failure
    /// short-circuits.
    fn validate(self) -> Result<ValidSubmission, AppError> {
        let name = self.name.filter(|v| !v.is_empty());
        let email = self.email.filter(|v| !v.is_empty());
        let message = self.message.filter(|v| !v.is_empty());

        let (Some(name), Some(email), Some(message)) = (name, email, message) else {
            return Err(AppError::MissingFields);
        };

        if !EMAIL_PATTERN.is_match(&email) {
            return Err(AppError::InvalidEmail);
        }

        Ok(ValidSubmission {
            name,
            email,
            company: self.company.filter(|v| !v.is_empty()),
            message,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct SubmissionResult {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// POST /api/contact
///
/// The body is parsed by hand rather than through the `Json` extractor: a
/// request the frontend never produces (truncated body, wrong content type)
/// belongs with the other unexpected failures, not with the validation
/// responses the form renders inline.
pub async fn submit(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SubmissionResult>, AppError> {
    let submission: ContactSubmission = serde_json::from_slice(&body)
        .map_err(|err| AppError::Internal(format!("malformed request body: {err}")))?;

    let submission = submission.validate()?;

    let Some(client) = &state.email else {
        warn!(
            name = %submission.name,
            reply_to = %submission.email,
            "Email integration not configured, acknowledging submission without sending"
        );
        return Ok(Json(SubmissionResult {
            success: true,
            message: "Message received (email service not configured)".to_string(),
            warning: Some("Email service not configured".to_string()),
            id: None,
        }));
    };

    let id = email::send_contact_notification(
        client,
        &submission.name,
        &submission.email,
        submission.company.as_deref(),
        &submission.message,
    )
    .await?;

    info!(message_id = %id, "Contact submission relayed");

    Ok(Json(SubmissionResult {
        success: true,
        message: "Message sent successfully".to_string(),
        warning: None,
        id: Some(id),
    }))
}
