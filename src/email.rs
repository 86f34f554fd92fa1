//! Outbound email through the transactional-email provider's HTTP API.
//!
//! The client is constructed once at startup from validated configuration and
//! handed to the contact handler through application state. A deployment
//! without an `[email]` config section simply has no client, and the handler
//! acknowledges submissions without sending.

use askama::Template;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc2822;
use tracing::info;

use crate::config::EmailConfig;

const COMPANY_FALLBACK: &str = "Not provided";

#[derive(Debug, Error)]
pub enum EmailError {
    /// The provider answered the send request with an error.
    #[error("provider returned {status}: {message}")]
    Provider { status: u16, message: String },

    #[error("provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to render notification template: {0}")]
    Template(#[from] askama::Error),
}

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    reply_to: &'a str,
    subject: &'a str,
    html: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: Option<String>,
}

/// Client for the provider's send endpoint.
#[derive(Debug, Clone)]
pub struct EmailClient {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
    from_address: String,
    contact_address: String,
}

impl EmailClient {
    pub fn new(config: &EmailConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            from_address: config.from_address.clone(),
            contact_address: config.contact_address.clone(),
        }
    }

    /// Perform one send request. Returns the provider-assigned message id.
    async fn send(
        &self,
        reply_to: &str,
        subject: &str,
        html: &str,
        text: &str,
    ) -> Result<String, EmailError> {
        let request = SendEmailRequest {
            from: &self.from_address,
            to: [self.contact_address.as_str()],
            reply_to,
            subject,
            html,
            text,
        };

        let response = self
            .http
            .post(format!("{}/emails", self.api_base))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ProviderErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| "no error detail".to_string());
            return Err(EmailError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let body: SendEmailResponse = response.json().await?;
        Ok(body.id)
    }
}

/// Contact notification HTML template
#[derive(Template)]
#[template(path = "emails/contact-notification.html")]
struct ContactNotificationHtmlTemplate<'a> {
    name: &'a str,
    email: &'a str,
    company: &'a str,
    message: &'a str,
    submitted_at: &'a str,
}

/// Contact notification plain text template
#[derive(Template)]
#[template(path = "emails/contact-notification.txt")]
struct ContactNotificationTextTemplate<'a> {
    name: &'a str,
    email: &'a str,
    company: &'a str,
    message: &'a str,
    submitted_at: &'a str,
}

/// Relay one contact-form submission to the site owner.
///
/// Exactly one attempt; the caller reports failure to the submitter, who may
/// resubmit as a fresh request.
pub async fn send_contact_notification(
    client: &EmailClient,
    name: &str,
    reply_to: &str,
    company: Option<&str>,
    message: &str,
) -> Result<String, EmailError> {
    let submitted_at = format_timestamp(OffsetDateTime::now_utc());
    let (html, text) = render_notification(name, reply_to, company, message, &submitted_at)?;
    let subject = format!("New contact form submission from {name}");

    let id = client.send(reply_to, &subject, &html, &text).await?;

    info!(
        message_id = %id,
        reply_to = %reply_to,
        "Contact notification sent successfully"
    );

    Ok(id)
}

fn render_notification(
    name: &str,
    email: &str,
    company: Option<&str>,
    message: &str,
    submitted_at: &str,
) -> Result<(String, String), EmailError> {
    let company = company.unwrap_or(COMPANY_FALLBACK);

    let html = ContactNotificationHtmlTemplate {
        name,
        email,
        company,
        message,
        submitted_at,
    }
    .render()?;

    let text = ContactNotificationTextTemplate {
        name,
        email,
        company,
        message,
        submitted_at,
    }
    .render()?;

    Ok((html, text))
}

fn format_timestamp(at: OffsetDateTime) -> String {
    at.format(&Rfc2822)
        .unwrap_or_else(|_| "unknown".to_string())
}
