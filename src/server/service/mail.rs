//! Outbound transactional email.
//!
//! The `Mailer` trait is the seam between account flows and the delivery provider.
//! `HttpMailer` posts to a Brevo-compatible transactional email API. `LogMailer` only
//! logs the message and is used when no API key is configured.

use askama::Template;
use async_trait::async_trait;
use serde::Serialize;
use url::Url;

use crate::server::{config::MailConfig, error::mail::MailError};

/// A single rendered email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub to: String,
    pub to_name: Option<String>,
    pub subject: String,
    pub html: String,
}

#[derive(Template)]
#[template(path = "email/verification.html")]
struct VerificationTemplate<'a> {
    username: &'a str,
    link: &'a Url,
}

#[derive(Template)]
#[template(path = "email/password_reset.html")]
struct PasswordResetTemplate<'a> {
    username: &'a str,
    link: &'a Url,
}

/// Builds the account activation email. The username is HTML-escaped.
pub fn verification_email(to: &str, username: &str, link: &Url) -> Result<Email, askama::Error> {
    Ok(Email {
        to: to.to_string(),
        to_name: Some(username.to_string()),
        subject: "Verify your email address".to_string(),
        html: VerificationTemplate { username, link }.render()?,
    })
}

/// Builds the password reset email. The username is HTML-escaped.
pub fn password_reset_email(to: &str, username: &str, link: &Url) -> Result<Email, askama::Error> {
    Ok(Email {
        to: to.to_string(),
        to_name: Some(username.to_string()),
        subject: "Reset your password".to_string(),
        html: PasswordResetTemplate { username, link }.render()?,
    })
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Email) -> Result<(), MailError>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EmailAddress {
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SendEmailBody {
    sender: EmailAddress,
    to: Vec<EmailAddress>,
    subject: String,
    html_content: String,
}

/// Sends email through an HTTP transactional email API.
pub struct HttpMailer {
    http_client: reqwest::Client,
    config: MailConfig,
}

impl HttpMailer {
    pub fn new(http_client: reqwest::Client, config: MailConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, email: Email) -> Result<(), MailError> {
        let body = SendEmailBody {
            sender: EmailAddress {
                email: self.config.sender_email.clone(),
                name: self.config.sender_name.clone(),
            },
            to: vec![EmailAddress {
                email: email.to.clone(),
                name: email.to_name,
            }],
            subject: email.subject,
            html_content: email.html,
        };

        let response = self
            .http_client
            .post(&self.config.api_url)
            .header("api-key", &self.config.api_key)
            .header("Accept", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!("Sent email to {}", email.to);
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(MailError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

/// Writes emails to the log instead of delivering them.
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, email: Email) -> Result<(), MailError> {
        tracing::info!(
            to = %email.to,
            subject = %email.subject,
            "Mail delivery disabled, email not sent"
        );
        tracing::debug!(to = %email.to, "Unsent email body:\n{}", email.html);
        Ok(())
    }
}

#[cfg(test)]
pub use memory::MemoryMailer;
