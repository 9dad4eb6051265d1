//! Resend email API client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::ports::{Mailer, OutgoingEmail};
use crate::error::MailerError;

const USER_AGENT: &str = concat!("portfolio-api/", env!("CARGO_PKG_VERSION"));

/// Implementation of the Mailer port on top of Resend
pub struct ResendMailer {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl ResendMailer {
    pub fn new(
        base_url: String,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, MailerError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }
}

/// Request types for Resend API
#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a [String],
    subject: &'a str,
    html: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
}

#[derive(Deserialize)]
struct SendEmailResponse {
    id: String,
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<String, MailerError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(MailerError::NotConfigured("RESEND_API_KEY"))?;

        let resp = self
            .http
            .post(format!("{}/emails", self.base_url))
            .bearer_auth(api_key)
            .json(&SendEmailRequest {
                from: &email.from,
                to: &email.to,
                subject: &email.subject,
                html: &email.html,
                text: &email.text,
                reply_to: email.reply_to.as_deref(),
            })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(MailerError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let body: SendEmailResponse = resp.json().await?;
        Ok(body.id)
    }
}
