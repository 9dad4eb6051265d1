//! Mailer port trait
//!
//! Defines the interface for sending transactional email.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::MailerError;

/// An email ready to hand to the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: Vec<String>,
    pub reply_to: Option<String>,
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Port trait for email delivery
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send an email, returning the provider's message id
    async fn send(&self, email: &OutgoingEmail) -> Result<String, MailerError>;
}
