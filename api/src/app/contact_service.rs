//! Contact service
//!
//! Turns a validated contact message into an email to the site owner.

use std::sync::Arc;

use crate::domain::entities::ContactMessage;
use crate::domain::ports::{Mailer, OutgoingEmail};
use crate::error::MailerError;

/// Service for relaying contact form messages
pub struct ContactService<M>
where
    M: Mailer,
{
    mailer: Arc<M>,
    from: String,
    to: Option<String>,
}

impl<M> ContactService<M>
where
    M: Mailer,
{
    pub fn new(mailer: Arc<M>, from: String, to: Option<String>) -> Self {
        Self { mailer, from, to }
    }

    /// Deliver a message to the owner's inbox, returning the provider id
    pub async fn deliver(&self, message: &ContactMessage) -> Result<String, MailerError> {
        let to = self
            .to
            .as_ref()
            .ok_or(MailerError::NotConfigured("CONTACT_TO_EMAIL"))?;

        let email = compose_email(&self.from, to, message);
        let id = self.mailer.send(&email).await?;

        tracing::info!("Contact message \"{}\" delivered ({})", message.subject, id);
        Ok(id)
    }
}

/// Build the owner-facing email for a contact message
pub fn compose_email(from: &str, to: &str, message: &ContactMessage) -> OutgoingEmail {
    let html = format!(
        "<h2>New contact form submission</h2>\
         <p><strong>Name:</strong> {name}</p>\
         <p><strong>Email:</strong> {email}</p>\
         <p><strong>Subject:</strong> {subject}</p>\
         <p><strong>Message:</strong></p>\
         <p>{body}</p>",
        name = escape_html(&message.name),
        email = escape_html(&message.email),
        subject = escape_html(&message.subject),
        body = escape_html(&message.message).replace('\n', "<br>"),
    );

    let text = format!(
        "New contact form submission\n\nName: {}\nEmail: {}\nSubject: {}\n\n{}\n",
        message.name, message.email, message.subject, message.message
    );

    OutgoingEmail {
        from: from.to_string(),
        to: vec![to.to_string()],
        reply_to: message.reply_address().map(str::to_string),
        subject: format!("Portfolio Contact: {}", message.subject),
        html,
        text,
    }
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
