//! Contact form domain entity

use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;

use crate::error::ContactError;

/// Raw contact form payload. Every field is optional at the wire level so a
/// missing field becomes a validation error rather than a decode error.
#[derive(Debug, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A contact message with every field present and trimmed.
///
/// Presence is the only requirement; the address is not checked here, the
/// provider gets the final say on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl TryFrom<ContactForm> for ContactMessage {
    type Error = ContactError;

    fn try_from(form: ContactForm) -> Result<Self, Self::Error> {
        let name = required(form.name)?;
        let email = required(form.email)?;
        let subject = required(form.subject)?;
        let message = required(form.message)?;

        Ok(Self {
            name,
            email,
            subject,
            message,
        })
    }
}

fn required(value: Option<String>) -> Result<String, ContactError> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ContactError::MissingFields),
    }
}

impl ContactMessage {
    /// The submitter's address, if it is usable as a Reply-To header
    pub fn reply_address(&self) -> Option<&str> {
        reply_pattern()
            .is_match(&self.email)
            .then_some(self.email.as_str())
    }
}

/// `local@domain` with no whitespace and nothing that would split a header
fn reply_pattern() -> &'static Regex {
    static REPLY_TO: OnceLock<Regex> = OnceLock::new();
    REPLY_TO.get_or_init(|| {
        Regex::new(r"^[^\s@<>,;]+@[^\s@<>,;]+$").expect("reply-to pattern is valid")
    })
}
