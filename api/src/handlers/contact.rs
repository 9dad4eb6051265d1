//! Contact handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;

use crate::domain::entities::{ContactForm, ContactMessage};
use crate::error::AppError;
use crate::AppState;

/// Response body for a delivered message
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub message: String,
}

/// POST /api/contact
///
/// Validate the form and email it to the site owner.
pub async fn post_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactForm>, JsonRejection>,
) -> Result<Json<ContactResponse>, AppError> {
    let Json(form) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let message = ContactMessage::try_from(form)?;

    state.contact_service.deliver(&message).await?;

    Ok(Json(ContactResponse {
        message: "Email sent successfully".to_string(),
    }))
}
