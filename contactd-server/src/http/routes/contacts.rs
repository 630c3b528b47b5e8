//! Contact submission and listing endpoints

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::repos::{Contact, ContactRepo};
use crate::http::error::ApiError;
use crate::http::extractors::JsonOrForm;
use crate::http::server::AppState;
use crate::models::ContactSubmission;

/// Client-facing message when an insert fails
const SAVE_FAILED: &str = "Failed to save the message.";

/// Client-facing message when listing fails
const FETCH_FAILED: &str = "Failed to fetch contacts.";

/// Create contact request.
///
/// Absent fields default to empty strings so the presence check, not serde,
/// produces the client-facing error.
#[derive(Deserialize, Default)]
#[serde(default)]
pub struct CreateContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Contact response
#[derive(Serialize)]
pub struct ContactResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: String,
}

impl From<Contact> for ContactResponse {
    fn from(c: Contact) -> Self {
        Self {
            id: c.id,
            name: c.name,
            email: c.email,
            message: c.message,
            created_at: c.created_at.to_rfc3339(),
        }
    }
}

/// Submission acknowledgement
#[derive(Serialize)]
pub struct SubmissionAck {
    pub message: &'static str,
}

/// POST /api/contact - validate and persist one submission
async fn create_contact(
    State(state): State<Arc<AppState>>,
    JsonOrForm(req): JsonOrForm<CreateContactRequest>,
) -> Result<Json<SubmissionAck>, ApiError> {
    // Validation happens before any store access
    let submission = ContactSubmission::new(&req.name, &req.email, &req.message)?;

    ContactRepo::new(&state.pool)
        .create(submission)
        .await
        .map_err(|e| ApiError::store(SAVE_FAILED, e))?;

    Ok(Json(SubmissionAck {
        message: "Your message has been received and saved to the database!",
    }))
}

/// GET /admin/fetch - list every stored contact, oldest first
async fn list_contacts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ContactResponse>>, ApiError> {
    let contacts = ContactRepo::new(&state.pool)
        .list()
        .await
        .map_err(|e| ApiError::store(FETCH_FAILED, e))?;

    Ok(Json(
        contacts.into_iter().map(ContactResponse::from).collect(),
    ))
}

/// Contact routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/contact", post(create_contact))
        .route("/admin/fetch", get(list_contacts))
}
