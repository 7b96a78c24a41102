//! Contact form handler

use crate::{ApiError, ApiResult, AppState, ContactResponse};

use da_core::ContactMessage;
use da_db::{Collection, bson};

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use log::info;

/// POST /api/contact
///
/// Validates before touching the store, then inserts exactly once.
pub async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactMessage>, JsonRejection>,
) -> ApiResult<Json<ContactResponse>> {
    let Json(message) = payload?;
    message.validate()?;

    let document = bson::to_document(&message)
        .map_err(|e| ApiError::internal(format!("Failed to encode contact message: {e}")))?;

    let id = state
        .store
        .insert(Collection::ContactMessage, document)
        .await?;
    info!("Contact message {id} received");

    Ok(Json(ContactResponse::received()))
}
