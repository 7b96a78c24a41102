//! Database diagnostics handler

use crate::api::diagnostics::diagnostics_response::{
    CONNECTED, DATABASE_ERROR_PREFIX, DATABASE_WORKING,
};
use crate::{AppState, DiagnosticsResponse, MAX_DIAGNOSTIC_ERROR_CHARS, MAX_LISTED_COLLECTIONS};

use axum::{Json, extract::State};
use log::warn;

/// GET /test
///
/// Always 200: failures are reported inside the body.
pub async fn diagnostics(State(state): State<AppState>) -> Json<DiagnosticsResponse> {
    let mut response = DiagnosticsResponse::disconnected(&state.database);

    if !state.store.is_connected() {
        return Json(response);
    }

    response.connection_status = CONNECTED.to_string();
    match state.store.list_collections().await {
        Ok(mut names) => {
            names.truncate(MAX_LISTED_COLLECTIONS);
            response.collections = names;
            response.database = DATABASE_WORKING.to_string();
        }
        Err(e) => {
            warn!("Diagnostics: collection listing failed: {e}");
            response.database = format!(
                "{DATABASE_ERROR_PREFIX}{}",
                truncate_chars(e.message(), MAX_DIAGNOSTIC_ERROR_CHARS)
            );
        }
    }

    Json(response)
}

/// First `max` characters of `text`, never splitting a character
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}
