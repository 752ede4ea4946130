use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use super::AppState;
use crate::contact::{compose, ContactMessage, ContactResponse};

// ============================================================
// Error Handling
// ============================================================

/// Log a failure and return the generic response. The client never sees
/// what went wrong, only that sending failed.
fn send_error(e: impl std::fmt::Display) -> (StatusCode, Json<ContactResponse>) {
    tracing::error!("Error sending email: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ContactResponse::failed()),
    )
}

// ============================================================
// Contact
// ============================================================

pub async fn send_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactMessage>, JsonRejection>,
) -> Result<Json<ContactResponse>, (StatusCode, Json<ContactResponse>)> {
    // A body that does not parse is an unknown failure like any other.
    let Json(message) = payload.map_err(|rejection| {
        tracing::warn!("Unreadable contact body: {}", rejection.body_text());
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ContactResponse::failed()),
        )
    })?;

    let email = compose(&message, &state.contact);
    let sent = state.provider.send(&email).await.map_err(send_error)?;

    tracing::info!(id = ?sent.id, "Contact email sent");
    Ok(Json(ContactResponse::sent()))
}
