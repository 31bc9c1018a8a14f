use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::{requests::CheckInRequest, responses::CheckInResponse};
use crate::domain::services::ticket_id::ticket_id_from_scan;
use crate::error::AppError;
use std::sync::Arc;
use tracing::{info, warn};

/// Validates a ticket id or scanned QR payload against the attendee store.
/// Duplicate ids resolve to the earliest registration.
pub async fn check_in(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CheckInRequest>,
) -> Result<impl IntoResponse, AppError> {
    let ticket_id = ticket_id_from_scan(&payload.ticket_id);
    if ticket_id.is_empty() {
        return Err(AppError::Validation("Please enter a ticket ID".into()));
    }

    match state.attendee_repo.find_by_ticket_id(ticket_id).await? {
        Some(attendee) => {
            info!(ticket_id, event = %attendee.event, "Ticket validated");
            Ok(Json(CheckInResponse {
                valid: true,
                message: format!("Valid Ticket! Welcome, {}!", attendee.name),
                attendee,
            }))
        }
        None => {
            warn!(ticket_id, "Check-in rejected");
            Err(AppError::NotFound("Invalid Ticket ID.".into()))
        }
    }
}
