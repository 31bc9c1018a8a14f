use axum::{extract::State, http::header, response::IntoResponse};
use crate::state::AppState;
use crate::error::AppError;
use crate::infra::documents::csv_export::{attendees_to_csv, feedback_to_csv};
use std::sync::Arc;
use tracing::info;

const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

pub async fn export_attendees(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let attendees = state.attendee_repo.list().await?;
    let csv = attendees_to_csv(&attendees)?;
    info!(rows = attendees.len(), "Exported attendees");
    Ok(csv_response("attendees.csv", csv))
}

pub async fn export_feedback(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let feedback = state.feedback_repo.list().await?;
    let csv = feedback_to_csv(&feedback)?;
    info!(rows = feedback.len(), "Exported feedback");
    Ok(csv_response("feedback.csv", csv))
}

fn csv_response(filename: &str, body: Vec<u8>) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, CSV_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, format!("attachment; filename=\"{}\"", filename)),
        ],
        body,
    )
}
