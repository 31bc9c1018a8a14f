use axum::{extract::{State, Path}, http::header, response::{IntoResponse, Response}, Json};
use crate::state::AppState;
use crate::api::dtos::responses::{AnalyticsResponse, InfoMessage};
use crate::domain::services::analytics::{
    attendance_by_event, build_report, registrations_by_day, sentiment_counts,
};
use crate::error::AppError;
use crate::infra::documents::charts::{render_bar_chart, render_line_chart, ChartKind};
use std::sync::Arc;

pub async fn get_summary(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let events = state.event_repo.list().await?;
    let attendees = state.attendee_repo.list().await?;
    let feedback = state.feedback_repo.list().await?;

    let report = build_report(&events, &attendees, &feedback);
    let message = report.is_empty().then(|| "No registrations or feedback yet.".to_string());
    Ok(Json(AnalyticsResponse { message, report }))
}

/// PNG chart, or an informational message when there is nothing to plot.
pub async fn get_chart(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<String>,
) -> Result<Response, AppError> {
    let kind: ChartKind = kind.parse()?;
    let options = kind.options();

    let png = match kind {
        ChartKind::Attendance => {
            let attendees = state.attendee_repo.list().await?;
            if attendees.is_empty() {
                return Ok(no_data("No registrations yet."));
            }
            let events = state.event_repo.list().await?;
            let bars: Vec<(String, usize)> = attendance_by_event(&events, &attendees)
                .into_iter()
                .map(|row| (row.event, row.attendees))
                .collect();
            render_bar_chart(&bars, &options)?
        }
        ChartKind::Sentiment => {
            let feedback = state.feedback_repo.list().await?;
            if feedback.is_empty() {
                return Ok(no_data("No feedback yet."));
            }
            let bars: Vec<(String, usize)> = sentiment_counts(&feedback)
                .into_iter()
                .map(|c| (c.sentiment.to_string(), c.count))
                .collect();
            render_bar_chart(&bars, &options)?
        }
        ChartKind::Registrations => {
            let attendees = state.attendee_repo.list().await?;
            if attendees.is_empty() {
                return Ok(no_data("No registrations yet."));
            }
            let points: Vec<_> = registrations_by_day(&attendees)
                .into_iter()
                .map(|d| (d.date, d.registrations))
                .collect();
            render_line_chart(&points, &options)?
        }
    };

    Ok(([(header::CONTENT_TYPE, "image/png")], png).into_response())
}

fn no_data(message: &str) -> Response {
    Json(InfoMessage { message: message.to_string() }).into_response()
}
