use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::{requests::CreateEventRequest, responses::EventLineup};
use crate::domain::models::event::Event;
use crate::domain::services::defaults::lineup_for;
use crate::error::AppError;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::info;

/// Agenda page: every event in catalogue order.
pub async fn list_events(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let events = state.event_repo.list().await?;
    Ok(Json(events))
}

pub async fn create_event(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateEventRequest>,
) -> Result<impl IntoResponse, AppError> {
    let missing: Vec<&str> = [
        ("title", &payload.title),
        ("date", &payload.date),
        ("location", &payload.location),
    ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();
    if !missing.is_empty() {
        return Err(AppError::Validation(format!("Please fill in all required fields: {}", missing.join(", "))));
    }

    let date = NaiveDate::parse_from_str(payload.date.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format (YYYY-MM-DD)".into()))?;

    let event = Event::new(
        payload.title.trim().to_string(),
        date,
        payload.location.trim().to_string(),
        payload.description.trim().to_string(),
    );
    let created = state.event_repo.create(&event).await?;
    info!("Created event: {} ({})", created.title, created.id);
    Ok(Json(created))
}

pub async fn get_event_lineup(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let event = state.event_repo.find_by_id(&event_id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;
    let lineup = lineup_for(&event.title);
    Ok(Json(EventLineup { event, lineup }))
}

/// Speakers & Sponsors page: the line-up of every event.
pub async fn list_lineups(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let lineups: Vec<EventLineup> = state.event_repo.list().await?
        .into_iter()
        .map(|event| {
            let lineup = lineup_for(&event.title);
            EventLineup { event, lineup }
        })
        .collect();
    Ok(Json(lineups))
}
