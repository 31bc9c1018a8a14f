use axum::{extract::{State, Query}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::{
    requests::{EventFilter, SubmitFeedbackRequest},
    responses::FeedbackResponse,
};
use crate::domain::models::feedback::{Feedback, NewFeedbackParams, Sentiment};
use crate::domain::services::{schedule::suggest_session_time, sentiment};
use crate::error::AppError;
use std::sync::Arc;
use tracing::{info, warn};

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

pub async fn submit_feedback(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SubmitFeedbackRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut missing = Vec::new();
    if payload.event.trim().is_empty() {
        missing.push("event");
    }
    if payload.comment.trim().is_empty() {
        missing.push("comment");
    }
    if payload.rating.is_none() {
        missing.push("rating");
    }
    if !missing.is_empty() {
        warn!("Feedback discarded, missing fields: {:?}", missing);
        return Err(AppError::Validation(format!("Please fill in all required fields: {}", missing.join(", "))));
    }

    let rating = payload.rating.unwrap_or_default();
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(AppError::Validation(format!("Rating must be between {} and {}", MIN_RATING, MAX_RATING)));
    }

    let label = sentiment::tag(state.sentiment_scorer.as_ref(), &payload.comment);
    let sentiment_warning = (label == Sentiment::Unknown)
        .then(|| "Sentiment analysis failed; feedback was stored without a sentiment.".to_string());

    let feedback = Feedback::new(NewFeedbackParams {
        name: payload.name,
        event: payload.event,
        comment: payload.comment,
        rating,
        sentiment: label,
    });
    let stored = state.feedback_repo.append(&feedback).await?;
    info!(event = %stored.event, sentiment = %stored.sentiment, rating, "Feedback received");

    let suggested_session_time = suggest_session_time(payload.time_preference.as_deref().unwrap_or_default());

    Ok(Json(FeedbackResponse {
        message: format!("Thanks! Sentiment: {}", stored.sentiment),
        feedback: stored,
        sentiment_warning,
        suggested_session_time,
    }))
}

pub async fn list_feedback(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<EventFilter>,
) -> Result<impl IntoResponse, AppError> {
    let feedback = match filter.event {
        Some(event) => state.feedback_repo.list_by_event(&event).await?,
        None => state.feedback_repo.list().await?,
    };
    Ok(Json(feedback))
}
