use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use crate::domain::models::job::Job;
use crate::domain::ports::{
    AttendeeRepository, EmailService, EventRepository, FeedbackRepository, SentimentScorer,
};
use crate::domain::services::{role_matcher::RoleMatcher, ticket_id::TicketIdGenerator};
use tera::Tera;

#[derive(Clone)]
pub struct AppState {
    pub event_repo: Arc<dyn EventRepository>,
    pub attendee_repo: Arc<dyn AttendeeRepository>,
    pub feedback_repo: Arc<dyn FeedbackRepository>,
    pub email_service: Arc<dyn EmailService>,
    pub sentiment_scorer: Arc<dyn SentimentScorer>,
    pub role_matcher: Arc<RoleMatcher>,
    pub ticket_ids: TicketIdGenerator,
    pub templates: Arc<Tera>,
    pub jobs: UnboundedSender<Job>,
}
