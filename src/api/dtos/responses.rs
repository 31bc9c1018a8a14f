use crate::domain::models::{
    attendee::{Attendee, TicketType},
    event::{Event, Lineup},
    feedback::Feedback,
};
use crate::domain::services::analytics::AnalyticsReport;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Serialize)]
pub struct PageLink {
    pub page: &'static str,
    pub title: &'static str,
    pub path: String,
}

#[derive(Serialize)]
pub struct HomeResponse {
    pub headline: &'static str,
    pub tagline: &'static str,
    pub pages: Vec<PageLink>,
}

#[derive(Serialize)]
pub struct IssuedTicket {
    pub ticket_id: String,
    pub name: String,
    pub event: String,
    pub ticket_type: TicketType,
    pub registered_at: DateTime<Utc>,
    pub qr_url: String,
    pub pdf_url: String,
}

#[derive(Serialize)]
pub struct RegistrationResponse {
    pub message: String,
    pub suggested_role: String,
    pub tickets: Vec<IssuedTicket>,
}

#[derive(Serialize)]
pub struct CheckInResponse {
    pub valid: bool,
    pub message: String,
    pub attendee: Attendee,
}

#[derive(Serialize)]
pub struct FeedbackResponse {
    pub message: String,
    pub feedback: Feedback,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment_warning: Option<String>,
    pub suggested_session_time: &'static str,
}

#[derive(Serialize)]
pub struct EventLineup {
    pub event: Event,
    #[serde(flatten)]
    pub lineup: Lineup,
}

#[derive(Serialize)]
pub struct AnalyticsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub report: AnalyticsReport,
}

#[derive(Serialize)]
pub struct InfoMessage {
    pub message: String,
}
