use crate::domain::models::attendee::TicketType;
use serde::Deserialize;

// Text fields default to empty so a missing field is reported as a
// validation message rather than a deserialization failure.

#[derive(Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub event: String,
    pub phone: Option<String>,
    pub ticket_type: Option<TicketType>,
    pub quantity: Option<u32>,
    pub skills: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateEventRequest {
    #[serde(default)]
    pub title: String,
    /// `YYYY-MM-DD`
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Deserialize)]
pub struct CheckInRequest {
    /// A bare ticket id or a scanned QR payload.
    #[serde(default)]
    pub ticket_id: String,
}

#[derive(Deserialize)]
pub struct SubmitFeedbackRequest {
    pub name: Option<String>,
    #[serde(default)]
    pub event: String,
    #[serde(default)]
    pub comment: String,
    pub rating: Option<i32>,
    pub time_preference: Option<String>,
}

#[derive(Deserialize)]
pub struct EventFilter {
    pub event: Option<String>,
}
