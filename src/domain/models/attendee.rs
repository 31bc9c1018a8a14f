use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use std::fmt;

#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TicketType {
    #[default]
    General,
    #[serde(rename = "VIP")]
    #[sqlx(rename = "VIP")]
    Vip,
    Student,
}

impl TicketType {
    pub const ALL: [TicketType; 3] = [TicketType::General, TicketType::Vip, TicketType::Student];

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketType::General => "General",
            TicketType::Vip => "VIP",
            TicketType::Student => "Student",
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One issued ticket. Records are append-only and never updated.
///
/// `ticket_id` is not guaranteed unique; lookups resolve to the earliest record.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq)]
pub struct Attendee {
    pub ticket_id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub event: String,
    pub ticket_type: TicketType,
    pub registered_at: DateTime<Utc>,
}

pub struct NewAttendeeParams {
    pub ticket_id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub event: String,
    pub ticket_type: TicketType,
}

impl Attendee {
    pub const CSV_HEADER: [&'static str; 7] = [
        "ticket_id", "name", "email", "phone", "event", "ticket_type", "registered_at",
    ];

    pub fn new(params: NewAttendeeParams) -> Self {
        Self {
            ticket_id: params.ticket_id,
            name: params.name.trim().to_string(),
            email: params.email.trim().to_string(),
            // Blank phones are stored as absent so CSV exports read back identically.
            phone: params.phone.map(|p| p.trim().to_string()).filter(|p| !p.is_empty()),
            event: params.event.trim().to_string(),
            ticket_type: params.ticket_type,
            registered_at: Utc::now(),
        }
    }
}
