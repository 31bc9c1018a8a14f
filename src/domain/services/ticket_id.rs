use rand::Rng;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::AppError;

/// Prefix the ticket QR codes carry in front of the ticket id.
pub const QR_PAYLOAD_PREFIX: &str = "Ticket ID:";

const UUID_TICKET_LEN: usize = 8;
const FALLBACK_NAME_TOKEN: &str = "guest";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TicketIdStyle {
    /// `{1000..=9999}-{first name token}`
    #[default]
    Numeric,
    /// First 8 hex characters of a random v4 UUID.
    Uuid,
}

impl FromStr for TicketIdStyle {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "numeric" => Ok(TicketIdStyle::Numeric),
            "uuid" => Ok(TicketIdStyle::Uuid),
            other => Err(AppError::Config(format!(
                "TICKET_ID_STYLE must be 'numeric' or 'uuid', got '{}'",
                other
            ))),
        }
    }
}

/// No collision detection: two registrations may receive the same id.
#[derive(Debug, Clone, Copy, Default)]
pub struct TicketIdGenerator {
    style: TicketIdStyle,
}

impl TicketIdGenerator {
    pub fn new(style: TicketIdStyle) -> Self {
        Self { style }
    }

    pub fn generate(&self, name: &str) -> String {
        match self.style {
            TicketIdStyle::Numeric => {
                let number: u16 = rand::thread_rng().gen_range(1000..=9999);
                let first = name.split_whitespace().next().unwrap_or(FALLBACK_NAME_TOKEN);
                format!("{}-{}", number, first)
            }
            TicketIdStyle::Uuid => {
                let mut id = Uuid::new_v4().simple().to_string();
                id.truncate(UUID_TICKET_LEN);
                id
            }
        }
    }
}

pub fn qr_payload(ticket_id: &str) -> String {
    format!("{} {}", QR_PAYLOAD_PREFIX, ticket_id)
}

/// Accepts either a bare ticket id or a scanned `Ticket ID: …` payload.
pub fn ticket_id_from_scan(input: &str) -> &str {
    let trimmed = input.trim();
    trimmed
        .strip_prefix(QR_PAYLOAD_PREFIX)
        .map(str::trim)
        .unwrap_or(trimmed)
}
