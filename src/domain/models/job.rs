use crate::domain::models::attendee::TicketType;

#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmationJob {
    pub recipient: String,
    pub name: String,
    pub event: String,
    pub ticket_type: TicketType,
    pub ticket_ids: Vec<String>,
    pub suggested_role: String,
}

/// Work handed to the background worker after a request has been answered.
#[derive(Debug, Clone, PartialEq)]
pub enum Job {
    SendConfirmation(ConfirmationJob),
}

impl Job {
    pub fn job_type(&self) -> &'static str {
        match self {
            Job::SendConfirmation(_) => "CONFIRMATION",
        }
    }
}
