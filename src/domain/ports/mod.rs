use crate::domain::models::{attendee::Attendee, event::Event, feedback::Feedback};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, event: &Event) -> Result<Event, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Event>, AppError>;
    async fn list(&self) -> Result<Vec<Event>, AppError>;
}

/// Append-only attendee store. `list` returns records in append order.
#[async_trait]
pub trait AttendeeRepository: Send + Sync {
    async fn append(&self, attendee: &Attendee) -> Result<Attendee, AppError>;
    async fn append_all(&self, attendees: &[Attendee]) -> Result<Vec<Attendee>, AppError>;
    /// First record carrying `ticket_id`, in append order.
    async fn find_by_ticket_id(&self, ticket_id: &str) -> Result<Option<Attendee>, AppError>;
    async fn list(&self) -> Result<Vec<Attendee>, AppError>;
    async fn list_by_event(&self, event: &str) -> Result<Vec<Attendee>, AppError>;
}

/// Append-only feedback store. `list` returns records in append order.
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    async fn append(&self, feedback: &Feedback) -> Result<Feedback, AppError>;
    async fn list(&self) -> Result<Vec<Feedback>, AppError>;
    async fn list_by_event(&self, event: &str) -> Result<Vec<Feedback>, AppError>;
}

pub struct EmailAttachment {
    pub filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

#[async_trait]
pub trait EmailService: Send + Sync {
    async fn send(&self, recipient: &str, subject: &str, html_body: &str, attachments: &[EmailAttachment]) -> Result<(), AppError>;
}

/// Lexicon-based polarity scorer. Returns a compound score in [-1, 1].
pub trait SentimentScorer: Send + Sync {
    fn compound(&self, text: &str) -> Result<f64, AppError>;
}
