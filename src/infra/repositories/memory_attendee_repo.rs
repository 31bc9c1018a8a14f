use crate::domain::{models::attendee::Attendee, ports::AttendeeRepository};
use crate::error::AppError;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Process-lifetime attendee list.
#[derive(Default)]
pub struct MemoryAttendeeRepo {
    attendees: RwLock<Vec<Attendee>>,
}

impl MemoryAttendeeRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AttendeeRepository for MemoryAttendeeRepo {
    async fn append(&self, attendee: &Attendee) -> Result<Attendee, AppError> {
        self.attendees.write().await.push(attendee.clone());
        Ok(attendee.clone())
    }
    async fn append_all(&self, attendees: &[Attendee]) -> Result<Vec<Attendee>, AppError> {
        self.attendees.write().await.extend_from_slice(attendees);
        Ok(attendees.to_vec())
    }
    async fn find_by_ticket_id(&self, ticket_id: &str) -> Result<Option<Attendee>, AppError> {
        Ok(self.attendees.read().await.iter().find(|a| a.ticket_id == ticket_id).cloned())
    }
    async fn list(&self) -> Result<Vec<Attendee>, AppError> {
        Ok(self.attendees.read().await.clone())
    }
    async fn list_by_event(&self, event: &str) -> Result<Vec<Attendee>, AppError> {
        Ok(self.attendees.read().await.iter().filter(|a| a.event == event).cloned().collect())
    }
}
