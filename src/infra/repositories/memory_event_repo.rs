use crate::domain::{models::event::Event, ports::EventRepository};
use crate::error::AppError;
use async_trait::async_trait;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryEventRepo {
    events: RwLock<Vec<Event>>,
}

impl MemoryEventRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventRepository for MemoryEventRepo {
    async fn create(&self, event: &Event) -> Result<Event, AppError> {
        self.events.write().await.push(event.clone());
        Ok(event.clone())
    }
    async fn find_by_id(&self, id: &str) -> Result<Option<Event>, AppError> {
        Ok(self.events.read().await.iter().find(|e| e.id == id).cloned())
    }
    async fn list(&self) -> Result<Vec<Event>, AppError> {
        Ok(self.events.read().await.clone())
    }
}
