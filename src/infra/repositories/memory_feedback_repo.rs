use crate::domain::{models::feedback::Feedback, ports::FeedbackRepository};
use crate::error::AppError;
use async_trait::async_trait;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryFeedbackRepo {
    feedback: RwLock<Vec<Feedback>>,
}

impl MemoryFeedbackRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FeedbackRepository for MemoryFeedbackRepo {
    async fn append(&self, feedback: &Feedback) -> Result<Feedback, AppError> {
        self.feedback.write().await.push(feedback.clone());
        Ok(feedback.clone())
    }
    async fn list(&self) -> Result<Vec<Feedback>, AppError> {
        Ok(self.feedback.read().await.clone())
    }
    async fn list_by_event(&self, event: &str) -> Result<Vec<Feedback>, AppError> {
        Ok(self.feedback.read().await.iter().filter(|f| f.event == event).cloned().collect())
    }
}
