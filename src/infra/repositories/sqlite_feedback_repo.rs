use crate::domain::{models::feedback::Feedback, ports::FeedbackRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteFeedbackRepo {
    pool: SqlitePool,
}

impl SqliteFeedbackRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeedbackRepository for SqliteFeedbackRepo {
    async fn append(&self, feedback: &Feedback) -> Result<Feedback, AppError> {
        sqlx::query_as::<_, Feedback>(
            "INSERT INTO feedback (id, name, event, comment, rating, sentiment, submitted_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&feedback.id).bind(&feedback.name).bind(&feedback.event).bind(&feedback.comment)
            .bind(feedback.rating).bind(feedback.sentiment).bind(feedback.submitted_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn list(&self) -> Result<Vec<Feedback>, AppError> {
        sqlx::query_as::<_, Feedback>("SELECT * FROM feedback ORDER BY rowid ASC").fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_by_event(&self, event: &str) -> Result<Vec<Feedback>, AppError> {
        sqlx::query_as::<_, Feedback>("SELECT * FROM feedback WHERE event = ? ORDER BY rowid ASC").bind(event).fetch_all(&self.pool).await.map_err(AppError::Database)
    }
}
