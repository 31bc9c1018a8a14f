use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;
use std::fmt;

pub const ANONYMOUS: &str = "Anonymous";

#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
    /// The scorer failed; the comment is still stored.
    Unknown,
}

impl Sentiment {
    pub const ALL: [Sentiment; 4] = [
        Sentiment::Positive,
        Sentiment::Negative,
        Sentiment::Neutral,
        Sentiment::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
            Sentiment::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq)]
pub struct Feedback {
    pub id: String,
    pub name: String,
    pub event: String,
    pub comment: String,
    pub rating: i32,
    pub sentiment: Sentiment,
    pub submitted_at: DateTime<Utc>,
}

pub struct NewFeedbackParams {
    pub name: Option<String>,
    pub event: String,
    pub comment: String,
    pub rating: i32,
    pub sentiment: Sentiment,
}

impl Feedback {
    pub const CSV_HEADER: [&'static str; 7] = [
        "id", "name", "event", "comment", "rating", "sentiment", "submitted_at",
    ];

    pub fn new(params: NewFeedbackParams) -> Self {
        let name = params
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| ANONYMOUS.to_string());

        Self {
            id: Uuid::new_v4().to_string(),
            name,
            event: params.event.trim().to_string(),
            comment: params.comment.trim().to_string(),
            rating: params.rating,
            sentiment: params.sentiment,
            submitted_at: Utc::now(),
        }
    }
}
