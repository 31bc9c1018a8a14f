use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub location: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Event {
    pub fn new(title: String, date: NaiveDate, location: String, description: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            date,
            location,
            description,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Speaker {
    pub name: String,
    pub bio: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Sponsor {
    pub name: String,
    pub details: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Lineup {
    pub speakers: Vec<Speaker>,
    pub sponsors: Vec<Sponsor>,
}
