use chrono::NaiveDate;

use crate::domain::models::event::{Event, Lineup, Speaker, Sponsor};

pub const TECH_SUMMIT: &str = "Tech Summit 2025";
pub const DATA_CONFERENCE: &str = "Data Conference";

/// The catalogue every fresh store starts with.
pub fn seed_events() -> Vec<Event> {
    vec![
        seed_event("tech-summit-2025", TECH_SUMMIT, (2025, 5, 10), "Remote", "Explore tech trends."),
        seed_event("data-conference", DATA_CONFERENCE, (2025, 6, 15), "New York", "Dive into data analytics."),
    ]
}

fn seed_event(id: &str, title: &str, (y, m, d): (i32, u32, u32), location: &str, description: &str) -> Event {
    let mut event = Event::new(
        title.to_string(),
        NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        location.to_string(),
        description.to_string(),
    );
    event.id = id.to_string();
    event
}

/// Speakers and sponsors are static and keyed by event title.
pub fn lineup_for(event_title: &str) -> Lineup {
    match event_title {
        TECH_SUMMIT => Lineup {
            speakers: vec![Speaker {
                name: "Jane Doe".to_string(),
                bio: "Python expert with 10 years experience.".to_string(),
            }],
            sponsors: vec![Sponsor {
                name: "TechCorp".to_string(),
                details: "Leading tech innovator.".to_string(),
            }],
        },
        _ => Lineup::default(),
    }
}

pub fn confirmation_subject(event_title: &str) -> String {
    format!("Registration Confirmed: {}", event_title)
}
