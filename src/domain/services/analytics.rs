use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use crate::domain::models::{
    attendee::{Attendee, TicketType},
    event::Event,
    feedback::{Feedback, Sentiment},
};

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct EventAttendance {
    pub event: String,
    pub attendees: usize,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct TicketTypeCount {
    pub ticket_type: TicketType,
    pub count: usize,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct SentimentCount {
    pub sentiment: Sentiment,
    pub count: usize,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct EventRating {
    pub event: String,
    pub feedback_count: usize,
    pub average_rating: f64,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct DailyRegistrations {
    pub date: NaiveDate,
    pub registrations: usize,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct AnalyticsReport {
    pub total_attendees: usize,
    pub total_feedback: usize,
    pub attendance_by_event: Vec<EventAttendance>,
    pub ticket_types: Vec<TicketTypeCount>,
    pub sentiment: Vec<SentimentCount>,
    pub ratings_by_event: Vec<EventRating>,
    pub registrations_by_day: Vec<DailyRegistrations>,
}

impl AnalyticsReport {
    pub fn is_empty(&self) -> bool {
        self.total_attendees == 0 && self.total_feedback == 0
    }
}

/// Catalogue events come first (zero counts included), then any event names
/// only seen on attendee records, in first-seen order.
pub fn attendance_by_event(events: &[Event], attendees: &[Attendee]) -> Vec<EventAttendance> {
    let mut rows: Vec<EventAttendance> = events
        .iter()
        .map(|e| EventAttendance { event: e.title.clone(), attendees: 0 })
        .collect();
    let mut index: HashMap<String, usize> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| (row.event.clone(), i))
        .collect();

    for attendee in attendees {
        let i = *index.entry(attendee.event.clone()).or_insert_with(|| {
            rows.push(EventAttendance { event: attendee.event.clone(), attendees: 0 });
            rows.len() - 1
        });
        rows[i].attendees += 1;
    }
    rows
}

pub fn ticket_type_counts(attendees: &[Attendee]) -> Vec<TicketTypeCount> {
    TicketType::ALL
        .iter()
        .map(|t| TicketTypeCount {
            ticket_type: *t,
            count: attendees.iter().filter(|a| a.ticket_type == *t).count(),
        })
        .collect()
}

pub fn sentiment_counts(feedback: &[Feedback]) -> Vec<SentimentCount> {
    Sentiment::ALL
        .iter()
        .map(|s| SentimentCount {
            sentiment: *s,
            count: feedback.iter().filter(|f| f.sentiment == *s).count(),
        })
        .collect()
}

pub fn ratings_by_event(feedback: &[Feedback]) -> Vec<EventRating> {
    let mut order: Vec<String> = Vec::new();
    let mut totals: HashMap<&str, (usize, i64)> = HashMap::new();

    for fb in feedback {
        let entry = totals.entry(fb.event.as_str()).or_insert_with(|| {
            order.push(fb.event.clone());
            (0, 0)
        });
        entry.0 += 1;
        entry.1 += i64::from(fb.rating);
    }

    order
        .into_iter()
        .map(|event| {
            let (count, sum) = totals.get(event.as_str()).copied().unwrap_or((0, 0));
            let average_rating = if count == 0 { 0.0 } else { sum as f64 / count as f64 };
            EventRating { event, feedback_count: count, average_rating }
        })
        .collect()
}

pub fn registrations_by_day(attendees: &[Attendee]) -> Vec<DailyRegistrations> {
    let mut days: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for attendee in attendees {
        *days.entry(attendee.registered_at.date_naive()).or_default() += 1;
    }
    days.into_iter()
        .map(|(date, registrations)| DailyRegistrations { date, registrations })
        .collect()
}

pub fn build_report(events: &[Event], attendees: &[Attendee], feedback: &[Feedback]) -> AnalyticsReport {
    AnalyticsReport {
        total_attendees: attendees.len(),
        total_feedback: feedback.len(),
        attendance_by_event: attendance_by_event(events, attendees),
        ticket_types: ticket_type_counts(attendees),
        sentiment: sentiment_counts(feedback),
        ratings_by_event: ratings_by_event(feedback),
        registrations_by_day: registrations_by_day(attendees),
    }
}
