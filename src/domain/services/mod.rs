pub mod analytics;
pub mod defaults;
pub mod role_matcher;
pub mod schedule;
pub mod sentiment;
pub mod ticket_id;
