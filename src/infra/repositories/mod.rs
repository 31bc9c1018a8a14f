pub mod memory_attendee_repo;
pub mod memory_event_repo;
pub mod memory_feedback_repo;

pub mod sqlite_attendee_repo;
pub mod sqlite_event_repo;
pub mod sqlite_feedback_repo;
