pub mod attendee;
pub mod event;
pub mod feedback;
pub mod job;
