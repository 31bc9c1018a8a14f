pub mod analytics;
pub mod checkin;
pub mod event;
pub mod export;
pub mod feedback;
pub mod health;
pub mod pages;
pub mod registration;
