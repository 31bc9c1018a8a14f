use csv::{ReaderBuilder, WriterBuilder};
use serde::{de::DeserializeOwned, Serialize};

use crate::domain::models::{attendee::Attendee, feedback::Feedback};
use crate::error::AppError;

pub fn attendees_to_csv(attendees: &[Attendee]) -> Result<Vec<u8>, AppError> {
    write_csv(&Attendee::CSV_HEADER, attendees)
}

pub fn feedback_to_csv(feedback: &[Feedback]) -> Result<Vec<u8>, AppError> {
    write_csv(&Feedback::CSV_HEADER, feedback)
}

pub fn attendees_from_csv(bytes: &[u8]) -> Result<Vec<Attendee>, AppError> {
    read_csv(bytes)
}

pub fn feedback_from_csv(bytes: &[u8]) -> Result<Vec<Feedback>, AppError> {
    read_csv(bytes)
}

// The header is written explicitly so an empty store still exports its columns.
fn write_csv<T: Serialize>(header: &[&str], rows: &[T]) -> Result<Vec<u8>, AppError> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(Vec::new());
    writer.write_record(header).map_err(csv_error)?;
    for row in rows {
        writer.serialize(row).map_err(csv_error)?;
    }
    writer
        .into_inner()
        .map_err(|e| AppError::InternalWithMsg(format!("CSV export failed: {}", e)))
}

fn read_csv<T: DeserializeOwned>(bytes: &[u8]) -> Result<Vec<T>, AppError> {
    ReaderBuilder::new()
        .from_reader(bytes)
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|e| AppError::Validation(format!("Malformed CSV: {}", e)))
}

fn csv_error(e: csv::Error) -> AppError {
    AppError::InternalWithMsg(format!("CSV export failed: {}", e))
}
