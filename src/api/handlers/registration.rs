use axum::{extract::{State, Path, Query}, http::header, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::{
    requests::{EventFilter, RegisterRequest},
    responses::{IssuedTicket, RegistrationResponse},
};
use crate::domain::models::{
    attendee::{Attendee, NewAttendeeParams},
    job::{ConfirmationJob, Job},
};
use crate::domain::services::ticket_id::qr_payload;
use crate::error::AppError;
use crate::infra::documents::{qr, ticket_pdf};
use std::sync::Arc;
use tracing::{info, warn};

pub const MAX_TICKETS_PER_REGISTRATION: u32 = 10;

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    let missing: Vec<&str> = [
        ("name", &payload.name),
        ("email", &payload.email),
        ("event", &payload.event),
    ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();
    if !missing.is_empty() {
        warn!("Registration discarded, missing fields: {:?}", missing);
        return Err(AppError::Validation(format!("Please fill in all required fields: {}", missing.join(", "))));
    }

    let quantity = payload.quantity.unwrap_or(1);
    if !(1..=MAX_TICKETS_PER_REGISTRATION).contains(&quantity) {
        return Err(AppError::Validation(format!(
            "Ticket quantity must be between 1 and {}",
            MAX_TICKETS_PER_REGISTRATION
        )));
    }

    let ticket_type = payload.ticket_type.unwrap_or_default();
    let name = payload.name.trim();

    // Every requested ticket is its own record, even for the same person.
    let attendees: Vec<Attendee> = (0..quantity)
        .map(|_| Attendee::new(NewAttendeeParams {
            ticket_id: state.ticket_ids.generate(name),
            name: payload.name.clone(),
            email: payload.email.clone(),
            phone: payload.phone.clone(),
            event: payload.event.clone(),
            ticket_type,
        }))
        .collect();

    let stored = state.attendee_repo.append_all(&attendees).await?;

    let suggested_role = state.role_matcher
        .best_role(payload.skills.as_deref().unwrap_or_default())
        .to_string();

    let first = &stored[0];
    info!(
        event = %first.event,
        tickets = stored.len(),
        ticket_type = %ticket_type,
        "Registered attendee"
    );

    let job = Job::SendConfirmation(ConfirmationJob {
        recipient: first.email.clone(),
        name: first.name.clone(),
        event: first.event.clone(),
        ticket_type,
        ticket_ids: stored.iter().map(|a| a.ticket_id.clone()).collect(),
        suggested_role: suggested_role.clone(),
    });
    let confirmation = if state.jobs.send(job).is_ok() {
        format!("Confirmation sent to {}.", first.email)
    } else {
        warn!("Job queue closed, confirmation email for {} not queued", first.email);
        "Confirmation email could not be sent.".to_string()
    };

    let ticket_list = stored.iter().map(|a| a.ticket_id.as_str()).collect::<Vec<_>>().join(", ");
    let message = format!("Registered! Ticket ID: {}. {}", ticket_list, confirmation);

    let tickets = stored.into_iter().map(issued_ticket).collect();
    Ok(Json(RegistrationResponse { message, suggested_role, tickets }))
}

fn issued_ticket(attendee: Attendee) -> IssuedTicket {
    let encoded = urlencoding::encode(&attendee.ticket_id).into_owned();
    IssuedTicket {
        qr_url: format!("/api/v1/tickets/{}/qr", encoded),
        pdf_url: format!("/api/v1/tickets/{}/pdf", encoded),
        ticket_id: attendee.ticket_id,
        name: attendee.name,
        event: attendee.event,
        ticket_type: attendee.ticket_type,
        registered_at: attendee.registered_at,
    }
}

pub async fn list_attendees(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<EventFilter>,
) -> Result<impl IntoResponse, AppError> {
    let attendees = match filter.event {
        Some(event) => state.attendee_repo.list_by_event(&event).await?,
        None => state.attendee_repo.list().await?,
    };
    Ok(Json(attendees))
}

async fn find_ticket(state: &AppState, ticket_id: &str) -> Result<Attendee, AppError> {
    state.attendee_repo.find_by_ticket_id(ticket_id).await?
        .ok_or(AppError::NotFound("Ticket not found".into()))
}

pub async fn get_ticket(
    State(state): State<Arc<AppState>>,
    Path(ticket_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(find_ticket(&state, &ticket_id).await?))
}

pub async fn get_ticket_qr(
    State(state): State<Arc<AppState>>,
    Path(ticket_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let attendee = find_ticket(&state, &ticket_id).await?;
    let png = qr::encode_png(&qr_payload(&attendee.ticket_id))?;
    Ok(([(header::CONTENT_TYPE, "image/png")], png))
}

pub async fn get_ticket_pdf(
    State(state): State<Arc<AppState>>,
    Path(ticket_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let attendee = find_ticket(&state, &ticket_id).await?;
    let pdf = ticket_pdf::render_ticket_pdf(&attendee.name, &attendee.event, &attendee.ticket_id)?;
    let disposition = format!(
        "attachment; filename=\"{}\"",
        ticket_pdf::ticket_filename(&attendee.ticket_id).replace('"', "")
    );
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        pdf,
    ))
}
