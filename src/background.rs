use std::sync::Arc;
use tera::Context;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{error, info, info_span, Instrument};
use uuid::Uuid;

use crate::domain::models::job::{ConfirmationJob, Job};
use crate::domain::ports::EmailAttachment;
use crate::domain::services::defaults::confirmation_subject;
use crate::error::AppError;
use crate::infra::documents::ticket_pdf::{render_ticket_pdf, ticket_filename};
use crate::state::AppState;

pub fn job_channel() -> (UnboundedSender<Job>, UnboundedReceiver<Job>) {
    mpsc::unbounded_channel()
}

/// Drains the job queue until every sender is gone. Failures are logged and
/// never reach the request that enqueued the job.
pub async fn start_background_worker(state: Arc<AppState>, mut jobs: UnboundedReceiver<Job>) {
    info!("Starting background job worker...");

    while let Some(job) = jobs.recv().await {
        let span = info_span!(
            "background_job",
            job_id = %Uuid::new_v4(),
            job_type = job.job_type(),
        );

        async {
            info!("Processing job");
            match process_job(&state, &job).await {
                Ok(()) => info!("Job completed successfully"),
                Err(e) => error!("Job failed with error: {}", e),
            }
        }
            .instrument(span)
            .await;
    }

    info!("Job queue closed, background worker stopping");
}

async fn process_job(state: &AppState, job: &Job) -> Result<(), AppError> {
    match job {
        Job::SendConfirmation(confirmation) => send_confirmation(state, confirmation).await,
    }
}

async fn send_confirmation(state: &AppState, job: &ConfirmationJob) -> Result<(), AppError> {
    let mut context = Context::new();
    context.insert("user_name", &job.name);
    context.insert("event_title", &job.event);
    context.insert("ticket_type", job.ticket_type.as_str());
    context.insert("ticket_ids", &job.ticket_ids);
    context.insert("suggested_role", &job.suggested_role);

    let html_body = state.templates.render("confirmation.html", &context)
        .map_err(|e| AppError::InternalWithMsg(format!("Template render error: {}", e)))?;

    let attachments = job.ticket_ids
        .iter()
        .map(|ticket_id| {
            Ok(EmailAttachment {
                filename: ticket_filename(ticket_id),
                content_type: "application/pdf".to_string(),
                data: render_ticket_pdf(&job.name, &job.event, ticket_id)?,
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    state.email_service
        .send(&job.recipient, &confirmation_subject(&job.event), &html_body, &attachments)
        .await?;

    info!(recipient = %job.recipient, tickets = job.ticket_ids.len(), "Confirmation sent");
    Ok(())
}
