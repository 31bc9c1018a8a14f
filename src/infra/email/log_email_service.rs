use crate::domain::ports::{EmailAttachment, EmailService};
use crate::error::AppError;
use async_trait::async_trait;
use tracing::info;

/// Simulated delivery used when no mail relay is configured.
pub struct LogEmailService;

#[async_trait]
impl EmailService for LogEmailService {
    async fn send(
        &self,
        recipient: &str,
        subject: &str,
        html_body: &str,
        attachments: &[EmailAttachment],
    ) -> Result<(), AppError> {
        info!(
            recipient,
            subject,
            body_len = html_body.len(),
            attachments = attachments.len(),
            "Simulated email delivery"
        );
        Ok(())
    }
}
