use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{ConnectOptions, SqlitePool};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::info;
use tracing::log::LevelFilter;
use tera::Tera;

use crate::background::job_channel;
use crate::config::Config;
use crate::domain::models::job::Job;
use crate::domain::ports::{
    AttendeeRepository, EmailService, EventRepository, FeedbackRepository,
};
use crate::domain::services::{defaults, role_matcher::RoleMatcher, ticket_id::TicketIdGenerator};
use crate::error::AppError;
use crate::infra::email::{http_email_service::HttpEmailService, log_email_service::LogEmailService};
use crate::infra::repositories::{
    memory_attendee_repo::MemoryAttendeeRepo, memory_event_repo::MemoryEventRepo,
    memory_feedback_repo::MemoryFeedbackRepo,
    sqlite_attendee_repo::SqliteAttendeeRepo, sqlite_event_repo::SqliteEventRepo,
    sqlite_feedback_repo::SqliteFeedbackRepo,
};
use crate::infra::sentiment::vader_scorer::VaderScorer;
use crate::state::AppState;

pub struct Stores {
    pub event_repo: Arc<dyn EventRepository>,
    pub attendee_repo: Arc<dyn AttendeeRepository>,
    pub feedback_repo: Arc<dyn FeedbackRepository>,
}

impl Stores {
    pub fn in_memory() -> Self {
        Self {
            event_repo: Arc::new(MemoryEventRepo::new()),
            attendee_repo: Arc::new(MemoryAttendeeRepo::new()),
            feedback_repo: Arc::new(MemoryFeedbackRepo::new()),
        }
    }

    pub fn sqlite(pool: SqlitePool) -> Self {
        Self {
            event_repo: Arc::new(SqliteEventRepo::new(pool.clone())),
            attendee_repo: Arc::new(SqliteAttendeeRepo::new(pool.clone())),
            feedback_repo: Arc::new(SqliteFeedbackRepo::new(pool)),
        }
    }
}

pub async fn bootstrap_state(config: &Config) -> Result<(AppState, UnboundedReceiver<Job>), AppError> {
    let stores = match &config.database_url {
        Some(database_url) => {
            info!("Initializing SQLite connection with WAL Mode...");
            let pool = connect_sqlite(database_url).await?;
            Stores::sqlite(pool)
        }
        None => {
            info!("No DATABASE_URL set, keeping registrations in memory");
            Stores::in_memory()
        }
    };

    seed_catalogue(stores.event_repo.as_ref()).await?;

    let email_service: Arc<dyn EmailService> = match &config.mail_service_url {
        Some(url) => Arc::new(HttpEmailService::new(url.clone(), config.mail_service_token.clone())),
        None => {
            info!("No MAIL_SERVICE_URL set, confirmation emails are simulated");
            Arc::new(LogEmailService)
        }
    };

    Ok(build_state(config, stores, email_service, load_templates()?))
}

/// Wires an [`AppState`] together and returns the receiving end of its job queue.
pub fn build_state(
    config: &Config,
    stores: Stores,
    email_service: Arc<dyn EmailService>,
    templates: Tera,
) -> (AppState, UnboundedReceiver<Job>) {
    let (jobs, receiver) = job_channel();
    let state = AppState {
        ticket_ids: TicketIdGenerator::new(config.ticket_id_style),
        event_repo: stores.event_repo,
        attendee_repo: stores.attendee_repo,
        feedback_repo: stores.feedback_repo,
        email_service,
        sentiment_scorer: Arc::new(VaderScorer::new()),
        role_matcher: Arc::new(RoleMatcher::default()),
        templates: Arc::new(templates),
        jobs,
    };
    (state, receiver)
}

pub fn load_templates() -> Result<Tera, AppError> {
    let mut tera = Tera::default();
    tera.add_raw_template("confirmation.html", include_str!("../../templates/confirmation.html"))
        .map_err(|e| AppError::InternalWithMsg(format!("Failed to load confirmation template: {}", e)))?;
    Ok(tera)
}

/// Inserts the built-in events when the catalogue is empty.
pub async fn seed_catalogue(event_repo: &dyn EventRepository) -> Result<(), AppError> {
    if !event_repo.list().await?.is_empty() {
        return Ok(());
    }
    for event in defaults::seed_events() {
        event_repo.create(&event).await?;
    }
    info!("Seeded event catalogue");
    Ok(())
}

pub async fn connect_sqlite(database_url: &str) -> Result<SqlitePool, AppError> {
    if !database_url.starts_with("sqlite:") {
        return Err(AppError::Config(format!(
            "DATABASE_URL must be a sqlite: URL, got '{}'",
            database_url
        )));
    }

    let opts = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .log_statements(LevelFilter::Debug)
        .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await?;

    sqlx::migrate!("./migrations/sqlite").run(&pool).await?;
    Ok(pool)
}
