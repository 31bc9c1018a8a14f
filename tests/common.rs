use eventsync::{
    api::router::create_router,
    background::start_background_worker,
    config::Config,
    domain::ports::{EmailAttachment, EmailService, SentimentScorer},
    error::AppError,
    infra::factory::{build_state, connect_sqlite, load_templates, seed_catalogue, Stores},
    state::AppState,
};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
    Router,
};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::ServiceExt;
use uuid::Uuid;

#[allow(dead_code)]
#[derive(Clone, Debug)]
pub struct SentEmail {
    pub recipient: String,
    pub subject: String,
    pub html_body: String,
    pub attachment_names: Vec<String>,
}

#[derive(Default)]
pub struct RecordingEmailService {
    pub sent: Mutex<Vec<SentEmail>>,
}

#[async_trait]
impl EmailService for RecordingEmailService {
    async fn send(
        &self,
        recipient: &str,
        subject: &str,
        html_body: &str,
        attachments: &[EmailAttachment],
    ) -> Result<(), AppError> {
        self.sent.lock().unwrap().push(SentEmail {
            recipient: recipient.to_string(),
            subject: subject.to_string(),
            html_body: html_body.to_string(),
            attachment_names: attachments.iter().map(|a| a.filename.clone()).collect(),
        });
        Ok(())
    }
}

#[allow(dead_code)]
pub struct FailingScorer;

impl SentimentScorer for FailingScorer {
    fn compound(&self, _text: &str) -> Result<f64, AppError> {
        Err(AppError::InternalWithMsg("lexicon unavailable".into()))
    }
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub state: Arc<AppState>,
    pub emails: Arc<RecordingEmailService>,
    pub db_filename: Option<String>,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        Self::spawn(Config::default(), Stores::in_memory(), None, None).await
    }

    pub async fn with_config(config: Config) -> Self {
        Self::spawn(config, Stores::in_memory(), None, None).await
    }

    pub async fn with_scorer(scorer: Arc<dyn SentimentScorer>) -> Self {
        Self::spawn(Config::default(), Stores::in_memory(), Some(scorer), None).await
    }

    /// No background worker: the job queue is closed from the start.
    pub async fn without_worker() -> Self {
        let stores = Stores::in_memory();
        seed_catalogue(stores.event_repo.as_ref()).await.expect("Failed to seed events");

        let emails = Arc::new(RecordingEmailService::default());
        let (state, jobs) = build_state(&Config::default(), stores, emails.clone(), load_templates().unwrap());
        drop(jobs);
        let state = Arc::new(state);
        let router = create_router(state.clone());

        Self { router, state, emails, db_filename: None }
    }

    /// Backed by a throwaway SQLite file that is removed on drop.
    pub async fn with_sqlite() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        Self::with_sqlite_file(&db_filename).await
    }

    pub async fn with_sqlite_file(db_filename: &str) -> Self {
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);
        let pool = connect_sqlite(&db_url).await.expect("Failed to connect to test db");
        let config = Config { database_url: Some(db_url), ..Config::default() };
        Self::spawn(config, Stores::sqlite(pool), None, Some(db_filename.to_string())).await
    }

    async fn spawn(
        config: Config,
        stores: Stores,
        scorer: Option<Arc<dyn SentimentScorer>>,
        db_filename: Option<String>,
    ) -> Self {
        seed_catalogue(stores.event_repo.as_ref()).await.expect("Failed to seed events");

        let emails = Arc::new(RecordingEmailService::default());
        let (mut state, jobs) = build_state(&config, stores, emails.clone(), load_templates().unwrap());
        if let Some(scorer) = scorer {
            state.sentiment_scorer = scorer;
        }
        let state = Arc::new(state);

        let worker_state = state.clone();
        tokio::spawn(async move {
            start_background_worker(worker_state, jobs).await;
        });

        let router = create_router(state.clone());

        Self { router, state, emails, db_filename }
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.router.clone().oneshot(
            Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
        ).await.unwrap()
    }

    pub async fn post_json(&self, uri: &str, payload: Value) -> Response {
        self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap()
        ).await.unwrap()
    }

    /// Waits for the background worker to deliver at least `count` emails.
    pub async fn wait_for_emails(&self, count: usize) -> Vec<SentEmail> {
        for _ in 0..100 {
            let sent = self.emails.sent.lock().unwrap().clone();
            if sent.len() >= count {
                return sent;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        panic!("Timed out waiting for {} emails", count);
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(db_filename) = &self.db_filename {
            let _ = std::fs::remove_file(db_filename);
            let _ = std::fs::remove_file(format!("{}-wal", db_filename));
            let _ = std::fs::remove_file(format!("{}-shm", db_filename));
        }
    }
}

#[allow(dead_code)]
pub async fn parse_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[allow(dead_code)]
pub async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec()
}
