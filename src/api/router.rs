use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, MethodRouter},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{
    analytics, checkin, event, export, feedback, health, pages::{self, Page}, registration,
};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

/// Handler(s) serving each page.
fn page_route(page: Page) -> MethodRouter<Arc<AppState>> {
    match page {
        Page::Home => get(pages::home),
        Page::Register => post(registration::register),
        Page::Agenda => get(event::list_events),
        Page::SpeakersSponsors => get(event::list_lineups),
        Page::CheckIn => post(checkin::check_in),
        Page::Feedback => post(feedback::submit_feedback).get(feedback::list_feedback),
        Page::Analytics => get(analytics::get_summary),
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let pages = Page::ALL
        .into_iter()
        .fold(Router::new(), |router, page| router.route(&page.path(), page_route(page)));

    pages
        .route("/health", get(health::health_check))
        .route("/api/v1/pages", get(pages::list_pages))

        // Events
        .route("/api/v1/events", get(event::list_events).post(event::create_event))
        .route("/api/v1/events/{event_id}/lineup", get(event::get_event_lineup))

        // Attendees & Tickets
        .route("/api/v1/attendees", get(registration::list_attendees))
        .route("/api/v1/tickets/{ticket_id}", get(registration::get_ticket))
        .route("/api/v1/tickets/{ticket_id}/qr", get(registration::get_ticket_qr))
        .route("/api/v1/tickets/{ticket_id}/pdf", get(registration::get_ticket_pdf))

        // Analytics & Export
        .route("/api/v1/analytics/charts/{kind}", get(analytics::get_chart))
        .route("/api/v1/export/attendees.csv", get(export::export_attendees))
        .route("/api/v1/export/feedback.csv", get(export::export_feedback))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
