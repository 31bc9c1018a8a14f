mod common;

use axum::http::{header, StatusCode};
use common::{body_bytes, parse_body, TestApp};
use eventsync::{config::Config, domain::services::ticket_id::TicketIdStyle};
use serde_json::json;

#[tokio::test]
async fn test_register_single_ticket() {
    let app = TestApp::new().await;

    let res = app.post_json("/api/v1/register", json!({
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "phone": "+44 20 7946 0000",
        "event": "Tech Summit 2025",
        "ticket_type": "VIP",
        "skills": "Python, data analysis"
    })).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;

    assert_eq!(body["suggested_role"], "speaker");
    let tickets = body["tickets"].as_array().unwrap();
    assert_eq!(tickets.len(), 1);

    let ticket_id = tickets[0]["ticket_id"].as_str().unwrap();
    let (number, first_name) = ticket_id.split_once('-').unwrap();
    assert_eq!(number.len(), 4);
    assert_eq!(first_name, "Ada");
    assert_eq!(tickets[0]["ticket_type"], "VIP");
    assert_eq!(tickets[0]["event"], "Tech Summit 2025");
    assert!(tickets[0]["qr_url"].as_str().unwrap().ends_with("/qr"));

    let message = body["message"].as_str().unwrap();
    assert!(message.contains(ticket_id));
    assert!(message.contains("Confirmation sent to ada@example.com"));

    let stored = app.state.attendee_repo.list().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].phone.as_deref(), Some("+44 20 7946 0000"));
}

#[tokio::test]
async fn test_store_grows_by_requested_ticket_count() {
    let app = TestApp::new().await;

    let res = app.post_json("/api/v1/register", json!({
        "name": "Grace Hopper", "email": "grace@example.com",
        "event": "Data Conference", "quantity": 3
    })).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["tickets"].as_array().unwrap().len(), 3);
    assert_eq!(app.state.attendee_repo.list().await.unwrap().len(), 3);

    let res = app.post_json("/api/v1/register", json!({
        "name": "Grace Hopper", "email": "grace@example.com",
        "event": "Data Conference", "quantity": 2
    })).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(app.state.attendee_repo.list().await.unwrap().len(), 5);
}

#[tokio::test]
async fn test_same_attendee_twice_creates_independent_records() {
    let app = TestApp::new().await;
    let payload = json!({ "name": "Linus", "email": "linus@example.com", "event": "Tech Summit 2025" });

    app.post_json("/api/v1/register", payload.clone()).await;
    app.post_json("/api/v1/register", payload).await;

    let stored = app.state.attendee_repo.list().await.unwrap();
    assert_eq!(stored.len(), 2);
    assert!(stored.iter().all(|a| a.name == "Linus" && a.ticket_type.as_str() == "General"));
}

#[tokio::test]
async fn test_missing_fields_are_rejected_and_not_stored() {
    let app = TestApp::new().await;

    let res = app.post_json("/api/v1/register", json!({ "name": "  ", "event": "Data Conference" })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(res).await;
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("name") && error.contains("email"));
    assert!(!error.contains("event"));

    assert_eq!(app.state.attendee_repo.list().await.unwrap().len(), 0);
}

#[tokio::test]
async fn test_ticket_quantity_bounds() {
    let app = TestApp::new().await;
    for quantity in [0, 11] {
        let res = app.post_json("/api/v1/register", json!({
            "name": "Bob", "email": "bob@example.com", "event": "Data Conference", "quantity": quantity
        })).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
    assert_eq!(app.state.attendee_repo.list().await.unwrap().len(), 0);
}

#[tokio::test]
async fn test_unlisted_event_is_accepted() {
    let app = TestApp::new().await;
    let res = app.post_json("/api/v1/register", json!({
        "name": "Eve", "email": "eve@example.com", "event": "Secret Meetup"
    })).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(app.state.attendee_repo.list_by_event("Secret Meetup").await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_confirmation_email_carries_ticket_pdfs() {
    let app = TestApp::new().await;
    let res = app.post_json("/api/v1/register", json!({
        "name": "Margaret Hamilton", "email": "margaret@example.com",
        "event": "Tech Summit 2025", "quantity": 2, "skills": "team organize help"
    })).await;
    let body = parse_body(res).await;
    assert_eq!(body["suggested_role"], "volunteer");

    let sent = app.wait_for_emails(1).await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].recipient, "margaret@example.com");
    assert_eq!(sent[0].subject, "Registration Confirmed: Tech Summit 2025");
    assert!(sent[0].html_body.contains("Margaret Hamilton"));
    assert!(sent[0].html_body.contains("volunteer"));

    let first_ticket = body["tickets"][0]["ticket_id"].as_str().unwrap();
    assert_eq!(sent[0].attachment_names.len(), 2);
    assert!(sent[0].attachment_names.contains(&format!("{}_ticket.pdf", first_ticket)));
}

#[tokio::test]
async fn test_closed_job_queue_still_registers_without_claiming_delivery() {
    let app = TestApp::without_worker().await;

    let res = app.post_json("/api/v1/register", json!({
        "name": "Ada", "email": "ada@example.com", "event": "Data Conference"
    })).await;
    assert_eq!(res.status(), StatusCode::OK);
    let message = parse_body(res).await["message"].as_str().unwrap().to_string();
    assert!(message.starts_with("Registered! Ticket ID: "));
    assert!(message.ends_with("Confirmation email could not be sent."));
    assert!(!message.contains("Confirmation sent to"));

    assert_eq!(app.state.attendee_repo.list().await.unwrap().len(), 1);
    assert!(app.emails.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_ticket_lookup_qr_and_pdf() {
    let app = TestApp::new().await;
    let res = app.post_json("/api/v1/register", json!({
        "name": "Ada", "email": "ada@example.com", "event": "Data Conference"
    })).await;
    let body = parse_body(res).await;
    let ticket_id = body["tickets"][0]["ticket_id"].as_str().unwrap().to_string();

    let res = app.get(&format!("/api/v1/tickets/{}", ticket_id)).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["name"], "Ada");

    let res = app.get(body["tickets"][0]["qr_url"].as_str().unwrap()).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()[header::CONTENT_TYPE], "image/png");
    let png = body_bytes(res).await;
    let img = image::load_from_memory(&png).unwrap().to_luma8();
    let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
        img.width() as usize,
        img.height() as usize,
        |x, y| img.get_pixel(x as u32, y as u32).0[0],
    );
    let grids = prepared.detect_grids();
    let (_meta, content) = grids[0].decode().unwrap();
    assert_eq!(content, format!("Ticket ID: {}", ticket_id));

    let res = app.get(body["tickets"][0]["pdf_url"].as_str().unwrap()).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()[header::CONTENT_TYPE], "application/pdf");
    assert_eq!(
        res.headers()[header::CONTENT_DISPOSITION],
        format!("attachment; filename=\"{}_ticket.pdf\"", ticket_id).as_str()
    );
    assert!(body_bytes(res).await.starts_with(b"%PDF-"));

    let res = app.get("/api/v1/tickets/0000-Nobody").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_uuid_ticket_style() {
    let app = TestApp::with_config(Config {
        ticket_id_style: TicketIdStyle::Uuid,
        ..Config::default()
    }).await;

    let res = app.post_json("/api/v1/register", json!({
        "name": "Ada", "email": "ada@example.com", "event": "Data Conference"
    })).await;
    let body = parse_body(res).await;
    let ticket_id = body["tickets"][0]["ticket_id"].as_str().unwrap();
    assert_eq!(ticket_id.len(), 8);
    assert!(ticket_id.chars().all(|c| c.is_ascii_hexdigit()));
}

#[tokio::test]
async fn test_list_attendees_filtered_by_event() {
    let app = TestApp::new().await;
    for (name, event) in [("A", "Data Conference"), ("B", "Tech Summit 2025"), ("C", "Data Conference")] {
        app.post_json("/api/v1/register", json!({ "name": name, "email": "x@example.com", "event": event })).await;
    }

    let all = parse_body(app.get("/api/v1/attendees").await).await;
    assert_eq!(all.as_array().unwrap().len(), 3);

    let filtered = parse_body(app.get("/api/v1/attendees?event=Data%20Conference").await).await;
    let names: Vec<&str> = filtered.as_array().unwrap().iter().map(|a| a["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["A", "C"]);
}
