mod common;

use axum::http::StatusCode;
use common::{parse_body, FailingScorer, TestApp};
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn test_feedback_is_tagged_with_sentiment() {
    let app = TestApp::new().await;

    let cases = [
        ("I love this event, the talks were great!", "Positive"),
        ("This was terrible and boring, I hated it.", "Negative"),
        ("The venue is on the third floor.", "Neutral"),
    ];
    for (comment, expected) in cases {
        let res = app.post_json("/api/v1/feedback", json!({
            "name": "Ada", "event": "Tech Summit 2025", "comment": comment, "rating": 4
        })).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = parse_body(res).await;
        assert_eq!(body["feedback"]["sentiment"], expected, "comment: {}", comment);
        assert_eq!(body["message"], format!("Thanks! Sentiment: {}", expected));
        assert!(body.get("sentiment_warning").is_none());
    }

    assert_eq!(app.state.feedback_repo.list().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_blank_name_is_stored_as_anonymous() {
    let app = TestApp::new().await;
    let res = app.post_json("/api/v1/feedback", json!({
        "name": "", "event": "Data Conference", "comment": "Nice", "rating": 5
    })).await;
    assert_eq!(parse_body(res).await["feedback"]["name"], "Anonymous");

    let res = app.post_json("/api/v1/feedback", json!({
        "event": "Data Conference", "comment": "Nice", "rating": 5
    })).await;
    assert_eq!(parse_body(res).await["feedback"]["name"], "Anonymous");
}

#[tokio::test]
async fn test_missing_fields_and_bad_rating_are_rejected() {
    let app = TestApp::new().await;

    let res = app.post_json("/api/v1/feedback", json!({ "event": "Data Conference", "rating": 3 })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(parse_body(res).await["error"].as_str().unwrap().contains("comment"));

    let res = app.post_json("/api/v1/feedback", json!({ "event": "Data Conference", "comment": "ok" })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    for rating in [0, 6] {
        let res = app.post_json("/api/v1/feedback", json!({
            "event": "Data Conference", "comment": "ok", "rating": rating
        })).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    assert!(app.state.feedback_repo.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_scorer_failure_stores_unknown_with_warning() {
    let app = TestApp::with_scorer(Arc::new(FailingScorer)).await;

    let res = app.post_json("/api/v1/feedback", json!({
        "name": "Ada", "event": "Tech Summit 2025", "comment": "Loved it", "rating": 5
    })).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["feedback"]["sentiment"], "Unknown");
    assert!(body["sentiment_warning"].is_string());

    let stored = app.state.feedback_repo.list().await.unwrap();
    assert_eq!(stored[0].sentiment.as_str(), "Unknown");
}

#[tokio::test]
async fn test_session_suggestion_follows_time_preference() {
    let app = TestApp::new().await;
    for _ in 0..10 {
        let res = app.post_json("/api/v1/feedback", json!({
            "event": "Data Conference", "comment": "ok", "rating": 3, "time_preference": "late afternoon"
        })).await;
        let slot = parse_body(res).await["suggested_session_time"].as_str().unwrap().to_string();
        assert!(slot == "14:00" || slot == "16:00", "unexpected slot {}", slot);
    }
}

#[tokio::test]
async fn test_list_feedback_filtered_by_event() {
    let app = TestApp::new().await;
    for event in ["Data Conference", "Tech Summit 2025", "Data Conference"] {
        app.post_json("/api/v1/feedback", json!({ "event": event, "comment": "fine", "rating": 3 })).await;
    }

    let all = parse_body(app.get("/api/v1/feedback").await).await;
    assert_eq!(all.as_array().unwrap().len(), 3);

    let filtered = parse_body(app.get("/api/v1/feedback?event=Tech%20Summit%202025").await).await;
    assert_eq!(filtered.as_array().unwrap().len(), 1);
    assert_eq!(filtered[0]["event"], "Tech Summit 2025");
}
