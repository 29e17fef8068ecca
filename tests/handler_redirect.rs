mod common;

use chrono::{Duration, Utc};
use serde_json::Value;

#[tokio::test]
async fn test_redirect_returns_307_and_records_click() {
    let app = common::spawn_app();
    let link = app
        .links
        .seed_link("target01", "https://example.com/target", 1, None);

    let response = app.server.get("/target01").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/target");

    let clicks = app.links.clicks_of(link.id);
    assert_eq!(clicks.len(), 1);
    assert_eq!(app.links.link_by_code("target01").unwrap().click_count, 1);
    // No Referer header arrived, so the sentinel is stored.
    assert_eq!(clicks[0].referrer, "Direct");
}

#[tokio::test]
async fn test_redirect_captures_request_metadata() {
    let app = common::spawn_app();
    let link = app
        .links
        .seed_link("target02", "https://example.com/target", 1, None);

    app.server
        .get("/target02")
        .add_header("x-forwarded-for", "203.0.113.9, 10.0.0.1")
        .add_header("user-agent", "Mozilla/5.0 (X11; Linux x86_64) Firefox/121.0")
        .add_header("referer", "https://news.example.com/article")
        .await
        .assert_status(axum::http::StatusCode::TEMPORARY_REDIRECT);

    let clicks = app.links.clicks_of(link.id);
    assert_eq!(clicks.len(), 1);
    // First forwarded hop wins.
    assert_eq!(clicks[0].ip_address.as_deref(), Some("203.0.113.9"));
    assert_eq!(
        clicks[0].user_agent.as_deref(),
        Some("Mozilla/5.0 (X11; Linux x86_64) Firefox/121.0")
    );
    assert_eq!(clicks[0].referrer, "https://news.example.com/article");
}

#[tokio::test]
async fn test_unknown_code_is_404_and_records_nothing() {
    let app = common::spawn_app();

    let response = app.server.get("/nothere1").await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"], "Short URL not found");
}

#[tokio::test]
async fn test_expired_link_is_410_and_records_nothing() {
    let app = common::spawn_app();
    let link = app.links.seed_link(
        "expired1",
        "https://example.com/old",
        1,
        Some(Utc::now() - Duration::hours(1)),
    );

    let response = app.server.get("/expired1").await;

    assert_eq!(response.status_code(), 410);
    assert_eq!(response.json::<Value>()["error"], "This URL has expired");

    assert!(app.links.clicks_of(link.id).is_empty());
    assert_eq!(app.links.link_by_code("expired1").unwrap().click_count, 0);
}

#[tokio::test]
async fn test_concurrent_redirects_each_record_exactly_one_click() {
    let app = common::spawn_app();
    let link = app
        .links
        .seed_link("popular1", "https://example.com/hot", 1, None);

    let hit = || app.server.get("/popular1");
    let responses = tokio::join!(hit(), hit(), hit(), hit(), hit(), hit(), hit(), hit());
    let (r1, r2, r3, r4, r5, r6, r7, r8) = responses;
    for response in [r1, r2, r3, r4, r5, r6, r7, r8] {
        assert_eq!(response.status_code(), 307);
    }

    // Counter and event log agree after concurrent traffic.
    let stored = app.links.link_by_code("popular1").unwrap();
    let clicks = app.links.clicks_of(link.id);
    assert_eq!(stored.click_count, 8);
    assert_eq!(clicks.len(), 8);
}

#[tokio::test]
async fn test_redirect_counts_accumulate() {
    let app = common::spawn_app();
    app.links
        .seed_link("repeat01", "https://example.com/again", 1, None);

    for _ in 0..3 {
        app.server.get("/repeat01").await;
    }

    assert_eq!(app.links.link_by_code("repeat01").unwrap().click_count, 3);
}
