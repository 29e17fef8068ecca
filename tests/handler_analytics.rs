mod common;

use chrono::{Duration, TimeZone, Utc};
use serde_json::Value;

const CHROME_WINDOWS: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";
const SAFARI_IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) \
     AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1";

#[tokio::test]
async fn test_owner_gets_full_report() {
    let app = common::spawn_app();
    let token = app.register("owner@example.com", "hunter22").await;
    let owner_id = app.user_id("owner@example.com");

    let link = app
        .links
        .seed_link("report01", "https://example.com/page", owner_id, None);

    let jan_first_nine = Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 0).unwrap();
    let jan_third_nine = Utc.with_ymd_and_hms(2024, 1, 3, 9, 0, 0).unwrap();
    app.links.seed_click(
        link.id,
        Some("192.168.1.5"),
        Some(CHROME_WINDOWS),
        "https://news.example.com/a",
        jan_first_nine,
    );
    app.links.seed_click(
        link.id,
        Some("8.8.8.8"),
        Some(SAFARI_IPHONE),
        "https://news.example.com/b",
        jan_third_nine,
    );
    app.links
        .seed_click(link.id, None, None, "Direct", jan_third_nine);

    let response = app
        .server
        .get("/report01/analytics")
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();
    let body: Value = response.json();

    assert_eq!(body["shortCode"], "report01");
    assert_eq!(body["longUrl"], "https://example.com/page");
    assert_eq!(body["totalClicks"], 3);
    assert_eq!(body["filteredClicks"], 3);
    assert_eq!(body["timeRange"], "all");

    // Daily buckets in ascending date order.
    let daily = body["dailyClicks"].as_array().unwrap();
    assert_eq!(daily.len(), 2);
    assert_eq!(daily[0]["date"], "2024-01-01");
    assert_eq!(daily[0]["clicks"], 1);
    assert_eq!(daily[1]["date"], "2024-01-03");
    assert_eq!(daily[1]["clicks"], 2);

    // All 24 hourly buckets, zeros included.
    let hourly = body["hourlyClicks"].as_array().unwrap();
    assert_eq!(hourly.len(), 24);
    assert_eq!(hourly[9]["clicks"], 3);
    assert_eq!(hourly[0]["clicks"], 0);

    // Referrer URLs collapse to their host.
    let referrers = body["topReferrers"].as_array().unwrap();
    assert_eq!(referrers[0]["referrer"], "news.example.com");
    assert_eq!(referrers[0]["count"], 2);

    let countries = body["topCountries"].as_array().unwrap();
    let names: Vec<&str> = countries
        .iter()
        .map(|c| c["country"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"Local Network"));
    assert!(names.contains(&"International"));
    assert!(names.contains(&"Unknown"));

    let devices = body["topDevices"].as_array().unwrap();
    assert_eq!(devices[0]["device"], "Desktop");
    assert_eq!(devices[0]["count"], 2);

    let browsers = body["topBrowsers"].as_array().unwrap();
    let chrome = browsers
        .iter()
        .find(|b| b["browser"] == "Chrome")
        .unwrap();
    assert_eq!(chrome["count"], 1);

    let os = body["topOperatingSystems"].as_array().unwrap();
    let windows = os.iter().find(|o| o["os"] == "Windows").unwrap();
    assert_eq!(windows["count"], 1);
}

#[tokio::test]
async fn test_time_range_filters_history() {
    let app = common::spawn_app();
    let token = app.register("owner@example.com", "hunter22").await;
    let owner_id = app.user_id("owner@example.com");

    let link = app
        .links
        .seed_link("window01", "https://example.com", owner_id, None);
    app.links
        .seed_click(link.id, None, None, "Direct", Utc::now() - Duration::days(1));
    app.links
        .seed_click(link.id, None, None, "Direct", Utc::now() - Duration::days(20));

    let response = app
        .server
        .get("/window01/analytics")
        .add_query_param("timeRange", "7d")
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["timeRange"], "7d");
    assert_eq!(body["totalClicks"], 2);
    assert_eq!(body["filteredClicks"], 1);
}

#[tokio::test]
async fn test_empty_history_returns_empty_breakdowns() {
    let app = common::spawn_app();
    let token = app.register("owner@example.com", "hunter22").await;
    let owner_id = app.user_id("owner@example.com");
    app.links
        .seed_link("silent01", "https://example.com", owner_id, None);

    let response = app
        .server
        .get("/silent01/analytics")
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["filteredClicks"], 0);
    for field in [
        "dailyClicks",
        "hourlyClicks",
        "topReferrers",
        "topCountries",
        "topDevices",
        "topBrowsers",
        "topOperatingSystems",
    ] {
        assert!(
            body[field].as_array().unwrap().is_empty(),
            "{field} should be empty"
        );
    }
}

#[tokio::test]
async fn test_non_owner_is_forbidden() {
    let app = common::spawn_app();
    app.register("owner@example.com", "hunter22").await;
    let intruder_token = app.register("intruder@example.com", "hunter22").await;

    let owner_id = app.user_id("owner@example.com");
    app.links
        .seed_link("private1", "https://example.com", owner_id, None);

    let response = app
        .server
        .get("/private1/analytics")
        .authorization_bearer(&intruder_token)
        .await;

    response.assert_status_forbidden();
    assert_eq!(
        response.json::<Value>()["error"],
        "Forbidden: You do not own this URL"
    );
}

#[tokio::test]
async fn test_unknown_code_is_not_found() {
    let app = common::spawn_app();
    let token = app.register("owner@example.com", "hunter22").await;

    let response = app
        .server
        .get("/nothere1/analytics")
        .authorization_bearer(&token)
        .await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"], "URL not found");
}

#[tokio::test]
async fn test_expired_link_still_reports_history() {
    let app = common::spawn_app();
    let token = app.register("owner@example.com", "hunter22").await;
    let owner_id = app.user_id("owner@example.com");

    let link = app.links.seed_link(
        "hasbeen1",
        "https://example.com",
        owner_id,
        Some(Utc::now() - Duration::days(1)),
    );
    app.links
        .seed_click(link.id, None, None, "Direct", Utc::now() - Duration::days(2));

    let response = app
        .server
        .get("/hasbeen1/analytics")
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["totalClicks"], 1);
    assert!(!body["expiresAt"].is_null());
}

#[tokio::test]
async fn test_analytics_requires_auth() {
    let app = common::spawn_app();
    app.links.seed_link("private1", "https://example.com", 1, None);

    app.server
        .get("/private1/analytics")
        .await
        .assert_status_unauthorized();
}
