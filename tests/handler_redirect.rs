mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};

#[tokio::test]
async fn test_redirect_unknown_code() {
    let app = common::spawn_app();

    let response = app.server.get("/links/nosuch").await;
    response.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_returns_stored_url() {
    let app = common::spawn_app();
    common::seed_link(&app, "abc123", "https://example.com", None, None);

    let response = app.server.get("/links/abc123").await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers().get("location").unwrap(),
        "https://example.com"
    );
}

#[tokio::test]
async fn test_redirect_prepends_http_scheme() {
    let app = common::spawn_app();
    common::seed_link(&app, "bare01", "example.com", None, None);

    let response = app.server.get("/links/bare01").await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers().get("location").unwrap(),
        "http://example.com"
    );
}

#[tokio::test]
async fn test_redirect_increments_access_count_once() {
    let app = common::spawn_app();
    common::seed_link(&app, "abc123", "https://example.com", None, None);

    app.server.get("/links/abc123").await;

    let link = app.links.get("abc123").unwrap();
    assert_eq!(link.access_count, 1);
    assert!(link.last_accessed_at.is_some());
}

#[tokio::test]
async fn test_redirect_expired_link_is_gone() {
    let app = common::spawn_app();
    common::seed_link(
        &app,
        "old123",
        "https://example.com",
        None,
        Some(Utc::now() - Duration::hours(1)),
    );

    let response = app.server.get("/links/old123").await;
    response.assert_status(StatusCode::GONE);
}

#[tokio::test]
async fn test_redirect_expired_link_still_counts_the_hit() {
    let app = common::spawn_app();
    common::seed_link(
        &app,
        "old123",
        "https://example.com",
        None,
        Some(Utc::now() - Duration::hours(1)),
    );

    app.server.get("/links/old123").await;
    app.server.get("/links/old123").await;

    // The accounting update lands before the expiry rejection.
    let link = app.links.get("old123").unwrap();
    assert_eq!(link.access_count, 2);
}

#[tokio::test]
async fn test_redirect_future_expiry_still_redirects() {
    let app = common::spawn_app();
    common::seed_link(
        &app,
        "live01",
        "https://example.com",
        None,
        Some(Utc::now() + Duration::hours(1)),
    );

    let response = app.server.get("/links/live01").await;
    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
}
