mod common;

use axum::http::StatusCode;
use serde_json::json;

/// Full user journey: register, log in, shorten with a custom alias, follow
/// the redirect, and read the stats back.
#[tokio::test]
async fn test_register_login_shorten_redirect_stats() {
    let app = common::spawn_app();

    // Register.
    app.server
        .post("/register")
        .json(&json!({
            "username": "alice",
            "email": "a@x.com",
            "password": "pw",
        }))
        .await
        .assert_status_ok();

    // Login with the correct password yields a token.
    let token_response = app
        .server
        .post("/token")
        .form(&[("username", "alice"), ("password", "pw")])
        .await;
    token_response.assert_status_ok();
    let token = token_response.json::<serde_json::Value>()["access_token"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(!token.is_empty());

    // Shorten with a custom alias.
    let shorten_response = app
        .server
        .post("/links/shorten")
        .json(&json!({
            "original_url": "https://example.com",
            "custom_alias": "ex",
        }))
        .await;
    shorten_response.assert_status_ok();
    assert_eq!(
        shorten_response.json::<serde_json::Value>()["short_code"],
        "ex"
    );

    // The redirect resolves to the original URL.
    let redirect_response = app.server.get("/links/ex").await;
    redirect_response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        redirect_response.headers().get("location").unwrap(),
        "https://example.com"
    );

    // Stats record exactly that one access.
    let stats_response = app.server.get("/links/ex/stats").await;
    stats_response.assert_status_ok();
    let stats = stats_response.json::<serde_json::Value>();
    assert_eq!(stats["access_count"], 1);

    // And the authenticated cleanup path works with the issued token.
    app.server
        .delete("/links/ex")
        .add_header("Authorization", format!("Bearer {token}"))
        .await
        .assert_status_ok();
    app.server.get("/links/ex").await.assert_status_not_found();
}
