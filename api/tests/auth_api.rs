mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{Duration, Utc};
use serde_json::json;

use chirp_api::application::services::auth::TokenService;
use common::{TEST_SECRET, spawn_app};

#[tokio::test]
async fn register_returns_created_user() {
    let app = spawn_app().await;
    let body = app.register("charlie_test", "password123").await;
    assert_eq!(body["username"], "charlie_test");
    assert!(body["id"].as_i64().is_some());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn duplicate_handle_is_conflict() {
    let app = spawn_app().await;
    app.register("charlie_test", "password123").await;
    let (status, body) = app
        .call(
            "POST",
            "/register",
            None,
            Some(json!({"username": "charlie_test", "password": "another-pass"})),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["detail"], "Username already registered");
}

#[tokio::test]
async fn register_rejects_malformed_input() {
    let app = spawn_app().await;
    for payload in [
        json!({"username": "   ", "password": "password123"}),
        json!({"username": "ok_name", "password": "123"}),
        json!({"username": "ok_name"}),
    ] {
        let (status, body) = app.call("POST", "/register", None, Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["detail"].is_string());
    }
}

#[tokio::test]
async fn login_issues_bearer_token() {
    let app = spawn_app().await;
    app.register("alice_test", "password123").await;
    let (status, body) = app
        .call(
            "POST",
            "/login",
            None,
            Some(json!({"username": "alice_test", "password": "password123"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token_type"], "bearer");
    assert_eq!(body["user"]["username"], "alice_test");
    assert!(!body["access_token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn login_accepts_password_form() {
    let app = spawn_app().await;
    app.register("alice_test", "password123").await;
    let req = Request::builder()
        .method("POST")
        .uri("/login")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from("username=alice_test&password=password123"))
        .unwrap();
    let (status, body) = app.send(req).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["access_token"].is_string());
}

#[tokio::test]
async fn bad_credentials_are_unauthorized() {
    let app = spawn_app().await;
    app.register("alice_test", "password123").await;
    for (user, pass) in [("alice_test", "wrongpassword"), ("ghost", "password123")] {
        let (status, body) = app
            .call(
                "POST",
                "/login",
                None,
                Some(json!({"username": user, "password": pass})),
            )
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["detail"], "Invalid credentials");
    }
}

#[tokio::test]
async fn me_requires_valid_token() {
    let app = spawn_app().await;
    let (id, token) = app.user("alice_test").await;

    let (status, body) = app.call("GET", "/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id);

    let (status, _) = app.call("GET", "/me", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app.call("GET", "/me", Some("garbage"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn expired_token_is_rejected() {
    let app = spawn_app().await;
    let (id, _) = app.user("alice_test").await;
    let tokens = TokenService::new(TEST_SECRET, 3600);

    let fresh = tokens.issue(id).unwrap();
    let (status, _) = app
        .call("POST", "/tweets", Some(&fresh.token), Some(json!({"content": "hi"})))
        .await;
    assert_eq!(status, StatusCode::OK);

    let stale = tokens.issue_at(id, Utc::now() - Duration::hours(2)).unwrap();
    let (status, body) = app
        .call("POST", "/tweets", Some(&stale.token), Some(json!({"content": "hi"})))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["detail"], "Could not validate credentials");
}

#[tokio::test]
async fn token_for_unknown_account_is_unauthorized() {
    let app = spawn_app().await;
    let (alice, alice_token) = app.user("alice_test").await;
    let tweet = app.tweet(&alice_token, "still here").await;
    let ghost = TokenService::new(TEST_SECRET, 3600).issue(999).unwrap();

    let writes = [
        ("/tweets", json!({"content": "hello"})),
        ("/like", json!({"tweet_id": tweet["id"]})),
        ("/follow", json!({"followed_id": alice})),
    ];
    for (uri, payload) in writes {
        let (status, body) = app
            .call("POST", uri, Some(&ghost.token), Some(payload))
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
        assert_eq!(body["detail"], "Could not validate credentials", "{uri}");
    }

    let (status, _) = app.call("GET", "/me", Some(&ghost.token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn health_reports_ok() {
    let app = spawn_app().await;
    let (status, body) = app.call("GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "ok");
}
