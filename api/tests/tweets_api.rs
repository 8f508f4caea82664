mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::spawn_app;

#[tokio::test]
async fn creating_a_tweet_requires_a_token() {
    let app = spawn_app().await;
    let (status, body) = app
        .call("POST", "/tweets", None, Some(json!({"content": "hello"})))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["detail"], "Not authenticated");
}

#[tokio::test]
async fn created_tweet_starts_without_likes() {
    let app = spawn_app().await;
    let (id, token) = app.user("alice_test").await;
    let tweet = app.tweet(&token, "Hello from alice").await;
    assert_eq!(tweet["owner_id"], id);
    assert_eq!(tweet["content"], "Hello from alice");
    assert_eq!(tweet["likes_count"], 0);
}

#[tokio::test]
async fn tweet_content_is_validated() {
    let app = spawn_app().await;
    let (_, token) = app.user("alice_test").await;
    for content in [String::new(), "   ".to_string(), "x".repeat(281)] {
        let (status, _) = app
            .call("POST", "/tweets", Some(&token), Some(json!({"content": content})))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
    app.tweet(&token, &"x".repeat(280)).await;
}

#[tokio::test]
async fn listing_paginates_newest_first() {
    let app = spawn_app().await;
    let (_, token) = app.user("alice_test").await;
    for i in 0..15 {
        app.tweet(&token, &format!("tweet {i}")).await;
    }

    let (status, page) = app.call("GET", "/tweets", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["total"], 15);
    assert_eq!(page["page"], 1);
    assert_eq!(page["size"], 10);
    assert_eq!(page["items"].as_array().unwrap().len(), 10);
    assert_eq!(page["items"][0]["content"], "tweet 14");

    let (_, page) = app.call("GET", "/tweets?page=2&size=10", None, None).await;
    assert_eq!(page["items"].as_array().unwrap().len(), 5);
    assert_eq!(page["items"][4]["content"], "tweet 0");

    let (_, page) = app.call("GET", "/tweets?sort=asc&size=3", None, None).await;
    assert_eq!(page["items"][0]["content"], "tweet 0");
    assert_eq!(page["items"].as_array().unwrap().len(), 3);

    let (_, page) = app.call("GET", "/tweets?page=9", None, None).await;
    assert_eq!(page["total"], 15);
    assert!(page["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn bad_pagination_parameters_are_rejected() {
    let app = spawn_app().await;
    for uri in [
        "/tweets?page=0",
        "/tweets?size=0",
        "/tweets?size=101",
        "/tweets?sort=sideways",
        "/tweets?page=abc",
    ] {
        let (status, body) = app.call("GET", uri, None, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert!(body["detail"].is_string(), "{uri}");
    }
}

#[tokio::test]
async fn my_tweets_only_lists_own_tweets() {
    let app = spawn_app().await;
    let (alice, alice_token) = app.user("alice_test").await;
    let (_, bob_token) = app.user("bob_test").await;
    app.tweet(&alice_token, "from alice").await;
    app.tweet(&bob_token, "from bob").await;

    let (status, page) = app.call("GET", "/tweets/me", Some(&alice_token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["total"], 1);
    assert_eq!(page["items"][0]["owner_id"], alice);

    let (status, _) = app.call("GET", "/tweets/me", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn only_the_owner_may_update() {
    let app = spawn_app().await;
    let (_, alice_token) = app.user("alice_test").await;
    let (_, bob_token) = app.user("bob_test").await;
    let tweet = app.tweet(&alice_token, "original").await;
    let uri = format!("/tweets/{}", tweet["id"]);

    let (status, body) = app
        .call("PUT", &uri, Some(&bob_token), Some(json!({"content": "hijacked"})))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["detail"], "Not authorized to update this tweet");

    let (status, body) = app
        .call("PUT", &uri, Some(&alice_token), Some(json!({"content": "edited"})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["content"], "edited");
    assert_eq!(body["id"], tweet["id"]);

    let (status, _) = app
        .call("PUT", "/tweets/9999", Some(&alice_token), Some(json!({"content": "x"})))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn only_the_owner_may_delete() {
    let app = spawn_app().await;
    let (_, alice_token) = app.user("alice_test").await;
    let (_, bob_token) = app.user("bob_test").await;
    let tweet = app.tweet(&alice_token, "short lived").await;
    let uri = format!("/tweets/{}", tweet["id"]);

    let (status, _) = app.call("DELETE", &uri, Some(&bob_token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = app.call("DELETE", &uri, Some(&alice_token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (status, _) = app.call("DELETE", &uri, Some(&alice_token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, page) = app.call("GET", "/tweets", None, None).await;
    assert_eq!(page["total"], 0);
}

#[tokio::test]
async fn non_numeric_tweet_id_is_bad_request() {
    let app = spawn_app().await;
    let (_, token) = app.user("alice_test").await;
    let (status, _) = app.call("DELETE", "/tweets/abc", Some(&token), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
