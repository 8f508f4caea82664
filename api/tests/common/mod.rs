#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use chirp_api::bootstrap::app_context::{AppContext, AppServices};
use chirp_api::bootstrap::config::Config;
use chirp_api::infrastructure::db::{connect_pool, migrate};
use chirp_api::presentation::http::router;

pub const TEST_SECRET: &str = "integration-test-secret";

pub struct TestApp {
    pub router: Router,
}

pub fn test_config() -> Config {
    Config {
        api_host: "127.0.0.1".into(),
        api_port: 0,
        frontend_url: None,
        database_url: "sqlite::memory:".into(),
        database_max_connections: 1,
        jwt_secret: TEST_SECRET.into(),
        jwt_expires_secs: 3600,
        is_production: false,
    }
}

pub async fn spawn_app() -> TestApp {
    let cfg = test_config();
    let pool = connect_pool(&cfg.database_url, cfg.database_max_connections)
        .await
        .unwrap();
    migrate(&pool).await.unwrap();
    let ctx = AppContext::new(cfg.clone(), AppServices::from_pool(pool, &cfg));
    TestApp {
        router: router(ctx),
    }
}

impl TestApp {
    pub async fn send(&self, req: Request<Body>) -> (StatusCode, Value) {
        let resp = self.router.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }

    pub async fn call(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(t) = token {
            builder = builder.header("authorization", format!("Bearer {t}"));
        }
        let body = match body {
            Some(v) => {
                builder = builder.header("content-type", "application/json");
                Body::from(serde_json::to_vec(&v).unwrap())
            }
            None => Body::empty(),
        };
        self.send(builder.body(body).unwrap()).await
    }

    pub async fn register(&self, username: &str, password: &str) -> Value {
        let (status, body) = self
            .call(
                "POST",
                "/register",
                None,
                Some(json!({"username": username, "password": password})),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "register failed: {body}");
        body
    }

    pub async fn login(&self, username: &str, password: &str) -> String {
        let (status, body) = self
            .call(
                "POST",
                "/login",
                None,
                Some(json!({"username": username, "password": password})),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {body}");
        body["access_token"].as_str().unwrap().to_string()
    }

    /// Registers `username` with a fixed password and returns (id, token).
    pub async fn user(&self, username: &str) -> (i64, String) {
        let user = self.register(username, "password123").await;
        let token = self.login(username, "password123").await;
        (user["id"].as_i64().unwrap(), token)
    }

    pub async fn tweet(&self, token: &str, content: &str) -> Value {
        let (status, body) = self
            .call("POST", "/tweets", Some(token), Some(json!({"content": content})))
            .await;
        assert_eq!(status, StatusCode::OK, "create tweet failed: {body}");
        body
    }
}
