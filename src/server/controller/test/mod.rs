use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;
use url::Url;

use crate::server::{
    config::AppUrls, router, service::mail::MemoryMailer, state::AppState,
};


/// Test application over an in-memory database with every table.
struct TestApp {
    _test: TestContext,
    db: sea_orm::DatabaseConnection,
    mailer: Arc<MemoryMailer>,
    app: Router,
}

impl TestApp {
    async fn new() -> Self {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.clone().unwrap();
        let mailer = Arc::new(MemoryMailer::new());

        let urls = AppUrls {
            public_url: Url::parse("http://localhost:3001/").unwrap(),
            frontend_url: Url::parse("https://play.example.com/").unwrap(),
        };
        let app = router::app(AppState::new(db.clone(), mailer.clone(), urls));

        Self {
            _test: test,
            db,
            mailer,
            app,
        }
    }

    /// Sends a request and returns the status and raw body.
    async fn send_raw(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, String) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    /// Sends a request and parses the body as JSON (`Value::Null` when empty).
    async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let (status, body) = self.send_raw(method, uri, body).await;
        let json = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&body).unwrap_or(Value::String(body))
        };
        (status, json)
    }

    async fn seed_catalog(&self) {
        factory::create_customizations(&self.db, &[64, 65, 66])
            .await
            .unwrap();
        factory::create_quests(&self.db, &[1, 2]).await.unwrap();
    }

    /// Registers and verifies an account through the API, returning its user id.
    async fn register_verified(&self, username: &str, email: &str, password: &str) -> i64 {
        let (status, body) = self
            .send(
                Method::POST,
                "/register",
                Some(json!({ "username": username, "email": email, "password": password })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);

        let token = self.mailer.last_token().unwrap();
        let (status, _) = self
            .send_raw(Method::GET, &format!("/verify-email?token={}", token), None)
            .await;
        assert_eq!(status, StatusCode::OK);

        body["user_id"].as_i64().unwrap()
    }
}

/// Tests the connectivity check.
///
/// Expected: 200 with `{"success": "api connected"}`
#[tokio::test]
async fn health_reports_connected() {
    let app = TestApp::new().await;

    let (status, body) = app.send(Method::GET, "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": "api connected" }));
}

/// Tests that the OpenAPI document lists the routes.
///
/// Expected: 200 with the register and equip paths documented
#[tokio::test]
async fn serves_openapi_document() {
    let app = TestApp::new().await;

    let (status, body) = app.send(Method::GET, "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"].get("/register").is_some());
    assert!(body["paths"].get("/inventory/equip").is_some());
}
