use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode},
};
use database::schema::{RetryPolicy, connect_and_prepare};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::ServiceExt;

/// Router backed by a fresh in-memory SQLite database
pub struct TestApp {
    router: Router,
    pub db: DatabaseConnection,
}

impl TestApp {
    pub async fn new() -> Self {
        let db = connect_and_prepare("sqlite::memory:", RetryPolicy::default())
            .await
            .expect("failed to prepare test database");

        Self {
            router: server::app(db.clone()),
            db,
        }
    }

    /// Sends a request, returning the status and the body parsed as JSON
    /// (`Value::Null` for an empty or non-JSON body)
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);

        let body = if let Some(json) = body {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).expect("failed to serialize json request body"))
        } else {
            Body::empty()
        };

        self.send(builder.body(body).expect("failed to build request"))
            .await
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router error during test request");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("failed to read response body");

        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }
}
