//! Shared helpers for integration tests: configuration builders and a stub
//! transactional-email provider that records every request it receives.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::Value;

use northlight::config::{
    Config, ContentConfig, ContentMode, EmailConfig, MaintenanceConfig, ObservabilityConfig,
    RemoteContentConfig, ServerConfig,
};

/// Baseline test configuration: static content, no email integration.
pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3001,
        },
        email: None,
        content: ContentConfig::default(),
        maintenance: MaintenanceConfig::default(),
        observability: ObservabilityConfig {
            log_level: "debug".to_string(),
        },
    }
}

/// Test configuration with the email integration pointed at a stub provider.
pub fn create_test_config_with_email(api_base: &str) -> Config {
    let mut config = create_test_config();
    config.email = Some(EmailConfig {
        api_key: "re_test_key".to_string(),
        api_base: api_base.to_string(),
        from_address: "Northlight Website <noreply@northlight.ai>".to_string(),
        contact_address: "hello@northlight.ai".to_string(),
    });
    config
}

/// Test configuration reading content from a stub document store.
pub fn create_test_config_with_remote_content(base_url: &str) -> Config {
    let mut config = create_test_config();
    config.content = ContentConfig {
        mode: ContentMode::Remote,
        remote: Some(RemoteContentConfig {
            base_url: base_url.to_string(),
            dataset: "production".to_string(),
            token: None,
        }),
    };
    config
}

#[derive(Clone)]
struct StubState {
    requests: Arc<Mutex<Vec<Value>>>,
    status: StatusCode,
    body: Value,
}

/// A fake transactional-email provider bound to an ephemeral local port.
pub struct StubProvider {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Value>>>,
}

impl StubProvider {
    /// Requests received so far, in arrival order.
    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }
}

/// Start a stub provider answering every send with the given status/body.
pub async fn spawn_stub_provider(status: StatusCode, body: Value) -> StubProvider {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = StubState {
        requests: requests.clone(),
        status,
        body,
    };

    async fn record(State(state): State<StubState>, Json(payload): Json<Value>) -> impl IntoResponse {
        state.requests.lock().unwrap().push(payload);
        (state.status, Json(state.body.clone()))
    }

    let app = Router::new().route("/emails", post(record)).with_state(state);
    let base_url = serve_on_ephemeral_port(app).await;

    StubProvider { base_url, requests }
}

/// Start a stub structured-content service answering every query with the
/// given status/body.
pub async fn spawn_stub_content_service(status: StatusCode, body: Value) -> String {
    async fn answer(State((status, body)): State<(StatusCode, Value)>) -> impl IntoResponse {
        (status, Json(body.clone()))
    }

    let app = Router::new()
        .route("/data/query/{dataset}", get(answer))
        .with_state((status, body));

    serve_on_ephemeral_port(app).await
}

async fn serve_on_ephemeral_port(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}
