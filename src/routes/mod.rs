use std::sync::Arc;

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use northlight_content::ContentSource;

use crate::config::Config;
use crate::email::EmailClient;
use crate::middleware::maintenance_middleware;

mod contact;
mod content;
mod health;
mod maintenance;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// `None` when the email integration is not configured; the contact
    /// handler acknowledges submissions without sending in that case.
    pub email: Option<EmailClient>,
    pub content: Arc<dyn ContentSource>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints (always reachable, even in maintenance)
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/maintenance", get(maintenance::page))
        .route("/api/contact", post(contact::submit))
        .route("/api/content/testimonials", get(content::testimonials))
        .route("/api/content/faqs", get(content::faqs))
        .route("/api/content/services", get(content::services))
        .route("/api/content/portfolio", get(content::portfolio))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            maintenance_middleware,
        ))
        // The frontend is hosted separately from this API
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
