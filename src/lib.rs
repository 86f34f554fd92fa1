pub mod config;
pub mod email;
pub mod error;
pub mod middleware;
pub mod observability;
pub mod routes;

pub use config::Config;
pub use routes::AppState;

use std::sync::Arc;

use northlight_content::{ContentSource, RemoteContentSource, StaticContentSource};

/// Build the application router from validated configuration.
///
/// All collaborators (email client, content source) are constructed here and
/// injected through [`AppState`]; integration tests call this directly
/// without binding a socket.
pub fn create_app(config: Config) -> axum::Router {
    let email = config.email.as_ref().map(email::EmailClient::new);

    let content: Arc<dyn ContentSource> = match (&config.content.mode, &config.content.remote) {
        (config::ContentMode::Remote, Some(remote)) => Arc::new(RemoteContentSource::new(
            remote.base_url.clone(),
            remote.dataset.clone(),
            remote.token.clone(),
        )),
        _ => Arc::new(StaticContentSource::new()),
    };

    let state = AppState {
        config,
        email,
        content,
    };

    routes::router(state)
}
