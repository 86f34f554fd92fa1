use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::routes::AppState;

/// Middleware that sends every route to the maintenance page while the
/// maintenance flag is set.
///
/// The maintenance page itself and the health probes stay reachable so that
/// deployments behind the flag still pass liveness checks and the redirect
/// cannot loop.
pub async fn maintenance_middleware(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if state.config.maintenance.enabled && !is_exempt(req.uri().path()) {
        return Redirect::temporary("/maintenance").into_response();
    }

    next.run(req).await
}

fn is_exempt(path: &str) -> bool {
    matches!(path, "/maintenance" | "/health" | "/ready")
}
