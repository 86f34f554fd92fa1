use axum::response::{Html, IntoResponse};

/// GET /maintenance - Static maintenance page
/// Served directly from the binary so it works with everything else down
pub async fn page() -> impl IntoResponse {
    let html = include_str!("../../templates/maintenance.html");
    Html(html)
}
