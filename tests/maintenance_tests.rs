//! Maintenance-mode gate tests.

mod helpers;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use helpers::create_test_config;

async fn get(router: Router, uri: &str) -> axum::response::Response {
    router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

#[tokio::test]
async fn test_maintenance_flag_redirects_site_routes() {
    let mut config = create_test_config();
    config.maintenance.enabled = true;
    let app = northlight::create_app(config);

    for uri in ["/api/contact", "/api/content/faqs", "/api/content/testimonials"] {
        let response = get(app.clone(), uri).await;

        assert_eq!(
            response.status(),
            StatusCode::TEMPORARY_REDIRECT,
            "{uri} should redirect"
        );
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/maintenance"
        );
    }
}

#[tokio::test]
async fn test_probes_stay_reachable_during_maintenance() {
    let mut config = create_test_config();
    config.maintenance.enabled = true;
    let app = northlight::create_app(config);

    let response = get(app.clone(), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(app, "/ready").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_maintenance_page_is_served_without_redirect_loop() {
    let mut config = create_test_config();
    config.maintenance.enabled = true;
    let app = northlight::create_app(config);

    let response = get(app, "/maintenance").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("maintenance"));
}

#[tokio::test]
async fn test_flag_off_leaves_routes_untouched() {
    let app = northlight::create_app(create_test_config());

    let response = get(app, "/api/content/faqs").await;
    assert_eq!(response.status(), StatusCode::OK);
}
