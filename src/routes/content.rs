use axum::{Json, extract::State};
use northlight_content::{Faq, PortfolioItem, ServiceOffering, Testimonial};

use crate::error::AppError;
use crate::routes::AppState;

/// GET /api/content/testimonials
pub async fn testimonials(
    State(state): State<AppState>,
) -> Result<Json<Vec<Testimonial>>, AppError> {
    Ok(Json(state.content.testimonials().await?))
}

/// GET /api/content/faqs
pub async fn faqs(State(state): State<AppState>) -> Result<Json<Vec<Faq>>, AppError> {
    Ok(Json(state.content.faqs().await?))
}

/// GET /api/content/services
pub async fn services(
    State(state): State<AppState>,
) -> Result<Json<Vec<ServiceOffering>>, AppError> {
    Ok(Json(state.content.services().await?))
}

/// GET /api/content/portfolio
pub async fn portfolio(
    State(state): State<AppState>,
) -> Result<Json<Vec<PortfolioItem>>, AppError> {
    Ok(Json(state.content.portfolio().await?))
}
