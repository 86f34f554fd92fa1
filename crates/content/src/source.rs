use async_trait::async_trait;
use thiserror::Error;

use crate::model::{Faq, PortfolioItem, ServiceOffering, Testimonial};

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content service request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("content service returned {status}: {detail}")]
    Service { status: u16, detail: String },

    #[error("failed to decode content document: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Read access to the managed marketing content.
///
/// Implementations must not substitute data from another source on failure;
/// the caller decides what an error means for the response.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn testimonials(&self) -> Result<Vec<Testimonial>, ContentError>;

    async fn faqs(&self) -> Result<Vec<Faq>, ContentError>;

    async fn services(&self) -> Result<Vec<ServiceOffering>, ContentError>;

    async fn portfolio(&self) -> Result<Vec<PortfolioItem>, ContentError>;

    /// Cheap reachability check used by the readiness probe.
    async fn ping(&self) -> Result<(), ContentError>;
}
