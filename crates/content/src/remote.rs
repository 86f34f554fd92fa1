//! Client for the hosted structured-content service.
//!
//! Documents are read with filter queries of the form `*[_type == "..."]`
//! against the service's query endpoint. Responses arrive wrapped in a
//! `{ "result": [...] }` envelope.

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::model::{Faq, PortfolioItem, ServiceOffering, Testimonial};
use crate::source::{ContentError, ContentSource};

const TESTIMONIAL_QUERY: &str = r#"*[_type == "testimonial"]"#;
const FAQ_QUERY: &str = r#"*[_type == "faq"]"#;
const SERVICE_QUERY: &str = r#"*[_type == "service"]"#;
const PORTFOLIO_QUERY: &str = r#"*[_type == "portfolioItem"]"#;
const PING_QUERY: &str = r#"*[_type == "testimonial"][0..1]"#;

#[derive(Debug, Deserialize)]
struct QueryEnvelope<T> {
    result: Vec<T>,
}

/// Reads content from a hosted document store over HTTP.
#[derive(Debug, Clone)]
pub struct RemoteContentSource {
    http: reqwest::Client,
    base_url: String,
    dataset: String,
    token: Option<String>,
}

impl RemoteContentSource {
    pub fn new(base_url: impl Into<String>, dataset: impl Into<String>, token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            dataset: dataset.into(),
            token,
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, query: &str) -> Result<Vec<T>, ContentError> {
        let url = format!(
            "{}/data/query/{}",
            self.base_url.trim_end_matches('/'),
            self.dataset
        );

        let mut request = self.http.get(&url).query(&[("query", query)]);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ContentError::Service {
                status: status.as_u16(),
                detail: body,
            });
        }

        debug!(query, status = status.as_u16(), "content query completed");
        parse_envelope(&body)
    }
}

fn parse_envelope<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, ContentError> {
    let envelope: QueryEnvelope<T> = serde_json::from_str(body)?;
    Ok(envelope.result)
}

#[async_trait]
impl ContentSource for RemoteContentSource {
    async fn testimonials(&self) -> Result<Vec<Testimonial>, ContentError> {
        self.fetch(TESTIMONIAL_QUERY).await
    }

    async fn faqs(&self) -> Result<Vec<Faq>, ContentError> {
        self.fetch(FAQ_QUERY).await
    }

    async fn services(&self) -> Result<Vec<ServiceOffering>, ContentError> {
        self.fetch(SERVICE_QUERY).await
    }

    async fn portfolio(&self) -> Result<Vec<PortfolioItem>, ContentError> {
        self.fetch(PORTFOLIO_QUERY).await
    }

    async fn ping(&self) -> Result<(), ContentError> {
        self.fetch::<Testimonial>(PING_QUERY).await.map(|_| ())
    }
}
