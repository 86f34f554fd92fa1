//! Managed marketing content: testimonials, FAQs, service offerings and
//! portfolio entries.
//!
//! Content is read through the [`ContentSource`] trait. Two implementations
//! exist: [`StaticContentSource`] serves the built-in fixture copy, while
//! [`RemoteContentSource`] queries a hosted structured-content service. Which
//! one a deployment uses is an explicit configuration choice made by the
//! application, not a fallback taken at request time.

mod fixture;
mod model;
mod remote;
mod source;

pub use fixture::StaticContentSource;
pub use model::{Faq, PortfolioItem, ServiceOffering, Testimonial};
pub use remote::RemoteContentSource;
pub use source::{ContentError, ContentSource};
