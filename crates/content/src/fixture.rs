//! Built-in content used when no structured-content service is configured.
//!
//! This is the same copy the site launched with; deployments without a
//! content service (local development, previews) serve it directly.

use async_trait::async_trait;

use crate::model::{Faq, PortfolioItem, ServiceOffering, Testimonial};
use crate::source::{ContentError, ContentSource};

/// Serves the built-in fixture copy. Infallible by construction.
#[derive(Debug, Clone, Default)]
pub struct StaticContentSource;

impl StaticContentSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ContentSource for StaticContentSource {
    async fn testimonials(&self) -> Result<Vec<Testimonial>, ContentError> {
        Ok(testimonials())
    }

    async fn faqs(&self) -> Result<Vec<Faq>, ContentError> {
        Ok(faqs())
    }

    async fn services(&self) -> Result<Vec<ServiceOffering>, ContentError> {
        Ok(services())
    }

    async fn portfolio(&self) -> Result<Vec<PortfolioItem>, ContentError> {
        Ok(portfolio())
    }

    async fn ping(&self) -> Result<(), ContentError> {
        Ok(())
    }
}

fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            quote: "Northlight took us from a slide deck to a production \
                    copilot in under a quarter. Their team writes code, not \
                    just recommendations."
                .to_string(),
            author: "Dana Reyes".to_string(),
            role: "VP Engineering".to_string(),
            company: Some("Hartwell Logistics".to_string()),
            rating: Some(5),
        },
        Testimonial {
            quote: "The audit alone paid for itself. We cut our inference \
                    spend by 40% without touching model quality."
                .to_string(),
            author: "Sam Okafor".to_string(),
            role: "CTO".to_string(),
            company: Some("Brightline Health".to_string()),
            rating: Some(5),
        },
        Testimonial {
            quote: "Rare mix of research depth and shipping discipline. They \
                    embedded with our team and left us self-sufficient."
                .to_string(),
            author: "Priya Natarajan".to_string(),
            role: "Head of Product".to_string(),
            company: Some("Meridian Retail Group".to_string()),
            rating: Some(5),
        },
    ]
}

fn faqs() -> Vec<Faq> {
    vec![
        Faq {
            question: "What does an engagement look like?".to_string(),
            answer: "Most projects start with a two-week discovery sprint: we \
                     map your data, your constraints and the highest-leverage \
                     use cases, and leave you with a costed roadmap. Build \
                     engagements run in four-week increments after that."
                .to_string(),
        },
        Faq {
            question: "Do you work with our existing stack?".to_string(),
            answer: "Yes. We integrate with whatever you run today rather \
                     than prescribing a platform. If a migration genuinely \
                     pays for itself we will say so, with numbers."
                .to_string(),
        },
        Faq {
            question: "Who owns the models and the code?".to_string(),
            answer: "You do. Everything we produce during an engagement is \
                     delivered into your repositories under your license."
                .to_string(),
        },
        Faq {
            question: "How do you price?".to_string(),
            answer: "Fixed price per increment, agreed before the increment \
                     starts. No surprise invoices, no open-ended retainers \
                     unless you ask for one."
                .to_string(),
        },
    ]
}

fn services() -> Vec<ServiceOffering> {
    vec![
        ServiceOffering {
            title: "AI Strategy & Discovery".to_string(),
            description: "A short, intense sprint that turns \"we should do \
                          something with AI\" into a costed, prioritized \
                          roadmap."
                .to_string(),
            features: vec![
                "Use-case mapping and feasibility scoring".to_string(),
                "Data readiness assessment".to_string(),
                "Build/buy/wait recommendations".to_string(),
            ],
        },
        ServiceOffering {
            title: "Custom Copilots & Agents".to_string(),
            description: "Production assistants wired into your tools, your \
                          data and your guardrails, not a chat box bolted on \
                          the side."
                .to_string(),
            features: vec![
                "Retrieval over your internal knowledge".to_string(),
                "Tool integrations and workflow automation".to_string(),
                "Evaluation harnesses before launch".to_string(),
            ],
        },
        ServiceOffering {
            title: "LLM Cost & Quality Audits".to_string(),
            description: "We profile your existing AI features and find the \
                          money: cheaper models where quality holds, caching, \
                          prompt surgery, and routing."
                .to_string(),
            features: vec![
                "Per-feature cost breakdown".to_string(),
                "Quality regression suite".to_string(),
                "Migration plan with measured savings".to_string(),
            ],
        },
    ]
}

fn portfolio() -> Vec<PortfolioItem> {
    vec![
        PortfolioItem {
            title: "Claims triage copilot".to_string(),
            summary: "Cut first-response time from two days to four minutes \
                      for a mid-market insurer by triaging inbound claims \
                      with a retrieval-backed assistant."
                .to_string(),
            tags: vec!["insurance".to_string(), "copilot".to_string()],
            url: None,
        },
        PortfolioItem {
            title: "Demand forecasting assistant".to_string(),
            summary: "Forecasting and replenishment suggestions for a \
                      200-store retail chain, surfaced directly in the \
                      buyers' planning tool."
                .to_string(),
            tags: vec!["retail".to_string(), "forecasting".to_string()],
            url: None,
        },
        PortfolioItem {
            title: "Support deflection overhaul".to_string(),
            summary: "Rebuilt a SaaS vendor's help-center search and answer \
                      generation; 38% of tickets now resolve without a human \
                      touch."
                .to_string(),
            tags: vec!["saas".to_string(), "support".to_string()],
            url: None,
        },
    ]
}
