//! Assembles every analyzer's output into one [`AnalysisReport`].

use crate::analyzer::{headings, images, keywords, meta_tags, page_speed, url};
use crate::error::SeoError;
use crate::http_client::build_http_client;
use crate::markup::HtmlMarkup;
use crate::models::{AnalysisInput, AnalysisReport};
use crate::{recommendations, scorer};
use chrono::{DateTime, Local, TimeZone};
use governor::{
    Quota, RateLimiter, clock::DefaultClock, state::InMemoryState, state::direct::NotKeyed,
};
use std::fmt::Display;
use std::num::NonZeroU32;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Builds a report from already-fetched HTML. Deterministic for a given `generated_at`.
pub fn assemble_report(input: &AnalysisInput, html: &str, generated_at: String) -> AnalysisReport {
    let markup = HtmlMarkup::parse(html);

    let meta_tags = meta_tags::analyze(&markup);
    let headings = headings::analyze(&markup);
    let images = images::analyze(&markup);
    let keywords = keywords::analyze(&markup);
    let url_analysis = url::analyze(input.url());
    let page_speed = page_speed::analyze(&markup, html);

    let scores = scorer::score(&meta_tags, &headings, &images, &page_speed);
    let recommendations =
        recommendations::generate(&meta_tags, &headings, &images, &keywords, &page_speed);

    AnalysisReport {
        url: input.url().to_string(),
        domain: input.domain().to_string(),
        generated_at,
        scores,
        meta_tags,
        headings,
        images,
        keywords,
        url_analysis,
        page_speed,
        recommendations,
    }
}

/// Same as [`assemble_report`], stamped with the current local time.
pub fn build_report(input: &AnalysisInput, html: &str) -> AnalysisReport {
    assemble_report(input, html, format_timestamp(&Local::now()))
}

/// Formats like `Oct 14, 2026, 3:05 PM`
pub fn format_timestamp<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    time.format("%b %-d, %Y, %-I:%M %p").to_string()
}

/// Settings for fetching pages
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    pub timeout_secs: u64,
    pub requests_per_second: Option<f64>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            requests_per_second: None,
        }
    }
}

/// Fetches pages and analyses them. One fetch per analysis, no retries.
pub struct Analyzer {
    client: reqwest::Client,
    rate_limiter: Option<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl Analyzer {
    pub fn new(config: &AnalyzerConfig) -> Result<Self, SeoError> {
        let client = build_http_client(config.timeout_secs)
            .map_err(|e| SeoError::HttpClient(e.to_string()))?;

        let rate_limiter = config
            .requests_per_second
            .filter(|rps| rps.is_finite() && *rps > 0.0)
            .and_then(|rps| NonZeroU32::new(rps.ceil() as u32))
            .map(|per_second| RateLimiter::direct(Quota::per_second(per_second)));

        Ok(Self {
            client,
            rate_limiter,
        })
    }

    pub async fn analyze(&self, input: &AnalysisInput) -> Result<AnalysisReport, SeoError> {
        let html = self.fetch(input).await?;
        let report = build_report(input, &html);

        tracing::debug!(
            url = %input.url(),
            overall = report.scores.overall,
            headings = report.headings.len(),
            images = report.images.len(),
            keywords = report.keywords.len(),
            recommendations = report.recommendations.len(),
            "Analysis complete"
        );

        Ok(report)
    }

    async fn fetch(&self, input: &AnalysisInput) -> Result<String, SeoError> {
        if let Some(limiter) = &self.rate_limiter {
            limiter.until_ready().await;
        }

        tracing::info!(url = %input.url(), "Fetching page");

        let response = self
            .client
            .get(input.parsed().clone())
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| SeoError::Fetch(e.to_string()))?;

        if let Some(content_type) = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
        {
            let ct_lower = content_type.to_lowercase();
            if !ct_lower.contains("text/html") && !ct_lower.contains("application/xhtml") {
                tracing::warn!(
                    url = %input.url(),
                    content_type = %content_type,
                    "Non-HTML content type detected, analysis may be meaningless"
                );
            }
        }

        response
            .text()
            .await
            .map_err(|e| SeoError::Fetch(e.to_string()))
    }
}
