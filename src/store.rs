use crate::models::AnalysisReport;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A report as recorded in the store, with its scores pulled out for listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredReport {
    pub id: u64,
    pub url: String,
    pub domain: String,
    pub overall_score: u32,
    pub meta_tags_score: u32,
    pub content_structure_score: u32,
    pub image_optimization_score: u32,
    pub page_speed_score: u32,
    pub created_at: DateTime<Utc>,
    pub report: AnalysisReport,
}

/// Append-only, in-memory report store. Ids start at 1 and are never reused.
#[derive(Debug)]
pub struct ReportStore {
    reports: BTreeMap<u64, StoredReport>,
    next_id: u64,
}

impl Default for ReportStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportStore {
    pub fn new() -> Self {
        Self {
            reports: BTreeMap::new(),
            next_id: 1,
        }
    }

    pub fn insert(&mut self, report: AnalysisReport) -> &StoredReport {
        let id = self.next_id;
        self.next_id += 1;

        let stored = StoredReport {
            id,
            url: report.url.clone(),
            domain: report.domain.clone(),
            overall_score: report.scores.overall,
            meta_tags_score: report.scores.meta_tags,
            content_structure_score: report.scores.content_structure,
            image_optimization_score: report.scores.image_optimization,
            page_speed_score: report.scores.page_speed,
            created_at: Utc::now(),
            report,
        };

        tracing::debug!(id, url = %stored.url, "Stored report");
        self.reports.entry(id).or_insert(stored)
    }

    pub fn get(&self, id: u64) -> Option<&StoredReport> {
        self.reports.get(&id)
    }

    /// The earliest stored report for `url`
    pub fn find_by_url(&self, url: &str) -> Option<&StoredReport> {
        self.reports.values().find(|stored| stored.url == url)
    }

    /// All reports in insertion order
    pub fn all(&self) -> impl Iterator<Item = &StoredReport> {
        self.reports.values()
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}
