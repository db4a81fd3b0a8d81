use crate::error::SeoError;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// A validated absolute http(s) URL, kept exactly as the caller wrote it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisInput {
    url: String,
    parsed: Url,
}

impl AnalysisInput {
    pub fn new(raw: &str) -> Result<Self, SeoError> {
        let parsed = Url::parse(raw).map_err(|e| SeoError::invalid_url(raw, e.to_string()))?;

        match parsed.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(SeoError::invalid_url(
                    raw,
                    format!("unsupported scheme '{}', only http and https are supported", scheme),
                ));
            }
        }

        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(SeoError::invalid_url(raw, "URL has no host"));
        }

        Ok(Self {
            url: raw.to_string(),
            parsed,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn parsed(&self) -> &Url {
        &self.parsed
    }

    pub fn domain(&self) -> &str {
        self.parsed.host_str().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaTagFindings {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub canonical: String,
    pub title_length: usize,
    pub description_length: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    pub const ALL: [HeadingLevel; 6] = [
        HeadingLevel::H1,
        HeadingLevel::H2,
        HeadingLevel::H3,
        HeadingLevel::H4,
        HeadingLevel::H5,
        HeadingLevel::H6,
    ];

    pub fn number(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
            HeadingLevel::H4 => 4,
            HeadingLevel::H5 => 5,
            HeadingLevel::H6 => 6,
        }
    }

    /// The lowercase element name, e.g. `h2`
    pub fn tag(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
            HeadingLevel::H4 => "h4",
            HeadingLevel::H5 => "h5",
            HeadingLevel::H6 => "h6",
        }
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "H{}", self.number())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeadingStatus {
    Good,
    Warning,
    Error,
}

impl fmt::Display for HeadingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            HeadingStatus::Good => "Good",
            HeadingStatus::Warning => "Warning",
            HeadingStatus::Error => "Error",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingFinding {
    pub level: HeadingLevel,
    pub content: String,
    pub status: HeadingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageStatus {
    Descriptive,
    #[serde(rename = "Too generic")]
    TooGeneric,
    Missing,
}

impl fmt::Display for ImageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ImageStatus::Descriptive => "Descriptive",
            ImageStatus::TooGeneric => "Too generic",
            ImageStatus::Missing => "Missing",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageFinding {
    pub filename: String,
    pub alt_text: String,
    pub status: ImageStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeywordStatus {
    Good,
    #[serde(rename = "Over-optimized")]
    OverOptimized,
    #[serde(rename = "Under-optimized")]
    UnderOptimized,
}

impl fmt::Display for KeywordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            KeywordStatus::Good => "Good",
            KeywordStatus::OverOptimized => "Over-optimized",
            KeywordStatus::UnderOptimized => "Under-optimized",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordFinding {
    pub keyword: String,
    /// Percentage of qualifying body tokens, rounded to one decimal
    pub density: f64,
    pub status: KeywordStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlFindings {
    pub length: usize,
    pub contains_underscores: bool,
    pub https_enabled: bool,
    /// Not measured, always `true`
    pub mobile_friendly: bool,
    /// Not measured, always "Properly configured"
    pub www_redirect_note: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSpeedFindings {
    pub desktop_speed: u32,
    pub mobile_speed: u32,
    pub critical_issues: Vec<String>,
    pub moderate_issues: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScores {
    pub overall: u32,
    pub meta_tags: u32,
    pub content_structure: u32,
    pub page_speed: u32,
    pub image_optimization: u32,
}

/// Traffic-light bucket for a 0-100 score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreRating {
    Good,
    Average,
    Poor,
}

impl ScoreRating {
    pub fn from_score(score: u32) -> Self {
        if score >= 80 {
            ScoreRating::Good
        } else if score >= 60 {
            ScoreRating::Average
        } else {
            ScoreRating::Poor
        }
    }
}

impl fmt::Display for ScoreRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ScoreRating::Good => "Good",
            ScoreRating::Average => "Average",
            ScoreRating::Poor => "Poor",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Moderate,
    Suggestion,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Critical => "critical",
            Severity::Moderate => "moderate",
            Severity::Suggestion => "suggestion",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub severity: Severity,
    pub message: String,
}

impl Recommendation {
    pub fn critical(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Critical,
            message: message.into(),
        }
    }

    pub fn moderate(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Moderate,
            message: message.into(),
        }
    }

    pub fn suggestion(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Suggestion,
            message: message.into(),
        }
    }
}

/// The complete result of analysing one page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub url: String,
    pub domain: String,
    pub generated_at: String,
    pub scores: CategoryScores,
    pub meta_tags: MetaTagFindings,
    pub headings: Vec<HeadingFinding>,
    pub images: Vec<ImageFinding>,
    pub keywords: Vec<KeywordFinding>,
    pub url_analysis: UrlFindings,
    pub page_speed: PageSpeedFindings,
    pub recommendations: Vec<Recommendation>,
}
