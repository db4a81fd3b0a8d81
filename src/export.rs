//! Serialises reports for saving or piping: pretty JSON, or a sectioned CSV document.

use crate::models::AnalysisReport;
use anyhow::{Context, Result};
use csv::{Terminator, WriterBuilder};

pub fn to_json(report: &AnalysisReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize report to JSON")
}

pub fn from_json(json: &str) -> Result<AnalysisReport> {
    serde_json::from_str(json).context("Failed to parse report JSON")
}

/// Renders every field of the report as CSV sections separated by blank lines.
pub fn to_csv(report: &AnalysisReport) -> Result<String> {
    let mut sections = Vec::new();

    sections.push(write_section(vec![
        row(["SEO Analysis Report"]),
        row(["Domain", report.domain.as_str()]),
        row(["URL", report.url.as_str()]),
        row(["Date", report.generated_at.as_str()]),
    ])?);

    let scores = &report.scores;
    let mut score_rows = vec![
        row(["Scores"]),
        row(["Category", "Score", "Maximum"]),
    ];
    for (category, score) in [
        ("Overall", scores.overall),
        ("Meta Tags", scores.meta_tags),
        ("Content Structure", scores.content_structure),
        ("Image Optimization", scores.image_optimization),
        ("Page Speed", scores.page_speed),
    ] {
        score_rows.push(vec![category.to_string(), score.to_string(), "100".to_string()]);
    }
    sections.push(write_section(score_rows)?);

    let meta = &report.meta_tags;
    sections.push(write_section(vec![
        row(["Meta Tags"]),
        row(["Title", meta.title.as_str()]),
        vec!["Length".into(), format!("{} characters", meta.title_length)],
        row(["Description", meta.description.as_str()]),
        vec!["Length".into(), format!("{} characters", meta.description_length)],
        row(["Keywords", meta.keywords.join(", ").as_str()]),
        row(["Canonical", meta.canonical.as_str()]),
    ])?);

    let mut heading_rows = vec![row(["Heading Structure"]), row(["Type", "Content", "Status"])];
    heading_rows.extend(report.headings.iter().map(|h| {
        vec![h.level.to_string(), h.content.clone(), h.status.to_string()]
    }));
    sections.push(write_section(heading_rows)?);

    let mut image_rows = vec![row(["Images"]), row(["Image", "Alt Text", "Status"])];
    image_rows.extend(report.images.iter().map(|img| {
        vec![img.filename.clone(), img.alt_text.clone(), img.status.to_string()]
    }));
    sections.push(write_section(image_rows)?);

    let mut keyword_rows = vec![row(["Keywords"]), row(["Keyword", "Density", "Status"])];
    keyword_rows.extend(report.keywords.iter().map(|k| {
        vec![k.keyword.clone(), format!("{}%", k.density), k.status.to_string()]
    }));
    sections.push(write_section(keyword_rows)?);

    let url = &report.url_analysis;
    sections.push(write_section(vec![
        row(["URL Analysis"]),
        vec!["Length".into(), format!("{} characters", url.length)],
        row(["Contains Underscores", yes_no(url.contains_underscores)]),
        row(["HTTPS Enabled", yes_no(url.https_enabled)]),
        row(["Mobile Friendly", yes_no(url.mobile_friendly)]),
        row(["WWW Redirect", url.www_redirect_note.as_str()]),
    ])?);

    let speed = &report.page_speed;
    sections.push(write_section(vec![
        row(["Page Speed"]),
        vec!["Desktop Speed".into(), format!("{}/100", speed.desktop_speed)],
        vec!["Mobile Speed".into(), format!("{}/100", speed.mobile_speed)],
    ])?);
    sections.push(write_section(issue_rows("Critical Issues", &speed.critical_issues))?);
    sections.push(write_section(issue_rows("Moderate Issues", &speed.moderate_issues))?);

    let mut recommendation_rows = vec![row(["SEO Recommendations"]), row(["Type", "Recommendation"])];
    recommendation_rows.extend(
        report
            .recommendations
            .iter()
            .map(|rec| vec![rec.severity.to_string(), rec.message.clone()]),
    );
    sections.push(write_section(recommendation_rows)?);

    Ok(sections.join("\r\n"))
}

fn row<const N: usize>(fields: [&str; N]) -> Vec<String> {
    fields.iter().map(|f| f.to_string()).collect()
}

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

fn issue_rows(title: &str, issues: &[String]) -> Vec<Vec<String>> {
    let mut rows = vec![row([title])];
    if issues.is_empty() {
        rows.push(row(["None"]));
    } else {
        rows.extend(issues.iter().map(|issue| vec![issue.clone()]));
    }
    rows
}

fn write_section(rows: Vec<Vec<String>>) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .flexible(true)
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());

    for record in rows {
        writer
            .write_record(&record)
            .context("Failed to write CSV record")?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV writer: {}", e))?;
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}
