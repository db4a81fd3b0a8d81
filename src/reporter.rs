use crate::export;
use crate::models::{
    AnalysisReport, HeadingStatus, ImageStatus, KeywordStatus, ScoreRating, Severity,
};
use crate::store::ReportStore;
use anyhow::{Context, Result};
use colored::*;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub struct Reporter;

impl Reporter {
    pub fn print_text_report(report: &AnalysisReport) {
        println!("\n{}", "=".repeat(80).bright_blue());
        println!("{}", "seoscope - SEO Report".bright_cyan().bold());
        println!("{}", "=".repeat(80).bright_blue());
        println!();

        println!("{}: {}", "URL".bright_white().bold(), report.url);
        println!("{}: {}", "Domain".bright_white().bold(), report.domain);
        println!("{}: {}", "Generated".bright_white().bold(), report.generated_at);
        println!();

        let scores = &report.scores;
        println!("{}", "Scores".bright_yellow().bold().underline());
        println!("  Overall:            {}", colored_score(scores.overall));
        println!("  Meta Tags:          {}", colored_score(scores.meta_tags));
        println!(
            "  Content Structure:  {}",
            colored_score(scores.content_structure)
        );
        println!(
            "  Image Optimization: {}",
            colored_score(scores.image_optimization)
        );
        println!("  Page Speed:         {}", colored_score(scores.page_speed));
        println!();

        let meta = &report.meta_tags;
        println!("{}", "Meta Tags".bright_yellow().bold().underline());
        println!(
            "  Title:       {} ({} chars)",
            or_none(&meta.title),
            meta.title_length
        );
        println!(
            "  Description: {} ({} chars)",
            or_none(&meta.description),
            meta.description_length
        );
        println!("  Keywords:    {}", or_none(&meta.keywords.join(", ")));
        println!("  Canonical:   {}", or_none(&meta.canonical));
        println!();

        if !report.headings.is_empty() {
            println!("{}", "Headings".bright_yellow().bold().underline());
            for heading in &report.headings {
                let status = match heading.status {
                    HeadingStatus::Good => "GOOD ".bright_green(),
                    HeadingStatus::Warning => "WARN ".yellow(),
                    HeadingStatus::Error => "ERROR".bright_red(),
                };
                let message = heading
                    .message
                    .as_deref()
                    .map(|m| format!(" - {}", m).dimmed().to_string())
                    .unwrap_or_default();
                println!(
                    "  [{}] {} {}{}",
                    status, heading.level, heading.content, message
                );
            }
            println!();
        }

        if !report.images.is_empty() {
            println!("{}", "Images".bright_yellow().bold().underline());
            for image in &report.images {
                let status = match image.status {
                    ImageStatus::Descriptive => image.status.to_string().bright_green(),
                    ImageStatus::TooGeneric => image.status.to_string().yellow(),
                    ImageStatus::Missing => image.status.to_string().bright_red(),
                };
                println!(
                    "  {} alt=\"{}\" [{}]",
                    image.filename, image.alt_text, status
                );
            }
            println!();
        }

        if !report.keywords.is_empty() {
            println!("{}", "Top Keywords".bright_yellow().bold().underline());
            for keyword in &report.keywords {
                let status = match keyword.status {
                    KeywordStatus::Good => keyword.status.to_string().bright_green(),
                    KeywordStatus::OverOptimized => keyword.status.to_string().bright_red(),
                    KeywordStatus::UnderOptimized => keyword.status.to_string().dimmed(),
                };
                println!(
                    "  {:<24} {:>5}%  {}",
                    keyword.keyword, keyword.density, status
                );
            }
            println!();
        }

        let url = &report.url_analysis;
        println!("{}", "URL".bright_yellow().bold().underline());
        println!("  Length:               {}", url.length);
        println!(
            "  Contains underscores: {}",
            yes_no(url.contains_underscores, false)
        );
        println!("  HTTPS enabled:        {}", yes_no(url.https_enabled, true));
        println!("  Mobile friendly:      {}", yes_no(url.mobile_friendly, true));
        println!("  WWW redirect:         {}", url.www_redirect_note);
        println!();

        let speed = &report.page_speed;
        println!("{}", "Page Speed (estimated)".bright_yellow().bold().underline());
        println!("  Desktop: {}", colored_score(speed.desktop_speed));
        println!("  Mobile:  {}", colored_score(speed.mobile_speed));
        print_issues("Critical issues", &speed.critical_issues, Color::BrightRed);
        print_issues("Moderate issues", &speed.moderate_issues, Color::Yellow);
        println!();

        println!("{}", "Recommendations".bright_yellow().bold().underline());
        for recommendation in &report.recommendations {
            let severity = match recommendation.severity {
                Severity::Critical => "CRITICAL".bright_red(),
                Severity::Moderate => "MODERATE".yellow(),
                Severity::Suggestion => "SUGGEST ".bright_cyan(),
            };
            println!("  [{}] {}", severity, recommendation.message);
        }

        println!();
        println!("{}", "=".repeat(80).bright_blue());
    }

    /// One line per stored report, in the order they were stored
    pub fn print_store_summary(store: &ReportStore) {
        println!("{}", "Summary".bright_yellow().bold().underline());
        for stored in store.all() {
            println!(
                "  #{:<3} {:<50} overall {}",
                stored.id,
                stored.url,
                colored_score(stored.overall_score)
            );
        }
        println!();
    }

    /// Writes CSV when `filename` ends in `.csv`, pretty JSON otherwise.
    /// `as_array` has the same meaning as in [`render_json`]; several CSV reports are
    /// written as consecutive documents.
    pub fn save_report(reports: &[&AnalysisReport], filename: &str, as_array: bool) -> Result<()> {
        let is_csv = Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

        let contents = if is_csv {
            render_csv(reports)?
        } else {
            render_json(reports, as_array)?
        };

        let mut file = File::create(filename)
            .with_context(|| format!("Failed to create report file: {}", filename))?;
        file.write_all(contents.as_bytes())
            .with_context(|| format!("Failed to write report file: {}", filename))?;
        Ok(())
    }
}

/// Renders a JSON array when `as_array` is set (several URLs were requested), otherwise
/// the first report as a single object.
pub fn render_json(reports: &[&AnalysisReport], as_array: bool) -> Result<String> {
    match reports {
        [report, ..] if !as_array => export::to_json(report),
        _ => serde_json::to_string_pretty(reports).context("Failed to serialize reports to JSON"),
    }
}

pub fn render_csv(reports: &[&AnalysisReport]) -> Result<String> {
    let documents = reports
        .iter()
        .map(|report| export::to_csv(report))
        .collect::<Result<Vec<_>>>()?;
    Ok(documents.join("\r\n"))
}

fn print_issues(label: &str, issues: &[String], color: Color) {
    if issues.is_empty() {
        println!("  {}: {}", label, "None".dimmed());
        return;
    }
    println!("  {}:", label);
    for issue in issues {
        println!("    - {}", issue.color(color));
    }
}

fn colored_score(score: u32) -> ColoredString {
    let text = format!("{}/100", score);
    match ScoreRating::from_score(score) {
        ScoreRating::Good => text.bright_green(),
        ScoreRating::Average => text.yellow(),
        ScoreRating::Poor => text.bright_red(),
    }
}

fn or_none(value: &str) -> ColoredString {
    if value.is_empty() {
        "(none)".dimmed()
    } else {
        value.normal()
    }
}

fn yes_no(value: bool, good_when: bool) -> ColoredString {
    let text = if value { "Yes" } else { "No" };
    if value == good_when {
        text.bright_green()
    } else {
        text.yellow()
    }
}
