mod server;

use seoscope::models::{AnalysisInput, AnalysisReport, Recommendation};
use seoscope::report::assemble_report;
use seoscope::reporter::{Reporter, render_csv, render_json};
use seoscope::store::ReportStore;
use server::{BARE_PAGE, WELL_OPTIMIZED_PAGE};
use std::fs;
use tempfile::tempdir;

fn create_test_report(url: &str, html: &str) -> AnalysisReport {
    let input = AnalysisInput::new(url).expect("valid test URL");
    assemble_report(&input, html, "Oct 14, 2026, 3:05 PM".to_string())
}

#[test]
fn test_render_json_single_report_is_an_object() {
    let report = create_test_report("https://example.com/", BARE_PAGE);

    let json = render_json(&[&report], false).expect("Failed to render JSON");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");

    assert!(value.is_object());
    assert_eq!(value["domain"], "example.com");
}

#[test]
fn test_render_json_several_reports_is_an_array() {
    let first = create_test_report("https://example.com/", BARE_PAGE);
    let second = create_test_report("https://furniture.example/", WELL_OPTIMIZED_PAGE);

    let json = render_json(&[&first, &second], true).expect("Failed to render JSON");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");

    let reports = value.as_array().expect("should be an array");
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[1]["scores"]["overall"], 99);
}

#[test]
fn test_render_json_one_report_from_several_urls_is_an_array() {
    let report = create_test_report("https://example.com/", BARE_PAGE);

    let json = render_json(&[&report], true).expect("Failed to render JSON");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");

    let reports = value.as_array().expect("should be an array");
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0]["domain"], "example.com");
}

#[test]
fn test_save_report_json_array() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("reports.json");
    let report = create_test_report("https://example.com/", BARE_PAGE);

    Reporter::save_report(&[&report], path.to_str().unwrap(), true).expect("Failed to save report");

    let contents = fs::read_to_string(&path).expect("Report file should exist");
    let parsed: Vec<AnalysisReport> = serde_json::from_str(&contents).expect("valid report array");
    assert_eq!(parsed, vec![report]);
}

#[test]
fn test_render_csv_joins_documents() {
    let first = create_test_report("https://example.com/", BARE_PAGE);
    let second = create_test_report("https://furniture.example/", WELL_OPTIMIZED_PAGE);

    let csv = render_csv(&[&first, &second]).expect("Failed to render CSV");

    assert_eq!(csv.matches("SEO Analysis Report").count(), 2);
    assert!(csv.find("example.com").unwrap() < csv.find("furniture.example").unwrap());
}

#[test]
fn test_save_report_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("report.json");
    let report = create_test_report("https://example.com/", BARE_PAGE);

    Reporter::save_report(&[&report], path.to_str().unwrap(), false).expect("Failed to save report");

    let contents = fs::read_to_string(&path).expect("Report file should exist");
    let parsed: AnalysisReport = serde_json::from_str(&contents).expect("valid report JSON");
    assert_eq!(parsed, report);
}

#[test]
fn test_save_report_csv_by_extension() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("REPORT.CSV");
    let report = create_test_report("https://example.com/", BARE_PAGE);

    Reporter::save_report(&[&report], path.to_str().unwrap(), false).expect("Failed to save report");

    let contents = fs::read_to_string(&path).expect("Report file should exist");
    assert!(contents.starts_with("SEO Analysis Report\r\n"));
    assert!(contents.contains("critical,Add a title tag to your page"));
}

#[test]
fn test_save_report_other_extension_is_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("report.txt");
    let report = create_test_report("https://example.com/", BARE_PAGE);

    Reporter::save_report(&[&report], path.to_str().unwrap(), false).expect("Failed to save report");

    let contents = fs::read_to_string(&path).expect("Report file should exist");
    assert!(contents.trim_start().starts_with('{'));
}

#[test]
fn test_save_report_to_missing_directory_fails() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("missing").join("report.json");
    let report = create_test_report("https://example.com/", BARE_PAGE);

    let err = Reporter::save_report(&[&report], path.to_str().unwrap(), false).unwrap_err();
    assert!(err.to_string().contains("Failed to create report file"));
}

#[test]
fn test_print_text_report_handles_empty_sections() {
    let mut report = create_test_report("https://example.com/", "<html></html>");
    report.recommendations.push(Recommendation::moderate("Extra"));

    // No headings, images or keywords; must not panic
    Reporter::print_text_report(&report);
}

#[test]
fn test_print_store_summary() {
    let mut store = ReportStore::new();
    store.insert(create_test_report("https://example.com/", BARE_PAGE));
    store.insert(create_test_report(
        "https://furniture.example/",
        WELL_OPTIMIZED_PAGE,
    ));

    Reporter::print_store_summary(&store);
}

#[test]
fn test_print_text_report_with_speed_issues() {
    let images = r#"<img src="a.png">"#.repeat(12);
    let scripts = "<script></script>".repeat(6);
    let report = create_test_report(
        "http://example.com/a_b",
        &format!("<html><body><h1>Slow</h1>{}{}</body></html>", images, scripts),
    );

    assert_eq!(report.page_speed.critical_issues.len(), 2);
    assert_eq!(report.page_speed.moderate_issues.len(), 2);
    assert!(report.url_analysis.mobile_friendly);

    Reporter::print_text_report(&report);
}
