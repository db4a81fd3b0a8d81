use crate::markup::Markup;
use crate::models::PageSpeedFindings;

const TOO_MANY_IMAGES: usize = 10;
const TOO_MANY_SCRIPTS: usize = 5;
const LARGE_HTML_CHARS: usize = 100 * 1024;
const MOBILE_FACTOR: f64 = 0.7;

/// Static markup signals the estimate is derived from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpeedSignals {
    pub html_length: usize,
    pub image_count: usize,
    pub script_count: usize,
    pub stylesheet_count: usize,
    pub has_preload: bool,
    pub has_viewport: bool,
}

impl SpeedSignals {
    pub fn collect(markup: &dyn Markup, html: &str) -> Self {
        Self {
            html_length: html.chars().count(),
            image_count: markup.count("img"),
            script_count: markup.count("script"),
            stylesheet_count: markup.count("link[rel='stylesheet']"),
            has_preload: markup.exists("head link[rel='preload']"),
            has_viewport: markup.exists("meta[name='viewport']"),
        }
    }
}

pub fn analyze(markup: &dyn Markup, html: &str) -> PageSpeedFindings {
    estimate(&SpeedSignals::collect(markup, html))
}

pub fn estimate(signals: &SpeedSignals) -> PageSpeedFindings {
    let penalty = signals.html_length as f64 / 1024.0 / 10.0
        + signals.image_count as f64 * 3.0
        + signals.script_count as f64 * 5.0
        + signals.stylesheet_count as f64 * 2.0;
    let complexity = (100.0 - penalty).clamp(0.0, 100.0);

    let desktop_speed = complexity.round() as u32;

    let mut critical_issues = Vec::new();
    let mut moderate_issues = Vec::new();

    if signals.image_count > TOO_MANY_IMAGES {
        critical_issues.push("Too many images (more than 10)".to_string());
    }
    if signals.script_count > TOO_MANY_SCRIPTS {
        critical_issues.push(format!(
            "Render-blocking JavaScript ({} scripts)",
            signals.script_count
        ));
    }
    if signals.html_length > LARGE_HTML_CHARS {
        moderate_issues.push("Large HTML document size".to_string());
    }
    if !signals.has_preload {
        moderate_issues.push("No preloaded resources".to_string());
    }
    if !signals.has_viewport {
        moderate_issues.push("Missing viewport meta tag".to_string());
    }

    PageSpeedFindings {
        desktop_speed,
        mobile_speed: mobile_speed(desktop_speed),
        critical_issues,
        moderate_issues,
    }
}

pub fn mobile_speed(desktop_speed: u32) -> u32 {
    (desktop_speed as f64 * MOBILE_FACTOR).round().max(0.0) as u32
}
