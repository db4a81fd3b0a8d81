use crate::analyzer::headings::count_level;
use crate::models::{
    HeadingFinding, HeadingLevel, HeadingStatus, ImageFinding, ImageStatus, KeywordFinding,
    KeywordStatus, MetaTagFindings, PageSpeedFindings, Recommendation,
};

const MAX_TITLE_LEN: usize = 60;
const MAX_DESCRIPTION_LEN: usize = 160;
const SLOW_PAGE_SPEED: u32 = 50;

/// Turns findings into recommendations. Emission order is the display order.
pub fn generate(
    meta_tags: &MetaTagFindings,
    headings: &[HeadingFinding],
    images: &[ImageFinding],
    keywords: &[KeywordFinding],
    page_speed: &PageSpeedFindings,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if meta_tags.title.is_empty() {
        recommendations.push(Recommendation::critical("Add a title tag to your page"));
    } else if meta_tags.title_length > MAX_TITLE_LEN {
        recommendations.push(Recommendation::moderate(format!(
            "Shorten your title tag to less than 60 characters (currently {})",
            meta_tags.title_length
        )));
    }

    if meta_tags.description.is_empty() {
        recommendations.push(Recommendation::critical(
            "Add a meta description to your page",
        ));
    } else if meta_tags.description_length > MAX_DESCRIPTION_LEN {
        recommendations.push(Recommendation::moderate(format!(
            "Shorten your meta description to 120-155 characters (currently {})",
            meta_tags.description_length
        )));
    }

    let h1_count = count_level(headings, HeadingLevel::H1);
    if h1_count == 0 {
        recommendations.push(Recommendation::critical("Add an H1 heading to your page"));
    } else if h1_count > 1 {
        recommendations.push(Recommendation::moderate("Use only one H1 heading per page"));
    }

    let skipped_levels = headings.iter().any(|h| {
        h.status == HeadingStatus::Warning
            && h.message.as_deref().is_some_and(|m| m.contains("Skipped"))
    });
    if skipped_levels {
        recommendations.push(Recommendation::moderate(
            "Fix heading hierarchy issues (avoid skipping heading levels)",
        ));
    }

    let missing_alt = images
        .iter()
        .filter(|img| img.status == ImageStatus::Missing)
        .count();
    if missing_alt > 0 {
        recommendations.push(Recommendation::critical(missing_alt_message(missing_alt)));
    }

    if images.iter().any(|img| img.status == ImageStatus::TooGeneric) {
        recommendations.push(Recommendation::moderate(
            "Make generic alt texts more descriptive",
        ));
    }

    let over_optimized: Vec<String> = keywords
        .iter()
        .filter(|k| k.status == KeywordStatus::OverOptimized)
        .map(|k| format!("\"{}\" ({}%)", k.keyword, k.density))
        .collect();
    if !over_optimized.is_empty() {
        recommendations.push(Recommendation::moderate(format!(
            "Reduce keyword density for {}",
            over_optimized.join(", ")
        )));
    }

    if page_speed.desktop_speed < SLOW_PAGE_SPEED {
        recommendations.push(Recommendation::critical("Improve page loading speed"));
    }
    recommendations.extend(
        page_speed
            .critical_issues
            .iter()
            .map(|issue| Recommendation::critical(issue.as_str())),
    );
    recommendations.extend(
        page_speed
            .moderate_issues
            .iter()
            .map(|issue| Recommendation::moderate(issue.as_str())),
    );

    recommendations.push(Recommendation::suggestion(
        "Add Open Graph and Twitter Card meta tags for better social sharing",
    ));
    recommendations.push(Recommendation::suggestion(
        "Implement structured data (Schema.org) to enhance search results appearance",
    ));

    recommendations
}

fn missing_alt_message(count: usize) -> String {
    if count > 1 {
        format!("Add alt text to {} images that are missing it", count)
    } else {
        format!("Add alt text to {} image that is missing it", count)
    }
}
