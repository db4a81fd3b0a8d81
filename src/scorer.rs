//! Reduces analyzer findings to 0-100 category scores.

use crate::analyzer::headings::count_level;
use crate::models::{
    CategoryScores, HeadingFinding, HeadingLevel, HeadingStatus, ImageFinding, ImageStatus,
    MetaTagFindings, PageSpeedFindings,
};

pub fn score(
    meta_tags: &MetaTagFindings,
    headings: &[HeadingFinding],
    images: &[ImageFinding],
    page_speed: &PageSpeedFindings,
) -> CategoryScores {
    let meta_tags = meta_tags_score(meta_tags);
    let content_structure = content_structure_score(headings);
    let image_optimization = image_optimization_score(images);
    let page_speed = page_speed.desktop_speed.min(100);

    CategoryScores {
        overall: overall_score(meta_tags, content_structure, image_optimization, page_speed),
        meta_tags,
        content_structure,
        page_speed,
        image_optimization,
    }
}

pub fn meta_tags_score(meta: &MetaTagFindings) -> u32 {
    let mut score: i32 = 100;

    if meta.title.is_empty() {
        score -= 30;
    } else {
        if meta.title_length < 30 {
            score -= 10;
        }
        if meta.title_length > 60 {
            score -= 5;
        }
    }

    if meta.description.is_empty() {
        score -= 25;
    } else {
        if meta.description_length < 70 {
            score -= 10;
        }
        if meta.description_length > 160 {
            score -= 5;
        }
    }

    if meta.keywords.is_empty() {
        score -= 10;
    }
    if meta.canonical.is_empty() {
        score -= 5;
    }

    clamp_score(score)
}

pub fn content_structure_score(headings: &[HeadingFinding]) -> u32 {
    let mut score: i32 = 100;
    let h1_count = count_level(headings, HeadingLevel::H1);

    if h1_count == 0 {
        score -= 30;
    }
    if h1_count > 1 {
        score -= 15;
    }

    let warnings = headings
        .iter()
        .filter(|h| h.status == HeadingStatus::Warning)
        .count();
    let errors = headings
        .iter()
        .filter(|h| h.status == HeadingStatus::Error)
        .count();
    score -= warnings as i32 * 5;
    score -= errors as i32 * 10;

    if headings.len() < 3 {
        score -= 20;
    }

    clamp_score(score)
}

/// A page without images scores 100 here and is never penalised by this category.
pub fn image_optimization_score(images: &[ImageFinding]) -> u32 {
    if images.is_empty() {
        return 100;
    }

    let total = images.len() as f64;
    let missing = images
        .iter()
        .filter(|img| img.status == ImageStatus::Missing)
        .count() as f64;
    let generic = images
        .iter()
        .filter(|img| img.status == ImageStatus::TooGeneric)
        .count() as f64;

    let missing_percent = missing / total * 100.0;
    let generic_percent = generic / total * 100.0;
    let score = 100.0 - missing_percent * 0.7 - generic_percent * 0.3;

    score.max(0.0).round().min(100.0) as u32
}

pub fn overall_score(
    meta_tags: u32,
    content_structure: u32,
    image_optimization: u32,
    page_speed: u32,
) -> u32 {
    let sum = meta_tags + content_structure + image_optimization + page_speed;
    (sum as f64 / 4.0).round() as u32
}

fn clamp_score(score: i32) -> u32 {
    score.clamp(0, 100) as u32
}
