use crate::markup::Markup;
use crate::models::{ImageFinding, ImageStatus};

const MIN_DESCRIPTIVE_ALT_LEN: usize = 10;
const GENERIC_ALT_WORDS: [&str; 3] = ["image", "picture", "icon"];

pub fn analyze(markup: &dyn Markup) -> Vec<ImageFinding> {
    markup
        .select("img")
        .iter()
        .map(|el| {
            let src = el.attr("src").unwrap_or_default();
            let alt_text = el.attr("alt").unwrap_or_default().to_string();

            ImageFinding {
                filename: filename_of(src).to_string(),
                status: classify_alt(&alt_text),
                alt_text,
            }
        })
        .collect()
}

pub fn classify_alt(alt: &str) -> ImageStatus {
    if alt.is_empty() {
        ImageStatus::Missing
    } else if alt.trim().chars().count() < MIN_DESCRIPTIVE_ALT_LEN
        || GENERIC_ALT_WORDS.iter().any(|word| alt.contains(word))
    {
        ImageStatus::TooGeneric
    } else {
        ImageStatus::Descriptive
    }
}

/// Last path segment of `src`, or `src` itself when that segment is empty.
pub fn filename_of(src: &str) -> &str {
    match src.rsplit('/').next() {
        Some(last) if !last.is_empty() => last,
        _ => src,
    }
}
