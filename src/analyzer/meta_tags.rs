use crate::markup::Markup;
use crate::models::MetaTagFindings;

const TITLE_SELECTOR: &str = "title";
const META_DESC_SELECTOR: &str = "meta[name='description']";
const META_KEYWORDS_SELECTOR: &str = "meta[name='keywords']";
const CANONICAL_SELECTOR: &str = "link[rel='canonical']";

pub fn analyze(markup: &dyn Markup) -> MetaTagFindings {
    let title = markup
        .first(TITLE_SELECTOR)
        .map(|el| el.text().to_string())
        .unwrap_or_default();
    let description = attr_of_first(markup, META_DESC_SELECTOR, "content");
    let keywords = split_keywords(&attr_of_first(markup, META_KEYWORDS_SELECTOR, "content"));
    let canonical = attr_of_first(markup, CANONICAL_SELECTOR, "href");

    MetaTagFindings {
        title_length: title.chars().count(),
        description_length: description.chars().count(),
        title,
        description,
        keywords,
        canonical,
    }
}

fn attr_of_first(markup: &dyn Markup, selector: &str, attr: &str) -> String {
    markup
        .first(selector)
        .and_then(|el| el.attr(attr).map(str::to_string))
        .unwrap_or_default()
}

/// Splits a `meta[name=keywords]` value on commas, dropping blank entries.
pub fn split_keywords(content: &str) -> Vec<String> {
    content
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}
