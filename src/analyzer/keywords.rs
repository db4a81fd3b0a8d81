use crate::markup::Markup;
use crate::models::{KeywordFinding, KeywordStatus};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

const MAX_KEYWORDS: usize = 10;
const MIN_TOKEN_LEN: usize = 3;
const OVER_OPTIMIZED_DENSITY: f64 = 4.0;
const UNDER_OPTIMIZED_DENSITY: f64 = 0.5;

static NON_WORD_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_]").expect("non-word regex should be valid"));

pub fn analyze(markup: &dyn Markup) -> Vec<KeywordFinding> {
    let body_text = markup
        .first("body")
        .map(|body| body.text().to_lowercase())
        .unwrap_or_default();

    analyze_text(&body_text)
}

/// Frequency-based density of the ten most common tokens in already-lowercased text.
pub fn analyze_text(text: &str) -> Vec<KeywordFinding> {
    let tokens = tokenize(text);
    let total = tokens.len();
    if total == 0 {
        return Vec::new();
    }

    // Insertion order is kept so equal counts stay in first-seen order after the stable sort
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for token in &tokens {
        match positions.get(token.as_str()) {
            Some(&idx) => counts[idx].1 += 1,
            None => {
                positions.insert(token.as_str(), counts.len());
                counts.push((token.as_str(), 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(MAX_KEYWORDS);

    counts
        .into_iter()
        .map(|(keyword, count)| {
            let density = count as f64 / total as f64 * 100.0;
            KeywordFinding {
                keyword: keyword.to_string(),
                density: round_to_tenth(density),
                status: classify_density(density),
            }
        })
        .collect()
}

fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|word| NON_WORD_CHARS.replace_all(word, "").into_owned())
        .filter(|word| word.len() > MIN_TOKEN_LEN)
        .collect()
}

pub fn classify_density(density: f64) -> KeywordStatus {
    if density > OVER_OPTIMIZED_DENSITY {
        KeywordStatus::OverOptimized
    } else if density < UNDER_OPTIMIZED_DENSITY {
        KeywordStatus::UnderOptimized
    } else {
        KeywordStatus::Good
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
