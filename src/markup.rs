//! Parser-agnostic access to a document tree.
//!
//! Analyzers only see the [`Markup`] trait. [`HtmlMarkup`] backs it with `scraper`.

use scraper::{Html, Selector};
use std::collections::HashMap;

/// An element snapshot detached from the underlying tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    attributes: HashMap<String, String>,
    text: String,
}

impl Element {
    pub fn new(attributes: HashMap<String, String>, text: String) -> Self {
        Self {
            attributes,
            text,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Concatenated text of every descendant text node, untrimmed
    pub fn text(&self) -> &str {
        &self.text
    }
}

pub trait Markup {
    /// Returns every element matching a CSS selector, in document order.
    fn select(&self, selector: &str) -> Vec<Element>;

    fn first(&self, selector: &str) -> Option<Element> {
        self.select(selector).into_iter().next()
    }

    fn count(&self, selector: &str) -> usize {
        self.select(selector).len()
    }

    fn exists(&self, selector: &str) -> bool {
        self.count(selector) > 0
    }
}

pub struct HtmlMarkup {
    document: Html,
}

impl HtmlMarkup {
    /// Parses a full document. Malformed HTML is repaired, never rejected.
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }
}

impl Markup for HtmlMarkup {
    fn select(&self, selector: &str) -> Vec<Element> {
        let parsed = match Selector::parse(selector) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!(selector = %selector, error = %e, "Invalid selector, matching nothing");
                return Vec::new();
            }
        };

        self.document
            .select(&parsed)
            .map(|el| {
                let attributes = el
                    .value()
                    .attrs()
                    .map(|(name, value)| (name.to_string(), value.to_string()))
                    .collect();
                Element::new(attributes, el.text().collect())
            })
            .collect()
    }

    fn count(&self, selector: &str) -> usize {
        match Selector::parse(selector) {
            Ok(parsed) => self.document.select(&parsed).count(),
            Err(e) => {
                tracing::warn!(selector = %selector, error = %e, "Invalid selector, matching nothing");
                0
            }
        }
    }
}
