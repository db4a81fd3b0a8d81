use seoscope::markup::{HtmlMarkup, Markup};

const PAGE: &str = r#"<html>
<head><title> Spaced  Title </title><meta name="description" content="About us"></head>
<body>
  <h2>First <em>nested</em> heading</h2>
  <img src="/a.png" alt="A">
  <img src="/b.png">
</body>
</html>"#;

#[test]
fn test_select_in_document_order() {
    let markup = HtmlMarkup::parse(PAGE);
    let images = markup.select("img");

    assert_eq!(images.len(), 2);
    assert_eq!(images[0].attr("src"), Some("/a.png"));
    assert_eq!(images[1].attr("src"), Some("/b.png"));
    assert_eq!(images[1].attr("alt"), None);
}

#[test]
fn test_text_is_untrimmed_and_includes_descendants() {
    let markup = HtmlMarkup::parse(PAGE);

    let title = markup.first("title").expect("title should exist");
    assert_eq!(title.text(), " Spaced  Title ");

    let heading = markup.first("h2").expect("h2 should exist");
    assert_eq!(heading.text(), "First nested heading");
}

#[test]
fn test_attribute_selectors() {
    let markup = HtmlMarkup::parse(PAGE);

    let description = markup
        .first("meta[name='description']")
        .expect("description should exist");
    assert_eq!(description.attr("content"), Some("About us"));
    assert!(!markup.exists("meta[name='keywords']"));
}

#[test]
fn test_count_and_exists() {
    let markup = HtmlMarkup::parse(PAGE);

    assert_eq!(markup.count("img"), 2);
    assert_eq!(markup.count("script"), 0);
    assert!(markup.exists("body h2"));
    assert!(markup.first("h1").is_none());
}

#[test]
fn test_invalid_selector_matches_nothing() {
    let markup = HtmlMarkup::parse(PAGE);

    assert!(markup.select("img[").is_empty());
    assert_eq!(markup.count(":::"), 0);
    assert!(!markup.exists("img["));
}

#[test]
fn test_malformed_html_is_repaired() {
    let markup = HtmlMarkup::parse("<h1>Open<h1>Second<p>text without closing");

    assert_eq!(markup.count("h1"), 2);
    assert!(markup.exists("body"));
}
