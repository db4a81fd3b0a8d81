use seoscope::models::{
    HeadingFinding, HeadingLevel, HeadingStatus, ImageFinding, ImageStatus, KeywordFinding,
    KeywordStatus, MetaTagFindings, PageSpeedFindings, Recommendation, Severity,
};
use seoscope::recommendations::generate;

const OPEN_GRAPH: &str = "Add Open Graph and Twitter Card meta tags for better social sharing";
const SCHEMA_ORG: &str =
    "Implement structured data (Schema.org) to enhance search results appearance";

fn good_meta() -> MetaTagFindings {
    MetaTagFindings {
        title: "A reasonable page title for testing".to_string(),
        description: "A description".to_string(),
        keywords: vec!["testing".to_string()],
        canonical: "https://example.com/".to_string(),
        title_length: 35,
        description_length: 13,
    }
}

fn h1() -> HeadingFinding {
    HeadingFinding {
        level: HeadingLevel::H1,
        content: "Title".to_string(),
        status: HeadingStatus::Good,
        message: None,
    }
}

fn fast_page() -> PageSpeedFindings {
    PageSpeedFindings {
        desktop_speed: 90,
        mobile_speed: 63,
        critical_issues: vec![],
        moderate_issues: vec![],
    }
}

fn image(status: ImageStatus) -> ImageFinding {
    ImageFinding {
        filename: "a.png".to_string(),
        alt_text: String::new(),
        status,
    }
}

fn messages(recommendations: &[Recommendation]) -> Vec<&str> {
    recommendations.iter().map(|r| r.message.as_str()).collect()
}

#[test]
fn test_clean_page_only_gets_suggestions() {
    let recommendations = generate(&good_meta(), &[h1()], &[], &[], &fast_page());

    assert_eq!(
        recommendations,
        vec![
            Recommendation::suggestion(OPEN_GRAPH),
            Recommendation::suggestion(SCHEMA_ORG)
        ]
    );
}

#[test]
fn test_missing_title_and_description_come_first() {
    let recommendations = generate(
        &MetaTagFindings::default(),
        &[h1()],
        &[],
        &[],
        &fast_page(),
    );

    assert_eq!(recommendations[0], Recommendation::critical("Add a title tag to your page"));
    assert_eq!(
        recommendations[1],
        Recommendation::critical("Add a meta description to your page")
    );
    assert_eq!(recommendations.len(), 4);
}

#[test]
fn test_long_title_and_description_report_lengths() {
    let meta = MetaTagFindings {
        title_length: 72,
        description_length: 190,
        ..good_meta()
    };

    let recommendations = generate(&meta, &[h1()], &[], &[], &fast_page());
    assert_eq!(
        messages(&recommendations)[..2],
        [
            "Shorten your title tag to less than 60 characters (currently 72)",
            "Shorten your meta description to 120-155 characters (currently 190)"
        ]
    );
    assert!(recommendations[..2].iter().all(|r| r.severity == Severity::Moderate));
}

#[test]
fn test_heading_recommendations() {
    let missing = generate(&good_meta(), &[], &[], &[], &fast_page());
    assert_eq!(missing[0], Recommendation::critical("Add an H1 heading to your page"));

    let skipped = HeadingFinding {
        level: HeadingLevel::H3,
        content: "Deep".to_string(),
        status: HeadingStatus::Warning,
        message: Some("Skipped H2 in hierarchy".to_string()),
    };
    let recommendations = generate(
        &good_meta(),
        &[h1(), h1(), skipped.clone(), skipped],
        &[],
        &[],
        &fast_page(),
    );
    assert_eq!(
        messages(&recommendations)[..2],
        [
            "Use only one H1 heading per page",
            "Fix heading hierarchy issues (avoid skipping heading levels)"
        ]
    );
}

#[test]
fn test_warning_without_skip_does_not_ask_for_hierarchy_fix() {
    let warned = HeadingFinding {
        status: HeadingStatus::Warning,
        message: Some("Multiple H1 headings (should have only one)".to_string()),
        ..h1()
    };

    let recommendations = generate(&good_meta(), &[warned.clone(), warned], &[], &[], &fast_page());
    assert!(
        !messages(&recommendations)
            .iter()
            .any(|m| m.starts_with("Fix heading hierarchy"))
    );
}

#[test]
fn test_image_recommendations_are_pluralized() {
    let single = generate(&good_meta(), &[h1()], &[image(ImageStatus::Missing)], &[], &fast_page());
    assert_eq!(
        single[0],
        Recommendation::critical("Add alt text to 1 image that is missing it")
    );

    let images = [
        image(ImageStatus::Missing),
        image(ImageStatus::TooGeneric),
        image(ImageStatus::Missing),
    ];
    let several = generate(&good_meta(), &[h1()], &images, &[], &fast_page());
    assert_eq!(
        several[..2],
        [
            Recommendation::critical("Add alt text to 2 images that are missing it"),
            Recommendation::moderate("Make generic alt texts more descriptive")
        ]
    );
}

#[test]
fn test_over_optimized_keywords_are_listed() {
    let keywords = [
        KeywordFinding {
            keyword: "shoes".to_string(),
            density: 6.5,
            status: KeywordStatus::OverOptimized,
        },
        KeywordFinding {
            keyword: "running".to_string(),
            density: 5.0,
            status: KeywordStatus::OverOptimized,
        },
        KeywordFinding {
            keyword: "trail".to_string(),
            density: 2.0,
            status: KeywordStatus::Good,
        },
    ];

    let recommendations = generate(&good_meta(), &[h1()], &[], &keywords, &fast_page());
    assert_eq!(
        recommendations[0],
        Recommendation::moderate(r#"Reduce keyword density for "shoes" (6.5%), "running" (5%)"#)
    );
}

#[test]
fn test_page_speed_recommendations_follow_detection_order() {
    let page_speed = PageSpeedFindings {
        desktop_speed: 20,
        mobile_speed: 14,
        critical_issues: vec![
            "Too many images (more than 10)".to_string(),
            "Render-blocking JavaScript (9 scripts)".to_string(),
        ],
        moderate_issues: vec![
            "No preloaded resources".to_string(),
            "Missing viewport meta tag".to_string(),
        ],
    };

    let recommendations = generate(&good_meta(), &[h1()], &[], &[], &page_speed);
    assert_eq!(
        recommendations,
        vec![
            Recommendation::critical("Improve page loading speed"),
            Recommendation::critical("Too many images (more than 10)"),
            Recommendation::critical("Render-blocking JavaScript (9 scripts)"),
            Recommendation::moderate("No preloaded resources"),
            Recommendation::moderate("Missing viewport meta tag"),
            Recommendation::suggestion(OPEN_GRAPH),
            Recommendation::suggestion(SCHEMA_ORG),
        ]
    );
}

#[test]
fn test_speed_of_fifty_is_not_slow() {
    let page_speed = PageSpeedFindings {
        desktop_speed: 50,
        ..fast_page()
    };

    let recommendations = generate(&good_meta(), &[h1()], &[], &[], &page_speed);
    assert_eq!(recommendations.len(), 2);
}
