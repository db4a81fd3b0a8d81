use crate::models::UrlFindings;
use url::Url;

/// Structural facts derived from the URL string alone; nothing is fetched.
///
/// `mobile_friendly` and `www_redirect_note` are fixed approximations and are not
/// measured.
pub fn analyze(url: &str) -> UrlFindings {
    let https_enabled = Url::parse(url).is_ok_and(|parsed| parsed.scheme() == "https");

    UrlFindings {
        length: url.chars().count(),
        contains_underscores: url.contains('_'),
        https_enabled,
        mobile_friendly: true,
        www_redirect_note: "Properly configured".to_string(),
    }
}
