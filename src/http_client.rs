use reqwest::{Client, ClientBuilder, header};
use std::time::Duration;

/// Identifies the analyzer to the sites it fetches
const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (compatible; seoscope/",
    env!("CARGO_PKG_VERSION"),
    "; +https://github.com/nelsonlaidev/seoscope)"
);
const ACCEPT: &str = "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8";
const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Creates the client used to fetch analysed pages
pub fn build_http_client(timeout_secs: u64) -> Result<Client, reqwest::Error> {
    let mut headers = header::HeaderMap::new();
    headers.insert(header::ACCEPT, header::HeaderValue::from_static(ACCEPT));
    headers.insert(
        header::ACCEPT_LANGUAGE,
        header::HeaderValue::from_static(ACCEPT_LANGUAGE),
    );

    ClientBuilder::new()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .timeout(Duration::from_secs(timeout_secs))
        .redirect(reqwest::redirect::Policy::limited(10))
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .build()
}
