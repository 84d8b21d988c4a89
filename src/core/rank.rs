//! Rank lookup by screen-scraping an external profile page.
//!
//! The profile page is not a stable contract: extraction is a best-effort
//! regex match against the raw markup, and any fetch or parse failure turns
//! into a user-facing "not found" or generic failure reply upstream.

use crate::errors::{Error, Result};
use regex::Regex;
use tracing::{debug, instrument};

const PROFILE_URL_BASE: &str = "https://tracker.gg/valorant/profile/riot";
const RATING_PATTERN: &str = r#""rating"\s*:\s*(\d+)"#;

/// Pulls the first numeric rating out of the raw profile markup, if any.
#[must_use]
pub fn extract_rating(html: &str) -> Option<u32> {
    let pattern = Regex::new(RATING_PATTERN).ok()?;
    pattern
        .captures(html)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Fetches the profile page for `username` and extracts the rating.
///
/// Fails with [`Error::RatingNotFound`] when the page loads but no rating is
/// present, or an HTTP error on any fetch failure.
#[instrument(skip(http))]
pub async fn fetch_rating(http: &reqwest::Client, username: &str) -> Result<u32> {
    let url = format!("{PROFILE_URL_BASE}/{username}/overview");
    debug!(%url, "Fetching profile page for rank lookup");

    let body = http
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    extract_rating(&body).ok_or_else(|| Error::RatingNotFound {
        username: username.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_rating_from_embedded_json() {
        let html = r#"<script>window.__INITIAL_STATE__={"stats":{"rating": 2145,"peak":2300}}</script>"#;
        assert_eq!(extract_rating(html), Some(2145));
    }

    #[test]
    fn test_extract_rating_takes_first_match() {
        let html = r#"{"rating":100}{"rating":200}"#;
        assert_eq!(extract_rating(html), Some(100));
    }

    #[test]
    fn test_extract_rating_missing() {
        assert_eq!(extract_rating("<html><body>No stats here</body></html>"), None);
        assert_eq!(extract_rating(r#"{"rating":"unranked"}"#), None);
    }
}
