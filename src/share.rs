//! Share-link building.
//!
//! Pure URL construction; opening the link and the clipboard call live in
//! `widget::share`.

use url::Url;

use crate::error::Result;

const TWEET_INTENT_BASE: &str = "https://twitter.com/intent/tweet";

/// Build a tweet-intent URL for the given page URL and title.
///
/// Both values end up percent-encoded query parameters; the caller passes
/// them raw.
pub fn tweet_intent_url(page_url: &str, title: &str) -> Result<String> {
    let mut url = Url::parse(TWEET_INTENT_BASE)?;
    url.query_pairs_mut()
        .append_pair("url", page_url)
        .append_pair("text", title);
    Ok(url.into())
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn test_tweet_intent_url_encodes_parameters() {
        let url = tweet_intent_url("https://example.com/blog/post-1", "Hello, World!").unwrap();
        assert_eq!(
            url,
            "https://twitter.com/intent/tweet?url=https%3A%2F%2Fexample.com%2Fblog%2Fpost-1&text=Hello%2C+World%21"
        );
    }

    #[test]
    fn test_round_trips_through_query_parsing() {
        let raw = tweet_intent_url("https://example.com/a?b=c&d=e", "A & B").unwrap();
        let parsed = Url::parse(&raw).unwrap();
        let pairs: Vec<(String, String)> = parsed
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            [
                ("url".to_string(), "https://example.com/a?b=c&d=e".to_string()),
                ("text".to_string(), "A & B".to_string()),
            ]
        );
    }
}
