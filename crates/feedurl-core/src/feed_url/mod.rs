//! Feed URL construction.
//!
//! Turns what the user typed (a podcast feed URL or a YouTube channel ID) into
//! an absolute `/feed/<path>` URL on a given origin. No validation or
//! percent-encoding is applied to the input: after trimming it is inserted
//! verbatim.

mod error;
mod mode;

pub use error::BuildError;
pub use mode::{Mode, ParseModeError};

use crate::origin::Origin;

/// Path prefix served by the feed-generation endpoint.
pub const FEED_PREFIX: &str = "/feed/";

/// Path segment prefix marking a YouTube channel.
pub const YOUTUBE_PREFIX: &str = "youtube/";

/// Schemes stripped from the start of podcast input (only one, case-sensitive).
const STRIPPED_SCHEMES: [&str; 2] = ["https://", "http://"];

/// Outcome of a build: the absolute URL, or the reason it was not built.
pub type BuildResult = Result<String, BuildError>;

/// Builds the feed URL for `raw_input` in the given mode on `origin`.
///
/// # Examples
///
/// - `(Podcast, "https://example.com/feed.xml", https://site.test)` → `"https://site.test/feed/example.com/feed.xml"`
/// - `(YouTube, "UC1234", http://localhost:8080)` → `"http://localhost:8080/feed/youtube/UC1234"`
pub fn build(mode: Mode, raw_input: &str, origin: &Origin) -> BuildResult {
    let trimmed = trim_input(raw_input);
    if trimmed.is_empty() {
        tracing::debug!(%mode, "feed input is empty");
        return Err(BuildError::EmptyInput { mode });
    }

    let url = format!("{}{}", origin, request_path(mode, trimmed));
    tracing::debug!(%mode, %url, "built feed url");
    Ok(url)
}

/// Trims user input the way browser form fields do: Unicode whitespace and
/// the byte-order mark, but not NEL (U+0085).
pub fn trim_input(raw_input: &str) -> &str {
    raw_input.trim_matches(|c: char| (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}')
}

/// Derives the part of the request path after `/feed/` from already-trimmed input.
pub fn path_segment(mode: Mode, trimmed: &str) -> String {
    match mode {
        Mode::Podcast => strip_leading_scheme(trimmed).to_string(),
        Mode::YouTube => format!("{YOUTUBE_PREFIX}{trimmed}"),
    }
}

/// Full request path (`/feed/<segment>`) for already-trimmed input.
pub fn request_path(mode: Mode, trimmed: &str) -> String {
    format!("{FEED_PREFIX}{}", path_segment(mode, trimmed))
}

fn strip_leading_scheme(input: &str) -> &str {
    STRIPPED_SCHEMES
        .iter()
        .find_map(|scheme| input.strip_prefix(scheme))
        .unwrap_or(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> Origin {
        Origin::new("https", "site.test", None)
    }

    fn local() -> Origin {
        Origin::new("http", "localhost", Some(8080))
    }

    #[test]
    fn podcast_with_https_scheme() {
        assert_eq!(
            build(Mode::Podcast, "https://example.com/feed.xml", &site()).unwrap(),
            "https://site.test/feed/example.com/feed.xml"
        );
    }

    #[test]
    fn youtube_with_port() {
        assert_eq!(
            build(Mode::YouTube, "UC1234", &local()).unwrap(),
            "http://localhost:8080/feed/youtube/UC1234"
        );
    }

    #[test]
    fn whitespace_only_is_rejected_per_mode() {
        let err = build(Mode::Podcast, "   ", &site()).unwrap_err();
        assert_eq!(err, BuildError::EmptyInput { mode: Mode::Podcast });
        assert_eq!(err.to_string(), "Please enter a Podcast Feed URL.");

        let err = build(Mode::YouTube, "\t\n", &site()).unwrap_err();
        assert_eq!(err.to_string(), "Please enter a YouTube Channel ID.");

        assert!(build(Mode::YouTube, "", &local()).is_err());
    }

    #[test]
    fn input_is_trimmed() {
        assert_eq!(
            build(Mode::YouTube, "  UC1234 \n", &site()).unwrap(),
            "https://site.test/feed/youtube/UC1234"
        );
        assert_eq!(
            build(Mode::Podcast, " http://example.com/rss ", &site()).unwrap(),
            "https://site.test/feed/example.com/rss"
        );
    }

    #[test]
    fn byte_order_mark_counts_as_whitespace() {
        let err = build(Mode::Podcast, "\u{FEFF}", &site()).unwrap_err();
        assert_eq!(err, BuildError::EmptyInput { mode: Mode::Podcast });
        assert!(build(Mode::YouTube, " \u{FEFF}\u{00A0}\u{2003} ", &site()).is_err());
        assert_eq!(
            build(Mode::YouTube, "\u{FEFF}UC1234\u{FEFF}", &site()).unwrap(),
            "https://site.test/feed/youtube/UC1234"
        );
    }

    #[test]
    fn next_line_is_not_trimmed() {
        assert_eq!(trim_input("\u{85}a"), "\u{85}a");
        assert_eq!(
            build(Mode::Podcast, "\u{85}", &site()).unwrap(),
            "https://site.test/feed/\u{85}"
        );
    }

    #[test]
    fn podcast_without_scheme_is_unchanged() {
        for input in [
            "feeds.simplecast.com/LDNgBXht",
            "example.com/a b?x=1&y=2",
            "ftp://example.com/feed",
            "HTTPS://example.com/feed",
        ] {
            assert_eq!(path_segment(Mode::Podcast, input), input);
        }
    }

    #[test]
    fn only_first_leading_scheme_is_stripped() {
        assert_eq!(
            path_segment(Mode::Podcast, "https://http://example.com"),
            "http://example.com"
        );
        assert_eq!(
            path_segment(Mode::Podcast, "example.com/?next=https://other.test"),
            "example.com/?next=https://other.test"
        );
        assert_eq!(path_segment(Mode::Podcast, "http://"), "");
    }

    #[test]
    fn youtube_segment_is_prefixed_verbatim() {
        assert_eq!(path_segment(Mode::YouTube, "UC1234"), "youtube/UC1234");
        assert_eq!(
            path_segment(Mode::YouTube, "https://youtube.com/@x"),
            "youtube/https://youtube.com/@x"
        );
    }

    #[test]
    fn request_path_has_feed_prefix() {
        assert_eq!(request_path(Mode::YouTube, "abc"), "/feed/youtube/abc");
        assert_eq!(request_path(Mode::Podcast, "https://a.test/x"), "/feed/a.test/x");
    }

    #[test]
    fn build_is_repeatable() {
        let first = build(Mode::Podcast, "https://example.com/feed.xml", &local());
        let second = build(Mode::Podcast, "https://example.com/feed.xml", &local());
        assert_eq!(first, second);
    }
}
