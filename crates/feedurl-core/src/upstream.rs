//! Maps a `/feed/<path>` back to the upstream feed the endpoint will fetch.
//!
//! Podcast paths are the original feed URL without its scheme and are always
//! fetched over HTTPS. `youtube/<channel-id>` paths name a channel whose
//! Atom feed lives at YouTube's `feeds/videos.xml` endpoint.

use crate::feed_url::{Mode, FEED_PREFIX, YOUTUBE_PREFIX};
use serde::Serialize;
use thiserror::Error;

const YOUTUBE_FEED_BASE: &str = "https://www.youtube.com/feeds/videos.xml?channel_id=";

/// The feed a `/feed/...` path stands for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum UpstreamFeed {
    Podcast { url: String },
    YouTube { channel_id: String, url: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpstreamError {
    #[error("feed path is empty")]
    EmptyPath,
    #[error("YouTube feed path has no channel ID")]
    MissingChannelId,
    #[error("`{0}` is not an absolute URL")]
    NotAbsolute(String),
    #[error("`{0}` does not point at {}", FEED_PREFIX)]
    NotFeedUrl(String),
}

impl UpstreamFeed {
    pub fn url(&self) -> &str {
        match self {
            UpstreamFeed::Podcast { url } | UpstreamFeed::YouTube { url, .. } => url,
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            UpstreamFeed::Podcast { .. } => Mode::Podcast,
            UpstreamFeed::YouTube { .. } => Mode::YouTube,
        }
    }
}

/// Resolve the part of a request path after `/feed/`.
pub fn resolve_feed_path(path: &str) -> Result<UpstreamFeed, UpstreamError> {
    if path.is_empty() {
        return Err(UpstreamError::EmptyPath);
    }

    if let Some(rest) = path.strip_prefix(YOUTUBE_PREFIX) {
        let channel_id = rest.split('/').next().unwrap_or_default();
        if channel_id.is_empty() {
            return Err(UpstreamError::MissingChannelId);
        }
        return Ok(UpstreamFeed::YouTube {
            channel_id: channel_id.to_string(),
            url: format!("{YOUTUBE_FEED_BASE}{channel_id}"),
        });
    }

    Ok(UpstreamFeed::Podcast {
        url: format!("https://{path}"),
    })
}

/// Resolve a full feed URL (as produced by [`crate::feed_url::build`]).
///
/// The path is taken verbatim from the string rather than through a URL
/// parser, since built URLs may contain unencoded spaces and queries.
pub fn resolve_feed_url(feed_url: &str) -> Result<UpstreamFeed, UpstreamError> {
    let feed_url = feed_url.trim();
    let (_, rest) = feed_url
        .split_once("://")
        .ok_or_else(|| UpstreamError::NotAbsolute(feed_url.to_string()))?;
    let path = rest.find('/').map(|i| &rest[i..]).unwrap_or_default();
    let segment = path
        .strip_prefix(FEED_PREFIX)
        .ok_or_else(|| UpstreamError::NotFeedUrl(feed_url.to_string()))?;
    resolve_feed_path(segment)
}
