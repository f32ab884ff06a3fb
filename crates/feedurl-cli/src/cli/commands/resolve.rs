//! `feedurl resolve <url>` – show the upstream feed behind a feed URL.

use anyhow::{Context, Result};
use feedurl_core::upstream::{self, UpstreamFeed};

pub fn run_resolve(url: &str, json: bool) -> Result<()> {
    let feed = upstream::resolve_feed_url(url).with_context(|| format!("resolve {url}"))?;
    tracing::debug!(mode = %feed.mode(), upstream = feed.url(), "resolved feed url");

    if json {
        println!("{}", serde_json::to_string_pretty(&feed)?);
        return Ok(());
    }

    match &feed {
        UpstreamFeed::Podcast { url } => println!("podcast  {url}"),
        UpstreamFeed::YouTube { channel_id, url } => {
            println!("youtube  {channel_id}  {url}")
        }
    }
    Ok(())
}
