//! `feedurl build <input>` – build a feed URL through the panel.

use anyhow::Result;
use feedurl_core::config::{self, FeedUrlConfig};
use feedurl_core::feed_url::trim_input;
use feedurl_core::panel::{Clipboard, CopyOutcome, FeedPanel, Notifier};
use feedurl_core::{Mode, Origin};
use serde::Serialize;
use std::io::{self, Write};
use std::process::ExitCode;

use crate::cli::clipboard::CommandClipboard;
use crate::cli::notifier::StderrNotifier;

#[derive(Debug)]
pub struct BuildArgs {
    pub input: String,
    pub mode: Option<Mode>,
    pub origin: Option<Origin>,
    pub copy: bool,
    pub json: bool,
}

impl BuildArgs {
    /// The config file is only read when a flag leaves something unset.
    fn needs_config(&self) -> bool {
        self.mode.is_none() || self.origin.is_none() || self.copy
    }
}

#[derive(Debug, Serialize)]
struct BuildOutput<'a> {
    mode: Mode,
    input: &'a str,
    url: &'a str,
}

/// Resolve mode and origin: command line first, then config.
fn effective(args: &BuildArgs, cfg: &FeedUrlConfig) -> (Mode, Origin) {
    let mode = args.mode.unwrap_or(cfg.default_mode);
    let origin = args.origin.clone().unwrap_or_else(|| cfg.origin.clone());
    (mode, origin)
}

pub async fn run_build(args: BuildArgs) -> Result<ExitCode> {
    let cfg = if args.needs_config() {
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        cfg
    } else {
        FeedUrlConfig::default()
    };
    let clipboard = CommandClipboard::from_config(cfg.clipboard.as_ref());
    build_with(&cfg, &args, &StderrNotifier, &clipboard, &mut io::stdout()).await
}

/// Build (and optionally copy) the feed URL, writing the result to `out`.
///
/// Returns `ExitCode::FAILURE` when nothing was built; the notifier has
/// already shown why.
pub async fn build_with<N, C, W>(
    cfg: &FeedUrlConfig,
    args: &BuildArgs,
    notifier: &N,
    clipboard: &C,
    out: &mut W,
) -> Result<ExitCode>
where
    N: Notifier,
    C: Clipboard,
    W: Write,
{
    let (mode, origin) = effective(args, cfg);

    let mut panel = FeedPanel::new(mode);
    panel.set_input(mode, args.input.as_str());

    let url = match panel.generate(&origin, notifier) {
        Ok(url) => url,
        Err(_) => return Ok(ExitCode::FAILURE),
    };

    if args.json {
        let output = BuildOutput {
            mode,
            input: trim_input(&args.input),
            url: &url,
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
    } else {
        writeln!(out, "{url}")?;
    }

    if args.copy {
        if let CopyOutcome::Copied = panel.copy(clipboard, notifier).await {
            tracing::info!("copied {} to clipboard", url);
        }
    }

    Ok(ExitCode::SUCCESS)
}
