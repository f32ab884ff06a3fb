//! CLI for feedurl.

mod clipboard;
mod commands;
mod notifier;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use feedurl_core::{Mode, Origin};
use std::process::ExitCode;

use commands::{run_build, run_completions, run_resolve, BuildArgs};

/// Top-level CLI for feedurl.
#[derive(Debug, Parser)]
#[command(name = "feedurl")]
#[command(about = "feedurl: turn podcast feeds and YouTube channels into /feed/ URLs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Build the feed URL for a podcast feed URL or YouTube channel ID.
    Build {
        /// Podcast feed URL (scheme optional) or YouTube channel ID.
        input: String,

        /// Input kind: "podcast" or "youtube" (default from config).
        #[arg(long, short)]
        mode: Option<Mode>,

        /// Origin of the feed server, e.g. https://pods.example.org (default from config).
        #[arg(long)]
        origin: Option<Origin>,

        /// Copy the built URL to the clipboard.
        #[arg(long)]
        copy: bool,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show which upstream feed a built feed URL points at.
    Resolve {
        /// Feed URL, e.g. https://pods.example.org/feed/youtube/UC1234.
        url: String,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print shell completions to stdout.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<ExitCode> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Build {
                input,
                mode,
                origin,
                copy,
                json,
            } => {
                let args = BuildArgs {
                    input,
                    mode,
                    origin,
                    copy,
                    json,
                };
                return run_build(args).await;
            }
            CliCommand::Resolve { url, json } => run_resolve(&url, json)?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(ExitCode::SUCCESS)
    }
}

#[cfg(test)]
mod tests;
