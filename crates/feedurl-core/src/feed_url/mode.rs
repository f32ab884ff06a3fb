//! Feed mode selection (podcast feed URL vs. YouTube channel ID).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which kind of input the user is converting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Podcast,
    YouTube,
}

impl Mode {
    /// Human-readable name of the input field for this mode.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Podcast => "Podcast Feed URL",
            Mode::YouTube => "YouTube Channel ID",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Podcast => "podcast",
            Mode::YouTube => "youtube",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mode `{0}` (expected `podcast` or `youtube`)")]
pub struct ParseModeError(String);

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("podcast") {
            Ok(Mode::Podcast)
        } else if s.eq_ignore_ascii_case("youtube") {
            Ok(Mode::YouTube)
        } else {
            Err(ParseModeError(s.to_string()))
        }
    }
}
