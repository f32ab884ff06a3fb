//! The converter panel: mode toggle, one input per mode, the output region
//! and the copy control.
//!
//! The panel owns all state the user sees and drives the pure builder in
//! [`crate::feed_url`]. Side effects (clipboard, notifications) go through the
//! [`Clipboard`] and [`Notifier`] capabilities supplied by the caller.

mod clipboard;
mod notify;

pub use clipboard::{Clipboard, ClipboardError};
pub use notify::{Notification, NotificationKind, Notifier, NOTIFICATION_DURATION};

use crate::feed_url::{self, BuildResult, Mode};
use crate::origin::Origin;

/// Text shown in the output region before anything has been built.
pub const PLACEHOLDER: &str = "Your generated URL will appear here...";

pub const COPIED_MESSAGE: &str = "URL copied to clipboard!";
pub const COPY_FAILED_MESSAGE: &str = "Failed to copy URL.";

/// Contents of the output region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Placeholder,
    /// A URL produced by a successful build.
    Url(String),
}

impl Output {
    pub fn text(&self) -> &str {
        match self {
            Output::Placeholder => PLACEHOLDER,
            Output::Url(url) => url,
        }
    }
}

/// Result of the copy action.
#[derive(Debug)]
pub enum CopyOutcome {
    Copied,
    /// Nothing built yet; the clipboard was not touched.
    Skipped,
    Failed(ClipboardError),
}

#[derive(Debug, Clone)]
pub struct FeedPanel {
    mode: Mode,
    podcast_input: String,
    youtube_input: String,
    output: Output,
    copy_visible: bool,
}

impl Default for FeedPanel {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}

impl FeedPanel {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            podcast_input: String::new(),
            youtube_input: String::new(),
            output: Output::Placeholder,
            copy_visible: false,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switch the active input field. Inputs and output are kept.
    pub fn select_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn set_input(&mut self, mode: Mode, text: impl Into<String>) {
        match mode {
            Mode::Podcast => self.podcast_input = text.into(),
            Mode::YouTube => self.youtube_input = text.into(),
        }
    }

    pub fn input(&self, mode: Mode) -> &str {
        match mode {
            Mode::Podcast => &self.podcast_input,
            Mode::YouTube => &self.youtube_input,
        }
    }

    pub fn output(&self) -> &Output {
        &self.output
    }

    pub fn copy_visible(&self) -> bool {
        self.copy_visible
    }

    /// Build the feed URL from the active field.
    ///
    /// On success the URL is displayed and the copy control shown. On failure
    /// an error notification is sent and the output is left as it was.
    pub fn generate<N: Notifier>(&mut self, origin: &Origin, notifier: &N) -> BuildResult {
        let result = feed_url::build(self.mode, self.input(self.mode), origin);
        match &result {
            Ok(url) => {
                self.output = Output::Url(url.clone());
                self.copy_visible = true;
            }
            Err(err) => notifier.notify(Notification::error(err.to_string())),
        }
        result
    }

    /// Copy the displayed URL. Only a URL from a successful build is copied.
    pub async fn copy<C, N>(&self, clipboard: &C, notifier: &N) -> CopyOutcome
    where
        C: Clipboard,
        N: Notifier,
    {
        let Output::Url(url) = &self.output else {
            return CopyOutcome::Skipped;
        };

        match clipboard.write_text(url).await {
            Ok(()) => {
                notifier.notify(Notification::success(COPIED_MESSAGE));
                CopyOutcome::Copied
            }
            Err(err) => {
                tracing::error!(error = %err, "error copying to clipboard");
                notifier.notify(Notification::error(COPY_FAILED_MESSAGE));
                CopyOutcome::Failed(err)
            }
        }
    }
}
