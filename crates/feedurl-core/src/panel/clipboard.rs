//! Clipboard capability used by the copy action.

use std::future::Future;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no clipboard is available")]
    Unavailable,
    #[error("failed to run clipboard command `{program}`")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("clipboard command `{program}` exited with {status}")]
    Exit { program: String, status: String },
}

/// Writes text to the system clipboard.
pub trait Clipboard {
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), ClipboardError>> + Send;
}
