//! Clipboard backed by an external command reading the text on stdin.

use feedurl_core::config::ClipboardConfig;
use feedurl_core::panel::{Clipboard, ClipboardError};
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

#[derive(Debug, Clone)]
pub struct CommandClipboard {
    command: Option<ClipboardConfig>,
}

impl CommandClipboard {
    pub fn from_config(cfg: Option<&ClipboardConfig>) -> Self {
        Self {
            command: cfg.cloned(),
        }
    }
}

impl Clipboard for CommandClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let cfg = self.command.as_ref().ok_or(ClipboardError::Unavailable)?;
        let spawn_err = |source| ClipboardError::Spawn {
            program: cfg.program.clone(),
            source,
        };

        let mut child = Command::new(&cfg.program)
            .args(&cfg.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(spawn_err)?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).await.map_err(spawn_err)?;
            // Dropping stdin closes the pipe so the command sees EOF.
        }

        let status = child.wait().await.map_err(spawn_err)?;
        if !status.success() {
            return Err(ClipboardError::Exit {
                program: cfg.program.clone(),
                status: status.to_string(),
            });
        }
        Ok(())
    }
}
