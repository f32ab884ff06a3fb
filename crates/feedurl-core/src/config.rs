use crate::feed_url::Mode;
use crate::origin::Origin;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Origin used when none is configured (the feed server's default bind address).
pub const DEFAULT_ORIGIN: &str = "http://localhost:5000";

/// External command that receives text on stdin and puts it on the clipboard
/// (e.g. `wl-copy`, `xclip -selection clipboard`, `pbcopy`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardConfig {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

/// Global configuration loaded from `~/.config/feedurl/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedUrlConfig {
    /// Origin of the feed-generation endpoint that built URLs point at.
    pub origin: Origin,
    /// Mode used when none is given on the command line.
    #[serde(default)]
    pub default_mode: Mode,
    /// Optional clipboard command; without it copying reports a failure.
    #[serde(default)]
    pub clipboard: Option<ClipboardConfig>,
}

impl Default for FeedUrlConfig {
    fn default() -> Self {
        Self {
            origin: Origin::new("http", "localhost", Some(5000)),
            default_mode: Mode::Podcast,
            clipboard: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("feedurl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FeedUrlConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FeedUrlConfig::default();
        write_config(&path, &default_cfg)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<FeedUrlConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: FeedUrlConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

pub fn write_config(path: &Path, cfg: &FeedUrlConfig) -> Result<()> {
    let toml = toml::to_string_pretty(cfg).context("serialize config")?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml).with_context(|| format!("write config {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = FeedUrlConfig::default();
        assert_eq!(cfg.origin.to_string(), DEFAULT_ORIGIN);
        assert_eq!(cfg.default_mode, Mode::Podcast);
        assert!(cfg.clipboard.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = FeedUrlConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        assert!(toml.contains("origin = \"http://localhost:5000\""));
        let parsed: FeedUrlConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            origin = "https://pods.example.org"
            default_mode = "youtube"

            [clipboard]
            program = "xclip"
            args = ["-selection", "clipboard"]
        "#;
        let cfg: FeedUrlConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.origin, Origin::new("https", "pods.example.org", None));
        assert_eq!(cfg.default_mode, Mode::YouTube);
        let clip = cfg.clipboard.as_ref().unwrap();
        assert_eq!(clip.program, "xclip");
        assert_eq!(clip.args, vec!["-selection", "clipboard"]);
    }

    #[test]
    fn config_toml_minimal() {
        let cfg: FeedUrlConfig = toml::from_str(r#"origin = "http://10.0.0.2:8000""#).unwrap();
        assert_eq!(cfg.origin.port(), Some(8000));
        assert_eq!(cfg.default_mode, Mode::Podcast);
        assert!(cfg.clipboard.is_none());
    }

    #[test]
    fn config_toml_rejects_bad_origin() {
        assert!(toml::from_str::<FeedUrlConfig>(r#"origin = "localhost""#).is_err());
    }

    #[test]
    fn write_then_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let cfg = FeedUrlConfig {
            clipboard: Some(ClipboardConfig {
                program: "wl-copy".to_string(),
                args: Vec::new(),
            }),
            ..FeedUrlConfig::default()
        };
        write_config(&path, &cfg).unwrap();
        assert_eq!(load_from(&path).unwrap(), cfg);
    }

    #[test]
    fn load_from_reports_path_on_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let err = load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("missing.toml"));
    }
}
