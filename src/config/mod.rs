use crate::youtube::models::{DEFAULT_MAX_PAGE_COUNT, LoadOptions};
use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;

pub const DEFAULT_BASE_URL: &str = "https://youtube.googleapis.com/youtube/v3/playlistItems";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub playlist: PlaylistConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// `playlistItems` endpoint URL.
    pub base_url: String,
    /// Data API key, sent as the `key` query parameter.
    pub api_key: Option<String>,
    /// Items per page (`maxResults`, 1-50). Unset uses the API default.
    pub page_size: Option<u32>,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaylistConfig {
    /// Maximum pages fetched per playlist, the first page included.
    pub max_page_count: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            page_size: None,
            timeout_secs: 15,
        }
    }
}

impl Default for PlaylistConfig {
    fn default() -> Self {
        Self {
            max_page_count: DEFAULT_MAX_PAGE_COUNT,
        }
    }
}

impl Config {
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            max_page_count: self.playlist.max_page_count,
        }
    }
}

pub fn save(cfg: &Config, override_path: Option<&Path>) -> anyhow::Result<()> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };
    write_config(cfg, &path)
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let proj = ProjectDirs::from("dev", "tubelist", "tubelist").context("ProjectDirs unavailable")?;
    Ok(proj.config_dir().join("config.toml"))
}

pub fn load(override_path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };

    if !path.exists() {
        let cfg = defaults::defaults();
        write_config(&cfg, &path)?;
        tracing::debug!(path = %path.display(), "wrote default config");
        return Ok(cfg);
    }

    let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg = toml::from_str::<Config>(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

fn write_config(cfg: &Config, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create dir {}", parent.display()))?;
    }
    let raw = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(path, raw).with_context(|| format!("write {}", path.display()))?;
    // The file may hold an API key.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o600));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let cfg: Config = toml::from_str(
            r#"
[playlist]
max_page_count = 2
"#,
        )
        .unwrap();
        assert_eq!(cfg.playlist.max_page_count, 2);
        assert_eq!(cfg.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.api.timeout_secs, 15);
        assert!(cfg.api.api_key.is_none());
        assert_eq!(cfg.load_options().max_page_count, 2);
    }

    #[test]
    fn test_defaults_round_trip_through_toml() {
        let raw = toml::to_string_pretty(&defaults::defaults()).unwrap();
        let cfg: Config = toml::from_str(&raw).unwrap();
        assert_eq!(cfg.load_options(), LoadOptions::default());
    }

    #[test]
    fn test_load_writes_defaults_when_missing() {
        let dir = std::env::temp_dir().join(format!("tubelist-config-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_file(&path);

        let cfg = load(Some(&path)).unwrap();
        assert_eq!(cfg.playlist.max_page_count, DEFAULT_MAX_PAGE_COUNT);
        assert!(path.exists());

        let mut cfg = cfg;
        cfg.api.api_key = Some("secret".to_string());
        save(&cfg, Some(&path)).unwrap();
        let reloaded = load(Some(&path)).unwrap();
        assert_eq!(reloaded.api.api_key.as_deref(), Some("secret"));

        let _ = fs::remove_dir_all(&dir);
    }
}
