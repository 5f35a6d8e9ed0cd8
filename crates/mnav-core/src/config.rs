use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::fetch::DEFAULT_USER_AGENT;

/// Address the front-end offers before the user types anything.
pub const DEFAULT_HOME_URL: &str = "https://example.com";

/// Front-end configuration loaded from `~/.config/mnav/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MnavConfig {
    /// `User-Agent` sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Follow 3xx redirects (the transport's default behaviour).
    #[serde(default = "default_follow_redirects")]
    pub follow_redirects: bool,
    /// Redirect hops allowed before the fetch fails.
    #[serde(default = "default_max_redirections")]
    pub max_redirections: u32,
    /// Prefilled address, used when no input is given.
    #[serde(default = "default_home_url")]
    pub home_url: String,
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_follow_redirects() -> bool {
    true
}

fn default_max_redirections() -> u32 {
    50
}

fn default_home_url() -> String {
    DEFAULT_HOME_URL.to_string()
}

impl Default for MnavConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            follow_redirects: default_follow_redirects(),
            max_redirections: default_max_redirections(),
            home_url: default_home_url(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mnav")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<MnavConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`] but for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<MnavConfig> {
    if !path.exists() {
        let default_cfg = MnavConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: MnavConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_values() {
        let cfg = MnavConfig::default();
        assert_eq!(cfg.user_agent, "MiniBrowser/0.1 (+mnav)");
        assert!(cfg.follow_redirects);
        assert_eq!(cfg.max_redirections, 50);
        assert_eq!(cfg.home_url, "https://example.com");
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = MnavConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: MnavConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.user_agent, cfg.user_agent);
        assert_eq!(parsed.follow_redirects, cfg.follow_redirects);
        assert_eq!(parsed.max_redirections, cfg.max_redirections);
        assert_eq!(parsed.home_url, cfg.home_url);
    }

    #[test]
    fn config_toml_partial_uses_defaults() {
        let toml = r#"
            user_agent = "curious/2.0"
            follow_redirects = false
        "#;
        let cfg: MnavConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.user_agent, "curious/2.0");
        assert!(!cfg.follow_redirects);
        assert_eq!(cfg.max_redirections, 50);
        assert_eq!(cfg.home_url, DEFAULT_HOME_URL);
    }

    #[test]
    fn load_or_init_creates_then_reads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let created = load_or_init_at(&path).unwrap();
        assert!(path.exists());
        assert_eq!(created.home_url, DEFAULT_HOME_URL);

        fs::write(&path, "home_url = \"http://intranet.local\"\n").unwrap();
        let loaded = load_or_init_at(&path).unwrap();
        assert_eq!(loaded.home_url, "http://intranet.local");
        assert_eq!(loaded.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn load_rejects_bad_types() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "max_redirections = \"many\"\n").unwrap();
        assert!(load_or_init_at(&path).is_err());
    }
}
