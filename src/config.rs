use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::{OriginError, Result};

pub const API_KEY_VAR: &str = "RED_API_KEY";
pub const TRACKER_VAR: &str = "ORIGIN_TRACKER";
pub const PROXY_VAR: &str = "ORIGIN_PROXY";

/// Trackers this tool knows how to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tracker {
    Red,
}

impl Tracker {
    pub fn name(&self) -> &'static str {
        match self {
            Tracker::Red => "red",
        }
    }

    /// Public site root, always with a trailing slash.
    pub fn site_url(&self) -> &'static str {
        match self {
            Tracker::Red => "https://redacted.ch/",
        }
    }

    pub fn permalink(&self, torrent_id: u64) -> String {
        format!("{}torrents.php?torrentid={}", self.site_url(), torrent_id)
    }
}

impl FromStr for Tracker {
    type Err = OriginError;

    fn from_str(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "red" => Ok(Tracker::Red),
            _ => Err(OriginError::InvalidTracker(name.to_string())),
        }
    }
}

impl fmt::Display for Tracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct OriginConfig {
    pub api_key: Option<String>,
    pub tracker: Option<String>,
    /// Overrides the host the JSON API is reached on. Permalinks keep the public site URL.
    pub base_url: Option<String>,
    pub proxy: Option<String>,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for OriginConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            tracker: None,
            base_url: None,
            proxy: None,
            timeout_secs: 30,
            user_agent: "gazelle-origin".to_string(),
        }
    }
}

impl OriginConfig {
    /// Loads settings from the default config file (if any) and the process environment.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let default_path = Self::default_config_path();
        let path = config_path.or(default_path.as_deref());
        Self::from_sources(path, |name| std::env::var(name).ok())
    }

    /// Layers defaults, an optional JSON file and environment variables, in that order.
    /// `env` is consulted instead of the real environment so callers can supply their own.
    pub fn from_sources<F>(config_path: Option<&Path>, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = OriginConfig::default();
        let lookup = |name: &str| env(name).filter(|value| !value.trim().is_empty());

        let mut builder = Config::builder()
            .set_default("timeout_secs", defaults.timeout_secs)?
            .set_default("user_agent", defaults.user_agent)?;

        if let Some(path) = config_path {
            log::debug!("Reading configuration from {}", path.display());
            builder = builder.add_source(
                File::from(path)
                    .format(FileFormat::Json)
                    .required(false),
            );
        }

        let config: OriginConfig = builder
            .set_override_option("api_key", lookup(API_KEY_VAR))?
            .set_override_option("tracker", lookup(TRACKER_VAR))?
            .set_override_option("proxy", lookup(PROXY_VAR))?
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Applies the `--tracker` flag, which beats both the environment and the config file.
    pub fn with_tracker_flag(mut self, tracker: Option<String>) -> Self {
        if let Some(tracker) = tracker {
            self.tracker = Some(tracker);
        }
        self
    }

    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("gazelle-origin").join("config.json"))
    }

    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or(OriginError::MissingApiKey)
    }

    pub fn require_tracker(&self) -> Result<Tracker> {
        match self.tracker.as_deref().filter(|name| !name.trim().is_empty()) {
            Some(name) => name.parse(),
            None => Err(OriginError::MissingTracker),
        }
    }

    /// Root URL the JSON endpoint hangs off for `tracker`.
    pub fn api_root(&self, tracker: Tracker) -> Result<Url> {
        let raw = self.base_url.as_deref().unwrap_or(tracker.site_url());
        let mut url = Url::parse(raw).map_err(|e| {
            OriginError::Config(config::ConfigError::Message(format!(
                "Invalid base URL {}: {}",
                raw, e
            )))
        })?;
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }
}
