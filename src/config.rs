//! Configuration management for reeltui
//!
//! Handles config file loading and API URL resolution.
//! Config is stored at ~/.config/reeltui/config.toml

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::api::DEFAULT_API_URL;
use crate::app::Section;

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "REELTUI_API_URL";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the recommendation API
    pub api_url: Option<String>,
    /// Recommendations requested per lookup
    pub recommend_count: u32,
    /// Results requested per genre search
    pub search_limit: u32,
    /// Draw the 3D hero on the home page (falls back to a static banner when off)
    pub hero_3d: bool,
    /// Particles in the background field
    pub particle_count: usize,
    /// Replacement autocomplete titles
    pub suggestions: Option<Vec<String>>,
    /// Section shown at startup
    pub start_section: Section,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: None,
            recommend_count: 8,
            search_limit: 20,
            hero_3d: true,
            particle_count: 50,
            suggestions: None,
            start_section: Section::Home,
        }
    }
}

impl Config {
    /// Get config file path (~/.config/reeltui/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("reeltui").join("config.toml"))
    }

    /// Load config from the default path, or defaults if missing/invalid
    pub fn load() -> Self {
        Self::path()
            .map(|p| Self::load_from(&p))
            .unwrap_or_default()
    }

    /// Load config from an explicit path, or defaults if missing/invalid
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(s) => Self::parse(&s).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "ignoring invalid config");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Parse TOML config text
    pub fn parse(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Resolve the API base URL with fallback chain:
    /// 1. Explicit override (the --api-url flag)
    /// 2. Environment variable REELTUI_API_URL
    /// 3. `api_url` from the config file
    /// 4. http://localhost:5000
    pub fn api_url(&self, flag: Option<&str>) -> String {
        Self::resolve_api_url(flag, std::env::var(API_URL_ENV).ok().as_deref(), self)
    }

    fn resolve_api_url(flag: Option<&str>, env: Option<&str>, config: &Config) -> String {
        flag.or(env.filter(|s| !s.is_empty()))
            .or(config.api_url.as_deref())
            .unwrap_or(DEFAULT_API_URL)
            .to_string()
    }

    /// Autocomplete titles: config override or the built-in list
    pub fn suggestion_titles(&self) -> Vec<String> {
        match &self.suggestions {
            Some(list) if !list.is_empty() => list.clone(),
            _ => crate::autocomplete::POPULAR_MOVIES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}
