//! Client configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use rdu_navigation::{GuardPaths, PageDepth};

use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the REST API
    pub api_base: String,
    /// Path to the profile database file
    pub database_path: PathBuf,
    /// Depth of the page this client runs on
    pub page_depth: PageDepth,
    /// Overrides the depth-derived login path
    pub login_path: Option<String>,
    /// Overrides the depth-derived paywall path
    pub paywall_path: Option<String>,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            api_base: "http://localhost:8080/api".to_string(),
            database_path: data_dir.join("profile.db"),
            page_depth: PageDepth::default(),
            login_path: None,
            paywall_path: None,
        }
    }

    pub fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .map(|d| d.join("ReDiscoverU"))
            .unwrap_or_else(|| PathBuf::from(".rediscoveru"))
    }

    /// Load from a JSON file. Missing fields take their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn with_page_depth(mut self, depth: PageDepth) -> Self {
        self.page_depth = depth;
        self
    }

    /// Login and paywall paths for the configured depth, with overrides
    /// applied.
    pub fn guard_paths(&self) -> GuardPaths {
        let mut paths = GuardPaths::for_depth(self.page_depth);
        if let Some(login) = &self.login_path {
            paths.login = login.clone();
        }
        if let Some(paywall) = &self.paywall_path {
            paths.paywall = paywall.clone();
        }
        paths
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::data_dir())
    }
}

mod dirs {
    use std::path::PathBuf;

    pub fn data_local_dir() -> Option<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            std::env::var("LOCALAPPDATA").ok().map(PathBuf::from)
        }
        #[cfg(target_os = "macos")]
        {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join("Library/Application Support"))
        }
        #[cfg(target_os = "linux")]
        {
            std::env::var("XDG_DATA_HOME")
                .ok()
                .map(PathBuf::from)
                .or_else(|| {
                    std::env::var("HOME")
                        .ok()
                        .map(|h| PathBuf::from(h).join(".local/share"))
                })
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
        {
            None
        }
    }
}
