// Copyright 2025 Muvon Un Limited
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DEFAULT_TEMPLATE: &str = include_str!("../config-templates/default.toml");

/// Where the problem catalog comes from
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Local snapshot file; empty means the default path in the storage dir
    pub snapshot_path: String,
    pub remote_url: String,
    pub daily_url: String,
    pub request_timeout_secs: u64,
    pub remote_fallback: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            snapshot_path: String::new(),
            remote_url: "https://leetcode-api-pied.vercel.app/problems".to_string(),
            daily_url: "https://leetcode-api-pied.vercel.app/daily".to_string(),
            request_timeout_secs: 30,
            remote_fallback: true,
        }
    }
}

impl CatalogConfig {
    /// Resolve the snapshot path, falling back to the storage directory
    pub fn resolve_snapshot_path(&self) -> Result<PathBuf> {
        let trimmed = self.snapshot_path.trim();
        if trimmed.is_empty() {
            crate::storage::get_default_snapshot_path()
        } else {
            Ok(crate::storage::expand_home(trimmed))
        }
    }

    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.request_timeout_secs)
    }
}

/// Description analysis output limits
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub max_matches: usize,
    pub max_topics: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_matches: 5,
            max_topics: 8,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Also write rotated JSON logs to the storage directory
    #[serde(default)]
    pub file: bool,
    #[serde(default)]
    pub debug: bool,
}

/// Main configuration for leetfinder
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from config.toml file
    /// First tries to load from system config directory, falls back to embedded template
    pub fn load() -> Result<Self> {
        let config_path = crate::storage::get_system_config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            Self::parse(&content)
                .with_context(|| format!("Invalid config file {}", config_path.display()))
        } else {
            // Config doesn't exist, create from template
            let config = Self::parse(DEFAULT_TEMPLATE)?;

            if let Some(parent) = config_path.parent() {
                if !parent.exists() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(&config_path, DEFAULT_TEMPLATE)?;

            Ok(config)
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }
}
