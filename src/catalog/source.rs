// Copyright 2026 Muvon Un Limited
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
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

use crate::catalog::types::{Catalog, CatalogEntry, CatalogOrigin, CatalogSnapshot};

/// Something that can supply a fully materialized catalog
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Human readable location, used in logs and errors
    fn describe(&self) -> String;

    async fn load(&self) -> Result<Catalog>;
}

/// Catalog stored as a JSON file on disk
pub struct LocalSnapshot {
    path: PathBuf,
}

impl LocalSnapshot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for LocalSnapshot {
    fn describe(&self) -> String {
        format!("local snapshot {}", self.path.display())
    }

    async fn load(&self) -> Result<Catalog> {
        if !self.path.exists() {
            anyhow::bail!("snapshot {} does not exist", self.path.display());
        }

        let content = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        let catalog = parse_snapshot(&content)
            .with_context(|| format!("Invalid snapshot {}", self.path.display()))?;

        debug!(
            path = %self.path.display(),
            problems = catalog.len(),
            "Loaded local snapshot"
        );

        Ok(catalog)
    }
}

/// Parse snapshot JSON, either the wrapper object or a bare array
pub fn parse_snapshot(content: &str) -> Result<Catalog> {
    let value: Value = serde_json::from_str(content).context("Snapshot is not valid JSON")?;

    let catalog = match value {
        Value::Array(rows) => Catalog::new(CatalogOrigin::Local, parse_entries(rows)),
        Value::Object(mut fields) => {
            let rows = match fields.remove("problems") {
                Some(Value::Array(rows)) => rows,
                Some(_) => anyhow::bail!("Snapshot field 'problems' must be an array"),
                None => anyhow::bail!("Snapshot object has no 'problems' field"),
            };
            let fetched_at = fields
                .remove("fetched_at")
                .filter(|v| !v.is_null())
                .map(serde_json::from_value::<DateTime<Utc>>)
                .transpose()
                .context("Invalid snapshot timestamp")?;

            Catalog {
                origin: CatalogOrigin::Local,
                entries: parse_entries(rows),
                fetched_at,
            }
        }
        _ => anyhow::bail!("Snapshot must be a problem array or a snapshot object"),
    };

    Ok(catalog)
}

/// Deserialize rows one by one; a malformed row is logged and skipped
pub(crate) fn parse_entries(rows: Vec<Value>) -> Vec<CatalogEntry> {
    let total = rows.len();
    let entries: Vec<CatalogEntry> = rows
        .into_iter()
        .enumerate()
        .filter_map(|(index, row)| {
            let title = row
                .get("title")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            match serde_json::from_value::<CatalogEntry>(row) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(index, title = %title, error = %e, "Skipping malformed catalog entry");
                    None
                }
            }
        })
        .collect();

    if entries.len() < total {
        warn!(
            skipped = total - entries.len(),
            kept = entries.len(),
            "Catalog contained malformed entries"
        );
    }

    entries
}

/// Write a snapshot next to its destination first, then rename over it,
/// so readers never observe a half-written file
pub fn write_snapshot(path: &Path, snapshot: &CatalogSnapshot) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(snapshot)?;
    let tmp_path = path.with_extension("json.tmp");

    std::fs::write(&tmp_path, json)
        .with_context(|| format!("Failed to write {}", tmp_path.display()))?;
    std::fs::rename(&tmp_path, path)
        .with_context(|| format!("Failed to replace {}", path.display()))?;

    Ok(())
}

/// Problem list served over HTTP
pub struct RemoteApi {
    url: String,
    timeout: Duration,
}

impl RemoteApi {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the raw problem list
    pub async fn fetch_entries(&self) -> Result<Vec<CatalogEntry>> {
        let body = fetch_text(&self.url, self.timeout).await?;
        let rows: Vec<Value> =
            serde_json::from_str(&body).context("Failed to parse problem list")?;
        Ok(parse_entries(rows))
    }
}

#[async_trait]
impl CatalogSource for RemoteApi {
    fn describe(&self) -> String {
        format!("remote API {}", self.url)
    }

    async fn load(&self) -> Result<Catalog> {
        let entries = self.fetch_entries().await?;
        debug!(url = %self.url, problems = entries.len(), "Fetched remote catalog");
        Ok(Catalog::new(CatalogOrigin::Remote, entries))
    }
}

/// GET a URL and return its body
pub(crate) async fn fetch_text(url: &str, timeout: Duration) -> Result<String> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        anyhow::bail!("URL cannot be empty");
    }

    if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        anyhow::bail!(
            "Invalid URL: must start with http:// or https://, got: {}",
            trimmed
        );
    }

    let client = reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("leetfinder/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let response = client
        .get(trimmed)
        .send()
        .await
        .context("Failed to fetch URL")?;

    if !response.status().is_success() {
        anyhow::bail!("HTTP error: {}", response.status());
    }

    let body = response
        .text()
        .await
        .context("Failed to read response body")?;
    Ok(body)
}
