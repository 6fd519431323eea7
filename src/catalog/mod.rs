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

//! Problem catalog acquisition.
//!
//! The matcher never performs I/O; everything that produces a [`Catalog`]
//! lives here. Loading follows a local-first policy: the snapshot on disk is
//! tried first and the remote API is only contacted when the snapshot is
//! missing, unreadable or empty (and remote fallback is enabled).

pub mod source;
pub mod types;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{info, warn};

use crate::config::CatalogConfig;
pub use source::{CatalogSource, LocalSnapshot, RemoteApi};
pub use types::{
    Catalog, CatalogEntry, CatalogOrigin, CatalogSnapshot, CatalogStats, DailyProblem, Difficulty,
};

/// Build the ordered list of sources for a configuration
pub fn sources_for(config: &CatalogConfig) -> Result<Vec<Box<dyn CatalogSource>>> {
    let mut sources: Vec<Box<dyn CatalogSource>> = vec![Box::new(LocalSnapshot::new(
        config.resolve_snapshot_path()?,
    ))];

    if config.remote_fallback {
        sources.push(Box::new(RemoteApi::new(
            config.remote_url.clone(),
            config.request_timeout(),
        )));
    }

    Ok(sources)
}

/// Load the catalog, local snapshot first and remote API second
pub async fn load_catalog(config: &CatalogConfig) -> Result<Catalog> {
    let sources = sources_for(config)?;
    load_first_available(&sources).await
}

/// Return the first non-empty catalog among `sources`, in order
pub async fn load_first_available(sources: &[Box<dyn CatalogSource>]) -> Result<Catalog> {
    let mut failures = Vec::new();

    for source in sources {
        match source.load().await {
            Ok(catalog) if !catalog.is_empty() => {
                info!(
                    source = %source.describe(),
                    origin = %catalog.origin,
                    problems = catalog.len(),
                    "Catalog loaded"
                );
                return Ok(catalog);
            }
            Ok(_) => {
                warn!(source = %source.describe(), "Catalog source is empty");
                failures.push(format!("{}: empty", source.describe()));
            }
            Err(e) => {
                warn!(source = %source.describe(), error = %e, "Catalog source unavailable");
                failures.push(format!("{}: {:#}", source.describe(), e));
            }
        }
    }

    if failures.is_empty() {
        anyhow::bail!("Catalog unavailable: no sources configured");
    }
    anyhow::bail!("Catalog unavailable: {}", failures.join("; "))
}

/// Fetch the remote catalog and replace the local snapshot with it
pub async fn sync_catalog(config: &CatalogConfig) -> Result<CatalogSnapshot> {
    let remote = RemoteApi::new(config.remote_url.clone(), config.request_timeout());
    let problems = remote
        .fetch_entries()
        .await
        .with_context(|| format!("Failed to fetch catalog from {}", remote.url()))?;

    if problems.is_empty() {
        anyhow::bail!("Remote catalog at {} is empty, keeping local snapshot", remote.url());
    }

    let snapshot = CatalogSnapshot {
        fetched_at: Utc::now(),
        source_url: remote.url().to_string(),
        problems,
    };

    let local = LocalSnapshot::new(config.resolve_snapshot_path()?);
    source::write_snapshot(local.path(), &snapshot)?;

    info!(
        path = %local.path().display(),
        problems = snapshot.problems.len(),
        "Catalog snapshot updated"
    );

    Ok(snapshot)
}

/// Fetch today's daily challenge
pub async fn fetch_daily(config: &CatalogConfig) -> Result<DailyProblem> {
    let body = source::fetch_text(&config.daily_url, config.request_timeout())
        .await
        .context("Failed to fetch daily problem")?;
    let daily: DailyProblem =
        serde_json::from_str(&body).context("Invalid daily problem data")?;
    Ok(daily)
}
