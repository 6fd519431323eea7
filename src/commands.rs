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
use serde::Serialize;
use std::path::Path;
use tracing::info;

use crate::catalog::{self, Catalog, CatalogStats};
use crate::cli::Commands;
use crate::config::Config;
use crate::formatting;
use crate::matcher::{match_title, AnalysisResult, DescriptionAnalyzer, MatchResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => anyhow::bail!("Unknown output format '{}': use text or json", other),
        }
    }
}

/// What a combined title/description search produced
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SearchOutcome {
    Title(MatchResult),
    Description(AnalysisResult),
    NotFound,
}

/// Reject blank queries before they reach the matcher
pub fn require_query<'a>(raw: &'a str, what: &str) -> Result<&'a str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        anyhow::bail!("{} cannot be empty", what);
    }
    Ok(trimmed)
}

/// Title first; the description is only analyzed when the title finds nothing
pub fn search_catalog(
    title: &str,
    description: Option<&str>,
    catalog: &Catalog,
    analyzer: &DescriptionAnalyzer,
) -> SearchOutcome {
    if let Some(found) = match_title(title, catalog) {
        return SearchOutcome::Title(found);
    }

    match description.filter(|d| !d.trim().is_empty()) {
        Some(description) => {
            let analysis = analyzer.analyze(description, catalog);
            if analysis.matches.is_empty() {
                SearchOutcome::NotFound
            } else {
                SearchOutcome::Description(analysis)
            }
        }
        None => SearchOutcome::NotFound,
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub async fn execute(config: &Config, command: Commands) -> Result<()> {
    match command {
        Commands::Find { title, format } => find(config, &title, format.parse()?).await,
        Commands::Analyze {
            description,
            file,
            format,
        } => analyze(config, description, file.as_deref(), format.parse()?).await,
        Commands::Search {
            title,
            description,
            format,
        } => search(config, &title, description.as_deref(), format.parse()?).await,
        Commands::Stats { format } => stats(config, format.parse()?).await,
        Commands::Daily { format } => daily(config, format.parse()?).await,
        Commands::Sync => sync(config).await,
    }
}

async fn find(config: &Config, title: &str, format: OutputFormat) -> Result<()> {
    let title = require_query(title, "Problem title")?;
    let catalog = catalog::load_catalog(&config.catalog).await?;
    let found = match_title(title, &catalog);

    match format {
        OutputFormat::Json => print_json(&found)?,
        OutputFormat::Text => match &found {
            Some(result) => print!("{}", formatting::format_match(result)),
            None => println!("{}", formatting::format_not_found(title)),
        },
    }

    Ok(())
}

async fn analyze(
    config: &Config,
    description: Option<String>,
    file: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    let raw = match (description, file) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read description from {}", path.display()))?,
        (None, None) => anyhow::bail!("Provide a description or --file"),
    };
    let raw = require_query(&raw, "Problem description")?;

    let catalog = catalog::load_catalog(&config.catalog).await?;
    let analyzer = DescriptionAnalyzer::new(config.analysis.clone());
    let result = analyzer.analyze(raw, &catalog);

    match format {
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Text => print!("{}", formatting::format_analysis(&result)),
    }

    Ok(())
}

async fn search(
    config: &Config,
    title: &str,
    description: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let title = require_query(title, "Problem title")?;
    let catalog = catalog::load_catalog(&config.catalog).await?;
    let analyzer = DescriptionAnalyzer::new(config.analysis.clone());

    let outcome = search_catalog(title, description, &catalog, &analyzer);

    match format {
        OutputFormat::Json => print_json(&outcome)?,
        OutputFormat::Text => match &outcome {
            SearchOutcome::Title(result) => print!("{}", formatting::format_match(result)),
            SearchOutcome::Description(result) => print!("{}", formatting::format_analysis(result)),
            SearchOutcome::NotFound => println!("{}", formatting::format_not_found(title)),
        },
    }

    Ok(())
}

async fn stats(config: &Config, format: OutputFormat) -> Result<()> {
    let catalog = catalog::load_catalog(&config.catalog).await?;
    let stats = CatalogStats::from_entries(&catalog.entries);

    match format {
        OutputFormat::Json => print_json(&stats)?,
        OutputFormat::Text => print!("{}", formatting::format_stats(&stats, &catalog)),
    }

    Ok(())
}

async fn daily(config: &Config, format: OutputFormat) -> Result<()> {
    let daily = catalog::fetch_daily(&config.catalog).await?;

    match format {
        OutputFormat::Json => print_json(&daily)?,
        OutputFormat::Text => print!("{}", formatting::format_daily(&daily)),
    }

    Ok(())
}

async fn sync(config: &Config) -> Result<()> {
    let snapshot = catalog::sync_catalog(&config.catalog).await?;
    let path = config.catalog.resolve_snapshot_path()?;

    info!(problems = snapshot.problems.len(), "Sync complete");
    println!("{}", formatting::format_sync(&snapshot, &path));

    Ok(())
}
