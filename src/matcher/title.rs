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

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::catalog::{Catalog, CatalogEntry};
use crate::matcher::types::{MatchResult, MatchType};

/// Shortest query allowed to match as a title prefix
pub const MIN_PREFIX_LEN: usize = 4;
/// Shortest query allowed to match as a title substring
pub const MIN_CONTAINS_LEN: usize = 10;

static NUMBER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s*").expect("number prefix pattern must compile"));
static PROBLEM_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^problem:\s*").expect("label pattern must compile"));

/// Strip "12. " numbering and a "Problem:" label, trim and case-fold
pub fn normalize_title(raw: &str) -> String {
    let without_number = NUMBER_PREFIX.replace(raw, "");
    let without_label = PROBLEM_LABEL.replace(&without_number, "");
    without_label.trim().to_lowercase()
}

/// Map a raw title to at most one catalog entry.
///
/// Tiers are tried in order (exact, prefix, contains) and the first one that
/// matches wins. Inside a tier the first entry in catalog order wins. Prefix
/// matching needs a query of at least [`MIN_PREFIX_LEN`] characters and
/// substring matching at least [`MIN_CONTAINS_LEN`]; there is no fuzzy tier.
pub fn match_title(raw: &str, catalog: &Catalog) -> Option<MatchResult> {
    let query = normalize_title(raw);
    if query.is_empty() || catalog.is_empty() {
        return None;
    }

    let query_len = query.chars().count();
    let titles: Vec<(String, &CatalogEntry)> = catalog
        .entries
        .iter()
        .map(|entry| (entry.title.to_lowercase(), entry))
        .collect();

    let found = find_in_tier(&titles, |title| title == query)
        .map(|entry| (entry, MatchType::Exact))
        .or_else(|| {
            (query_len >= MIN_PREFIX_LEN)
                .then(|| find_in_tier(&titles, |title| title.starts_with(&query)))
                .flatten()
                .map(|entry| (entry, MatchType::Prefix))
        })
        .or_else(|| {
            (query_len >= MIN_CONTAINS_LEN)
                .then(|| find_in_tier(&titles, |title| title.contains(&query)))
                .flatten()
                .map(|entry| (entry, MatchType::Contains))
        });

    match found {
        Some((entry, match_type)) => {
            debug!(
                query = %query,
                id = entry.id,
                title = %entry.title,
                match_type = %match_type,
                "Title matched"
            );
            Some(MatchResult {
                entry: entry.clone(),
                match_type,
                source: catalog.origin,
            })
        }
        None => {
            debug!(query = %query, "No title match");
            None
        }
    }
}

fn find_in_tier<'a>(
    titles: &[(String, &'a CatalogEntry)],
    accept: impl Fn(&str) -> bool,
) -> Option<&'a CatalogEntry> {
    titles
        .iter()
        .find(|(title, _)| accept(title.as_str()))
        .map(|(_, entry)| *entry)
}
