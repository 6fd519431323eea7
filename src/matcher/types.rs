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

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::catalog::{CatalogEntry, CatalogOrigin};

/// Which title tier produced a match
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// Case-folded title equals the query
    Exact,
    /// Title starts with the query (query of 4+ characters)
    Prefix,
    /// Title contains the query (query of 10+ characters)
    Contains,
}

impl std::fmt::Display for MatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchType::Exact => write!(f, "exact"),
            MatchType::Prefix => write!(f, "prefix"),
            MatchType::Contains => write!(f, "contains"),
        }
    }
}

/// Outcome of a title lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub entry: CatalogEntry,
    pub match_type: MatchType,
    pub source: CatalogOrigin,
}

/// A catalog entry ranked by description similarity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoredMatch {
    pub entry: CatalogEntry,
    pub score: f64,
    /// Key phrases and semantic keywords shared with the query
    pub matched_phrases: BTreeSet<String>,
    pub preview: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TopicSuggestion {
    pub topic: String,
    pub relevance: u32,
}

/// Outcome of a description analysis. Never an error: empty fields mean no match.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Sorted by score, highest first
    pub matches: Vec<ScoredMatch>,
    /// Sorted by relevance, highest first
    pub suggested_topics: Vec<TopicSuggestion>,
    pub analyzed_phrases: BTreeSet<String>,
}

impl AnalysisResult {
    /// Nothing worth showing was found
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty() && self.suggested_topics.is_empty()
    }
}
