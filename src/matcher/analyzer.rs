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

use std::collections::{BTreeSet, HashMap};
use tracing::debug;

use crate::catalog::{Catalog, CatalogEntry};
use crate::config::AnalysisConfig;
use crate::matcher::phrases::{extract_key_phrases, extract_semantic_keywords};
use crate::matcher::text::{clean_markup, normalize_description, preview};
use crate::matcher::types::{AnalysisResult, ScoredMatch, TopicSuggestion};
use crate::matcher::vocabulary::{COMMON_WORDS, STRUCTURAL_PATTERNS};

/// Points for a shared key phrase longer than [`LONG_PHRASE_CHARS`]
pub const LONG_PHRASE_POINTS: f64 = 5.0;
/// Points for any other shared key phrase
pub const SHORT_PHRASE_POINTS: f64 = 2.0;
pub const LONG_PHRASE_CHARS: usize = 5;
pub const KEYWORD_POINTS: f64 = 3.0;
/// Points per structural pattern matching both descriptions
pub const STRUCTURE_POINTS: f64 = 2.0;
/// Weight of the shared common-word fraction
pub const COMMON_WORD_WEIGHT: f64 = 3.0;
/// Candidates scoring below this are dropped
pub const MIN_SCORE: f64 = 2.0;
pub const PREVIEW_CHARS: usize = 200;

/// Features of the query description, extracted once per analysis
#[derive(Debug, Clone)]
pub struct QueryFeatures {
    pub text: String,
    pub key_phrases: BTreeSet<String>,
    pub keywords: BTreeSet<String>,
    structures: Vec<bool>,
}

impl QueryFeatures {
    pub fn extract(raw: &str) -> Self {
        let text = normalize_description(raw);
        let key_phrases = extract_key_phrases(&text);
        let keywords = extract_semantic_keywords(&text);
        let structures = STRUCTURAL_PATTERNS
            .iter()
            .map(|pattern| pattern.is_match(&text))
            .collect();

        Self {
            text,
            key_phrases,
            keywords,
            structures,
        }
    }

    /// Similarity of a normalized candidate description to this query.
    /// Returns the score and the phrases/keywords both texts share.
    pub fn score(&self, candidate: &str) -> (f64, BTreeSet<String>) {
        let mut score = 0.0;
        let mut matched = BTreeSet::new();

        for phrase in &self.key_phrases {
            if candidate.contains(phrase.as_str()) {
                score += if phrase.chars().count() > LONG_PHRASE_CHARS {
                    LONG_PHRASE_POINTS
                } else {
                    SHORT_PHRASE_POINTS
                };
                matched.insert(phrase.clone());
            }
        }

        for keyword in &self.keywords {
            if candidate.contains(keyword.as_str()) {
                score += KEYWORD_POINTS;
                matched.insert(keyword.clone());
            }
        }

        score += self.structural_similarity(candidate);
        score += self.common_word_similarity(candidate);

        (score, matched)
    }

    fn structural_similarity(&self, candidate: &str) -> f64 {
        let shared = STRUCTURAL_PATTERNS
            .iter()
            .zip(&self.structures)
            .filter(|(pattern, in_query)| **in_query && pattern.is_match(candidate))
            .count();
        shared as f64 * STRUCTURE_POINTS
    }

    fn common_word_similarity(&self, candidate: &str) -> f64 {
        let shared = COMMON_WORDS
            .iter()
            .filter(|word| self.text.contains(**word) && candidate.contains(**word))
            .count();
        (shared as f64 / COMMON_WORDS.len() as f64) * COMMON_WORD_WEIGHT
    }
}

/// Ranks catalog entries by description similarity and suggests topics
pub struct DescriptionAnalyzer {
    config: AnalysisConfig,
}

impl Default for DescriptionAnalyzer {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}

impl DescriptionAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Analyze a free-text description against every entry that has one.
    ///
    /// Always returns a usable result: empty input or an empty catalog give
    /// empty matches and topics. Ties keep catalog order.
    pub fn analyze(&self, raw: &str, catalog: &Catalog) -> AnalysisResult {
        let features = QueryFeatures::extract(raw);
        if features.text.is_empty() {
            return AnalysisResult::default();
        }

        let mut retained: Vec<(&CatalogEntry, f64, BTreeSet<String>)> = Vec::new();
        for entry in &catalog.entries {
            let Some(description) = entry.description_text() else {
                continue;
            };
            let (score, matched) = features.score(&normalize_description(description));
            if score >= MIN_SCORE {
                retained.push((entry, score, matched));
            }
        }

        let suggested_topics = aggregate_topics(
            retained.iter().map(|(entry, score, _)| (*entry, *score)),
            self.config.max_topics,
        );

        // Stable sort keeps catalog order among equal scores
        retained.sort_by(|a, b| b.1.total_cmp(&a.1));

        debug!(
            phrases = features.key_phrases.len(),
            keywords = features.keywords.len(),
            retained = retained.len(),
            topics = suggested_topics.len(),
            "Description analyzed"
        );

        let matches = retained
            .into_iter()
            .take(self.config.max_matches)
            .map(|(entry, score, matched_phrases)| ScoredMatch {
                entry: entry.clone(),
                score,
                matched_phrases,
                preview: entry
                    .description_text()
                    .map(|text| preview(&clean_markup(text), PREVIEW_CHARS))
                    .unwrap_or_default(),
            })
            .collect();

        AnalysisResult {
            matches,
            suggested_topics,
            analyzed_phrases: features.key_phrases,
        }
    }
}

/// Sum `ceil(score)` per topic over the retained candidates and keep the top `limit`
pub fn aggregate_topics<'a>(
    candidates: impl IntoIterator<Item = (&'a CatalogEntry, f64)>,
    limit: usize,
) -> Vec<TopicSuggestion> {
    let mut topics: Vec<TopicSuggestion> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for (entry, score) in candidates {
        let points = score.ceil() as u32;
        for topic in &entry.topics {
            match positions.get(topic.as_str()) {
                Some(&idx) => topics[idx].relevance += points,
                None => {
                    positions.insert(topic.as_str(), topics.len());
                    topics.push(TopicSuggestion {
                        topic: topic.clone(),
                        relevance: points,
                    });
                }
            }
        }
    }

    // Stable sort keeps first-seen order among equal relevance
    topics.sort_by(|a, b| b.relevance.cmp(&a.relevance));
    topics.truncate(limit);
    topics
}

/// Analyze with the default limits (5 matches, 8 topics)
pub fn analyze_description(raw: &str, catalog: &Catalog) -> AnalysisResult {
    DescriptionAnalyzer::default().analyze(raw, catalog)
}
