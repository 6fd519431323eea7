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

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const PROBLEM_URL_BASE: &str = "https://leetcode.com/problems";

/// Problem difficulty as published by LeetCode
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

impl TryFrom<String> for Difficulty {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {}", other)),
        }
    }
}

/// Where a catalog was loaded from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CatalogOrigin {
    Local,
    Remote,
}

impl std::fmt::Display for CatalogOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogOrigin::Local => write!(f, "local"),
            CatalogOrigin::Remote => write!(f, "remote"),
        }
    }
}

/// A single problem of the catalog. Immutable once loaded.
///
/// Deserializes from both the snapshot layout (`id`, `isPremium`, `topics`)
/// and the remote API layout (`frontend_id`, `paid_only`, `topicTags`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawEntry")]
pub struct CatalogEntry {
    pub id: u32,
    pub title: String,
    pub url: String,
    pub difficulty: Difficulty,
    pub is_premium: bool,
    pub topics: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CatalogEntry {
    /// Description if present and not blank
    pub fn description_text(&self) -> Option<&str> {
        self.description
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }
}

/// Problem ids arrive as numbers from snapshots and as strings from the API
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ProblemId {
    Number(u32),
    Text(String),
}

impl TryFrom<ProblemId> for u32 {
    type Error = String;

    fn try_from(id: ProblemId) -> Result<Self, Self::Error> {
        match id {
            ProblemId::Number(n) => Ok(n),
            ProblemId::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| format!("invalid problem id: {}", s)),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TopicRepr {
    Name(String),
    Tag { name: String },
}

impl From<TopicRepr> for String {
    fn from(topic: TopicRepr) -> Self {
        match topic {
            TopicRepr::Name(name) | TopicRepr::Tag { name } => name,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    id: Option<ProblemId>,
    #[serde(alias = "questionFrontendId", alias = "frontendId")]
    frontend_id: Option<ProblemId>,
    title: String,
    url: Option<String>,
    #[serde(alias = "titleSlug")]
    title_slug: Option<String>,
    difficulty: Difficulty,
    #[serde(alias = "isPremium")]
    is_premium: Option<bool>,
    #[serde(alias = "paidOnly")]
    paid_only: Option<bool>,
    topics: Option<Vec<TopicRepr>>,
    #[serde(alias = "topicTags")]
    topic_tags: Option<Vec<TopicRepr>>,
    #[serde(alias = "content")]
    description: Option<String>,
}

impl TryFrom<RawEntry> for CatalogEntry {
    type Error = String;

    fn try_from(raw: RawEntry) -> Result<Self, Self::Error> {
        // The frontend id is the number users see; the API's `id` is internal
        let id: u32 = raw
            .frontend_id
            .or(raw.id)
            .ok_or_else(|| format!("problem '{}' has no id", raw.title))?
            .try_into()?;

        let url = match (raw.url, raw.title_slug) {
            (Some(url), _) if !url.is_empty() => url,
            (_, Some(slug)) => format!("{}/{}/", PROBLEM_URL_BASE, slug),
            _ => String::new(),
        };

        let topics = raw
            .topics
            .or(raw.topic_tags)
            .unwrap_or_default()
            .into_iter()
            .map(String::from)
            .collect();

        Ok(Self {
            id,
            title: raw.title,
            url,
            difficulty: raw.difficulty,
            is_premium: raw.is_premium.or(raw.paid_only).unwrap_or(false),
            topics,
            description: raw.description,
        })
    }
}

/// A loaded, read-only catalog. Entry order is the tie-break order for matching.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub origin: CatalogOrigin,
    pub entries: Vec<CatalogEntry>,
    /// When the snapshot was fetched, if known
    pub fetched_at: Option<DateTime<Utc>>,
}

impl Catalog {
    pub fn new(origin: CatalogOrigin, entries: Vec<CatalogEntry>) -> Self {
        Self {
            origin,
            entries,
            fetched_at: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// On-disk snapshot written by `sync`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub fetched_at: DateTime<Utc>,
    pub source_url: String,
    pub problems: Vec<CatalogEntry>,
}

/// Free/premium and difficulty breakdown of a catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub total: usize,
    pub free: usize,
    pub premium: usize,
    pub easy: usize,
    pub medium: usize,
    pub hard: usize,
}

impl CatalogStats {
    pub fn from_entries(entries: &[CatalogEntry]) -> Self {
        let mut stats = Self {
            total: entries.len(),
            ..Default::default()
        };

        for entry in entries {
            if entry.is_premium {
                stats.premium += 1;
            } else {
                stats.free += 1;
            }

            match entry.difficulty {
                Difficulty::Easy => stats.easy += 1,
                Difficulty::Medium => stats.medium += 1,
                Difficulty::Hard => stats.hard += 1,
            }
        }

        stats
    }
}

/// Today's daily challenge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyProblem {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub link: String,
    pub question: CatalogEntry,
}

impl DailyProblem {
    /// Absolute URL of the daily problem
    pub fn problem_url(&self) -> String {
        if !self.link.is_empty() {
            format!("https://leetcode.com{}", self.link)
        } else {
            self.question.url.clone()
        }
    }
}
