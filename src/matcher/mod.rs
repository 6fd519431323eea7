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

//! Title and description matching against a problem catalog.
//!
//! Everything here is a pure function of the query and the catalog it is
//! handed: no I/O, no shared state, and the catalog is never mutated, so the
//! same catalog can serve concurrent queries.

pub mod analyzer;
pub mod phrases;
pub mod text;
pub mod title;
pub mod types;
pub mod vocabulary;

#[cfg(test)]
mod analyzer_tests;

pub use analyzer::{analyze_description, DescriptionAnalyzer};
pub use title::{match_title, normalize_title};
pub use types::{AnalysisResult, MatchResult, MatchType, ScoredMatch, TopicSuggestion};
