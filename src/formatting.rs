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
use colored::{ColoredString, Colorize};

use crate::catalog::{Catalog, CatalogEntry, CatalogSnapshot, CatalogStats, DailyProblem, Difficulty};
use crate::matcher::text::truncate_chars;
use crate::matcher::{AnalysisResult, MatchResult};

/// Topics shown per problem card
const CARD_TOPICS: usize = 4;
/// Description preview on a problem card
const CARD_PREVIEW_CHARS: usize = 150;
const TOPIC_COLUMN_WIDTH: usize = 32;

fn difficulty_label(difficulty: Difficulty) -> ColoredString {
    let label = difficulty.to_string();
    match difficulty {
        Difficulty::Easy => label.green(),
        Difficulty::Medium => label.yellow(),
        Difficulty::Hard => label.red(),
    }
}

fn access_label(entry: &CatalogEntry) -> ColoredString {
    if entry.is_premium {
        "Premium".magenta()
    } else {
        "Free".bright_black()
    }
}

fn push_card(output: &mut String, entry: &CatalogEntry) {
    output.push_str(
        &format!("#{}. {}", entry.id, entry.title)
            .blue()
            .bold()
            .to_string(),
    );
    output.push('\n');

    output.push_str(&format!(
        "{} · {}",
        difficulty_label(entry.difficulty),
        access_label(entry)
    ));
    output.push('\n');

    if !entry.topics.is_empty() {
        let topics: Vec<&str> = entry
            .topics
            .iter()
            .take(CARD_TOPICS)
            .map(|t| t.as_str())
            .collect();
        output.push_str(&topics.join(", ").cyan().to_string());
        output.push('\n');
    }

    if !entry.url.is_empty() {
        output.push_str(&entry.url.bright_black().to_string());
        output.push('\n');
    }
}

pub fn format_match(result: &MatchResult) -> String {
    let mut output = String::new();

    push_card(&mut output, &result.entry);

    if let Some(description) = result.entry.description_text() {
        let short = if description.chars().count() > CARD_PREVIEW_CHARS {
            format!("{}...", truncate_chars(description, CARD_PREVIEW_CHARS))
        } else {
            description.to_string()
        };
        output.push_str(&short);
        output.push('\n');
    }

    output.push_str(
        &format!("{} match ({} catalog)", result.match_type, result.source)
            .green()
            .to_string(),
    );
    output.push('\n');

    output
}

pub fn format_not_found(query: &str) -> String {
    format!(
        "No LeetCode problem found for \"{}\".\nTry the exact problem title, or search by description.",
        query
    )
}

pub fn format_analysis(result: &AnalysisResult) -> String {
    if result.is_empty() {
        return "No similar problems found. Try a more detailed description.".to_string();
    }

    let mut output = String::new();

    if !result.matches.is_empty() {
        output.push_str(
            &format!("Similar Problems ({})", result.matches.len())
                .bold()
                .to_string(),
        );
        output.push('\n');

        for scored in &result.matches {
            output.push_str(&"━".repeat(60));
            output.push('\n');
            push_card(&mut output, &scored.entry);

            if !scored.preview.is_empty() {
                output.push_str(&scored.preview);
                output.push('\n');
            }

            let mut line = format!("score {:.1}", scored.score);
            if !scored.matched_phrases.is_empty() {
                let shown: Vec<&str> = scored
                    .matched_phrases
                    .iter()
                    .take(6)
                    .map(|p| p.as_str())
                    .collect();
                line.push_str(&format!(" · shared: {}", shown.join(", ")));
            }
            output.push_str(&line.green().to_string());
            output.push_str("\n\n");
        }
    }

    if !result.suggested_topics.is_empty() {
        output.push_str(&"Suggested Topics".bold().to_string());
        output.push('\n');
        for suggestion in &result.suggested_topics {
            output.push_str(&format!(
                "  {} {}\n",
                topic_cell(&suggestion.topic),
                suggestion.relevance
            ));
        }
    }

    output
}

/// Pad before coloring so escape codes do not count toward the column width
fn topic_cell(topic: &str) -> ColoredString {
    format!("{:<width$}", topic, width = TOPIC_COLUMN_WIDTH).cyan()
}

pub fn format_stats(stats: &CatalogStats, catalog: &Catalog) -> String {
    let mut output = String::new();

    output.push_str(&"Catalog Statistics".bold().to_string());
    output.push('\n');
    output.push_str(&format!("Source: {}", catalog.origin));
    output.push('\n');
    output.push_str(&format!("Total Problems: {}", stats.total));
    output.push('\n');
    output.push_str(&format!("Free: {}", stats.free));
    output.push('\n');
    output.push_str(&format!("Premium: {}", stats.premium));
    output.push('\n');
    output.push_str(&format!(
        "{}: {}  {}: {}  {}: {}",
        difficulty_label(Difficulty::Easy),
        stats.easy,
        difficulty_label(Difficulty::Medium),
        stats.medium,
        difficulty_label(Difficulty::Hard),
        stats.hard
    ));
    output.push('\n');

    if let Some(fetched_at) = catalog.fetched_at {
        output.push_str(&format!("Snapshot Updated: {}", format_relative_time(fetched_at)));
        output.push('\n');
    }

    output
}

pub fn format_daily(daily: &DailyProblem) -> String {
    let mut output = String::new();

    let heading = match &daily.date {
        Some(date) => format!("Daily Problem · {}", date),
        None => "Daily Problem".to_string(),
    };
    output.push_str(&heading.bold().to_string());
    output.push('\n');

    let mut entry = daily.question.clone();
    entry.url = daily.problem_url();
    push_card(&mut output, &entry);

    output
}

pub fn format_sync(snapshot: &CatalogSnapshot, path: &std::path::Path) -> String {
    format!(
        "Saved {} problems from {} to {}",
        snapshot.problems.len(),
        snapshot.source_url,
        path.display()
    )
}

fn format_relative_time(dt: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(dt);

    if duration.num_days() > 0 {
        format!("{} days ago", duration.num_days())
    } else if duration.num_hours() > 0 {
        format!("{} hours ago", duration.num_hours())
    } else if duration.num_minutes() > 0 {
        format!("{} minutes ago", duration.num_minutes())
    } else {
        "just now".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogOrigin;
    use crate::matcher::{MatchType, ScoredMatch, TopicSuggestion};
    use chrono::Duration;

    fn entry() -> CatalogEntry {
        CatalogEntry {
            id: 1,
            title: "Two Sum".to_string(),
            url: "https://leetcode.com/problems/two-sum/".to_string(),
            difficulty: Difficulty::Easy,
            is_premium: false,
            topics: vec!["Array".to_string(), "Hash Table".to_string()],
            description: Some("x".repeat(300)),
        }
    }

    #[test]
    fn test_format_match() {
        colored::control::set_override(false);
        let result = MatchResult {
            entry: entry(),
            match_type: MatchType::Exact,
            source: CatalogOrigin::Remote,
        };

        let output = format_match(&result);

        assert!(output.contains("#1. Two Sum"));
        assert!(output.contains("Easy · Free"));
        assert!(output.contains("Array, Hash Table"));
        assert!(output.contains(&format!("{}...", "x".repeat(150))));
        assert!(output.contains("exact match (remote catalog)"));
    }

    #[test]
    fn test_format_empty_analysis() {
        let output = format_analysis(&AnalysisResult::default());
        assert!(output.starts_with("No similar problems found"));
    }

    #[test]
    fn test_format_analysis() {
        colored::control::set_override(false);
        let result = AnalysisResult {
            matches: vec![ScoredMatch {
                entry: entry(),
                score: 12.43,
                matched_phrases: ["array".to_string(), "target".to_string()].into(),
                preview: "Given an array".to_string(),
            }],
            suggested_topics: vec![TopicSuggestion {
                topic: "Array".to_string(),
                relevance: 13,
            }],
            analyzed_phrases: Default::default(),
        };

        let output = format_analysis(&result);

        assert!(output.contains("Similar Problems (1)"));
        assert!(output.contains("score 12.4 · shared: array, target"));
        assert!(output.contains("Suggested Topics"));
        assert!(output.contains("13"));
    }

    #[test]
    fn test_topic_cell_pads_plain_text() {
        // Deref yields the uncolored text, independent of the color override
        let cell = topic_cell("Array");
        assert_eq!(&*cell, format!("{:<32}", "Array"));

        let long = topic_cell("Binary Indexed Tree");
        assert_eq!(long.chars().count(), TOPIC_COLUMN_WIDTH);
    }

    #[test]
    fn test_format_stats() {
        colored::control::set_override(false);
        let mut catalog = Catalog::new(CatalogOrigin::Local, vec![entry()]);
        catalog.fetched_at = Some(Utc::now() - Duration::days(3));
        let stats = CatalogStats::from_entries(&catalog.entries);

        let output = format_stats(&stats, &catalog);

        assert!(output.contains("Source: local"));
        assert!(output.contains("Total Problems: 1"));
        assert!(output.contains("Free: 1"));
        assert!(output.contains("Premium: 0"));
        assert!(output.contains("3 days ago"));
    }

    #[test]
    fn test_relative_time() {
        assert_eq!(format_relative_time(Utc::now()), "just now");
        assert_eq!(
            format_relative_time(Utc::now() - Duration::hours(5)),
            "5 hours ago"
        );
    }
}
