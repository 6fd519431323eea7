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

#[cfg(test)]
mod tests {
    use super::super::analyzer::{
        aggregate_topics, analyze_description, DescriptionAnalyzer, QueryFeatures, MIN_SCORE,
    };
    use crate::catalog::{Catalog, CatalogEntry, CatalogOrigin, Difficulty};
    use crate::config::AnalysisConfig;

    fn entry(id: u32, topics: &[&str], description: Option<&str>) -> CatalogEntry {
        CatalogEntry {
            id,
            title: format!("Problem {}", id),
            url: format!("https://leetcode.com/problems/problem-{}/", id),
            difficulty: Difficulty::Medium,
            is_premium: false,
            topics: topics.iter().map(|t| t.to_string()).collect(),
            description: description.map(|d| d.to_string()),
        }
    }

    fn catalog(entries: Vec<CatalogEntry>) -> Catalog {
        Catalog::new(CatalogOrigin::Local, entries)
    }

    const BINARY_SEARCH_QUERY: &str = "Given a sorted array of integers nums and a target, \
        use binary search to find the target index.";

    #[test]
    fn test_shared_phrases_rank_higher() {
        let catalog = catalog(vec![
            entry(1, &["Stack"], Some("Design a stack that supports push and pop.")),
            entry(
                2,
                &["Array", "Binary Search"],
                Some(
                    "Given an array of integers sorted in ascending order, use binary \
                     search to find the index of target.",
                ),
            ),
        ]);

        let result = analyze_description(BINARY_SEARCH_QUERY, &catalog);

        assert_eq!(result.matches[0].entry.id, 2);
        assert!(result.matches.iter().all(|m| m.entry.id != 1));
        assert!(result.matches[0].matched_phrases.contains("binary search"));
        assert!(result.matches[0].matched_phrases.contains("array"));
    }

    #[test]
    fn test_binary_search_and_array_beat_neither() {
        let features = QueryFeatures::extract(BINARY_SEARCH_QUERY);

        let (with_both, _) =
            features.score("apply binary search over the array to locate the value");
        let (with_neither, _) = features.score("count the vowels in a word");

        assert!(with_both > with_neither);
    }

    #[test]
    fn test_adding_key_phrase_increases_score() {
        let features = QueryFeatures::extract("Solve it with dynamic programming.");

        let base = "you are given a list of words";
        let (without, _) = features.score(base);
        let (with, matched) = features.score(&format!("{} apply dynamic programming", base));

        assert!(with > without);
        assert!(matched.contains("dynamic programming"));
    }

    #[test]
    fn test_keyword_and_common_word_points() {
        let features = QueryFeatures::extract("Array");

        let (score, matched) = features.score("array");

        // keyword "array" plus one of seven common words
        assert!((score - (3.0 + 3.0 / 7.0)).abs() < 1e-9, "score {}", score);
        assert!(matched.contains("array"));
    }

    #[test]
    fn test_structural_pattern_points() {
        let features = QueryFeatures::extract("Return -1");

        let (score, matched) = features.score("return -1");

        // "return.*-1" in both plus the common word "return"
        assert!((score - (2.0 + 3.0 / 7.0)).abs() < 1e-9, "score {}", score);
        assert!(matched.is_empty());
    }

    #[test]
    fn test_short_phrase_points_and_inclusive_floor() {
        let features = QueryFeatures::extract("trie");
        let (score, _) = features.score("trie");
        assert_eq!(score, 2.0);

        let catalog = catalog(vec![entry(7, &["Trie"], Some("Implement a <b>Trie</b>"))]);
        let result = analyze_description("trie", &catalog);

        assert_eq!(result.matches.len(), 1);
        assert!(result.matches[0].score >= MIN_SCORE);
    }

    #[test]
    fn test_long_phrase_points() {
        let features = QueryFeatures::extract("dynamic programming");
        let (score, _) = features.score("dynamic programming");
        assert_eq!(score, 5.0);
    }

    #[test]
    fn test_unrelated_candidates_dropped() {
        let catalog = catalog(vec![entry(1, &["Math"], Some("zzz qqq"))]);

        let result = analyze_description(BINARY_SEARCH_QUERY, &catalog);

        assert!(result.matches.is_empty());
        assert!(result.suggested_topics.is_empty());
        assert!(!result.analyzed_phrases.is_empty());
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let catalog = catalog(vec![
            entry(1, &["Array"], Some("Given an array nums, find the target index.")),
            entry(2, &["Array", "Two Pointers"], Some("Use two pointers on the sorted array.")),
            entry(3, &["Tree"], Some("Given the root of a binary tree, return true if valid.")),
        ]);

        let first = analyze_description(BINARY_SEARCH_QUERY, &catalog);
        let second = analyze_description(BINARY_SEARCH_QUERY, &catalog);

        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_catalog_still_extracts_phrases() {
        let empty = catalog(vec![]);
        let result = analyze_description(BINARY_SEARCH_QUERY, &empty);

        assert!(result.matches.is_empty());
        assert!(result.suggested_topics.is_empty());
        assert!(result.analyzed_phrases.contains("binary search"));

        let undescribed = catalog(vec![entry(1, &["Array"], None), entry(2, &["Array"], Some("  "))]);
        let result = analyze_description(BINARY_SEARCH_QUERY, &undescribed);

        assert!(result.matches.is_empty());
        assert!(result.suggested_topics.is_empty());
        assert!(!result.analyzed_phrases.is_empty());
    }

    #[test]
    fn test_empty_description_gives_empty_result() {
        let catalog = catalog(vec![entry(1, &["Array"], Some("Given an array"))]);

        for raw in ["", "   ", "<p></p>"] {
            let result = analyze_description(raw, &catalog);
            assert!(result.is_empty());
            assert!(result.analyzed_phrases.is_empty());
        }
    }

    #[test]
    fn test_matches_truncated_in_catalog_order() {
        let entries = (1..=7)
            .map(|id| entry(id, &["Array"], Some(BINARY_SEARCH_QUERY)))
            .collect();
        let catalog = catalog(entries);

        let result = analyze_description(BINARY_SEARCH_QUERY, &catalog);

        let ids: Vec<u32> = result.matches.iter().map(|m| m.entry.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_matches_sorted_by_score() {
        let catalog = catalog(vec![
            entry(1, &["Array"], Some("an array of values")),
            entry(2, &["Array", "Binary Search"], Some(BINARY_SEARCH_QUERY)),
        ]);

        let result = analyze_description(BINARY_SEARCH_QUERY, &catalog);

        assert_eq!(result.matches[0].entry.id, 2);
        for pair in result.matches.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_topic_relevance_sums_ceiled_scores() {
        let catalog = catalog(vec![
            entry(1, &["Array", "Binary Search"], Some(BINARY_SEARCH_QUERY)),
            entry(2, &["Array"], Some("Find the index of the target in the array.")),
        ]);

        let result = analyze_description(BINARY_SEARCH_QUERY, &catalog);
        assert_eq!(result.matches.len(), 2);

        let expected_array: u32 = result.matches.iter().map(|m| m.score.ceil() as u32).sum();
        let array = result
            .suggested_topics
            .iter()
            .find(|t| t.topic == "Array")
            .unwrap();

        assert_eq!(array.relevance, expected_array);
        assert_eq!(result.suggested_topics[0].topic, "Array");
    }

    #[test]
    fn test_aggregate_topics_ordering() {
        let first = entry(1, &["Array", "Hash Table"], None);
        let second = entry(2, &["Array"], None);

        let topics = aggregate_topics([(&first, 7.4), (&second, 3.0)], 8);

        assert_eq!(topics.len(), 2);
        assert_eq!(topics[0].topic, "Array");
        assert_eq!(topics[0].relevance, 11);
        assert_eq!(topics[1].topic, "Hash Table");
        assert_eq!(topics[1].relevance, 8);
    }

    #[test]
    fn test_aggregate_topics_ties_keep_first_seen() {
        let tree = entry(1, &["Tree"], None);
        let graph = entry(2, &["Graph"], None);

        let topics = aggregate_topics([(&tree, 2.1), (&graph, 2.5)], 8);

        assert_eq!(topics[0].topic, "Tree");
        assert_eq!(topics[1].topic, "Graph");
        assert_eq!(topics[0].relevance, 3);
        assert_eq!(topics[1].relevance, 3);
    }

    #[test]
    fn test_aggregate_topics_truncated() {
        let names: Vec<String> = (0..10).map(|i| format!("Topic {}", i)).collect();
        let refs: Vec<&str> = names.iter().map(|s| s.as_str()).collect();
        let wide = entry(1, &refs, None);

        let topics = aggregate_topics([(&wide, 4.0)], 8);

        assert_eq!(topics.len(), 8);
        assert_eq!(topics[0].topic, "Topic 0");
    }

    #[test]
    fn test_configured_limits() {
        let entries = (1..=4)
            .map(|id| entry(id, &["Array", "Binary Search", "Sorting"], Some(BINARY_SEARCH_QUERY)))
            .collect();
        let catalog = catalog(entries);

        let analyzer = DescriptionAnalyzer::new(AnalysisConfig {
            max_matches: 2,
            max_topics: 1,
        });
        let result = analyzer.analyze(BINARY_SEARCH_QUERY, &catalog);

        assert_eq!(result.matches.len(), 2);
        assert_eq!(result.suggested_topics.len(), 1);
    }

    #[test]
    fn test_preview_is_clean_and_truncated() {
        let long = format!("<p>Given an <code>array</code> {}</p>", "of integers ".repeat(40));
        let catalog = catalog(vec![entry(1, &["Array"], Some(long.as_str()))]);

        let result = analyze_description("Given an array of integers", &catalog);

        let preview = &result.matches[0].preview;
        assert!(preview.starts_with("Given an array of integers"));
        assert!(!preview.contains('<'));
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), 203);
    }
}
