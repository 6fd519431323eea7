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

use std::collections::BTreeSet;

use crate::matcher::vocabulary::{ALGORITHM_TERMS, PATTERN_TERMS, STOP_WORDS, TAXONOMIES};

/// Word span lengths considered as phrases
pub const MIN_SPAN_WORDS: usize = 3;
pub const MAX_SPAN_WORDS: usize = 6;
/// Rendered span length bounds, inclusive
pub const MIN_SPAN_CHARS: usize = 10;
pub const MAX_SPAN_CHARS: usize = 49;

/// Key phrases of an already normalized description.
///
/// Every vocabulary term present in the text, plus every run of 3 to 6
/// consecutive words rendering to 10..=49 characters that contains no stop word.
pub fn extract_key_phrases(text: &str) -> BTreeSet<String> {
    let mut phrases: BTreeSet<String> = ALGORITHM_TERMS
        .iter()
        .chain(PATTERN_TERMS)
        .filter(|term| text.contains(*term))
        .map(|term| term.to_string())
        .collect();

    let words: Vec<&str> = text.split_whitespace().collect();
    for span_len in MIN_SPAN_WORDS..=MAX_SPAN_WORDS {
        for span in words.windows(span_len) {
            let phrase = span.join(" ");
            let len = phrase.chars().count();
            if !(MIN_SPAN_CHARS..=MAX_SPAN_CHARS).contains(&len) {
                continue;
            }
            if STOP_WORDS.iter().any(|stop| phrase.contains(stop)) {
                continue;
            }
            phrases.insert(phrase);
        }
    }

    phrases
}

/// Synonym terms from the semantic taxonomies that occur in the text
pub fn extract_semantic_keywords(text: &str) -> BTreeSet<String> {
    TAXONOMIES
        .iter()
        .flat_map(|taxonomy| taxonomy.iter())
        .flat_map(|(_, terms)| terms.iter())
        .filter(|term| text.contains(*term))
        .map(|term| term.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_terms_found() {
        let phrases = extract_key_phrases("use binary search on the sorted array");

        assert!(phrases.contains("binary search"));
        assert!(phrases.contains("sorted"));
        assert!(!phrases.contains("dynamic programming"));
    }

    #[test]
    fn test_word_spans_respect_bounds() {
        let phrases = extract_key_phrases("find the longest palindromic substring in s");

        assert!(phrases.contains("find the longest"));
        assert!(phrases.contains("longest palindromic substring"));
        // Two words are never a span
        assert!(!phrases.contains("palindromic substring"));

        for phrase in &phrases {
            let words = phrase.split(' ').count();
            if words >= MIN_SPAN_WORDS {
                let len = phrase.chars().count();
                assert!((MIN_SPAN_CHARS..=MAX_SPAN_CHARS).contains(&len), "{}", phrase);
            }
        }
    }

    #[test]
    fn test_short_spans_skipped() {
        // "a b c" renders to 5 characters
        let phrases = extract_key_phrases("a b c d");
        assert!(phrases.is_empty());
    }

    #[test]
    fn test_span_length_boundaries() {
        let span = |a: usize, b: usize, c: usize| {
            format!("{} {} {}", "a".repeat(a), "b".repeat(b), "c".repeat(c))
        };

        let ten = span(3, 3, 2);
        assert_eq!(ten.chars().count(), 10);
        assert!(extract_key_phrases(&ten).contains(&ten));

        let nine = span(3, 3, 1);
        assert!(!extract_key_phrases(&nine).contains(&nine));

        let forty_nine = span(15, 15, 17);
        assert_eq!(forty_nine.chars().count(), 49);
        assert!(extract_key_phrases(&forty_nine).contains(&forty_nine));

        let fifty = span(15, 15, 18);
        assert_eq!(fifty.chars().count(), 50);
        assert!(!extract_key_phrases(&fifty).contains(&fifty));
    }

    #[test]
    fn test_long_spans_skipped() {
        let text = "extraordinarily complicated multidimensional transformations everywhere";
        let phrases = extract_key_phrases(text);

        assert!(!phrases.contains(text));
        assert!(phrases.contains("extraordinarily complicated multidimensional"));
    }

    #[test]
    fn test_stop_words_exclude_spans() {
        let phrases = extract_key_phrases("given an integer array nums return the answer");

        assert!(phrases.iter().all(|p| !p.contains("given")));
        assert!(phrases.iter().all(|p| !p.contains("return")));
        assert!(phrases.contains("an integer array nums"));
    }

    #[test]
    fn test_stop_word_matches_inside_words() {
        let phrases = extract_key_phrases("satisfy every constraints listed below here");
        assert!(phrases.iter().all(|p| !p.contains("constraints")));
    }

    #[test]
    fn test_empty_text() {
        assert!(extract_key_phrases("").is_empty());
        assert!(extract_semantic_keywords("").is_empty());
    }

    #[test]
    fn test_semantic_keywords() {
        let keywords = extract_semantic_keywords("find the maximum number of nodes in the tree");

        assert!(keywords.contains("find"));
        assert!(keywords.contains("maximum"));
        assert!(keywords.contains("number of"));
        assert!(keywords.contains("node"));
        assert!(keywords.contains("tree"));
        assert!(!keywords.contains("graph"));
    }

    #[test]
    fn test_semantic_keywords_deduplicated_across_taxonomies() {
        // "how many" appears in two taxonomies
        let keywords = extract_semantic_keywords("how many");
        assert_eq!(keywords.iter().filter(|k| *k == "how many").count(), 1);
    }
}
