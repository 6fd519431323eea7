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

//! Fixed vocabularies used by the description analyzer.
//!
//! All terms are lowercase; they are compared against case-folded text.

use regex::Regex;
use std::sync::LazyLock;

/// Category name paired with its synonym terms
pub type Taxonomy = &'static [(&'static str, &'static [&'static str])];

/// Algorithm and data-structure technique names
pub const ALGORITHM_TERMS: &[&str] = &[
    "dynamic programming",
    "two pointers",
    "binary search",
    "depth first search",
    "breadth first search",
    "dfs",
    "bfs",
    "backtracking",
    "greedy",
    "sliding window",
    "divide and conquer",
    "recursion",
    "memoization",
    "topological sort",
    "union find",
    "disjoint set",
    "bit manipulation",
    "prefix sum",
    "monotonic stack",
    "hash map",
    "hash table",
    "heap",
    "priority queue",
    "trie",
    "segment tree",
    "binary indexed tree",
    "merge sort",
    "quick sort",
    "linked list",
    "binary tree",
    "graph",
    "matrix",
];

/// Recurring problem-statement vocabulary
pub const PATTERN_TERMS: &[&str] = &[
    "palindrome",
    "subsequence",
    "subarray",
    "substring",
    "longest",
    "shortest",
    "maximum",
    "minimum",
    "anagram",
    "permutation",
    "combination",
    "subset",
    "partition",
    "interval",
    "overlapping",
    "rotated",
    "reverse",
    "duplicate",
    "unique",
    "distinct",
    "consecutive",
    "increasing",
    "decreasing",
    "sorted",
    "target",
    "sum",
    "product",
    "frequency",
    "kth largest",
    "kth smallest",
    "median",
    "merge",
    "parentheses",
    "island",
    "path",
    "ancestor",
    "cycle",
    "balanced",
    "valid",
    "prefix",
    "suffix",
];

/// Word spans containing any of these are not treated as key phrases
pub const STOP_WORDS: &[&str] = &["given", "return", "example", "input", "output", "constraint"];

pub const DATA_STRUCTURE_INDICATORS: Taxonomy = &[
    ("array", &["array", "list of integers", "nums", "elements"]),
    ("string", &["string", "characters", "substring", "word"]),
    ("linked_list", &["linked list", "node", "next pointer"]),
    ("tree", &["tree", "root", "leaf", "subtree"]),
    ("graph", &["graph", "edges", "vertices", "neighbors"]),
    ("matrix", &["matrix", "grid", "rows", "columns"]),
    ("stack", &["stack", "push", "pop"]),
    ("queue", &["queue", "deque"]),
    ("hash", &["hash", "dictionary", "frequency"]),
    ("heap", &["heap", "priority"]),
];

pub const OPERATION_INDICATORS: Taxonomy = &[
    ("search", &["find", "search", "locate", "look for"]),
    ("count", &["count", "number of", "how many"]),
    ("sort", &["sort", "order", "arrange"]),
    ("transform", &["reverse", "rotate", "convert", "transform"]),
    ("combine", &["merge", "combine", "concatenate"]),
    ("remove", &["remove", "delete", "eliminate"]),
    ("insert", &["insert", "append"]),
];

pub const PROBLEM_TYPE_INDICATORS: Taxonomy = &[
    (
        "optimization",
        &[
            "maximum", "minimum", "maximize", "minimize", "optimal", "longest", "shortest",
        ],
    ),
    ("validation", &["valid", "check if", "determine if", "whether"]),
    (
        "enumeration",
        &["all possible", "combinations", "permutations"],
    ),
    ("construction", &["construct", "build", "design", "implement"]),
    ("counting", &["total number", "ways to", "how many"]),
];

pub const TAXONOMIES: &[Taxonomy] = &[
    DATA_STRUCTURE_INDICATORS,
    OPERATION_INDICATORS,
    PROBLEM_TYPE_INDICATORS,
];

/// Words whose shared presence hints at the same problem shape
pub const COMMON_WORDS: &[&str] = &[
    "array", "integer", "target", "index", "find", "return", "given",
];

const STRUCTURAL_PATTERN_SOURCES: &[&str] = &[
    r"given.*array.*integer",
    r"find.*index",
    r"return.*-1",
    r"given.*string",
    r"return.*\b(true|false)\b",
    r"(minimum|maximum).*(number|length|sum|cost)",
    r"binary tree|root of",
    r"you may assume",
    r"(at most|at least) \w+",
];

/// Common LeetCode statement shapes
pub static STRUCTURAL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    STRUCTURAL_PATTERN_SOURCES
        .iter()
        .map(|source| Regex::new(source).expect("structural pattern must compile"))
        .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_patterns_compile() {
        assert_eq!(STRUCTURAL_PATTERNS.len(), 9);
    }

    #[test]
    fn test_vocabulary_is_lowercase() {
        let taxonomy_terms = TAXONOMIES
            .iter()
            .flat_map(|taxonomy| taxonomy.iter())
            .flat_map(|(_, terms)| terms.iter());

        for term in ALGORITHM_TERMS
            .iter()
            .chain(PATTERN_TERMS)
            .chain(STOP_WORDS)
            .chain(COMMON_WORDS)
            .chain(taxonomy_terms)
        {
            assert_eq!(*term, term.to_lowercase(), "term {} must be lowercase", term);
        }
    }

    #[test]
    fn test_common_words_count() {
        assert_eq!(COMMON_WORDS.len(), 7);
    }
}
