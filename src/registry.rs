//! Catalog of every problem in the collection.
//!
//! One entry per problem module, carrying the classification columns the
//! `drills` binary prints and exports. The catalog is the only artifact that
//! spans problem files; the problems themselves stay independent.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Arrays,
    BinarySearch,
    DynamicProgramming,
    Graphs,
    LinkedLists,
    MonotonicStack,
    SlidingWindow,
    Trees,
    Tries,
    TwoPointers,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Arrays,
        Category::BinarySearch,
        Category::DynamicProgramming,
        Category::Graphs,
        Category::LinkedLists,
        Category::MonotonicStack,
        Category::SlidingWindow,
        Category::Trees,
        Category::Tries,
        Category::TwoPointers,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Arrays => "arrays",
            Category::BinarySearch => "binary-search",
            Category::DynamicProgramming => "dynamic-programming",
            Category::Graphs => "graphs",
            Category::LinkedLists => "linked-lists",
            Category::MonotonicStack => "monotonic-stack",
            Category::SlidingWindow => "sliding-window",
            Category::Trees => "trees",
            Category::Tries => "tries",
            Category::TwoPointers => "two-pointers",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct ProblemInfo {
    pub slug: &'static str,
    pub title: &'static str,
    pub category: Category,
    pub difficulty: Difficulty,
    /// Names of the solution variants the module ships, fastest last.
    pub variants: &'static [&'static str],
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("problem `{0}` does not exist; run `drills list` for the catalog")]
    UnknownProblem(String),
}

const CATALOG: &[ProblemInfo] = &[
    // Arrays
    ProblemInfo {
        slug: "stock-trading",
        title: "Best Time to Buy and Sell Stock I/II",
        category: Category::Arrays,
        difficulty: Difficulty::Easy,
        variants: &["brute_force", "one_pass_min", "greedy_unlimited"],
    },
    ProblemInfo {
        slug: "majority-element",
        title: "Majority Element",
        category: Category::Arrays,
        difficulty: Difficulty::Easy,
        variants: &["hash_count", "sort_midpoint", "boyer_moore"],
    },
    ProblemInfo {
        slug: "roman-numerals",
        title: "Integer to Roman / Roman to Integer",
        category: Category::Arrays,
        difficulty: Difficulty::Medium,
        variants: &["table_walk"],
    },
    ProblemInfo {
        slug: "product-except-self",
        title: "Product of Array Except Self",
        category: Category::Arrays,
        difficulty: Difficulty::Medium,
        variants: &["two_pass", "suffix_in_place"],
    },
    ProblemInfo {
        slug: "rotate-array",
        title: "Rotate Array",
        category: Category::Arrays,
        difficulty: Difficulty::Medium,
        variants: &["extra_buffer", "triple_reverse"],
    },
    ProblemInfo {
        slug: "max-subarray",
        title: "Maximum Subarray",
        category: Category::Arrays,
        difficulty: Difficulty::Medium,
        variants: &["brute_force", "divide_and_conquer", "kadane"],
    },
    // Binary search
    ProblemInfo {
        slug: "guess-number",
        title: "Guess Number Higher or Lower",
        category: Category::BinarySearch,
        difficulty: Difficulty::Easy,
        variants: &["binary_search"],
    },
    ProblemInfo {
        slug: "search-insert",
        title: "Search Insert Position",
        category: Category::BinarySearch,
        difficulty: Difficulty::Easy,
        variants: &["lower_bound"],
    },
    ProblemInfo {
        slug: "search-rotated",
        title: "Search in Rotated Sorted Array",
        category: Category::BinarySearch,
        difficulty: Difficulty::Medium,
        variants: &["one_pass", "pivot_then_search"],
    },
    ProblemInfo {
        slug: "median-of-sorted",
        title: "Median of Two Sorted Arrays",
        category: Category::BinarySearch,
        difficulty: Difficulty::Hard,
        variants: &["merge_count", "partition"],
    },
    ProblemInfo {
        slug: "peak-element",
        title: "Find Peak Element",
        category: Category::BinarySearch,
        difficulty: Difficulty::Medium,
        variants: &["linear_scan", "slope_descent"],
    },
    // Dynamic programming
    ProblemInfo {
        slug: "climbing-stairs",
        title: "Climbing Stairs",
        category: Category::DynamicProgramming,
        difficulty: Difficulty::Easy,
        variants: &["naive_recursion", "memoization", "tabulation", "rolling"],
    },
    ProblemInfo {
        slug: "house-robber",
        title: "House Robber",
        category: Category::DynamicProgramming,
        difficulty: Difficulty::Medium,
        variants: &["tabulation", "rolling_pair"],
    },
    ProblemInfo {
        slug: "coin-change",
        title: "Coin Change",
        category: Category::DynamicProgramming,
        difficulty: Difficulty::Medium,
        variants: &["tabulation"],
    },
    ProblemInfo {
        slug: "longest-increasing-subsequence",
        title: "Longest Increasing Subsequence",
        category: Category::DynamicProgramming,
        difficulty: Difficulty::Medium,
        variants: &["quadratic_dp", "patience_tails"],
    },
    ProblemInfo {
        slug: "unique-paths",
        title: "Unique Paths",
        category: Category::DynamicProgramming,
        difficulty: Difficulty::Medium,
        variants: &["tabulation", "rolling_row"],
    },
    ProblemInfo {
        slug: "word-break",
        title: "Word Break",
        category: Category::DynamicProgramming,
        difficulty: Difficulty::Medium,
        variants: &["tabulation"],
    },
    // Graphs
    ProblemInfo {
        slug: "number-of-islands",
        title: "Number of Islands",
        category: Category::Graphs,
        difficulty: Difficulty::Medium,
        variants: &["dfs_flood", "bfs_flood"],
    },
    ProblemInfo {
        slug: "course-schedule",
        title: "Course Schedule",
        category: Category::Graphs,
        difficulty: Difficulty::Medium,
        variants: &["kahn_indegree", "dfs_coloring"],
    },
    ProblemInfo {
        slug: "rotting-oranges",
        title: "Rotting Oranges",
        category: Category::Graphs,
        difficulty: Difficulty::Medium,
        variants: &["multi_source_bfs"],
    },
    ProblemInfo {
        slug: "flood-fill",
        title: "Flood Fill",
        category: Category::Graphs,
        difficulty: Difficulty::Easy,
        variants: &["dfs_recolor"],
    },
    // Linked lists
    ProblemInfo {
        slug: "reverse-list",
        title: "Reverse Linked List",
        category: Category::LinkedLists,
        difficulty: Difficulty::Easy,
        variants: &["iterative", "recursive"],
    },
    ProblemInfo {
        slug: "merge-two-lists",
        title: "Merge Two Sorted Lists",
        category: Category::LinkedLists,
        difficulty: Difficulty::Easy,
        variants: &["recursive", "iterative"],
    },
    ProblemInfo {
        slug: "middle-node",
        title: "Middle of the Linked List",
        category: Category::LinkedLists,
        difficulty: Difficulty::Easy,
        variants: &["two_pass_count", "fast_slow"],
    },
    ProblemInfo {
        slug: "remove-nth-from-end",
        title: "Remove Nth Node From End of List",
        category: Category::LinkedLists,
        difficulty: Difficulty::Medium,
        variants: &["length_offset"],
    },
    ProblemInfo {
        slug: "add-two-numbers",
        title: "Add Two Numbers",
        category: Category::LinkedLists,
        difficulty: Difficulty::Medium,
        variants: &["carry_walk"],
    },
    ProblemInfo {
        slug: "linked-list-cycle",
        title: "Linked List Cycle II",
        category: Category::LinkedLists,
        difficulty: Difficulty::Medium,
        variants: &["visited_set", "floyd"],
    },
    // Monotonic stack
    ProblemInfo {
        slug: "daily-temperatures",
        title: "Daily Temperatures",
        category: Category::MonotonicStack,
        difficulty: Difficulty::Medium,
        variants: &["brute_force", "decreasing_stack"],
    },
    ProblemInfo {
        slug: "online-stock-span",
        title: "Online Stock Span",
        category: Category::MonotonicStack,
        difficulty: Difficulty::Medium,
        variants: &["span_stack"],
    },
    ProblemInfo {
        slug: "next-greater-element",
        title: "Next Greater Element",
        category: Category::MonotonicStack,
        difficulty: Difficulty::Easy,
        variants: &["brute_force", "stack", "circular_stack"],
    },
    ProblemInfo {
        slug: "largest-rectangle",
        title: "Largest Rectangle in Histogram",
        category: Category::MonotonicStack,
        difficulty: Difficulty::Hard,
        variants: &["brute_force", "sentinel_stack"],
    },
    // Sliding window
    ProblemInfo {
        slug: "longest-substring",
        title: "Longest Substring Without Repeating Characters",
        category: Category::SlidingWindow,
        difficulty: Difficulty::Medium,
        variants: &["brute_force", "last_seen_window"],
    },
    ProblemInfo {
        slug: "min-window-substring",
        title: "Minimum Window Substring",
        category: Category::SlidingWindow,
        difficulty: Difficulty::Hard,
        variants: &["need_have_window"],
    },
    ProblemInfo {
        slug: "max-sliding-window",
        title: "Sliding Window Maximum",
        category: Category::SlidingWindow,
        difficulty: Difficulty::Hard,
        variants: &["brute_force", "monotonic_deque"],
    },
    ProblemInfo {
        slug: "min-subarray-len",
        title: "Minimum Size Subarray Sum",
        category: Category::SlidingWindow,
        difficulty: Difficulty::Medium,
        variants: &["shrinking_window"],
    },
    // Trees
    ProblemInfo {
        slug: "max-depth",
        title: "Maximum Depth of Binary Tree",
        category: Category::Trees,
        difficulty: Difficulty::Easy,
        variants: &["recursive", "level_count"],
    },
    ProblemInfo {
        slug: "invert-tree",
        title: "Invert Binary Tree",
        category: Category::Trees,
        difficulty: Difficulty::Easy,
        variants: &["recursive"],
    },
    ProblemInfo {
        slug: "level-order",
        title: "Binary Tree Level Order Traversal",
        category: Category::Trees,
        difficulty: Difficulty::Medium,
        variants: &["bfs_levels"],
    },
    ProblemInfo {
        slug: "validate-bst",
        title: "Validate Binary Search Tree",
        category: Category::Trees,
        difficulty: Difficulty::Medium,
        variants: &["bounds_recursion", "inorder_walk"],
    },
    ProblemInfo {
        slug: "diameter",
        title: "Diameter of Binary Tree",
        category: Category::Trees,
        difficulty: Difficulty::Easy,
        variants: &["depth_recursion"],
    },
    // Tries
    ProblemInfo {
        slug: "trie",
        title: "Implement Trie (Prefix Tree)",
        category: Category::Tries,
        difficulty: Difficulty::Medium,
        variants: &["child_map"],
    },
    ProblemInfo {
        slug: "search-suggestions",
        title: "Search Suggestions System",
        category: Category::Tries,
        difficulty: Difficulty::Medium,
        variants: &["sorted_two_pointer", "trie_walk"],
    },
    ProblemInfo {
        slug: "word-dictionary",
        title: "Design Add and Search Words",
        category: Category::Tries,
        difficulty: Difficulty::Medium,
        variants: &["wildcard_fanout"],
    },
    // Two pointers
    ProblemInfo {
        slug: "two-sum-sorted",
        title: "Two Sum (sorted and unsorted)",
        category: Category::TwoPointers,
        difficulty: Difficulty::Easy,
        variants: &["hash_map", "converging"],
    },
    ProblemInfo {
        slug: "three-sum",
        title: "3Sum",
        category: Category::TwoPointers,
        difficulty: Difficulty::Medium,
        variants: &["sort_pin_converge"],
    },
    ProblemInfo {
        slug: "container-with-most-water",
        title: "Container With Most Water",
        category: Category::TwoPointers,
        difficulty: Difficulty::Medium,
        variants: &["brute_force", "converging"],
    },
    ProblemInfo {
        slug: "valid-palindrome",
        title: "Valid Palindrome",
        category: Category::TwoPointers,
        difficulty: Difficulty::Easy,
        variants: &["filtered_compare", "converging"],
    },
    ProblemInfo {
        slug: "move-zeroes",
        title: "Move Zeroes",
        category: Category::TwoPointers,
        difficulty: Difficulty::Easy,
        variants: &["write_pointer"],
    },
    ProblemInfo {
        slug: "trapping-rain-water",
        title: "Trapping Rain Water",
        category: Category::TwoPointers,
        difficulty: Difficulty::Hard,
        variants: &["prefix_max_tables", "monotonic_stack", "two_pointer"],
    },
];

/// Full problem table, one entry per problem module.
pub fn catalog() -> &'static [ProblemInfo] {
    CATALOG
}

/// Look a problem up by its slug.
pub fn find(slug: &str) -> Result<&'static ProblemInfo, RegistryError> {
    CATALOG
        .iter()
        .find(|p| p.slug == slug)
        .ok_or_else(|| RegistryError::UnknownProblem(slug.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn slugs_are_unique() {
        let mut seen = HashSet::new();
        for p in catalog() {
            assert!(seen.insert(p.slug), "duplicate slug {}", p.slug);
        }
    }

    #[test]
    fn every_category_is_populated() {
        for cat in Category::ALL {
            assert!(
                catalog().iter().any(|p| p.category == cat),
                "category {cat} has no problems"
            );
        }
    }

    #[test]
    fn every_entry_names_at_least_one_variant() {
        for p in catalog() {
            assert!(!p.variants.is_empty(), "{} has no variants", p.slug);
        }
    }

    #[test]
    fn find_known_and_unknown() {
        assert_eq!(find("daily-temperatures").unwrap().title, "Daily Temperatures");
        assert!(matches!(
            find("no-such-problem"),
            Err(RegistryError::UnknownProblem(_))
        ));
    }
}
