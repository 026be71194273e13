//! # Drills
//!
//! Study collection of classic algorithm-interview problems, organized by
//! technique. Each problem module is self-contained and ships every textbook
//! solution variant (brute force, optimized, educational) side by side.
//!
//! ## Modules
//!
//! - `arrays` – Scan and accumulate tricks (Kadane, Boyer–Moore, prefix products)
//! - `binary_search` – Half-open interval searches over sorted or unimodal data
//! - `dynamic_programming` – Memoization and tabulation problems
//! - `graphs` – Grid flood fills and dependency ordering (BFS, DFS, Kahn)
//! - `linked_lists` – Owned-node chain manipulation
//! - `monotonic_stack` – Next-greater / span queries in O(n) total
//! - `sliding_window` – Substring and subarray windows
//! - `trees` – Binary tree recursion and level traversal
//! - `tries` – Prefix-tree lookups and completions
//! - `two_pointers` – Converging and write-pointer index techniques
//!
//! The `registry` module carries the catalog used by the `drills` binary to
//! list and run problems.
//!
//! ---
//!
//! ## Usage Example
//!
//! ```rust
//! use drills::monotonic_stack::daily_temperatures::daily_temperatures;
//!
//! let wait = daily_temperatures(&[73, 74, 75, 71, 69, 72, 76, 73]);
//! assert_eq!(wait, vec![1, 1, 4, 2, 1, 1, 0, 0]);
//! ```

pub mod arrays;
pub mod binary_search;
pub mod dynamic_programming;
pub mod graphs;
pub mod linked_lists;
pub mod monotonic_stack;
pub mod registry;
pub mod sliding_window;
pub mod trees;
pub mod tries;
pub mod two_pointers;

pub use registry::{catalog, find, Category, Difficulty, ProblemInfo, RegistryError};
