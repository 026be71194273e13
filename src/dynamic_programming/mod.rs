pub mod climbing_stairs;
pub mod coin_change;
pub mod house_robber;
pub mod longest_increasing_subsequence;
pub mod unique_paths;
pub mod word_break;
