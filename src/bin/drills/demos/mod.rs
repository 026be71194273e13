//! Print-based demonstrations, one per problem. Each demo shows a worked
//! example and, where the module ships competing variants, a wall-clock
//! comparison on a larger synthetic input.

mod arrays;
mod binary_search;
mod dynamic_programming;
mod graphs;
mod linked_lists;
mod monotonic_stack;
mod sliding_window;
mod trees;
mod tries;
mod two_pointers;

use std::time::Instant;

use drills::registry::ProblemInfo;
use tracing::debug;

pub fn run(info: &ProblemInfo) -> Result<(), Box<dyn std::error::Error>> {
    println!(
        "=== {} ({} / {}) ===",
        info.title, info.category, info.difficulty
    );
    let started = Instant::now();
    match info.slug {
        "stock-trading" => arrays::stock_trading(),
        "majority-element" => arrays::majority_element(),
        "roman-numerals" => arrays::roman_numerals(),
        "product-except-self" => arrays::product_except_self(),
        "rotate-array" => arrays::rotate_array(),
        "max-subarray" => arrays::max_subarray(),
        "guess-number" => binary_search::guess_number(),
        "search-insert" => binary_search::search_insert(),
        "search-rotated" => binary_search::search_rotated(),
        "median-of-sorted" => binary_search::median_of_sorted(),
        "peak-element" => binary_search::peak_element(),
        "climbing-stairs" => dynamic_programming::climbing_stairs(),
        "house-robber" => dynamic_programming::house_robber(),
        "coin-change" => dynamic_programming::coin_change(),
        "longest-increasing-subsequence" => dynamic_programming::longest_increasing_subsequence(),
        "unique-paths" => dynamic_programming::unique_paths(),
        "word-break" => dynamic_programming::word_break(),
        "number-of-islands" => graphs::number_of_islands(),
        "course-schedule" => graphs::course_schedule(),
        "rotting-oranges" => graphs::rotting_oranges(),
        "flood-fill" => graphs::flood_fill(),
        "reverse-list" => linked_lists::reverse_list(),
        "merge-two-lists" => linked_lists::merge_two_lists(),
        "middle-node" => linked_lists::middle_node(),
        "remove-nth-from-end" => linked_lists::remove_nth_from_end(),
        "add-two-numbers" => linked_lists::add_two_numbers(),
        "linked-list-cycle" => linked_lists::linked_list_cycle(),
        "daily-temperatures" => monotonic_stack::daily_temperatures(),
        "online-stock-span" => monotonic_stack::online_stock_span(),
        "next-greater-element" => monotonic_stack::next_greater_element(),
        "largest-rectangle" => monotonic_stack::largest_rectangle(),
        "longest-substring" => sliding_window::longest_substring(),
        "min-window-substring" => sliding_window::min_window_substring(),
        "max-sliding-window" => sliding_window::max_sliding_window(),
        "min-subarray-len" => sliding_window::min_subarray_len(),
        "max-depth" => trees::max_depth(),
        "invert-tree" => trees::invert_tree(),
        "level-order" => trees::level_order(),
        "validate-bst" => trees::validate_bst(),
        "diameter" => trees::diameter(),
        "trie" => tries::trie(),
        "search-suggestions" => tries::search_suggestions(),
        "word-dictionary" => tries::word_dictionary(),
        "two-sum-sorted" => two_pointers::two_sum_sorted(),
        "three-sum" => two_pointers::three_sum(),
        "container-with-most-water" => two_pointers::container_with_most_water(),
        "valid-palindrome" => two_pointers::valid_palindrome(),
        "move-zeroes" => two_pointers::move_zeroes(),
        "trapping-rain-water" => two_pointers::trapping_rain_water(),
        other => return Err(format!("no demo wired for `{other}`").into()),
    }
    debug!(
        slug = info.slug,
        elapsed_us = started.elapsed().as_micros() as u64,
        "demo finished"
    );
    Ok(())
}

/// Wall-clock a closure; micros are plenty for these toy comparisons.
fn timed<T>(f: impl FnOnce() -> T) -> (T, u128) {
    let start = Instant::now();
    let out = f();
    (out, start.elapsed().as_micros())
}
