pub mod longest_substring;
pub mod max_sliding_window;
pub mod min_subarray_len;
pub mod min_window_substring;
