pub mod guess_number;
pub mod median_of_sorted;
pub mod peak_element;
pub mod search_insert;
pub mod search_rotated;
