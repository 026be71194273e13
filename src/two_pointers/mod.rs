pub mod container_with_most_water;
pub mod move_zeroes;
pub mod three_sum;
pub mod trapping_rain_water;
pub mod two_sum_sorted;
pub mod valid_palindrome;
