pub mod majority_element;
pub mod max_subarray;
pub mod product_except_self;
pub mod roman_numerals;
pub mod rotate_array;
pub mod stock_trading;
