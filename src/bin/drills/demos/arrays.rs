use super::timed;

pub fn stock_trading() {
    use drills::arrays::stock_trading::{max_profit, max_profit_brute, max_profit_greedy};

    let prices = [7, 1, 5, 3, 6, 4];
    println!("prices: {prices:?}");
    println!("single transaction: {}", max_profit(&prices));
    println!("unlimited transactions: {}", max_profit_greedy(&prices));

    let big: Vec<i64> = (0..4000).map(|i| (i * 37) % 100).collect();
    let (slow, slow_us) = timed(|| max_profit_brute(&big));
    let (fast, fast_us) = timed(|| max_profit(&big));
    assert_eq!(slow, fast);
    println!("4000 days: brute {slow} in {slow_us}us, one-pass {fast} in {fast_us}us");
}

pub fn majority_element() {
    use drills::arrays::majority_element::{majority_boyer_moore, majority_hash, majority_sort};

    let nums = [2, 2, 1, 1, 1, 2, 2];
    println!("nums: {nums:?}");
    println!("hash count:  {:?}", majority_hash(&nums));
    println!("sort mid:    {:?}", majority_sort(&nums));
    println!("boyer-moore: {:?}", majority_boyer_moore(&nums));
}

pub fn roman_numerals() {
    use drills::arrays::roman_numerals::{int_to_roman, roman_to_int};

    for n in [1994, 3749, 58, 9] {
        println!("{n} -> {}", int_to_roman(n));
    }
    println!("MCMXCIV -> {}", roman_to_int("MCMXCIV"));
}

pub fn product_except_self() {
    use drills::arrays::product_except_self::{product_except_self, product_except_self_in_place};

    let nums = [1, 2, 3, 4];
    println!("nums: {nums:?}");
    println!("two-pass tables: {:?}", product_except_self(&nums));
    println!("suffix in place: {:?}", product_except_self_in_place(&nums));
}

pub fn rotate_array() {
    use drills::arrays::rotate_array::{rotate_in_place, rotate_with_buffer};

    let nums = [1, 2, 3, 4, 5, 6, 7];
    println!("rotate {nums:?} by 3");
    println!("extra buffer:   {:?}", rotate_with_buffer(&nums, 3));
    let mut in_place = nums;
    rotate_in_place(&mut in_place, 3);
    println!("triple reverse: {in_place:?}");
}

pub fn max_subarray() {
    use drills::arrays::max_subarray::{max_subarray, max_subarray_brute, max_subarray_divide};

    let nums = [-2, 1, -3, 4, -1, 2, 1, -5, 4];
    println!("nums: {nums:?}");
    println!("kadane: {:?}", max_subarray(&nums));

    let big: Vec<i64> = (0..3000).map(|i| ((i * 31) % 17) - 8).collect();
    let (brute, brute_us) = timed(|| max_subarray_brute(&big));
    let (divide, divide_us) = timed(|| max_subarray_divide(&big));
    let (kadane, kadane_us) = timed(|| max_subarray(&big));
    assert_eq!(brute, kadane);
    assert_eq!(divide, kadane);
    println!(
        "3000 elements: brute {brute_us}us, divide-and-conquer {divide_us}us, kadane {kadane_us}us"
    );
}
