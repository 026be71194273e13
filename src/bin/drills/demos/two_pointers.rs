use super::timed;

pub fn two_sum_sorted() {
    use drills::two_pointers::two_sum_sorted::{two_sum, two_sum_sorted};

    let nums = [2, 7, 11, 15];
    println!("sorted {nums:?}, target 9: {:?}", two_sum_sorted(&nums, 9));
    let unsorted = [3, 2, 4];
    println!("unsorted {unsorted:?}, target 6: {:?}", two_sum(&unsorted, 6));
}

pub fn three_sum() {
    use drills::two_pointers::three_sum::three_sum;

    let nums = [-1, 0, 1, 2, -1, -4];
    println!("nums: {nums:?}");
    println!("triplets: {:?}", three_sum(&nums));
}

pub fn container_with_most_water() {
    use drills::two_pointers::container_with_most_water::{max_area, max_area_brute};

    let heights = [1, 8, 6, 2, 5, 4, 8, 3, 7];
    println!("heights: {heights:?}");
    println!("max area: {}", max_area(&heights));

    let big: Vec<u64> = (0..8000).map(|i| (i * 40503) % 10000).collect();
    let (slow, slow_us) = timed(|| max_area_brute(&big));
    let (fast, fast_us) = timed(|| max_area(&big));
    assert_eq!(slow, fast);
    println!("8000 walls: brute {slow_us}us, converging {fast_us}us");
}

pub fn valid_palindrome() {
    use drills::two_pointers::valid_palindrome::is_palindrome;

    for s in ["A man, a plan, a canal: Panama", "race a car"] {
        println!("{s:?}: {}", is_palindrome(s));
    }
}

pub fn move_zeroes() {
    use drills::two_pointers::move_zeroes::move_zeroes;

    let mut nums = [0, 1, 0, 3, 12];
    println!("before: {nums:?}");
    move_zeroes(&mut nums);
    println!("after:  {nums:?}");
}

pub fn trapping_rain_water() {
    use drills::two_pointers::trapping_rain_water::{
        trap_prefix_tables, trap_stack, trap_two_pointer,
    };

    let heights = [0, 1, 0, 2, 1, 0, 1, 3, 2, 1, 2, 1];
    println!("heights: {heights:?}");
    println!("prefix tables: {}", trap_prefix_tables(&heights));
    println!("stack:         {}", trap_stack(&heights));
    println!("two pointers:  {}", trap_two_pointer(&heights));
}
