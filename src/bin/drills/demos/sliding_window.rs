use super::timed;

pub fn longest_substring() {
    use drills::sliding_window::longest_substring::{longest_substring, longest_substring_brute};

    for s in ["abcabcbb", "bbbbb", "pwwkew"] {
        println!("{s}: {}", longest_substring(s));
    }

    let big: String = (0..20_000u32)
        .map(|i| char::from(b'a' + ((i * 7) % 26) as u8))
        .collect();
    let (slow, slow_us) = timed(|| longest_substring_brute(&big));
    let (fast, fast_us) = timed(|| longest_substring(&big));
    assert_eq!(slow, fast);
    println!("20k chars: brute {slow_us}us, window {fast_us}us");
}

pub fn min_window_substring() {
    use drills::sliding_window::min_window_substring::min_window;

    println!(
        "ADOBECODEBANC / ABC -> {:?}",
        min_window("ADOBECODEBANC", "ABC")
    );
    println!("a / aa -> {:?}", min_window("a", "aa"));
}

pub fn max_sliding_window() {
    use drills::sliding_window::max_sliding_window::{
        max_sliding_window, max_sliding_window_brute,
    };

    let nums = [1, 3, -1, -3, 5, 3, 6, 7];
    println!("nums: {nums:?}, k = 3");
    println!("maxima: {:?}", max_sliding_window(&nums, 3));

    let big: Vec<i64> = (0..30_000).map(|i| (i * 97) % 1009).collect();
    let (slow, slow_us) = timed(|| max_sliding_window_brute(&big, 500));
    let (fast, fast_us) = timed(|| max_sliding_window(&big, 500));
    assert_eq!(slow, fast);
    println!("30k elements, k=500: brute {slow_us}us, deque {fast_us}us");
}

pub fn min_subarray_len() {
    use drills::sliding_window::min_subarray_len::min_subarray_len;

    println!(
        "target 7 in [2,3,1,2,4,3]: {:?}",
        min_subarray_len(7, &[2, 3, 1, 2, 4, 3])
    );
    println!(
        "target 11 in [1,1,1,1]:    {:?}",
        min_subarray_len(11, &[1, 1, 1, 1])
    );
}
