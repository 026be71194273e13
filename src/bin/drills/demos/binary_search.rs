use super::timed;

pub fn guess_number() {
    use drills::binary_search::guess_number::{guess_number, GuessGame};

    let game = GuessGame::new(1_000_000, 728_364);
    println!("pick hidden in 1..=1000000");
    println!("found: {}", guess_number(&game));
}

pub fn search_insert() {
    use drills::binary_search::search_insert::search_insert;

    let nums = [1, 3, 5, 6];
    for target in [5, 2, 7, 0] {
        println!("insert {target} into {nums:?} at {}", search_insert(&nums, &target));
    }
}

pub fn search_rotated() {
    use drills::binary_search::search_rotated::{search_rotated, search_rotated_two_phase};

    let nums = [4, 5, 6, 7, 0, 1, 2];
    println!("nums: {nums:?}");
    for target in [0, 3] {
        println!(
            "target {target}: one-pass {:?}, pivot-then-search {:?}",
            search_rotated(&nums, target),
            search_rotated_two_phase(&nums, target)
        );
    }
}

pub fn median_of_sorted() {
    use drills::binary_search::median_of_sorted::{median_merge_count, median_partition};

    let (a, b) = ([1, 2], [3, 4]);
    println!("a: {a:?}, b: {b:?}");
    println!("merge-count: {:?}", median_merge_count(&a, &b));
    println!("partition:   {:?}", median_partition(&a, &b));
    println!("both empty:  {:?}", median_partition(&[], &[]));

    let big_a: Vec<i64> = (0..200_000).map(|i| i * 2).collect();
    let big_b: Vec<i64> = (0..200_000).map(|i| i * 2 + 1).collect();
    let (linear, linear_us) = timed(|| median_merge_count(&big_a, &big_b));
    let (log, log_us) = timed(|| median_partition(&big_a, &big_b));
    assert_eq!(linear, log);
    println!("200k+200k: merge-count {linear_us}us, partition {log_us}us");
}

pub fn peak_element() {
    use drills::binary_search::peak_element::{peak_binary, peak_linear};

    let nums = [1, 2, 1, 3, 5, 6, 4];
    println!("nums: {nums:?}");
    println!("linear: {:?}", peak_linear(&nums));
    println!("binary: {:?}", peak_binary(&nums));
}
