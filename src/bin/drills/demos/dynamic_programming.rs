use std::collections::HashMap;

use super::timed;

pub fn climbing_stairs() {
    use drills::dynamic_programming::climbing_stairs::{
        climb_memo, climb_naive, climb_rolling, climb_tab,
    };

    println!("ways(5) = {}", climb_rolling(5));

    let n = 32;
    let (naive, naive_us) = timed(|| climb_naive(n));
    let (memo, memo_us) = timed(|| climb_memo(n, &mut HashMap::new()));
    let (tab, tab_us) = timed(|| climb_tab(n as usize));
    assert_eq!(naive, memo);
    assert_eq!(naive, tab);
    println!("ways({n}) = {naive}: naive {naive_us}us, memo {memo_us}us, table {tab_us}us");
}

pub fn house_robber() {
    use drills::dynamic_programming::house_robber::{rob, rob_tab};

    let houses = [2, 7, 9, 3, 1];
    println!("houses: {houses:?}");
    println!("table:   {}", rob_tab(&houses));
    println!("rolling: {}", rob(&houses));
}

pub fn coin_change() {
    use drills::dynamic_programming::coin_change::coin_change;

    println!("coins [1,2,5], amount 11: {:?}", coin_change(&[1, 2, 5], 11));
    println!("coins [2], amount 3:      {:?}", coin_change(&[2], 3));
}

pub fn longest_increasing_subsequence() {
    use drills::dynamic_programming::longest_increasing_subsequence::{lis_patience, lis_quadratic};

    let nums = [10, 9, 2, 5, 3, 7, 101, 18];
    println!("nums: {nums:?}");
    println!("lis length: {}", lis_patience(&nums));

    let big: Vec<i64> = (0..6000).map(|i| (i * 7919) % 6007).collect();
    let (quad, quad_us) = timed(|| lis_quadratic(&big));
    let (pat, pat_us) = timed(|| lis_patience(&big));
    assert_eq!(quad, pat);
    println!("6000 elements: quadratic {quad_us}us, patience {pat_us}us");
}

pub fn unique_paths() {
    use drills::dynamic_programming::unique_paths::unique_paths;

    println!("3x7 grid: {}", unique_paths(3, 7));
    println!("18x18 grid: {}", unique_paths(18, 18));
}

pub fn word_break() {
    use drills::dynamic_programming::word_break::word_break;

    println!(
        "leetcode / [leet, code]: {}",
        word_break("leetcode", &["leet", "code"])
    );
    println!(
        "catsandog / [cats, dog, sand, and, cat]: {}",
        word_break("catsandog", &["cats", "dog", "sand", "and", "cat"])
    );
}
