use super::timed;

pub fn daily_temperatures() {
    use drills::monotonic_stack::daily_temperatures::{
        daily_temperatures, daily_temperatures_brute,
    };

    let temps = [73, 74, 75, 71, 69, 72, 76, 73];
    println!("temps: {temps:?}");
    println!("wait:  {:?}", daily_temperatures(&temps));

    let big: Vec<i32> = (0..5000).map(|i| 30 + ((i * 131) % 70) as i32).collect();
    let (slow, slow_us) = timed(|| daily_temperatures_brute(&big));
    let (fast, fast_us) = timed(|| daily_temperatures(&big));
    assert_eq!(slow, fast);
    println!("5000 days: brute {slow_us}us, stack {fast_us}us");
}

pub fn online_stock_span() {
    use drills::monotonic_stack::online_stock_span::StockSpanner;

    let prices = [100, 80, 60, 70, 60, 75, 85];
    let mut spanner = StockSpanner::new();
    let spans: Vec<u32> = prices.iter().map(|&p| spanner.next(p)).collect();
    println!("prices: {prices:?}");
    println!("spans:  {spans:?}");
}

pub fn next_greater_element() {
    use drills::monotonic_stack::next_greater_element::{next_greater, next_greater_circular};

    let nums = [2, 1, 2, 4, 3];
    println!("nums: {nums:?}");
    println!("linear:   {:?}", next_greater(&nums));
    println!("circular: {:?}", next_greater_circular(&nums));
}

pub fn largest_rectangle() {
    use drills::monotonic_stack::largest_rectangle::{largest_rectangle, largest_rectangle_brute};

    let heights = [2, 1, 5, 6, 2, 3];
    println!("histogram: {heights:?}");
    println!("largest rectangle: {}", largest_rectangle(&heights));

    let big: Vec<u64> = (0..5000).map(|i| (i * 2654435761u64) % 1000).collect();
    let (slow, slow_us) = timed(|| largest_rectangle_brute(&big));
    let (fast, fast_us) = timed(|| largest_rectangle(&big));
    assert_eq!(slow, fast);
    println!("5000 bars: brute {slow_us}us, sentinel stack {fast_us}us");
}
