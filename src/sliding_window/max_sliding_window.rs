//! Sliding Window Maximum.

use std::collections::VecDeque;

/// Max of every window by rescanning. O(n * k).
pub fn max_sliding_window_brute(nums: &[i64], k: usize) -> Vec<i64> {
    if k == 0 || nums.len() < k {
        return Vec::new();
    }
    nums.windows(k)
        .map(|w| *w.iter().max().unwrap())
        .collect()
}

/// Monotonic deque of indices, values decreasing front to back. The front
/// is always the current window's max; stale and dominated indices leave
/// from either end. O(n).
pub fn max_sliding_window(nums: &[i64], k: usize) -> Vec<i64> {
    if k == 0 || nums.len() < k {
        return Vec::new();
    }
    let mut deque: VecDeque<usize> = VecDeque::new();
    let mut out = Vec::with_capacity(nums.len() - k + 1);
    for i in 0..nums.len() {
        if deque.front().is_some_and(|&f| f + k <= i) {
            deque.pop_front();
        }
        while deque.back().is_some_and(|&b| nums[b] <= nums[i]) {
            deque.pop_back();
        }
        deque.push_back(i);
        if i + 1 >= k {
            out.push(nums[*deque.front().unwrap()]);
        }
    }
    out
}
