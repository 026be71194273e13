//! Two Sum, unsorted (hash map) and sorted (converging pointers).

use std::collections::HashMap;

/// Unsorted input: map each value to its index, look up the complement.
/// Returns the index pair in input order. O(n).
pub fn two_sum(nums: &[i64], target: i64) -> Option<(usize, usize)> {
    let mut seen: HashMap<i64, usize> = HashMap::new();
    for (i, &v) in nums.iter().enumerate() {
        if let Some(&j) = seen.get(&(target - v)) {
            return Some((j, i));
        }
        seen.insert(v, i);
    }
    None
}

/// Sorted input: pointers converge from both ends; too small moves the
/// left one, too big moves the right one. O(n), no extra space.
pub fn two_sum_sorted(nums: &[i64], target: i64) -> Option<(usize, usize)> {
    if nums.len() < 2 {
        return None;
    }
    let (mut l, mut r) = (0, nums.len() - 1);
    while l < r {
        let sum = nums[l] + nums[r];
        match sum.cmp(&target) {
            std::cmp::Ordering::Equal => return Some((l, r)),
            std::cmp::Ordering::Less => l += 1,
            std::cmp::Ordering::Greater => r -= 1,
        }
    }
    None
}
