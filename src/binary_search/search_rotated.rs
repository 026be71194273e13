//! Search in Rotated Sorted Array (distinct elements).
//!
//! At every split one half is sorted; keep the half whose range can hold
//! the target.

/// Single binary search deciding per step which half is sorted. O(log n).
pub fn search_rotated(nums: &[i64], target: i64) -> Option<usize> {
    let (mut l, mut r) = (0, nums.len());
    while l < r {
        let m = (l + r) / 2;
        if nums[m] == target {
            return Some(m);
        }
        if nums[l] <= nums[m] {
            // left half sorted
            if nums[l] <= target && target < nums[m] {
                r = m;
            } else {
                l = m + 1;
            }
        } else {
            // right half sorted
            if nums[m] < target && target <= nums[r - 1] {
                l = m + 1;
            } else {
                r = m;
            }
        }
    }
    None
}

/// Educational variant: locate the pivot first, then run a plain binary
/// search in the half that can contain the target.
pub fn search_rotated_two_phase(nums: &[i64], target: i64) -> Option<usize> {
    if nums.is_empty() {
        return None;
    }
    // index of the smallest element
    let (mut l, mut r) = (0, nums.len() - 1);
    while l < r {
        let m = (l + r) / 2;
        if nums[m] > nums[r] {
            l = m + 1;
        } else {
            r = m;
        }
    }
    let pivot = l;

    let search = |slice: &[i64], offset: usize| -> Option<usize> {
        slice
            .binary_search(&target)
            .ok()
            .map(|i| i + offset)
    };
    if pivot == 0 {
        return search(nums, 0);
    }
    if target >= nums[0] {
        search(&nums[..pivot], 0)
    } else {
        search(&nums[pivot..], pivot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotated_hits() {
        let nums = [4, 5, 6, 7, 0, 1, 2];
        assert_eq!(search_rotated(&nums, 0), Some(4));
        assert_eq!(search_rotated(&nums, 4), Some(0));
        assert_eq!(search_rotated(&nums, 2), Some(6));
        assert_eq!(search_rotated_two_phase(&nums, 0), Some(4));
        assert_eq!(search_rotated_two_phase(&nums, 2), Some(6));
    }

    #[test]
    fn misses() {
        let nums = [4, 5, 6, 7, 0, 1, 2];
        assert_eq!(search_rotated(&nums, 3), None);
        assert_eq!(search_rotated_two_phase(&nums, 3), None);
    }

    #[test]
    fn unrotated_and_tiny() {
        assert_eq!(search_rotated(&[1, 2, 3], 2), Some(1));
        assert_eq!(search_rotated(&[1], 1), Some(0));
        assert_eq!(search_rotated(&[], 1), None);
        assert_eq!(search_rotated_two_phase(&[1, 2, 3], 2), Some(1));
        assert_eq!(search_rotated_two_phase(&[], 1), None);
    }
}
