//! Find Peak Element: any index whose value beats both neighbours
//! (virtual -inf past the ends; adjacent values never equal).

/// First local rise-then-fall found by scanning. O(n).
pub fn peak_linear(nums: &[i64]) -> Option<usize> {
    match nums.len() {
        0 => None,
        1 => Some(0),
        n => {
            for i in 0..n {
                let left_ok = i == 0 || nums[i - 1] < nums[i];
                let right_ok = i == n - 1 || nums[i] > nums[i + 1];
                if left_ok && right_ok {
                    return Some(i);
                }
            }
            None
        }
    }
}

/// Follow the rising slope: if nums[m] < nums[m+1] a peak lies to the
/// right, otherwise at m or left of it. O(log n).
pub fn peak_binary(nums: &[i64]) -> Option<usize> {
    if nums.is_empty() {
        return None;
    }
    let (mut l, mut r) = (0, nums.len() - 1);
    while l < r {
        let m = (l + r) / 2;
        if nums[m] < nums[m + 1] {
            l = m + 1;
        } else {
            r = m;
        }
    }
    Some(l)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_peak(nums: &[i64], i: usize) -> bool {
        (i == 0 || nums[i - 1] < nums[i]) && (i == nums.len() - 1 || nums[i] > nums[i + 1])
    }

    #[test]
    fn both_variants_return_valid_peaks() {
        let cases: &[&[i64]] = &[
            &[1, 2, 3, 1],
            &[1, 2, 1, 3, 5, 6, 4],
            &[5, 4, 3, 2],
            &[1, 2, 3, 4],
            &[7],
        ];
        for nums in cases {
            let i = peak_binary(nums).unwrap();
            assert!(is_peak(nums, i), "binary picked non-peak {i} in {nums:?}");
            let j = peak_linear(nums).unwrap();
            assert!(is_peak(nums, j), "linear picked non-peak {j} in {nums:?}");
        }
    }

    #[test]
    fn empty() {
        assert_eq!(peak_binary(&[]), None);
        assert_eq!(peak_linear(&[]), None);
    }
}
