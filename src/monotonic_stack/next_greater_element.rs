//! Next Greater Element: for each value, the first strictly greater value
//! to its right (`None` when there is none).

pub fn next_greater_brute(nums: &[i64]) -> Vec<Option<i64>> {
    let mut out = vec![None; nums.len()];
    for i in 0..nums.len() {
        out[i] = nums[i + 1..].iter().copied().find(|&v| v > nums[i]);
    }
    out
}

/// Decreasing index stack; each index pushed and popped once. O(n).
pub fn next_greater(nums: &[i64]) -> Vec<Option<i64>> {
    let mut out = vec![None; nums.len()];
    let mut stack: Vec<usize> = Vec::new();
    for (i, &v) in nums.iter().enumerate() {
        while stack.last().is_some_and(|&top| nums[top] < v) {
            out[stack.pop().unwrap()] = Some(v);
        }
        stack.push(i);
    }
    out
}

/// Circular variant: the array wraps, so scan it twice; only first-pass
/// indices are pushed.
pub fn next_greater_circular(nums: &[i64]) -> Vec<Option<i64>> {
    let n = nums.len();
    let mut out = vec![None; n];
    let mut stack: Vec<usize> = Vec::new();
    for i in 0..2 * n {
        let v = nums[i % n];
        while stack.last().is_some_and(|&top| nums[top] < v) {
            out[stack.pop().unwrap()] = Some(v);
        }
        if i < n {
            stack.push(i);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear() {
        assert_eq!(
            next_greater(&[2, 1, 2, 4, 3]),
            vec![Some(4), Some(2), Some(4), None, None]
        );
        assert_eq!(
            next_greater_brute(&[2, 1, 2, 4, 3]),
            vec![Some(4), Some(2), Some(4), None, None]
        );
    }

    #[test]
    fn circular_wraps() {
        assert_eq!(
            next_greater_circular(&[1, 2, 1]),
            vec![Some(2), None, Some(2)]
        );
        assert_eq!(
            next_greater_circular(&[5, 4, 3, 2, 1]),
            vec![None, Some(5), Some(5), Some(5), Some(5)]
        );
    }

    #[test]
    fn variants_agree_on_linear_inputs() {
        let cases: &[&[i64]] = &[&[], &[7], &[1, 3, 2, 4], &[9, 8, 7]];
        for c in cases {
            assert_eq!(next_greater(c), next_greater_brute(c));
        }
    }
}
