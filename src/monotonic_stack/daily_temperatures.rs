//! Daily Temperatures: for each day, how many days until a warmer one.
//!
//! Variables:
//!   stack : indices of days still waiting, temperatures strictly
//!           decreasing from bottom to top
//!
//! A new temperature resolves every cooler day on the stack; each index is
//! pushed and popped once, so the stack variant is O(n) total.

/// Scan forward from every day. O(n^2).
pub fn daily_temperatures_brute(temps: &[i32]) -> Vec<u32> {
    let mut wait = vec![0; temps.len()];
    for i in 0..temps.len() {
        for j in i + 1..temps.len() {
            if temps[j] > temps[i] {
                wait[i] = (j - i) as u32;
                break;
            }
        }
    }
    wait
}

/// Decreasing index stack. O(n).
pub fn daily_temperatures(temps: &[i32]) -> Vec<u32> {
    let mut wait = vec![0; temps.len()];
    let mut stack: Vec<usize> = Vec::new();
    for (i, &t) in temps.iter().enumerate() {
        while let Some(&top) = stack.last() {
            if temps[top] >= t {
                break;
            }
            stack.pop();
            wait[top] = (i - top) as u32;
        }
        stack.push(i);
    }
    wait
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_week() {
        let temps = [73, 74, 75, 71, 69, 72, 76, 73];
        let expected = vec![1, 1, 4, 2, 1, 1, 0, 0];
        assert_eq!(daily_temperatures(&temps), expected);
        assert_eq!(daily_temperatures_brute(&temps), expected);
    }

    #[test]
    fn monotone_runs() {
        assert_eq!(daily_temperatures(&[30, 40, 50, 60]), vec![1, 1, 1, 0]);
        assert_eq!(daily_temperatures(&[60, 50, 40, 30]), vec![0, 0, 0, 0]);
    }

    #[test]
    fn plateaus_wait_for_a_strict_rise() {
        assert_eq!(daily_temperatures(&[50, 50, 51]), vec![2, 1, 0]);
    }

    #[test]
    fn empty() {
        assert_eq!(daily_temperatures(&[]), Vec::<u32>::new());
    }

    #[test]
    fn variants_agree() {
        let cases: &[&[i32]] = &[&[55], &[30, 60, 90], &[34, 80, 80, 34, 45]];
        for c in cases {
            assert_eq!(daily_temperatures(c), daily_temperatures_brute(c));
        }
    }
}
