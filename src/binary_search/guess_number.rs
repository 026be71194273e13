//! Guess Number Higher or Lower: find the picked number in 1..=n by
//! querying an oracle.

use std::cmp::Ordering;

/// The oracle. Knows the picked number, answers how a guess compares.
pub struct GuessGame {
    picked: u64,
    n: u64,
}

impl GuessGame {
    pub fn new(n: u64, picked: u64) -> Self {
        Self { picked, n }
    }

    pub fn n(&self) -> u64 {
        self.n
    }

    /// `Less` means the pick is lower than the guess.
    pub fn guess(&self, value: u64) -> Ordering {
        self.picked.cmp(&value)
    }
}

/// Binary search against the oracle. O(log n) queries.
pub fn guess_number(game: &GuessGame) -> u64 {
    let (mut lo, mut hi) = (1, game.n());
    loop {
        let mid = lo + (hi - lo) / 2;
        match game.guess(mid) {
            Ordering::Equal => return mid,
            Ordering::Greater => lo = mid + 1,
            Ordering::Less => hi = mid - 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_the_pick() {
        assert_eq!(guess_number(&GuessGame::new(10, 6)), 6);
        assert_eq!(guess_number(&GuessGame::new(1, 1)), 1);
        assert_eq!(guess_number(&GuessGame::new(2, 1)), 1);
    }

    #[test]
    fn extreme_picks() {
        assert_eq!(guess_number(&GuessGame::new(1_000_000, 1)), 1);
        assert_eq!(guess_number(&GuessGame::new(1_000_000, 1_000_000)), 1_000_000);
    }
}
