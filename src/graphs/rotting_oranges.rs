//! Rotting Oranges: minutes for rot to spread to every fresh orange.
//!
//! Cells: 0 empty, 1 fresh, 2 rotten. All initially rotten cells seed one
//! multi-source BFS; each frontier layer is a minute.

use std::collections::VecDeque;

/// `None` when some fresh orange can never rot.
pub fn minutes_to_rot(grid: &[Vec<u8>]) -> Option<u32> {
    let mut grid = grid.to_vec();
    let rows = grid.len();
    let mut fresh = 0usize;
    let mut frontier = VecDeque::new();

    for r in 0..rows {
        for c in 0..grid[r].len() {
            match grid[r][c] {
                1 => fresh += 1,
                2 => frontier.push_back((r, c)),
                _ => {}
            }
        }
    }
    if fresh == 0 {
        return Some(0);
    }

    let mut minutes = 0;
    while !frontier.is_empty() && fresh > 0 {
        minutes += 1;
        for _ in 0..frontier.len() {
            let (r, c) = frontier.pop_front().unwrap();
            let mut spread = |nr: usize, nc: usize, grid: &mut Vec<Vec<u8>>, fresh: &mut usize| {
                if grid[nr][nc] == 1 {
                    grid[nr][nc] = 2;
                    *fresh -= 1;
                    frontier.push_back((nr, nc));
                }
            };
            if r > 0 {
                spread(r - 1, c, &mut grid, &mut fresh);
            }
            if r + 1 < rows {
                spread(r + 1, c, &mut grid, &mut fresh);
            }
            if c > 0 {
                spread(r, c - 1, &mut grid, &mut fresh);
            }
            if c + 1 < grid[r].len() {
                spread(r, c + 1, &mut grid, &mut fresh);
            }
        }
    }

    (fresh == 0).then_some(minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spreads_in_four_minutes() {
        let grid = vec![vec![2, 1, 1], vec![1, 1, 0], vec![0, 1, 1]];
        assert_eq!(minutes_to_rot(&grid), Some(4));
    }

    #[test]
    fn unreachable_fresh_orange() {
        let grid = vec![vec![2, 1, 1], vec![0, 1, 1], vec![1, 0, 1]];
        assert_eq!(minutes_to_rot(&grid), None);
    }

    #[test]
    fn nothing_fresh() {
        assert_eq!(minutes_to_rot(&[vec![0, 2]]), Some(0));
        assert_eq!(minutes_to_rot(&[]), Some(0));
    }
}
