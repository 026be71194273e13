//! Course Schedule: order `n` courses under prerequisite edges, or detect
//! that a cycle makes it impossible.
//!
//! Edge (a, b) means b must come before a.

use std::collections::VecDeque;

/// Kahn's algorithm: repeatedly take a course with no remaining
/// prerequisites. A cycle leaves courses with positive indegree; `None`.
pub fn course_order(n: usize, prerequisites: &[(usize, usize)]) -> Option<Vec<usize>> {
    let mut adj = vec![Vec::new(); n];
    let mut indegree = vec![0usize; n];
    for &(course, pre) in prerequisites {
        adj[pre].push(course);
        indegree[course] += 1;
    }

    let mut queue = VecDeque::new();
    for i in 0..n {
        if indegree[i] == 0 {
            queue.push_back(i);
        }
    }

    let mut order = Vec::with_capacity(n);
    while let Some(u) = queue.pop_front() {
        order.push(u);
        for &v in &adj[u] {
            indegree[v] -= 1;
            if indegree[v] == 0 {
                queue.push_back(v);
            }
        }
    }
    (order.len() == n).then_some(order)
}

pub fn can_finish(n: usize, prerequisites: &[(usize, usize)]) -> bool {
    course_order(n, prerequisites).is_some()
}

/// DFS coloring variant: white/gray/black; a gray-to-gray edge is a cycle.
pub fn can_finish_dfs(n: usize, prerequisites: &[(usize, usize)]) -> bool {
    const WHITE: u8 = 0;
    const GRAY: u8 = 1;
    const BLACK: u8 = 2;

    fn visit(u: usize, adj: &[Vec<usize>], color: &mut [u8]) -> bool {
        color[u] = GRAY;
        for &v in &adj[u] {
            if color[v] == GRAY {
                return false;
            }
            if color[v] == WHITE && !visit(v, adj, color) {
                return false;
            }
        }
        color[u] = BLACK;
        true
    }

    let mut adj = vec![Vec::new(); n];
    for &(course, pre) in prerequisites {
        adj[pre].push(course);
    }
    let mut color = vec![WHITE; n];
    for u in 0..n {
        if color[u] == WHITE && !visit(u, &adj, &mut color) {
            return false;
        }
    }
    true
}
