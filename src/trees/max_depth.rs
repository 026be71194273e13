use std::collections::VecDeque;

use super::TreeNode;

/// Depth is 1 + the deeper child. O(n).
pub fn max_depth(root: &Option<Box<TreeNode>>) -> usize {
    match root {
        None => 0,
        Some(node) => 1 + max_depth(&node.left).max(max_depth(&node.right)),
    }
}

/// Count BFS layers instead of recursing.
pub fn max_depth_levels(root: &Option<Box<TreeNode>>) -> usize {
    let mut depth = 0;
    let mut frontier: VecDeque<&TreeNode> = VecDeque::new();
    if let Some(node) = root {
        frontier.push_back(node);
    }
    while !frontier.is_empty() {
        depth += 1;
        for _ in 0..frontier.len() {
            let node = frontier.pop_front().unwrap();
            if let Some(l) = &node.left {
                frontier.push_back(l);
            }
            if let Some(r) = &node.right {
                frontier.push_back(r);
            }
        }
    }
    depth
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_tree() {
        let tree = TreeNode::from_level_order(&[
            Some(3),
            Some(9),
            Some(20),
            None,
            None,
            Some(15),
            Some(7),
        ]);
        assert_eq!(max_depth(&tree), 3);
        assert_eq!(max_depth_levels(&tree), 3);
    }

    #[test]
    fn skewed_chain() {
        let tree = TreeNode::from_level_order(&[Some(1), None, Some(2), None, Some(3)]);
        assert_eq!(max_depth(&tree), 3);
        assert_eq!(max_depth_levels(&tree), 3);
    }

    #[test]
    fn empty_and_leaf() {
        assert_eq!(max_depth(&None), 0);
        assert_eq!(max_depth_levels(&TreeNode::leaf(4)), 1);
    }
}
