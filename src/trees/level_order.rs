use std::collections::VecDeque;

use super::TreeNode;

/// Values grouped by depth, left to right within each level.
pub fn level_order(root: &Option<Box<TreeNode>>) -> Vec<Vec<i64>> {
    let mut levels = Vec::new();
    let mut frontier: VecDeque<&TreeNode> = VecDeque::new();
    if let Some(node) = root {
        frontier.push_back(node);
    }
    while !frontier.is_empty() {
        let mut level = Vec::with_capacity(frontier.len());
        for _ in 0..frontier.len() {
            let node = frontier.pop_front().unwrap();
            level.push(node.val);
            if let Some(l) = &node.left {
                frontier.push_back(l);
            }
            if let Some(r) = &node.right {
                frontier.push_back(r);
            }
        }
        levels.push(level);
    }
    levels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_by_depth() {
        let tree = TreeNode::from_level_order(&[
            Some(3),
            Some(9),
            Some(20),
            None,
            None,
            Some(15),
            Some(7),
        ]);
        assert_eq!(level_order(&tree), vec![vec![3], vec![9, 20], vec![15, 7]]);
    }

    #[test]
    fn empty_tree_has_no_levels() {
        assert_eq!(level_order(&None), Vec::<Vec<i64>>::new());
    }
}
