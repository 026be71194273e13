use super::TreeNode;

/// Swap children at every node.
pub fn invert_tree(root: Option<Box<TreeNode>>) -> Option<Box<TreeNode>> {
    root.map(|mut node| {
        let left = node.left.take();
        let right = node.right.take();
        node.left = invert_tree(right);
        node.right = invert_tree(left);
        node
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trees::level_order::level_order;

    #[test]
    fn mirrors_the_tree() {
        let tree = TreeNode::from_level_order(&[
            Some(4),
            Some(2),
            Some(7),
            Some(1),
            Some(3),
            Some(6),
            Some(9),
        ]);
        let inverted = invert_tree(tree);
        assert_eq!(
            level_order(&inverted),
            vec![vec![4], vec![7, 2], vec![9, 6], vec![3, 1]]
        );
    }

    #[test]
    fn involution() {
        let vals = [Some(1), Some(2), None, Some(3)];
        let tree = TreeNode::from_level_order(&vals);
        let twice = invert_tree(invert_tree(TreeNode::from_level_order(&vals)));
        assert_eq!(twice, tree);
    }

    #[test]
    fn empty() {
        assert_eq!(invert_tree(None), None);
    }
}
