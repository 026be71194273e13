use super::TreeNode;

/// Longest path between any two nodes, counted in edges. At each node the
/// candidate path is left depth + right depth; the recursion returns depth
/// while folding the best candidate into an accumulator.
pub fn diameter(root: &Option<Box<TreeNode>>) -> usize {
    fn depth(node: &Option<Box<TreeNode>>, best: &mut usize) -> usize {
        match node {
            None => 0,
            Some(n) => {
                let l = depth(&n.left, best);
                let r = depth(&n.right, best);
                *best = (*best).max(l + r);
                1 + l.max(r)
            }
        }
    }
    let mut best = 0;
    depth(root, &mut best);
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_through_the_root() {
        let tree = TreeNode::from_level_order(&[Some(1), Some(2), Some(3), Some(4), Some(5)]);
        assert_eq!(diameter(&tree), 3); // 4 -> 2 -> 1 -> 3
    }

    #[test]
    fn path_avoiding_the_root() {
        // long arms hang off node 2; the best path never touches 1
        let tree = TreeNode::from_level_order(&[
            Some(1),
            Some(2),
            None,
            Some(3),
            Some(4),
            Some(5),
            None,
            None,
            None,
            Some(6),
        ]);
        assert_eq!(diameter(&tree), 4); // 5 -> 3 -> 2 -> 4 -> 6
    }

    #[test]
    fn tiny_trees() {
        assert_eq!(diameter(&None), 0);
        assert_eq!(diameter(&TreeNode::leaf(1)), 0);
    }
}
