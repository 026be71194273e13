//! Validate Binary Search Tree: strict ordering, no equal keys.

use super::TreeNode;

/// Propagate (min, max) bounds down; every node must sit strictly inside
/// its inherited open interval.
pub fn is_valid_bst(root: &Option<Box<TreeNode>>) -> bool {
    fn check(node: &Option<Box<TreeNode>>, low: Option<i64>, high: Option<i64>) -> bool {
        match node {
            None => true,
            Some(n) => {
                if low.is_some_and(|l| n.val <= l) || high.is_some_and(|h| n.val >= h) {
                    return false;
                }
                check(&n.left, low, Some(n.val)) && check(&n.right, Some(n.val), high)
            }
        }
    }
    check(root, None, None)
}

/// Inorder walk of a BST is strictly increasing; track the previous value.
pub fn is_valid_bst_inorder(root: &Option<Box<TreeNode>>) -> bool {
    fn walk(node: &Option<Box<TreeNode>>, prev: &mut Option<i64>) -> bool {
        match node {
            None => true,
            Some(n) => {
                if !walk(&n.left, prev) {
                    return false;
                }
                if prev.is_some_and(|p| p >= n.val) {
                    return false;
                }
                *prev = Some(n.val);
                walk(&n.right, prev)
            }
        }
    }
    walk(root, &mut None)
}
