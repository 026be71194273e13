use drills::trees::TreeNode;

fn fixture() -> Option<Box<TreeNode>> {
    TreeNode::from_level_order(&[Some(3), Some(9), Some(20), None, None, Some(15), Some(7)])
}

pub fn max_depth() {
    use drills::trees::max_depth::{max_depth, max_depth_levels};

    let tree = fixture();
    println!("tree: [3, 9, 20, _, _, 15, 7]");
    println!("recursive depth: {}", max_depth(&tree));
    println!("level count:     {}", max_depth_levels(&tree));
}

pub fn invert_tree() {
    use drills::trees::invert_tree::invert_tree;
    use drills::trees::level_order::level_order;

    let tree = TreeNode::from_level_order(&[
        Some(4),
        Some(2),
        Some(7),
        Some(1),
        Some(3),
        Some(6),
        Some(9),
    ]);
    println!("levels before: {:?}", level_order(&tree));
    let inverted = invert_tree(tree);
    println!("levels after:  {:?}", level_order(&inverted));
}

pub fn level_order() {
    use drills::trees::level_order::level_order;

    let tree = fixture();
    println!("levels: {:?}", level_order(&tree));
}

pub fn validate_bst() {
    use drills::trees::validate_bst::{is_valid_bst, is_valid_bst_inorder};

    let good = TreeNode::from_level_order(&[Some(2), Some(1), Some(3)]);
    let bad = TreeNode::from_level_order(&[Some(5), Some(1), Some(4), None, None, Some(3), Some(6)]);
    println!("[2,1,3] bounds:  {}", is_valid_bst(&good));
    println!("[2,1,3] inorder: {}", is_valid_bst_inorder(&good));
    println!("[5,1,4,_,_,3,6]: {}", is_valid_bst(&bad));
}

pub fn diameter() {
    use drills::trees::diameter::diameter;

    let tree = TreeNode::from_level_order(&[Some(1), Some(2), Some(3), Some(4), Some(5)]);
    println!("tree: [1, 2, 3, 4, 5]");
    println!("diameter: {}", diameter(&tree));
}
