use drills::linked_lists::ListNode;

pub fn reverse_list() {
    use drills::linked_lists::reverse_list::{reverse_iterative, reverse_recursive};

    let list = ListNode::from_slice(&[1, 2, 3, 4, 5]);
    println!("list: {:?}", ListNode::to_vec(&list));
    let rev = reverse_iterative(list);
    println!("iterative: {:?}", ListNode::to_vec(&rev));
    let rev = reverse_recursive(rev);
    println!("recursive (back again): {:?}", ListNode::to_vec(&rev));
}

pub fn merge_two_lists() {
    use drills::linked_lists::merge_two_lists::{merge_iterative, merge_recursive};

    let a = ListNode::from_slice(&[1, 2, 4]);
    let b = ListNode::from_slice(&[1, 3, 4]);
    println!(
        "merge {:?} + {:?}",
        ListNode::to_vec(&a),
        ListNode::to_vec(&b)
    );
    println!("iterative: {:?}", ListNode::to_vec(&merge_iterative(a, b)));

    let a = ListNode::from_slice(&[1, 2, 4]);
    let b = ListNode::from_slice(&[1, 3, 4]);
    println!("recursive: {:?}", ListNode::to_vec(&merge_recursive(a, b)));
}

pub fn middle_node() {
    use drills::linked_lists::middle_node::{middle_fast_slow, middle_two_pass};

    let list = ListNode::from_slice(&[1, 2, 3, 4, 5]);
    println!("list: {:?}", ListNode::to_vec(&list));
    println!("two-pass:  {:?}", middle_two_pass(&list).map(|n| n.val));
    println!("fast/slow: {:?}", middle_fast_slow(&list).map(|n| n.val));
}

pub fn remove_nth_from_end() {
    use drills::linked_lists::remove_nth_from_end::remove_nth_from_end;

    let list = ListNode::from_slice(&[1, 2, 3, 4, 5]);
    println!("list: {:?}, remove 2nd from end", ListNode::to_vec(&list));
    let out = remove_nth_from_end(list, 2);
    println!("result: {:?}", ListNode::to_vec(&out));
}

pub fn add_two_numbers() {
    use drills::linked_lists::add_two_numbers::add_two_numbers;

    let a = ListNode::from_slice(&[2, 4, 3]);
    let b = ListNode::from_slice(&[5, 6, 4]);
    println!("342 + 465 stored least-significant first");
    let sum = add_two_numbers(a, b);
    println!("sum digits: {:?}", ListNode::to_vec(&sum));
}

pub fn linked_list_cycle() {
    use drills::linked_lists::linked_list_cycle::{cycle_start_floyd, cycle_start_visited};

    // 0 -> 1 -> 2 -> 3 -> 1
    let next = [Some(1), Some(2), Some(3), Some(1)];
    println!("links: {next:?}");
    println!("visited-set: {:?}", cycle_start_visited(&next, Some(0)));
    println!("floyd:       {:?}", cycle_start_floyd(&next, Some(0)));

    let straight = [Some(1), Some(2), None];
    println!("acyclic {straight:?}: {:?}", cycle_start_floyd(&straight, Some(0)));
}
