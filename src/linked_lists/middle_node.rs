use super::ListNode;

/// Count, then walk len/2 nodes. Two passes, returns the second middle
/// for even lengths.
pub fn middle_two_pass(head: &Option<Box<ListNode>>) -> Option<&ListNode> {
    let mut len = 0;
    let mut cur = head;
    while let Some(node) = cur {
        len += 1;
        cur = &node.next;
    }

    let mut cur = head;
    for _ in 0..len / 2 {
        cur = &cur.as_ref()?.next;
    }
    cur.as_deref()
}

/// Fast/slow walk: the fast cursor moves two hops per slow hop; when it
/// runs out, slow sits on the middle.
pub fn middle_fast_slow(head: &Option<Box<ListNode>>) -> Option<&ListNode> {
    let mut slow = head;
    let mut fast = head;
    while let Some(f) = fast {
        match &f.next {
            Some(f2) => {
                fast = &f2.next;
                slow = &slow.as_ref()?.next;
            }
            None => break,
        }
    }
    slow.as_deref()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_length_middle() {
        let list = ListNode::from_slice(&[1, 2, 3, 4, 5]);
        assert_eq!(middle_fast_slow(&list).map(|n| n.val), Some(3));
        assert_eq!(middle_two_pass(&list).map(|n| n.val), Some(3));
    }

    #[test]
    fn even_length_takes_the_second_middle() {
        let list = ListNode::from_slice(&[1, 2, 3, 4, 5, 6]);
        assert_eq!(middle_fast_slow(&list).map(|n| n.val), Some(4));
        assert_eq!(middle_two_pass(&list).map(|n| n.val), Some(4));
    }

    #[test]
    fn tiny_lists() {
        assert_eq!(middle_fast_slow(&None).map(|n| n.val), None);
        let one = ListNode::from_slice(&[9]);
        assert_eq!(middle_fast_slow(&one).map(|n| n.val), Some(9));
        assert_eq!(middle_two_pass(&one).map(|n| n.val), Some(9));
    }
}
