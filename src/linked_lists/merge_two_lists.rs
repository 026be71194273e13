use super::ListNode;

/// Structural recursion: the smaller head owns the merge of the rest.
pub fn merge_recursive(
    a: Option<Box<ListNode>>,
    b: Option<Box<ListNode>>,
) -> Option<Box<ListNode>> {
    match (a, b) {
        (None, rest) | (rest, None) => rest,
        (Some(mut x), Some(mut y)) => {
            if x.val <= y.val {
                x.next = merge_recursive(x.next.take(), Some(y));
                Some(x)
            } else {
                y.next = merge_recursive(Some(x), y.next.take());
                Some(y)
            }
        }
    }
}

/// Tail-cursor build: detach the smaller head and append it, then hang
/// whichever chain survives off the tail.
pub fn merge_iterative(
    mut a: Option<Box<ListNode>>,
    mut b: Option<Box<ListNode>>,
) -> Option<Box<ListNode>> {
    let mut head = None;
    let mut tail = &mut head;
    while a.is_some() && b.is_some() {
        let src = if a.as_ref().unwrap().val <= b.as_ref().unwrap().val {
            &mut a
        } else {
            &mut b
        };
        let mut node = src.take().unwrap();
        *src = node.next.take();
        tail = &mut tail.insert(node).next;
    }
    *tail = a.or(b);
    head
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merges_interleaved() {
        let a = ListNode::from_slice(&[1, 2, 4]);
        let b = ListNode::from_slice(&[1, 3, 4]);
        let merged = merge_iterative(a, b);
        assert_eq!(ListNode::to_vec(&merged), vec![1, 1, 2, 3, 4, 4]);

        let a = ListNode::from_slice(&[1, 2, 4]);
        let b = ListNode::from_slice(&[1, 3, 4]);
        let merged = merge_recursive(a, b);
        assert_eq!(ListNode::to_vec(&merged), vec![1, 1, 2, 3, 4, 4]);
    }

    #[test]
    fn one_side_empty() {
        let merged = merge_iterative(None, ListNode::from_slice(&[0]));
        assert_eq!(ListNode::to_vec(&merged), vec![0]);
        assert_eq!(merge_recursive(None, None), None);
    }

    #[test]
    fn disjoint_ranges() {
        let a = ListNode::from_slice(&[1, 2]);
        let b = ListNode::from_slice(&[8, 9]);
        let merged = merge_iterative(a, b);
        assert_eq!(ListNode::to_vec(&merged), vec![1, 2, 8, 9]);
    }
}
