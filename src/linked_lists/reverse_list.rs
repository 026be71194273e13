use super::ListNode;

/// Pointer swing: detach each head node and push it onto the reversed
/// prefix. O(n), no allocation.
pub fn reverse_iterative(mut head: Option<Box<ListNode>>) -> Option<Box<ListNode>> {
    let mut reversed = None;
    while let Some(mut node) = head {
        head = node.next.take();
        node.next = reversed;
        reversed = Some(node);
    }
    reversed
}

/// Recursive variant, carrying the reversed prefix as an accumulator.
pub fn reverse_recursive(head: Option<Box<ListNode>>) -> Option<Box<ListNode>> {
    fn go(head: Option<Box<ListNode>>, acc: Option<Box<ListNode>>) -> Option<Box<ListNode>> {
        match head {
            None => acc,
            Some(mut node) => {
                let rest = node.next.take();
                node.next = acc;
                go(rest, Some(node))
            }
        }
    }
    go(head, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverses() {
        let list = ListNode::from_slice(&[1, 2, 3, 4, 5]);
        let rev = reverse_iterative(list);
        assert_eq!(ListNode::to_vec(&rev), vec![5, 4, 3, 2, 1]);

        let list = ListNode::from_slice(&[1, 2, 3, 4, 5]);
        let rev = reverse_recursive(list);
        assert_eq!(ListNode::to_vec(&rev), vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn short_lists() {
        assert_eq!(reverse_iterative(None), None);
        let one = reverse_recursive(ListNode::from_slice(&[7]));
        assert_eq!(ListNode::to_vec(&one), vec![7]);
    }
}
