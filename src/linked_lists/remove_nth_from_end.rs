use super::ListNode;

/// Remove the nth node from the end (1-based). Counts the length, then
/// splices at len - n. Out-of-range n leaves the list untouched.
pub fn remove_nth_from_end(head: Option<Box<ListNode>>, n: usize) -> Option<Box<ListNode>> {
    let mut len = 0;
    {
        let mut cur = &head;
        while let Some(node) = cur {
            len += 1;
            cur = &node.next;
        }
    }
    if n == 0 || n > len {
        return head;
    }

    let mut head = head;
    let mut cur = &mut head;
    for _ in 0..len - n {
        cur = &mut cur.as_mut().unwrap().next;
    }
    let removed = cur.take().unwrap();
    *cur = removed.next;
    head
}
