//! Owned singly-linked chains.
//!
//! `ListNode` is the category's local node type: an owned `Box` chain, so
//! every structural rewrite is a move, never an aliased pointer.

pub mod add_two_numbers;
pub mod linked_list_cycle;
pub mod merge_two_lists;
pub mod middle_node;
pub mod remove_nth_from_end;
pub mod reverse_list;

#[derive(Debug, PartialEq, Eq)]
pub struct ListNode {
    pub val: i64,
    pub next: Option<Box<ListNode>>,
}

impl ListNode {
    pub fn new(val: i64) -> Self {
        Self { val, next: None }
    }

    /// Build a chain from the slice, head first.
    pub fn from_slice(vals: &[i64]) -> Option<Box<ListNode>> {
        let mut head = None;
        for &v in vals.iter().rev() {
            head = Some(Box::new(ListNode { val: v, next: head }));
        }
        head
    }

    /// Collect the chain's values, head first.
    pub fn to_vec(mut list: &Option<Box<ListNode>>) -> Vec<i64> {
        let mut out = Vec::new();
        while let Some(node) = list {
            out.push(node.val);
            list = &node.next;
        }
        out
    }
}
