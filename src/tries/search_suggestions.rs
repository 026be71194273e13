//! Search Suggestions System: after each typed character, up to three
//! lexicographically smallest products matching the prefix so far.

use std::collections::BTreeMap;

const SUGGESTIONS: usize = 3;

#[derive(Default)]
struct Node {
    // BTreeMap keeps children ordered, so a plain DFS yields words
    // lexicographically
    children: BTreeMap<char, Node>,
    terminal: bool,
}

/// Trie walk: descend one edge per typed character and collect the first
/// three words under the reached node.
pub fn suggest_trie(products: &[&str], search_word: &str) -> Vec<Vec<String>> {
    let mut root = Node::default();
    for p in products {
        let mut node = &mut root;
        for c in p.chars() {
            node = node.children.entry(c).or_default();
        }
        node.terminal = true;
    }

    fn collect(node: &Node, prefix: &mut String, out: &mut Vec<String>) {
        if out.len() == SUGGESTIONS {
            return;
        }
        if node.terminal {
            out.push(prefix.clone());
        }
        for (&c, child) in &node.children {
            if out.len() == SUGGESTIONS {
                return;
            }
            prefix.push(c);
            collect(child, prefix, out);
            prefix.pop();
        }
    }

    let mut results = Vec::new();
    let mut node = Some(&root);
    let mut typed = String::new();
    for c in search_word.chars() {
        typed.push(c);
        node = node.and_then(|n| n.children.get(&c));
        let mut out = Vec::new();
        if let Some(n) = node {
            collect(n, &mut typed.clone(), &mut out);
        }
        results.push(out);
    }
    results
}

/// Sorted variant: keep a shrinking window of candidates with converging
/// binary searches over the sorted product list.
pub fn suggest_sorted(products: &[&str], search_word: &str) -> Vec<Vec<String>> {
    let mut sorted: Vec<&str> = products.to_vec();
    sorted.sort_unstable();

    let mut results = Vec::new();
    let mut prefix = String::new();
    for c in search_word.chars() {
        prefix.push(c);
        let start = sorted.partition_point(|p| *p < prefix.as_str());
        let matches = sorted[start..]
            .iter()
            .take_while(|p| p.starts_with(&prefix))
            .take(SUGGESTIONS)
            .map(|p| p.to_string())
            .collect();
        results.push(matches);
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_case() {
        let products = ["mobile", "mouse", "moneypot", "monitor", "mousepad"];
        let expected = vec![
            vec!["mobile".to_string(), "moneypot".into(), "monitor".into()],
            vec!["mobile".to_string(), "moneypot".into(), "monitor".into()],
            vec!["mouse".to_string(), "mousepad".into()],
            vec!["mouse".to_string(), "mousepad".into()],
            vec!["mouse".to_string(), "mousepad".into()],
        ];
        assert_eq!(suggest_sorted(&products, "mouse"), expected);
        assert_eq!(suggest_trie(&products, "mouse"), expected);
    }

    #[test]
    fn prefix_dies_midway() {
        let products = ["havana"];
        let out = suggest_sorted(&products, "tatiana");
        assert!(out.iter().all(|v| v.is_empty()));
        assert_eq!(suggest_trie(&products, "tatiana"), out);
    }

    #[test]
    fn product_equal_to_query() {
        let products = ["bags", "baggage", "banner", "box", "cloths"];
        let expected_last = vec!["bags".to_string()];
        let out = suggest_sorted(&products, "bags");
        assert_eq!(out.last().unwrap(), &expected_last);
        assert_eq!(suggest_trie(&products, "bags"), out);
    }

    #[test]
    fn variants_agree() {
        let products = ["alpha", "alps", "alpaca", "beta", "al"];
        assert_eq!(
            suggest_trie(&products, "alp"),
            suggest_sorted(&products, "alp")
        );
    }
}
