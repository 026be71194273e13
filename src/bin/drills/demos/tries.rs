use super::timed;

pub fn trie() {
    use drills::tries::trie::Trie;

    let mut trie = Trie::new();
    trie.insert("apple");
    println!("insert \"apple\"");
    println!("search apple: {}", trie.search("apple"));
    println!("search app:   {}", trie.search("app"));
    println!("prefix app:   {}", trie.starts_with("app"));
    trie.insert("app");
    println!("after insert \"app\", search app: {}", trie.search("app"));
}

pub fn search_suggestions() {
    use drills::tries::search_suggestions::{suggest_sorted, suggest_trie};

    let products = ["mobile", "mouse", "moneypot", "monitor", "mousepad"];
    println!("products: {products:?}, typing \"mouse\"");
    for (i, row) in suggest_trie(&products, "mouse").iter().enumerate() {
        println!("  after '{}': {row:?}", &"mouse"[..=i]);
    }

    let many: Vec<String> = (0..30_000)
        .map(|i| format!("item{:05}", (i * 7919) % 30000))
        .collect();
    let refs: Vec<&str> = many.iter().map(String::as_str).collect();
    let (via_sort, sort_us) = timed(|| suggest_sorted(&refs, "item12"));
    let (via_trie, trie_us) = timed(|| suggest_trie(&refs, "item12"));
    assert_eq!(via_sort, via_trie);
    println!("30k products: sorted scan {sort_us}us, trie walk {trie_us}us");
}

pub fn word_dictionary() {
    use drills::tries::word_dictionary::WordDictionary;

    let mut dict = WordDictionary::new();
    for w in ["bad", "dad", "mad"] {
        dict.add_word(w);
    }
    println!("words: bad, dad, mad");
    for q in ["pad", "bad", ".ad", "b.."] {
        println!("search {q}: {}", dict.search(q));
    }
}
