use std::collections::HashSet;

use drills::registry::{catalog, find, Category, Difficulty, RegistryError};

#[test]
fn catalog_covers_all_ten_categories() {
    let seen: HashSet<Category> = catalog().iter().map(|p| p.category).collect();
    assert_eq!(seen.len(), Category::ALL.len());
}

#[test]
fn slugs_are_unique_and_kebab_case() {
    let mut seen = HashSet::new();
    for p in catalog() {
        assert!(seen.insert(p.slug), "duplicate slug {}", p.slug);
        assert!(
            p.slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
            "slug {} is not kebab-case",
            p.slug
        );
    }
}

#[test]
fn lookup_round_trips_every_entry() {
    for p in catalog() {
        let found = find(p.slug).unwrap();
        assert_eq!(found.title, p.title);
    }
}

#[test]
fn unknown_slug_is_a_typed_error() {
    let err = find("quantum-sort").unwrap_err();
    assert!(matches!(err, RegistryError::UnknownProblem(ref s) if s == "quantum-sort"));
}

#[test]
fn catalog_serializes_to_json() {
    let json = serde_json::to_string(catalog()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), catalog().len());
    let first = &entries[0];
    assert!(first.get("slug").is_some());
    assert!(first.get("category").is_some());
    assert!(first.get("variants").unwrap().as_array().is_some());
}

#[test]
fn difficulty_ordering_reads_naturally() {
    assert!(Difficulty::Easy < Difficulty::Medium);
    assert!(Difficulty::Medium < Difficulty::Hard);
}
