//! Record Store Tests
//!
//! Tests verify:
//! - Sorted insertion (head, interior, tail, duplicates)
//! - Linear search by surname
//! - Predicate deletion of head, interior and runs
//! - Average age
//! - Restartable enumeration

use rollbook::record::{Date, Student};
use rollbook::store::RecordStore;

// =============================================================================
// Helper Functions
// =============================================================================

fn student(surname: &str, name: &str, grades: [u8; 3]) -> Student {
    Student::new(surname, name, Date::new(1, 1, 2008), grades)
}

fn store_with(surnames: &[&str]) -> RecordStore {
    let mut store = RecordStore::new();
    for surname in surnames {
        store.insert(student(surname, "X", [5, 5, 5])).unwrap();
    }
    store
}

fn surnames(store: &RecordStore) -> Vec<String> {
    store.iter().map(|s| s.surname().to_string()).collect()
}

fn names(store: &RecordStore) -> Vec<String> {
    store.iter().map(|s| s.name().to_string()).collect()
}

// =============================================================================
// Insert Tests
// =============================================================================

#[test]
fn test_new_store_is_empty() {
    let store = RecordStore::new();
    assert_eq!(store.len(), 0);
    assert!(store.is_empty());
    assert!(store.first().is_none());
    assert_eq!(store.iter().count(), 0);
}

#[test]
fn test_insert_sorts_by_surname() {
    let store = store_with(&["Sydor", "Ivanov", "Melnichuk"]);
    assert_eq!(surnames(&store), vec!["Ivanov", "Melnichuk", "Sydor"]);
}

#[test]
fn test_insert_new_head() {
    let store = store_with(&["Melnichuk", "Fedolak"]);
    assert_eq!(store.first().unwrap().surname(), "Fedolak");
}

#[test]
fn test_insert_at_tail() {
    let store = store_with(&["Fedolak", "Melnichuk", "Sydor"]);
    assert_eq!(surnames(&store), vec!["Fedolak", "Melnichuk", "Sydor"]);
}

#[test]
fn test_insert_is_case_sensitive() {
    // Uppercase letters sort before lowercase byte-wise
    let store = store_with(&["adams", "Zeta", "Adams"]);
    assert_eq!(surnames(&store), vec!["Adams", "Zeta", "adams"]);
}

#[test]
fn test_duplicates_are_not_merged() {
    let store = store_with(&["Ivanov", "Ivanov", "Ivanov"]);
    assert_eq!(store.len(), 3);
}

#[test]
fn test_duplicate_of_head_goes_after_head() {
    let mut store = RecordStore::new();
    store.insert(student("Ivanov", "First", [5, 5, 5])).unwrap();
    store.insert(student("Sydor", "S", [5, 5, 5])).unwrap();
    store.insert(student("Ivanov", "Second", [5, 5, 5])).unwrap();

    assert_eq!(names(&store), vec!["First", "Second", "S"]);
}

#[test]
fn test_duplicate_interior_goes_before_existing_equal() {
    let mut store = RecordStore::new();
    store.insert(student("Adams", "A", [5, 5, 5])).unwrap();
    store.insert(student("Ivanov", "First", [5, 5, 5])).unwrap();
    store.insert(student("Ivanov", "Second", [5, 5, 5])).unwrap();

    // Scan stops at the first equal surname past the head
    assert_eq!(names(&store), vec!["A", "Second", "First"]);
}

#[test]
fn test_order_is_non_decreasing_after_many_inserts() {
    let input = [
        "Pushchak", "Ivanov", "Sydor", "Fedolak", "Ivanov", "Samokhodska", "Melnichuk", "Abel",
        "Zorin", "Fedolak",
    ];
    let store = store_with(&input);

    let got = surnames(&store);
    assert_eq!(got.len(), input.len());
    assert!(got.windows(2).all(|w| w[0] <= w[1]));
}

// =============================================================================
// Find Tests
// =============================================================================

#[test]
fn test_find_existing() {
    let store = store_with(&["Sydor", "Ivanov"]);
    assert_eq!(store.find("Sydor").unwrap().surname(), "Sydor");
}

#[test]
fn test_find_missing() {
    let store = store_with(&["Sydor", "Ivanov"]);
    assert!(store.find("Petrenko").is_none());
    assert!(store.find("sydor").is_none());
}

#[test]
fn test_find_in_empty_store() {
    assert!(RecordStore::new().find("Sydor").is_none());
}

#[test]
fn test_find_returns_first_match() {
    let mut store = RecordStore::new();
    store.insert(student("Ivanov", "First", [5, 5, 5])).unwrap();
    store.insert(student("Ivanov", "Second", [5, 5, 5])).unwrap();
    assert_eq!(store.find("Ivanov").unwrap().name(), "First");
}

// =============================================================================
// Delete Tests
// =============================================================================

#[test]
fn test_delete_head() {
    let mut store = store_with(&["A", "B", "C"]);
    assert_eq!(store.delete_where(|s| s.surname() == "A"), 1);
    assert_eq!(surnames(&store), vec!["B", "C"]);
}

#[test]
fn test_delete_interior_and_tail() {
    let mut store = store_with(&["A", "B", "C", "D"]);
    assert_eq!(store.delete_where(|s| s.surname() == "B" || s.surname() == "D"), 2);
    assert_eq!(surnames(&store), vec!["A", "C"]);
}

#[test]
fn test_delete_consecutive_run() {
    let mut store = store_with(&["A", "B", "C", "D", "E"]);
    let removed = store.delete_where(|s| ["B", "C", "D"].contains(&s.surname()));
    assert_eq!(removed, 3);
    assert_eq!(surnames(&store), vec!["A", "E"]);
}

#[test]
fn test_delete_all() {
    let mut store = store_with(&["A", "B", "C"]);
    assert_eq!(store.delete_where(|_| true), 3);
    assert!(store.is_empty());
}

#[test]
fn test_delete_none() {
    let mut store = store_with(&["A", "B", "C"]);
    assert_eq!(store.delete_where(|_| false), 0);
    assert_eq!(surnames(&store), vec!["A", "B", "C"]);
}

#[test]
fn test_delete_leaves_non_matching_subsequence() {
    let mut store = RecordStore::new();
    let input = [
        ("A", [1, 1, 1]),
        ("B", [5, 1, 1]),
        ("C", [2, 2, 2]),
        ("D", [3, 3, 3]),
        ("E", [4, 4, 4]),
        ("F", [1, 2, 1]),
    ];
    for (surname, grades) in input {
        store.insert(student(surname, "X", grades)).unwrap();
    }

    let predicate = |s: &Student| s.grades()[0] < 3;
    let expected: Vec<String> = store
        .iter()
        .filter(|s| !predicate(*s))
        .map(|s| s.surname().to_string())
        .collect();

    store.delete_where(predicate);
    assert_eq!(surnames(&store), expected);
    assert_eq!(surnames(&store), vec!["B", "D", "E"]);
}

#[test]
fn test_delete_is_idempotent() {
    let mut store = store_with(&["A", "B", "C", "D"]);
    let predicate = |s: &Student| s.surname() < "C";

    store.delete_where(predicate);
    let once = surnames(&store);
    assert_eq!(store.delete_where(predicate), 0);
    assert_eq!(surnames(&store), once);
}

// =============================================================================
// Average Age Tests
// =============================================================================

#[test]
fn test_average_age_empty_is_zero() {
    let store = RecordStore::new();
    assert_eq!(store.average_age(&Date::new(15, 6, 2024)), 0.0);
}

#[test]
fn test_average_age_single_record() {
    let mut store = RecordStore::new();
    store
        .insert(Student::new("Melnichuk", "Mariia", Date::new(8, 1, 2008), [3, 5, 5]))
        .unwrap();
    assert_eq!(store.average_age(&Date::new(15, 6, 2024)), 16.0);
}

#[test]
fn test_average_age_mean() {
    let mut store = RecordStore::new();
    store
        .insert(Student::new("A", "A", Date::new(8, 1, 2008), [5, 5, 5]))
        .unwrap();
    store
        .insert(Student::new("B", "B", Date::new(8, 7, 2008), [5, 5, 5]))
        .unwrap();
    // 16 and 15
    assert_eq!(store.average_age(&Date::new(15, 6, 2024)), 15.5);
}

// =============================================================================
// Enumeration Tests
// =============================================================================

#[test]
fn test_enumeration_is_restartable_and_live() {
    let mut store = store_with(&["B", "A"]);
    assert_eq!(surnames(&store), vec!["A", "B"]);
    assert_eq!(surnames(&store), vec!["A", "B"]);

    store.insert(student("C", "X", [5, 5, 5])).unwrap();
    assert_eq!(surnames(&store), vec!["A", "B", "C"]);
    assert_eq!(store.iter().len(), 3);
}

#[test]
fn test_into_iterator_for_reference() {
    let store = store_with(&["B", "A"]);
    let mut seen = Vec::new();
    for record in &store {
        seen.push(record.surname());
    }
    assert_eq!(seen, vec!["A", "B"]);
}

#[test]
fn test_clear_releases_everything() {
    let mut store = store_with(&["A", "B"]);
    store.clear();
    assert!(store.is_empty());
}
