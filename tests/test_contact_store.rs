//! Behavioral tests for the sorted contact store.
//!
//! These tests validate the ordering invariant across mutation sequences and
//! check binary search against the linear scan.

use address_bloc::{ContactStore, EntryId, EntryUpdate, StoreError};

mod common;
use common::*;

/// The store stays sorted after every single insertion.
#[test]
fn test_sorted_after_every_add() {
    let mut store = ContactStore::new();

    for name in scrambled_names(300) {
        store.add_entry(name, "555-0000", "x@blocmail.com");
        assert!(store.is_sorted(), "store unsorted after adding {}", store.len());
    }

    assert_eq!(store.len(), 300);
}

/// Binary search and the linear scan agree on every present name.
#[test]
fn test_binary_search_matches_iterative_search() {
    let mut store = ContactStore::new();
    let names = scrambled_names(200);
    for name in &names {
        store.add_entry(name.clone(), "", "");
    }

    for name in &names {
        let binary = store.binary_search(name).expect("binary search missed");
        let linear = store.iterative_search(name).expect("linear search missed");
        assert_eq!(binary.name(), name.as_str());
        assert_eq!(linear.name(), name.as_str());
    }
}

/// Absent names come back as None from both strategies.
#[test]
fn test_absent_names_not_found() {
    let mut store = ContactStore::new();
    for name in scrambled_names(50) {
        store.add_entry(name, "", "");
    }

    for absent in ["", "0", "ZZZZ", "aaaa", "ABCDE", "~"] {
        assert!(store.binary_search(absent).is_none(), "found {}", absent);
        assert!(store.iterative_search(absent).is_none(), "found {}", absent);
    }
}

/// The iterative search returns the first duplicate; binary search returns
/// some duplicate, the same one on every call.
#[test]
fn test_duplicate_names_are_resolved_deterministically() {
    let mut store = ContactStore::new();
    let first = store.add_entry("Joe", "1", "").id();
    for i in 2..=6 {
        store.add_entry("Joe", i.to_string(), "");
    }
    store.add_entry("Ann", "", "");
    store.add_entry("Zed", "", "");

    assert_eq!(store.iterative_search("Joe").unwrap().id(), first);

    let hit = store.binary_search("Joe").unwrap().id();
    for _ in 0..10 {
        assert_eq!(store.binary_search("Joe").unwrap().id(), hit);
    }
}

/// Removing an entry shrinks the store by one and makes that instance
/// unreachable, leaving other entries with the same name findable.
#[test]
fn test_remove_entry_with_duplicate_name() {
    let mut store = ContactStore::new();
    let keep = store.add_entry("Joe", "1", "").id();
    let gone = store.add_entry("Joe", "2", "").id();
    store.add_entry("Ann", "", "");

    let removed = store.remove_entry(gone).unwrap();
    assert_eq!(removed.phone_number(), "2");
    assert_eq!(store.len(), 2);
    assert_eq!(store.binary_search("Joe").unwrap().id(), keep);
    assert_eq!(store.iterative_search("Joe").unwrap().id(), keep);

    store.remove_entry(keep).unwrap();
    assert!(store.binary_search("Joe").is_none());
    assert!(store.iterative_search("Joe").is_none());
    assert!(store.is_sorted());
}

/// Removing something the store does not hold is an explicit NotFound.
#[test]
fn test_remove_unknown_entry() {
    let mut store = ContactStore::new();
    store.add_entry("Ann", "", "");
    let unknown = EntryId::next();

    assert_eq!(
        store.remove_entry(unknown).unwrap_err(),
        StoreError::NotFound(unknown)
    );
    assert_eq!(store.len(), 1);
}

/// Deleting everything is idempotent and leaves no prior entry reachable.
#[test]
fn test_delete_all_entries() {
    let mut store = ContactStore::new();
    store.delete_all_entries();
    assert_eq!(store.len(), 0);

    let names = scrambled_names(40);
    for name in &names {
        store.add_entry(name.clone(), "", "");
    }

    let removed = store.delete_all_entries();
    assert_eq!(removed.len(), 40);
    assert_eq!(store.len(), 0);
    for entry in &removed {
        assert!(store.get(entry.id()).is_none());
    }
    for name in &names {
        assert!(store.binary_search(name).is_none());
        assert!(store.iterative_search(name).is_none());
    }

    store.delete_all_entries();
    assert!(store.is_empty());
}

/// Mixed edits, removals and additions never break the ordering.
#[test]
fn test_mixed_mutations_keep_order() {
    let mut store = ContactStore::new();
    let mut ids: Vec<EntryId> = Vec::new();
    for name in scrambled_names(60) {
        ids.push(store.add_entry(name, "", "").id());
    }

    for (i, id) in ids.iter().enumerate() {
        match i % 3 {
            0 => {
                store.remove_entry(*id).unwrap();
            }
            1 => {
                let update = EntryUpdate {
                    name: Some(format!("renamed-{:03}", 60 - i)),
                    ..Default::default()
                };
                store.edit_entry(*id, update).unwrap();
            }
            _ => {
                store.add_entry(format!("extra-{}", i), "", "");
            }
        }
        assert!(store.is_sorted());
    }

    assert_eq!(store.len(), 60);
    for entry in store.entries() {
        assert_eq!(
            store.binary_search(entry.name()).unwrap().name(),
            entry.name()
        );
    }
}

/// Stored entries are shown in name order.
#[test]
fn test_entries_listing_order() {
    let mut store = ContactStore::new();
    for name in ["Sussie", "Bob", "Sally", "Joe", "Bill"] {
        store.add_entry(name, "", "");
    }

    assert_eq!(names(&store), vec!["Bill", "Bob", "Joe", "Sally", "Sussie"]);
    assert_eq!(store.entries()[2].name(), "Joe");
}
