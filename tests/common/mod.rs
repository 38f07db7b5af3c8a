//! Shared helpers for the integration tests.

use address_bloc::{ContactStore, Entry};
use std::path::PathBuf;

/// Path to a file under `tests/fixtures`.
#[allow(dead_code)]
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Names in store order.
#[allow(dead_code)]
pub fn names(store: &ContactStore) -> Vec<String> {
    store
        .entries()
        .iter()
        .map(|entry| entry.name().to_string())
        .collect()
}

/// Assert that an entry carries the expected fields.
#[allow(dead_code)]
pub fn assert_entry(entry: &Entry, name: &str, phone_number: &str, email: &str) {
    assert_eq!(entry.name(), name, "name mismatch");
    assert_eq!(entry.phone_number(), phone_number, "phone number mismatch");
    assert_eq!(entry.email(), email, "email mismatch");
}

/// Deterministic pseudo-random names, some repeated, in unsorted order.
#[allow(dead_code)]
pub fn scrambled_names(count: usize) -> Vec<String> {
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    (0..count)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let letters = b"ABCDEFGHIJabcdefghij";
            let a = letters[(state % 20) as usize] as char;
            let b = letters[((state >> 8) % 20) as usize] as char;
            let c = letters[((state >> 16) % 20) as usize] as char;
            format!("{}{}{}", a, b, c)
        })
        .collect()
}
