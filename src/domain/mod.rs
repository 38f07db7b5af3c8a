//! Domain value objects.
//!
//! Type-safe wrappers for the concepts the store keys on.

pub mod entry_id;

pub use entry_id::EntryId;
