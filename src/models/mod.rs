//! Data models for address book records.

pub mod entry;

pub use entry::{Entry, EntryUpdate};
