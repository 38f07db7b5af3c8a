//! In-memory contact storage.
//!
//! The store owns its entries and keeps them ordered by name so lookups can
//! binary search.

pub mod contact_store;

pub use contact_store::ContactStore;
