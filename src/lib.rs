//! AddressBloc - a console address book.
//!
//! Contacts live in memory in a store that is always sorted by name, which lets
//! lookups binary search. Entries can also be bulk imported from plain
//! `name,phone,email` files.
//!
//! # Architecture
//!
//! - **models**: The `Entry` record and edit requests
//! - **domain**: Identity for entries
//! - **store**: The sorted `ContactStore` and its search strategies
//! - **import**: CSV row reader feeding the store
//! - **menu**: Interactive console menu driving the store
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod config;
pub mod domain;
pub mod error;
pub mod import;
pub mod menu;
pub mod models;
pub mod store;

pub use config::Config;
pub use domain::EntryId;
pub use error::{ConfigError, ImportError, MenuError, StoreError};
pub use import::{CsvImporter, CsvRow};
pub use menu::{MenuAction, MenuController};
pub use models::{Entry, EntryUpdate};
pub use store::ContactStore;
