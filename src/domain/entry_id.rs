//! EntryId value object.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one [`Entry`](crate::models::Entry) instance.
///
/// Entries compare by identity, not by field values: two records holding the
/// same name, phone and email are still different records. Every id handed
/// out by [`EntryId::next`] is unique for the lifetime of the process.
///
/// # Example
///
/// ```
/// use address_bloc::domain::EntryId;
///
/// let a = EntryId::next();
/// let b = EntryId::next();
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

impl EntryId {
    /// Allocate a fresh id.
    pub fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
