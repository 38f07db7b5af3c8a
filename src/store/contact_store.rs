//! The address book: a name-ordered collection of entries.
//!
//! Every mutation keeps `entries` sorted ascending by name using plain byte-wise
//! `str` ordering (no case folding, no locale collation). `binary_search`
//! relies on that ordering; `iterative_search` does not and serves as the
//! reference answer.

use crate::domain::EntryId;
use crate::error::{ImportResult, StoreError, StoreResult};
use crate::import::CsvImporter;
use crate::models::{Entry, EntryUpdate};
use std::path::Path;

/// Sorted, exclusively owned collection of [`Entry`] records.
///
/// Duplicate names are allowed. A newly inserted entry lands after every
/// existing entry with the same name, so equal names keep insertion order.
#[derive(Debug, Default)]
pub struct ContactStore {
    entries: Vec<Entry>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries in name order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look an entry up by identity.
    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    /// True when `entries` is in ascending name order.
    pub fn is_sorted(&self) -> bool {
        self.entries
            .windows(2)
            .all(|pair| pair[0].name() <= pair[1].name())
    }

    /// Create an entry and insert it at its sorted position.
    pub fn add_entry(
        &mut self,
        name: impl Into<String>,
        phone_number: impl Into<String>,
        email: impl Into<String>,
    ) -> &Entry {
        self.insert(Entry::new(name, phone_number, email))
    }

    /// Insert an existing entry at its sorted position.
    pub fn insert(&mut self, entry: Entry) -> &Entry {
        let index = self
            .entries
            .partition_point(|existing| existing.name() <= entry.name());

        self.entries.insert(index, entry);
        debug_assert!(self.is_sorted());
        &self.entries[index]
    }

    /// Remove the entry with this identity and hand it back.
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` when the store does not hold that entry.
    pub fn remove_entry(&mut self, id: EntryId) -> StoreResult<Entry> {
        let index = self.position(id)?;
        Ok(self.entries.remove(index))
    }

    /// Empty the store, returning the removed entries in their former order.
    ///
    /// The old sequence is swapped out whole, so nothing is removed from a
    /// sequence that is being walked. Calling this on an empty store is a
    /// no-op.
    pub fn delete_all_entries(&mut self) -> Vec<Entry> {
        std::mem::take(&mut self.entries)
    }

    /// Apply `update` to an entry, moving it if its name changed.
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` when the store does not hold that entry.
    pub fn edit_entry(&mut self, id: EntryId, update: EntryUpdate) -> StoreResult<&Entry> {
        let index = self.position(id)?;
        if update.is_empty() {
            return Ok(&self.entries[index]);
        }

        let EntryUpdate {
            name,
            phone_number,
            email,
        } = update;

        let entry = &mut self.entries[index];
        if let Some(phone_number) = phone_number {
            entry.set_phone_number(phone_number);
        }
        if let Some(email) = email {
            entry.set_email(email);
        }

        match name {
            Some(name) if name != self.entries[index].name() => {
                let mut entry = self.entries.remove(index);
                entry.set_name(name);
                Ok(self.insert(entry))
            }
            _ => Ok(&self.entries[index]),
        }
    }

    /// Binary search over the sorted entries for an exact, case-sensitive
    /// name match.
    ///
    /// Probes the midpoint of the half-open range `[lower, upper)`: an equal
    /// name is returned at once, a smaller name moves the search to the upper
    /// half, a larger one to the lower half. With duplicate names the result
    /// is the first equal entry a probe lands on; the search does not walk
    /// back to the first of the run. For a given sequence this is
    /// deterministic.
    pub fn binary_search(&self, name: &str) -> Option<&Entry> {
        let mut lower = 0;
        let mut upper = self.entries.len();

        while lower < upper {
            let mid = lower + (upper - lower) / 2;
            let candidate = &self.entries[mid];

            if candidate.name() == name {
                return Some(candidate);
            } else if candidate.name() < name {
                lower = mid + 1;
            } else {
                upper = mid;
            }
        }

        None
    }

    /// Linear scan returning the first entry named exactly `name`.
    pub fn iterative_search(&self, name: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.name() == name)
    }

    /// Import every row of a CSV file and return how many entries were added.
    ///
    /// The whole file is parsed before anything is inserted, so a failed
    /// import leaves the store untouched.
    ///
    /// # Errors
    ///
    /// Propagates the importer's `ImportError` when the file is missing,
    /// unreadable or has a malformed line.
    pub fn import_from_csv(&mut self, path: impl AsRef<Path>) -> ImportResult<usize> {
        let rows = CsvImporter::new().read_rows(path)?;
        let count = rows.len();

        self.entries.reserve(count);
        for row in rows {
            self.add_entry(row.name, row.phone_number, row.email);
        }
        Ok(count)
    }

    fn position(&self, id: EntryId) -> StoreResult<usize> {
        self.entries
            .iter()
            .position(|entry| entry.id() == id)
            .ok_or(StoreError::NotFound(id))
    }
}
