//! Entry model representing one contact in the address book.

use crate::domain::EntryId;
use std::fmt;

/// A single contact record.
///
/// Fields are free text: nothing is validated and empty strings are allowed.
/// Equality is identity: two entries are equal only when they carry the same
/// [`EntryId`], regardless of their field values.
#[derive(Debug)]
pub struct Entry {
    id: EntryId,
    name: String,
    phone_number: String,
    email: String,
}

impl Entry {
    /// Create a new entry with a fresh identity.
    pub fn new(
        name: impl Into<String>,
        phone_number: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: EntryId::next(),
            name: name.into(),
            phone_number: phone_number.into(),
            email: email.into(),
        }
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Replace the name.
    ///
    /// Only use this on an entry that is not held by a store; renaming a
    /// stored entry goes through
    /// [`ContactStore::edit_entry`](crate::store::ContactStore::edit_entry) so
    /// the store can keep its ordering.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_phone_number(&mut self, phone_number: impl Into<String>) {
        self.phone_number = phone_number.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Render the entry as three lines: name, phone number, email.
    pub fn to_text(&self) -> String {
        format!(
            "Name: {}\nPhone Number: {}\nEmail: {}",
            self.name, self.phone_number, self.email
        )
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Entry {}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

/// Field changes for an existing entry.
///
/// `None` keeps the current value. Blank input from the menu maps to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryUpdate {
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
}

impl EntryUpdate {
    /// Build an update from raw prompt answers, treating empty strings as
    /// "leave unchanged".
    pub fn from_answers(name: &str, phone_number: &str, email: &str) -> Self {
        let keep_if_blank = |s: &str| (!s.is_empty()).then(|| s.to_string());
        Self {
            name: keep_if_blank(name),
            phone_number: keep_if_blank(phone_number),
            email: keep_if_blank(email),
        }
    }

    /// True when the update changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone_number.is_none() && self.email.is_none()
    }
}
