//! Interactive console menu over a [`ContactStore`](crate::store::ContactStore).
//!
//! The main menu is a fixed, ordered table of [`MenuItem`]s. A numeric
//! selection resolves to a [`MenuAction`] and the controller dispatches on it
//! with a single `match`.

pub mod controller;

pub use controller::MenuController;

/// Everything the main menu can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ViewAllEntries,
    ViewEntryNumber,
    CreateEntry,
    SearchEntries,
    ImportCsv,
    DeleteAllEntries,
    Exit,
}

/// One row of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub number: u32,
    pub text: &'static str,
    pub action: MenuAction,
}

/// Main menu rows in display order.
pub const MENU_ITEMS: [MenuItem; 7] = [
    MenuItem {
        number: 1,
        text: "View all entries",
        action: MenuAction::ViewAllEntries,
    },
    MenuItem {
        number: 2,
        text: "View entry #",
        action: MenuAction::ViewEntryNumber,
    },
    MenuItem {
        number: 3,
        text: "Create an entry",
        action: MenuAction::CreateEntry,
    },
    MenuItem {
        number: 4,
        text: "Search for an entry",
        action: MenuAction::SearchEntries,
    },
    MenuItem {
        number: 5,
        text: "Import from a CSV",
        action: MenuAction::ImportCsv,
    },
    MenuItem {
        number: 6,
        text: "Delete all entries",
        action: MenuAction::DeleteAllEntries,
    },
    MenuItem {
        number: 7,
        text: "Exit",
        action: MenuAction::Exit,
    },
];

/// Resolve a typed selection to its action. Anything that is not one of the
/// listed numbers yields `None`.
pub fn action_for(selection: &str) -> Option<MenuAction> {
    let number: u32 = selection.trim().parse().ok()?;
    MENU_ITEMS
        .iter()
        .find(|item| item.number == number)
        .map(|item| item.action)
}
