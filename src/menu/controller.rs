//! Menu controller: prompts, screens and submenus.

use super::{action_for, MenuAction, MENU_ITEMS};
use crate::domain::EntryId;
use crate::error::MenuResult;
use crate::models::EntryUpdate;
use crate::store::ContactStore;
use std::io::{BufRead, Write};

/// ANSI sequence that clears the terminal and homes the cursor.
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// Whether the main loop keeps going after a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// What the user asked for from an entry's submenu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubmenuChoice {
    Next,
    Delete,
    Edit,
    MainMenu,
}

/// Drives a [`ContactStore`] from line-oriented input.
///
/// Generic over its streams so tests can script a session with an in-memory
/// reader and capture everything written.
pub struct MenuController<R, W> {
    store: ContactStore,
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> MenuController<R, W> {
    pub fn new(store: ContactStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
            clear_screen: true,
        }
    }

    /// Toggle the clear-screen sequence between screens.
    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    pub fn into_parts(self) -> (ContactStore, W) {
        (self.store, self.output)
    }

    /// Show the main menu until the user exits or input ends.
    pub fn run(&mut self) -> MenuResult<()> {
        while self.main_menu()? == Flow::Continue {}
        tracing::debug!("Menu loop finished");
        Ok(())
    }

    fn main_menu(&mut self) -> MenuResult<Flow> {
        writeln!(self.output, "Main Menu - {} entries", self.store.len())?;
        for item in &MENU_ITEMS {
            writeln!(self.output, "{} - {}", item.number, item.text)?;
        }

        let Some(selection) = self.prompt("Enter your selection: ")? else {
            return Ok(Flow::Exit);
        };
        writeln!(self.output)?;

        match action_for(&selection) {
            Some(action) => self.dispatch(action),
            None => {
                writeln!(self.output, "Sorry, that is not a valid input")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn dispatch(&mut self, action: MenuAction) -> MenuResult<Flow> {
        tracing::debug!(?action, "Dispatching menu action");
        match action {
            MenuAction::ViewAllEntries => self.view_all_entries(),
            MenuAction::ViewEntryNumber => self.view_entry_number(),
            MenuAction::CreateEntry => self.create_entry(),
            MenuAction::SearchEntries => self.search_entries(),
            MenuAction::ImportCsv => self.import_csv(),
            MenuAction::DeleteAllEntries => self.delete_all_entries(),
            MenuAction::Exit => {
                writeln!(self.output, "Good-bye!")?;
                Ok(Flow::Exit)
            }
        }
    }

    fn view_all_entries(&mut self) -> MenuResult<Flow> {
        if self.store.is_empty() {
            writeln!(self.output, "No entries to view")?;
            return Ok(Flow::Continue);
        }

        // Walk a snapshot of ids so deletes and renames don't disturb the walk
        let ids: Vec<EntryId> = self.store.entries().iter().map(|e| e.id()).collect();

        for id in ids {
            if self.store.get(id).is_none() {
                continue;
            }
            self.clear()?;
            self.show_entry(id)?;

            loop {
                writeln!(self.output, "n - next entry")?;
                let choice = match self.submenu_choice(true)? {
                    Some(choice) => choice,
                    None => return Ok(Flow::Exit),
                };

                match choice {
                    Ok(SubmenuChoice::Next) => break,
                    Ok(SubmenuChoice::Delete) => {
                        self.delete_entry(id)?;
                        break;
                    }
                    Ok(SubmenuChoice::Edit) => {
                        if self.edit_entry(id)? == Flow::Exit {
                            return Ok(Flow::Exit);
                        }
                    }
                    Ok(SubmenuChoice::MainMenu) => {
                        self.clear()?;
                        return Ok(Flow::Continue);
                    }
                    Err(selection) => {
                        self.clear()?;
                        writeln!(self.output, "{} is not a valid input", selection)?;
                        self.show_entry(id)?;
                    }
                }
            }
        }

        Ok(Flow::Continue)
    }

    fn view_entry_number(&mut self) -> MenuResult<Flow> {
        let count = self.store.len();
        if count == 0 {
            writeln!(self.output, "No entries to view")?;
            return Ok(Flow::Continue);
        }

        let Some(selection) = self.prompt(&format!("Entry to view (1 - {}): ", count))? else {
            return Ok(Flow::Exit);
        };

        match selection.trim().parse::<usize>() {
            Ok(number) if (1..=count).contains(&number) => {
                let text = self.store.entries()[number - 1].to_text();
                writeln!(self.output, "{}", text)?;
            }
            _ => writeln!(self.output, "Invalid selection.")?,
        }
        Ok(Flow::Continue)
    }

    fn create_entry(&mut self) -> MenuResult<Flow> {
        self.clear()?;
        writeln!(self.output, "New AddressBloc Entry")?;

        let Some(name) = self.prompt("Name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(phone_number) = self.prompt("Phone number: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(email) = self.prompt("Email: ")? else {
            return Ok(Flow::Exit);
        };

        self.store.add_entry(name, phone_number, email);

        self.clear()?;
        writeln!(self.output, "New entry created")?;
        Ok(Flow::Continue)
    }

    fn search_entries(&mut self) -> MenuResult<Flow> {
        let Some(name) = self.prompt("Search by name: ")? else {
            return Ok(Flow::Exit);
        };

        let found = self.store.binary_search(&name).map(|entry| entry.id());
        self.clear()?;

        let Some(id) = found else {
            writeln!(self.output, "No match found for {}", name)?;
            return Ok(Flow::Continue);
        };

        self.show_entry(id)?;
        loop {
            writeln!(self.output)?;
            let choice = match self.submenu_choice(false)? {
                Some(choice) => choice,
                None => return Ok(Flow::Exit),
            };

            match choice {
                Ok(SubmenuChoice::Delete) => {
                    self.clear()?;
                    self.delete_entry(id)?;
                    return Ok(Flow::Continue);
                }
                Ok(SubmenuChoice::Edit) => return self.edit_entry(id),
                // Next is never offered here
                Ok(SubmenuChoice::MainMenu | SubmenuChoice::Next) => {
                    self.clear()?;
                    return Ok(Flow::Continue);
                }
                Err(selection) => {
                    self.clear()?;
                    writeln!(self.output, "{} is not a valid input", selection)?;
                    self.show_entry(id)?;
                }
            }
        }
    }

    fn import_csv(&mut self) -> MenuResult<Flow> {
        loop {
            let Some(file_name) = self.prompt("Enter CSV file to import: ")? else {
                return Ok(Flow::Exit);
            };

            if file_name.is_empty() {
                self.clear()?;
                writeln!(self.output, "No CSV file read")?;
                return Ok(Flow::Continue);
            }

            match self.store.import_from_csv(&file_name) {
                Ok(count) => {
                    self.clear()?;
                    writeln!(
                        self.output,
                        "{} new entries added from {}",
                        count, file_name
                    )?;
                    return Ok(Flow::Continue);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "CSV import failed");
                    writeln!(
                        self.output,
                        "{} is not a valid CSV file, please enter the name of a valid CSV file",
                        file_name
                    )?;
                }
            }
        }
    }

    fn delete_all_entries(&mut self) -> MenuResult<Flow> {
        if self.store.is_empty() {
            writeln!(self.output, "There are no entries to delete")?;
            return Ok(Flow::Continue);
        }

        let Some(answer) = self.prompt("Are you SURE you want to delete entries? (y/N): ")? else {
            return Ok(Flow::Exit);
        };

        if answer == "y" {
            for entry in self.store.delete_all_entries() {
                writeln!(self.output, "{} has been deleted", entry.name())?;
            }
        }
        Ok(Flow::Continue)
    }

    fn edit_entry(&mut self, id: EntryId) -> MenuResult<Flow> {
        let Some(name) = self.prompt("Updated name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(phone_number) = self.prompt("Updated phone number: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(email) = self.prompt("Updated email: ")? else {
            return Ok(Flow::Exit);
        };

        let update = EntryUpdate::from_answers(&name, &phone_number, &email);
        match self.store.edit_entry(id, update) {
            Ok(entry) => {
                let text = entry.to_text();
                self.clear()?;
                writeln!(self.output, "Updated entry:")?;
                writeln!(self.output, "{}", text)?;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Edit target vanished");
                writeln!(self.output, "That entry is no longer in the address book")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn delete_entry(&mut self, id: EntryId) -> MenuResult<()> {
        match self.store.remove_entry(id) {
            Ok(entry) => writeln!(self.output, "{} has been deleted", entry.name())?,
            Err(e) => {
                tracing::warn!(error = %e, "Delete target vanished");
                writeln!(self.output, "That entry is no longer in the address book")?;
            }
        }
        Ok(())
    }

    fn show_entry(&mut self, id: EntryId) -> MenuResult<()> {
        if let Some(text) = self.store.get(id).map(|entry| entry.to_text()) {
            writeln!(self.output, "{}", text)?;
        }
        Ok(())
    }

    /// Print the shared d/e/m options and read one choice.
    ///
    /// `Ok(None)` means input ended; `Ok(Some(Err(s)))` carries an unknown
    /// selection for the caller to report.
    fn submenu_choice(
        &mut self,
        allow_next: bool,
    ) -> MenuResult<Option<Result<SubmenuChoice, String>>> {
        writeln!(self.output, "d - delete entry")?;
        writeln!(self.output, "e - edit this entry")?;
        writeln!(self.output, "m - return to main menu")?;

        let Some(selection) = self.read_line()? else {
            return Ok(None);
        };

        let choice = match selection.as_str() {
            "n" if allow_next => Ok(SubmenuChoice::Next),
            "d" => Ok(SubmenuChoice::Delete),
            "e" => Ok(SubmenuChoice::Edit),
            "m" => Ok(SubmenuChoice::MainMenu),
            _ => Err(selection),
        };
        Ok(Some(choice))
    }

    fn prompt(&mut self, label: &str) -> MenuResult<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Read one line without its terminator. `None` at end of input.
    fn read_line(&mut self) -> MenuResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn clear(&mut self) -> MenuResult<()> {
        if self.clear_screen {
            write!(self.output, "{}", CLEAR_SCREEN)?;
        }
        Ok(())
    }
}
