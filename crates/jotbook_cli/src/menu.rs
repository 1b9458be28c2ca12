//! Interactive menu loop.
//!
//! # Responsibility
//! - Translate single-character commands into notebook operations.
//! - Keep the session alive across bad input; only quit ends the loop.
//!
//! # Invariants
//! - Commands dispatch through a tagged enum and a pattern match, never a
//!   runtime lookup table.
//! - An unknown id or an unrecognized command prints a message and
//!   returns to the menu; neither ends the session.
//! - Quit saves before exiting; save never exits.

use crate::error::AppResult;
use crate::prompt::prompt;
use jotbook_core::{Notebook, NotebookStore};
use log::info;
use std::io::{BufRead, Write};

const MENU_TEXT: &str = "
Notebook Menu
1. Show all Notes
2. Search Notes
3. Add Note
4. Modify Note
5. Quit
6. Save changes";

/// One recognized menu command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ShowAll,
    Search,
    Add,
    Edit,
    Quit,
    Save,
}

impl Command {
    /// Parses a trimmed input line into a command, if recognized.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::ShowAll),
            "2" => Some(Self::Search),
            "3" => Some(Self::Add),
            "4" => Some(Self::Edit),
            "5" => Some(Self::Quit),
            "6" => Some(Self::Save),
            _ => None,
        }
    }
}

/// The interactive session: one notebook, its save file, and the streams
/// the user talks through.
pub struct Menu<R, W> {
    store: NotebookStore,
    notebook: Notebook,
    file_name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(
        store: NotebookStore,
        notebook: Notebook,
        file_name: String,
        input: R,
        output: W,
    ) -> Self {
        Self {
            store,
            notebook,
            file_name,
            input,
            output,
        }
    }

    /// Runs the menu until quit. End of input is treated as quit so the
    /// notebook is still saved when stdin closes.
    pub fn run(&mut self) -> AppResult<()> {
        loop {
            writeln!(self.output, "{MENU_TEXT}")?;
            let answer = prompt(&mut self.input, &mut self.output, "Enter an option: ")?;
            let Some(answer) = answer else {
                self.quit()?;
                return Ok(());
            };

            match Command::parse(&answer) {
                Some(Command::ShowAll) => self.show_all()?,
                Some(Command::Search) => self.search_notes()?,
                Some(Command::Add) => self.add_note()?,
                Some(Command::Edit) => self.edit_note()?,
                Some(Command::Save) => self.save()?,
                Some(Command::Quit) => {
                    self.quit()?;
                    return Ok(());
                }
                None => {
                    writeln!(self.output, "{} is not a valid choice", answer.trim())?;
                }
            }
        }
    }

    fn show_all(&mut self) -> AppResult<()> {
        for note in self.notebook.notes() {
            writeln!(self.output, "{note}")?;
        }
        Ok(())
    }

    fn search_notes(&mut self) -> AppResult<()> {
        let Some(filter) = prompt(&mut self.input, &mut self.output, "Search for: ")? else {
            return Ok(());
        };
        for note in self.notebook.search(&filter) {
            writeln!(self.output, "{note}")?;
        }
        Ok(())
    }

    fn add_note(&mut self) -> AppResult<()> {
        let Some(memo) = prompt(&mut self.input, &mut self.output, "Enter a memo: ")? else {
            return Ok(());
        };
        let Some(tags) = prompt(
            &mut self.input,
            &mut self.output,
            "Enter tags (separated by spaces): ",
        )?
        else {
            return Ok(());
        };
        self.notebook.new_note(memo, tags);
        writeln!(self.output, "Your note has been added.")?;
        info!(
            "event=note_added module=cli status=ok notes={}",
            self.notebook.len()
        );
        Ok(())
    }

    fn edit_note(&mut self) -> AppResult<()> {
        let Some(id) = prompt(&mut self.input, &mut self.output, "Enter a note id: ")? else {
            return Ok(());
        };

        let Some(current) = self.notebook.find_note(&id).map(|note| note.to_string()) else {
            writeln!(
                self.output,
                "Can't modify this note: Invalid note id {id}"
            )?;
            return Ok(());
        };
        writeln!(self.output, "{current}")?;

        let Some(memo) = prompt(&mut self.input, &mut self.output, "Enter new memo: ")? else {
            return Ok(());
        };
        let Some(tags) = prompt(
            &mut self.input,
            &mut self.output,
            "Enter new tags (separated by spaces): ",
        )?
        else {
            return Ok(());
        };

        // The id was resolved above, so this cannot miss; report the
        // lookup failure anyway rather than swallowing it.
        if self.notebook.edit_note(&id, memo, tags).is_err() {
            writeln!(self.output, "No such note...")?;
        }
        Ok(())
    }

    fn save(&mut self) -> AppResult<()> {
        self.store.save(&self.file_name, &self.notebook)?;
        writeln!(self.output, "Saved to {}.", self.file_name)?;
        Ok(())
    }

    fn quit(&mut self) -> AppResult<()> {
        self.save()?;
        writeln!(self.output, "Thank you for using your notebook today.")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Command, Menu};
    use jotbook_core::{Notebook, NotebookStore};
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run_session(notebook: Notebook, script: &str) -> (Notebook, String, NotebookStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = NotebookStore::new(dir.path().join("notebooks"));
        let input = Cursor::new(script.as_bytes().to_vec());
        let mut menu = Menu::new(
            store,
            notebook,
            "Notebook_object_0.json".to_string(),
            input,
            Vec::new(),
        );
        menu.run().unwrap();
        let transcript = String::from_utf8(menu.output).unwrap();
        (menu.notebook, transcript, menu.store, dir)
    }

    #[test]
    fn command_parse_maps_digits_and_rejects_everything_else() {
        assert_eq!(Command::parse("1"), Some(Command::ShowAll));
        assert_eq!(Command::parse("2"), Some(Command::Search));
        assert_eq!(Command::parse(" 3 "), Some(Command::Add));
        assert_eq!(Command::parse("4"), Some(Command::Edit));
        assert_eq!(Command::parse("5"), Some(Command::Quit));
        assert_eq!(Command::parse("6"), Some(Command::Save));
        assert_eq!(Command::parse("7"), None);
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("quit"), None);
    }

    #[test]
    fn add_then_show_lists_the_rendered_note() {
        let script = "3\nBuy milk\nerrand\n1\n5\n";
        let (notebook, transcript, _store, _dir) = run_session(Notebook::new(), script);

        assert_eq!(notebook.len(), 1);
        assert!(transcript.contains("Your note has been added."));
        assert!(transcript.contains("Note 0\n\nBuy milk\n\n#errand\n"));
        assert!(transcript.contains("Thank you for using your notebook today."));
    }

    #[test]
    fn search_prints_only_matching_notes() {
        let mut notebook = Notebook::new();
        notebook.new_note("Buy milk", "errand");
        notebook.new_note("Call mom", "family urgent");

        let script = "2\nfamily\n5\n";
        let (_notebook, transcript, _store, _dir) = run_session(notebook, script);

        assert!(transcript.contains("Note 1\n\nCall mom\n\n#family #urgent\n"));
        assert!(!transcript.contains("Buy milk"));
    }

    #[test]
    fn edit_with_unknown_id_reports_and_keeps_the_session_alive() {
        let script = "4\n99\n5\n";
        let (notebook, transcript, _store, _dir) = run_session(Notebook::new(), script);

        assert!(notebook.is_empty());
        assert!(transcript.contains("Can't modify this note: Invalid note id 99"));
        assert!(transcript.contains("Thank you for using your notebook today."));
    }

    #[test]
    fn edit_shows_the_note_then_replaces_both_fields() {
        let mut notebook = Notebook::new();
        notebook.new_note("old memo", "old");

        let script = "4\n0\nnew memo\nnew tags here\n5\n";
        let (notebook, transcript, _store, _dir) = run_session(notebook, script);

        assert!(transcript.contains("Note 0\n\nold memo\n\n#old\n"));
        let note = notebook.find_note("0").unwrap();
        assert_eq!(note.memo, "new memo");
        assert_eq!(note.tags, "new tags here");
    }

    #[test]
    fn empty_answers_are_accepted_for_memo_and_tags() {
        let script = "3\n\n\n1\n5\n";
        let (notebook, transcript, _store, _dir) = run_session(Notebook::new(), script);

        assert_eq!(notebook.len(), 1);
        // Empty tags render the bare `#` edge case.
        assert!(transcript.contains("Note 0\n\n\n\n#\n"));
    }

    #[test]
    fn unrecognized_command_echoes_and_redisplays_the_menu() {
        let script = "9\n5\n";
        let (_notebook, transcript, _store, _dir) = run_session(Notebook::new(), script);

        assert!(transcript.contains("9 is not a valid choice"));
        assert!(transcript.matches("Notebook Menu").count() >= 2);
    }

    #[test]
    fn save_writes_without_exiting_and_quit_saves_again() {
        let script = "3\nfirst\n\n6\n3\nsecond\n\n5\n";
        let (notebook, transcript, store, _dir) = run_session(Notebook::new(), script);

        assert!(transcript.contains("Saved to Notebook_object_0.json."));
        let loaded = store.load("Notebook_object_0.json").unwrap();
        assert_eq!(loaded, notebook);
        assert_eq!(loaded.len(), 2);
    }

    #[test]
    fn end_of_input_saves_like_quit() {
        let script = "3\nunsaved?\n\n";
        let (notebook, _transcript, store, _dir) = run_session(Notebook::new(), script);

        let loaded = store.load("Notebook_object_0.json").unwrap();
        assert_eq!(loaded, notebook);
        assert_eq!(loaded.len(), 1);
    }
}
