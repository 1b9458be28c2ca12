//! Notebook collection model.
//!
//! # Responsibility
//! - Own the ordered note sequence and assign ids at append time.
//! - Provide id lookup, field edits, and linear substring search.
//!
//! # Invariants
//! - Insertion order equals creation order and is never reordered.
//! - The next assigned id equals the current note count. This is only
//!   collision-free because no delete operation exists; if deletion is
//!   ever added, id assignment must move to a stored monotonic counter.
//! - Lookups compare ids by their decimal string form, so any key text
//!   that renders the same digits resolves to the same note.

use crate::model::note::Note;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Lookup failure for id-based notebook operations.
///
/// Carries the unresolved key text so callers can echo it back verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteNotFound(pub String);

impl Display for NoteNotFound {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "no note with id `{}`", self.0)
    }
}

impl Error for NoteNotFound {}

/// An ordered collection of notes with id lookup and substring search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notebook {
    notes: Vec<Note>,
}

impl Notebook {
    /// Creates an empty notebook.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new note, assigning the next sequential id.
    ///
    /// Ids start at 0 for an empty notebook and grow by one per append.
    pub fn new_note(&mut self, memo: impl Into<String>, tags: impl Into<String>) {
        let id = self.notes.len() as u64;
        self.notes.push(Note::new(memo, tags, id));
    }

    /// Locates the note whose id renders as the given key text.
    ///
    /// Linear scan, first match wins. O(n) is deliberate; notebooks stay
    /// small enough that an index would be overhead.
    pub fn find_note(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|note| note.id.to_string() == id)
    }

    /// Mutable variant of [`find_note`](Self::find_note).
    pub fn find_note_mut(&mut self, id: &str) -> Option<&mut Note> {
        self.notes.iter_mut().find(|note| note.id.to_string() == id)
    }

    /// Replaces only the memo of the note with the given id.
    pub fn modify_memo(&mut self, id: &str, memo: impl Into<String>) -> Result<(), NoteNotFound> {
        match self.find_note_mut(id) {
            Some(note) => {
                note.memo = memo.into();
                Ok(())
            }
            None => Err(NoteNotFound(id.to_string())),
        }
    }

    /// Replaces only the tags of the note with the given id.
    pub fn modify_tags(&mut self, id: &str, tags: impl Into<String>) -> Result<(), NoteNotFound> {
        match self.find_note_mut(id) {
            Some(note) => {
                note.tags = tags.into();
                Ok(())
            }
            None => Err(NoteNotFound(id.to_string())),
        }
    }

    /// Replaces memo and tags together; both or neither.
    pub fn edit_note(
        &mut self,
        id: &str,
        memo: impl Into<String>,
        tags: impl Into<String>,
    ) -> Result<(), NoteNotFound> {
        match self.find_note_mut(id) {
            Some(note) => {
                note.rewrite(memo, tags);
                Ok(())
            }
            None => Err(NoteNotFound(id.to_string())),
        }
    }

    /// Returns every note matching the filter, in insertion order.
    ///
    /// Borrows live notes rather than copying; callers must not hold the
    /// result across mutations (single-threaded use makes this trivial).
    pub fn search(&self, filter: &str) -> Vec<&Note> {
        self.notes.iter().filter(|note| note.matches(filter)).collect()
    }

    /// All notes in insertion order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
