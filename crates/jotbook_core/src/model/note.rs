//! Note domain model.
//!
//! # Responsibility
//! - Define the persisted note record (memo, tags, id, creation date).
//! - Provide filter matching and the canonical text rendering.
//!
//! # Invariants
//! - `id` is assigned once at creation and never mutated.
//! - `creation_date` is stamped from the local clock at construction.
//! - Matching is literal case-sensitive substring search over memo and
//!   tags, never tokenized tag matching.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A single note: short memo text plus free-form space-separated tags.
///
/// Tags are kept as one string on purpose. Filters match against the raw
/// string, so a filter can span token boundaries ("ag1 t" matches tags
/// "tag1 tag2"); callers relying on search results depend on exactly this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable lookup key, unique within the owning notebook.
    pub id: u64,
    /// Free-form memo body.
    pub memo: String,
    /// Space-separated tag tokens, stored and replaced as a whole.
    pub tags: String,
    /// Local calendar date captured at construction. Never mutated.
    pub creation_date: NaiveDate,
}

impl Note {
    /// Creates a note with the given id, stamping today's local date.
    ///
    /// Empty memo and empty tags are both valid.
    pub fn new(memo: impl Into<String>, tags: impl Into<String>, id: u64) -> Self {
        Self {
            id,
            memo: memo.into(),
            tags: tags.into(),
            creation_date: chrono::Local::now().date_naive(),
        }
    }

    /// Replaces memo and tags unconditionally, both at once.
    ///
    /// `id` and `creation_date` are untouched.
    pub fn rewrite(&mut self, memo: impl Into<String>, tags: impl Into<String>) {
        self.memo = memo.into();
        self.tags = tags.into();
    }

    /// Returns whether `filter` is a literal substring of the memo or of
    /// the tag string. Case-sensitive.
    pub fn matches(&self, filter: &str) -> bool {
        self.memo.contains(filter) || self.tags.contains(filter)
    }
}

impl Display for Note {
    /// Renders the three-part block used by every listing surface:
    ///
    /// ```text
    /// Note {id}
    ///
    /// {memo}
    ///
    /// #tag1 #tag2
    /// ```
    ///
    /// Splitting an empty tag string yields one empty token, so a note
    /// without tags renders a bare `#` on the tag line. Downstream output
    /// comparisons rely on this exact shape.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let hashtags = self
            .tags
            .split(' ')
            .map(|tag| format!("#{tag}"))
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "Note {}\n\n{}\n\n{}\n", self.id, self.memo, hashtags)
    }
}
