//! Core domain logic for Jotbook.
//! This crate is the single source of truth for notebook invariants.

pub mod logging;
pub mod model;
pub mod store;

pub use logging::{default_log_level, init_logging};
pub use model::note::Note;
pub use model::notebook::{NoteNotFound, Notebook};
pub use store::{NotebookStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
