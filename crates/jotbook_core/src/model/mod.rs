//! Domain model for the notebook.
//!
//! # Responsibility
//! - Define the canonical note record and the owning notebook collection.
//! - Keep matching/rendering semantics in one place for all UI surfaces.
//!
//! # Invariants
//! - A note's `id` and `creation_date` never change after construction.
//! - Notes are owned exclusively by one `Notebook`; no sharing.

pub mod note;
pub mod notebook;
