//! Application-level error for the interactive shell.
//!
//! # Responsibility
//! - Collapse store and terminal I/O failures into one fatal error type.
//!
//! # Invariants
//! - Everything here ends the session; recoverable conditions (unknown
//!   id, invalid menu choice) are handled inline and never reach this.

use jotbook_core::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    /// Notebook storage failed; the session cannot continue safely.
    Store(StoreError),
    /// The terminal itself failed (stdin/stdout gone).
    Io(std::io::Error),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "terminal I/O failure: {err}"),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}
