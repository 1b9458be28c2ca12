//! Startup notebook selection.
//!
//! # Responsibility
//! - Offer existing notebook files as a numbered list plus a "new
//!   notebook" option, and resolve the user's choice.
//!
//! # Invariants
//! - An out-of-range or non-numeric choice is rejected with a message and
//!   re-prompted; it never indexes past the listed files.
//! - An empty storage directory skips the prompt and starts fresh.

use crate::error::AppResult;
use crate::prompt::prompt;
use jotbook_core::{Notebook, NotebookStore};
use log::info;
use std::io::{BufRead, Write};

/// Loads an existing notebook chosen interactively, or creates an empty
/// one under a fresh file name.
///
/// Returns the notebook together with the file name it will be saved as.
/// End of input falls back to a new notebook so a closed stdin cannot
/// spin the selection loop.
pub fn pick_notebook<R: BufRead, W: Write>(
    store: &NotebookStore,
    input: &mut R,
    output: &mut W,
) -> AppResult<(Notebook, String)> {
    let existing = store.list_notebooks()?;
    if existing.is_empty() {
        return new_notebook(store);
    }

    writeln!(output, "Which notebook do you want to open?")?;
    writeln!(output, "{} notebooks available:\n", existing.len())?;
    for (index, name) in existing.iter().enumerate() {
        writeln!(output, "{index}. {name}")?;
    }
    writeln!(output, "{}. New notebook!", existing.len())?;

    loop {
        let question = format!(
            "\nChoose notebook (options 0 through {}): ",
            existing.len()
        );
        let Some(answer) = prompt(input, output, &question)? else {
            return new_notebook(store);
        };

        match answer.trim().parse::<usize>() {
            Ok(choice) if choice < existing.len() => {
                let name = existing[choice].clone();
                let notebook = store.load(&name)?;
                return Ok((notebook, name));
            }
            Ok(choice) if choice == existing.len() => return new_notebook(store),
            _ => {
                writeln!(output, "`{}` is not a valid choice", answer.trim())?;
            }
        }
    }
}

fn new_notebook(store: &NotebookStore) -> AppResult<(Notebook, String)> {
    let name = store.next_file_name()?;
    info!("event=notebook_created module=cli status=ok file={name}");
    Ok((Notebook::new(), name))
}
