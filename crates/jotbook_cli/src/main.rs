//! Interactive notebook shell.
//!
//! # Responsibility
//! - Wire storage root, logging, startup selection, and the menu loop.
//! - Own process concerns: exit code, stdin/stdout locks, stderr.

mod error;
mod menu;
mod prompt;
mod startup;

use crate::error::AppResult;
use crate::menu::Menu;
use jotbook_core::{default_log_level, init_logging, NotebookStore};
use std::io;

const NOTEBOOKS_DIR: &str = "notebooks";
const LOGS_DIR: &str = "logs";

fn main() {
    if let Err(err) = run() {
        eprintln!("jotbook: {err}");
        std::process::exit(1);
    }
}

fn run() -> AppResult<()> {
    let cwd = std::env::current_dir()?;

    // Logging is best-effort: a read-only disk should not block note
    // taking, so a failed init degrades to a stderr notice.
    match cwd.join(LOGS_DIR).to_str() {
        Some(log_dir) => {
            if let Err(err) = init_logging(default_log_level(), log_dir) {
                eprintln!("jotbook: logging disabled: {err}");
            }
        }
        None => eprintln!("jotbook: logging disabled: non-UTF-8 working directory"),
    }

    let store = NotebookStore::new(cwd.join(NOTEBOOKS_DIR));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    let (notebook, file_name) = startup::pick_notebook(&store, &mut input, &mut output)?;
    Menu::new(store, notebook, file_name, input, output).run()
}
