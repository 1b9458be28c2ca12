//! Blocking line prompts over generic reader/writer pairs.
//!
//! # Responsibility
//! - Read one answer per prompt without assuming a real terminal, so
//!   every interactive flow stays testable with in-memory buffers.
//!
//! # Invariants
//! - Only the line terminator is stripped; an empty or whitespace answer
//!   is returned as-is and is always a valid answer.
//! - End of input is reported as `None`, never as an error.

use std::io::{BufRead, Write};

/// Prints `text`, flushes, and reads one line of input.
///
/// Returns `None` when the input stream is exhausted.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> std::io::Result<Option<String>> {
    write!(output, "{text}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::prompt;
    use std::io::Cursor;

    #[test]
    fn prompt_echoes_text_and_strips_newline() {
        let mut input = Cursor::new(b"hello world\n".to_vec());
        let mut output = Vec::new();

        let answer = prompt(&mut input, &mut output, "Say: ").unwrap();
        assert_eq!(answer.as_deref(), Some("hello world"));
        assert_eq!(String::from_utf8(output).unwrap(), "Say: ");
    }

    #[test]
    fn prompt_keeps_inner_whitespace_and_empty_answers() {
        let mut input = Cursor::new(b"  \n".to_vec());
        let mut output = Vec::new();
        let answer = prompt(&mut input, &mut output, "? ").unwrap();
        assert_eq!(answer.as_deref(), Some("  "));

        let mut input = Cursor::new(b"\n".to_vec());
        let answer = prompt(&mut input, &mut output, "? ").unwrap();
        assert_eq!(answer.as_deref(), Some(""));
    }

    #[test]
    fn prompt_reports_end_of_input_as_none() {
        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();
        let answer = prompt(&mut input, &mut output, "? ").unwrap();
        assert_eq!(answer, None);
    }

    #[test]
    fn prompt_handles_crlf_terminators() {
        let mut input = Cursor::new(b"answer\r\n".to_vec());
        let mut output = Vec::new();
        let answer = prompt(&mut input, &mut output, "? ").unwrap();
        assert_eq!(answer.as_deref(), Some("answer"));
    }
}
