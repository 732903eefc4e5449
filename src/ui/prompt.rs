//! Line-oriented prompts over any `BufRead`/`Write` pair. Every prompt ends
//! with the `>>` cursor, written only by `ask`. The validation loops never
//! return an error for bad input; they print a notice and ask again. The only
//! way out besides a valid answer is end-of-input, reported as `InputClosed`.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use thiserror::Error;

/// Message printed whenever a prompt rejects what was typed.
pub(crate) const INVALID_INPUT: &str = "Invalid input!";

/// Raised when stdin reaches end-of-file. The menu loop treats it as a request
/// to exit rather than a failure.
#[derive(Debug, Error)]
#[error("input stream closed")]
pub struct InputClosed;

/// Read one line, without its line terminator.
pub(crate) fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read input")?;
    if read == 0 {
        return Err(InputClosed.into());
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Print `prompt` followed by the `>>` cursor and read the answer.
pub(crate) fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String> {
    write!(output, "{prompt}\n>>").context("failed to write prompt")?;
    output.flush().context("failed to flush output")?;
    read_line(input)
}

/// Keep asking until the answer contains something besides whitespace. The
/// accepted answer is returned exactly as typed.
pub(crate) fn ask_non_empty<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String> {
    loop {
        let answer = ask(input, output, prompt)?;
        if !answer.trim().is_empty() {
            return Ok(answer);
        }
        writeln!(output, "{INVALID_INPUT}\n").context("failed to write output")?;
    }
}

/// Keep asking for a list number until it falls within `1..=len`. Returns the
/// zero-based index.
pub(crate) fn ask_index<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    len: usize,
) -> Result<usize> {
    loop {
        let answer = ask(input, output, prompt)?;
        if let Some(index) = parse_index(&answer, len) {
            return Ok(index);
        }
        writeln!(output, "{INVALID_INPUT}\n").context("failed to write output")?;
    }
}

/// Parse a 1-based list number. Only plain ASCII digits are accepted, so signs
/// and whitespace inside the number are rejected.
pub(crate) fn parse_index(raw: &str, len: usize) -> Option<usize> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.chars().all(|ch| ch.is_ascii_digit()) {
        return None;
    }
    let number: usize = raw.parse().ok()?;
    (1..=len).contains(&number).then(|| number - 1)
}
