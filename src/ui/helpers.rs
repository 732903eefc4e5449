use std::fmt::Display;

use anyhow::Error;

/// Render `1. first\n2. second\n...` followed by a blank line.
pub(crate) fn numbered_list<T: Display>(items: &[T]) -> String {
    let mut text = items
        .iter()
        .enumerate()
        .map(|(index, item)| format!("{}. {}", index + 1, item))
        .collect::<Vec<_>>()
        .join("\n");
    text.push('\n');
    text
}

/// Extract the most relevant error message from a chained error.
pub(crate) fn surface_error(err: &Error) -> String {
    err.chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| err.to_string())
}
