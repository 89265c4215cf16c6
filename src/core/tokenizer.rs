// src/core/tokenizer.rs

use crate::models::CommandSpec;
use crate::system::executor::ExecutionError;

/// Splits a command line into whitespace-delimited tokens.
///
/// Any run of Unicode whitespace (spaces, tabs, newlines...) separates two tokens,
/// and leading or trailing whitespace is dropped, so no token is ever empty.
/// Quotes and backslashes are ordinary characters: `"a b"` yields `"a` and `b"`.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Turns a command line into a [`CommandSpec`]: the first token is the program,
/// the remaining tokens are its arguments.
///
/// # Errors
/// - [`ExecutionError::EmptyCommand`] if `line` is the empty string.
/// - [`ExecutionError::WhitespaceOnlyCommand`] if `line` contains only whitespace.
pub fn parse(line: &str) -> Result<CommandSpec, ExecutionError> {
    if line.is_empty() {
        log::debug!("Rejecting empty command line.");
        return Err(ExecutionError::EmptyCommand);
    }

    let mut tokens = line.split_whitespace();
    let Some(program) = tokens.next() else {
        log::debug!("Rejecting whitespace-only command line: {:?}", line);
        return Err(ExecutionError::WhitespaceOnlyCommand);
    };

    Ok(CommandSpec::new(program, tokens))
}
