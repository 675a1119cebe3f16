pub mod command;
pub mod run;

use crate::errors::AppError;
use std::io::{self, Write};

// INPUT FUNCTIONS

/// Reads one line from stdin, trimmed. `None` means the stream closed, which
/// the session loop treats as a normal request to finish.
pub fn read_line() -> Result<Option<String>, AppError> {
    let mut input = String::new();
    let bytes = io::stdin().read_line(&mut input)?;

    if bytes == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}

// OUTPUT FUNCTIONS

/// Prints a prompt without a trailing newline and flushes, so it shows up
/// before the read blocks.
pub fn prompt(text: &str) -> Result<(), AppError> {
    print!("{}", text);
    io::stdout().flush()?;
    Ok(())
}
