use std::collections::TryReserveError;
use std::io;
use thiserror::Error;

/// Unrecoverable failures that stop the interpreter.
///
/// Anything a user can fix at the next prompt (a bad `cd` target, a missing
/// program) is reported on the error stream instead and never reaches this type.
#[derive(Error, Debug)]
pub enum ShellError {
    /// Growing the line buffer or the argument vector failed.
    #[error("allocation error")]
    Allocation(#[from] TryReserveError),
    /// Reading the command stream or writing interpreter output failed.
    #[error("{}", describe(.0))]
    Io(#[from] io::Error),
}

/// Render an OS error the way `perror` would: the description without the
/// `(os error N)` suffix.
pub fn describe(err: &io::Error) -> String {
    let text = err.to_string();
    match text.rfind(" (os error ") {
        Some(idx) => text[..idx].to_string(),
        None => text,
    }
}
