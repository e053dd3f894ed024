use crate::error::ShellError;
use crate::lexer::ArgVector;
use std::io::Write;

/// Loop-control signal returned by every dispatched command.
///
/// Numerically, `1` means continue and `0` means stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    Continue,
    Stop,
}

impl Continuation {
    pub fn should_continue(self) -> bool {
        self == Self::Continue
    }
}

impl From<Continuation> for i32 {
    fn from(status: Continuation) -> Self {
        match status {
            Continuation::Continue => 1,
            Continuation::Stop => 0,
        }
    }
}

/// Runs a command that is not a builtin and waits for it to finish.
///
/// Implementations report their own recoverable failures on `stderr`; only
/// failures of the interpreter itself come back as `Err`.
pub trait Launcher {
    fn launch(&mut self, argv: &ArgVector, stderr: &mut dyn Write)
        -> Result<Continuation, ShellError>;
}

/// Write one `name: message` diagnostic line.
pub(crate) fn report(
    stderr: &mut dyn Write,
    name: &str,
    message: impl std::fmt::Display,
) -> Result<(), ShellError> {
    writeln!(stderr, "{name}: {message}")?;
    stderr.flush()?;
    Ok(())
}
