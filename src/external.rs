use crate::command::{Continuation, Launcher, report};
use crate::config::DEFAULT_NAME;
use crate::error::{ShellError, describe};
use crate::lexer::ArgVector;
use std::io::Write;
use std::path::Path;
use std::process::Command;

/// Starts programs as child processes and blocks until they finish.
///
/// The child inherits the interpreter's environment, working directory and
/// standard streams. The program name is resolved through `PATH` unless it
/// contains a slash.
#[derive(Debug, Clone)]
pub struct ProcessLauncher {
    name: String,
}

impl ProcessLauncher {
    /// `name` prefixes the diagnostics this launcher writes.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for ProcessLauncher {
    fn default() -> Self {
        Self::new(DEFAULT_NAME)
    }
}

impl Launcher for ProcessLauncher {
    fn launch(
        &mut self,
        argv: &ArgVector,
        stderr: &mut dyn Write,
    ) -> Result<Continuation, ShellError> {
        let Some(program) = argv.command() else {
            return Ok(Continuation::Continue);
        };

        let mut child = match Command::new(program).args(argv.args()).spawn() {
            Ok(child) => child,
            Err(e) => {
                log::debug!("failed to start {}: {}", Path::new(program).display(), e);
                report(stderr, &self.name, describe(&e))?;
                return Ok(Continuation::Continue);
            }
        };
        log::debug!("started {} as pid {}", Path::new(program).display(), child.id());

        // Only exit or death by signal ends the wait; stops are not reported.
        match child.wait() {
            Ok(status) => log::debug!("pid {} finished: {}", child.id(), status),
            Err(e) => report(stderr, &self.name, describe(&e))?,
        }
        Ok(Continuation::Continue)
    }
}
