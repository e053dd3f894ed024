use crate::builtin::{self, BuiltinContext};
use crate::command::{Continuation, Launcher};
use crate::config::ShellConfig;
use crate::env::{ProcessWorkingDir, WorkingDir};
use crate::error::ShellError;
use crate::external::ProcessLauncher;
use crate::lexer::{self, ArgVector};
use crate::reader::{Line, LineReader};
use std::io::{BufRead, Write};

/// A line-oriented command interpreter.
///
/// Each command line is split into whitespace-delimited tokens; the first token
/// either names a builtin (`cd`, `help`, `exit`) or a program to run as a child
/// process. The working directory and the launcher are owned by the
/// interpreter so both can be replaced in tests.
///
/// Example
/// ```
/// use lsh::{Continuation, Interpreter};
/// let mut sh: Interpreter = Interpreter::default();
/// let (mut out, mut err) = (Vec::<u8>::new(), Vec::<u8>::new());
/// let status = sh.execute_line("help", &mut out, &mut err).unwrap();
/// assert_eq!(status, Continuation::Continue);
/// assert!(String::from_utf8(out).unwrap().contains("  exit\n"));
/// ```
pub struct Interpreter<D = ProcessWorkingDir, L = ProcessLauncher> {
    config: ShellConfig,
    dir: D,
    launcher: L,
}

impl<D: WorkingDir, L: Launcher> Interpreter<D, L> {
    pub fn new(config: ShellConfig, dir: D, launcher: L) -> Self {
        Self {
            config,
            dir,
            launcher,
        }
    }

    pub fn working_dir(&self) -> &D {
        &self.dir
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    /// Dispatch one argument vector.
    ///
    /// A blank vector does nothing. A builtin name runs the builtin; anything
    /// else goes to the launcher.
    pub fn execute(
        &mut self,
        argv: &ArgVector,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Result<Continuation, ShellError> {
        let Some(name) = argv.command() else {
            return Ok(Continuation::Continue);
        };

        match builtin::resolve(name) {
            Some(builtin) => {
                log::debug!("dispatching builtin {}", builtin.name());
                let mut ctx = BuiltinContext {
                    stdout,
                    stderr,
                    dir: &mut self.dir,
                    config: &self.config,
                };
                builtin.execute(argv, &mut ctx)
            }
            None => {
                log::debug!("dispatching external command: {}", argv);
                self.launcher.launch(argv, stderr)
            }
        }
    }

    /// Tokenize `line` and dispatch it. The bytes are used as given.
    pub fn execute_line(
        &mut self,
        line: impl AsRef<[u8]>,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Result<Continuation, ShellError> {
        let argv = lexer::split_into_tokens(
            line.as_ref(),
            self.config.token_buffer_size,
            self.config.token_buffer_increment,
        )?;
        self.execute(&argv, stdout, stderr)
    }

    /// Prompt, read, dispatch, repeat.
    ///
    /// Returns once a command asks to stop or the input is exhausted. Errors
    /// are fatal: the caller is expected to terminate the process.
    pub fn repl<R: BufRead>(
        &mut self,
        input: R,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Result<(), ShellError> {
        let mut reader = LineReader::new(
            input,
            self.config.line_buffer_size,
            self.config.line_buffer_increment,
        );

        loop {
            write!(stdout, "{}", self.config.prompt)?;
            stdout.flush()?;

            let line = match reader.read_line()? {
                Line::Text(line) => line,
                Line::Eof => return Ok(()),
            };

            let status = self.execute_line(&line, stdout, stderr)?;
            log::trace!("dispatch returned {}", i32::from(status));
            if !status.should_continue() {
                return Ok(());
            }
        }
    }
}

impl Default for Interpreter {
    /// Real working directory, real child processes, default settings.
    fn default() -> Self {
        let config = ShellConfig::default();
        let launcher = ProcessLauncher::new(config.name.clone());
        Self::new(config, ProcessWorkingDir, launcher)
    }
}
