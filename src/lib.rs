//! A small line-oriented command interpreter.
//!
//! Each line read from the input is split on whitespace; the first word names
//! either a builtin (`cd`, `help`, `exit`) run in-process or an external
//! program started as a child process and waited for. There are no pipes,
//! redirections, quoting or variable expansion.
//!
//! The main entry point is [`Interpreter`]. The [`env`] and [`command`]
//! modules expose the seams ([`WorkingDir`], [`Launcher`]) used to swap the
//! process-wide working directory and child process creation for stubs.

pub mod builtin;
pub mod command;
pub mod config;
pub mod env;
pub mod error;
pub mod external;
mod interpreter;
pub mod lexer;
pub mod reader;

pub use command::{Continuation, Launcher};
pub use config::ShellConfig;
pub use env::{ProcessWorkingDir, WorkingDir};
pub use error::ShellError;
pub use external::ProcessLauncher;
pub use interpreter::Interpreter;
