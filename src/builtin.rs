use crate::command::{Continuation, report};
use crate::config::ShellConfig;
use crate::env::WorkingDir;
use crate::error::{ShellError, describe};
use crate::lexer::ArgVector;
use std::ffi::OsStr;
use std::io::Write;
use std::path::Path;

/// Commands handled inside the interpreter, never spawned as a process.
///
/// The set is closed; [`Builtin::ALL`] fixes both the lookup order and the
/// order `help` lists them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Cd,
    Help,
    Exit,
}

/// Everything a builtin may touch while it runs.
pub struct BuiltinContext<'a> {
    pub stdout: &'a mut dyn Write,
    pub stderr: &'a mut dyn Write,
    pub dir: &'a mut dyn WorkingDir,
    pub config: &'a ShellConfig,
}

impl Builtin {
    pub const ALL: [Builtin; 3] = [Builtin::Cd, Builtin::Help, Builtin::Exit];

    /// Canonical name the command is invoked by.
    pub fn name(self) -> &'static str {
        match self {
            Builtin::Cd => "cd",
            Builtin::Help => "help",
            Builtin::Exit => "exit",
        }
    }

    /// Run the builtin with the full argument vector, command name included.
    pub fn execute(
        self,
        argv: &ArgVector,
        ctx: &mut BuiltinContext<'_>,
    ) -> Result<Continuation, ShellError> {
        match self {
            Builtin::Cd => cd(argv, ctx),
            Builtin::Help => help(ctx),
            Builtin::Exit => Ok(Continuation::Stop),
        }
    }
}

/// Number of registered builtins.
pub fn count() -> usize {
    Builtin::ALL.len()
}

/// Exact, case-sensitive lookup by name.
pub fn resolve(name: impl AsRef<OsStr>) -> Option<Builtin> {
    let name = name.as_ref();
    Builtin::ALL.into_iter().find(|b| name == OsStr::new(b.name()))
}

/// Change directory. Extra arguments after the target are ignored.
fn cd(argv: &ArgVector, ctx: &mut BuiltinContext<'_>) -> Result<Continuation, ShellError> {
    match argv.get(1) {
        None => report(ctx.stderr, &ctx.config.name, "expected argument to \"cd\"")?,
        Some(target) => match ctx.dir.change(Path::new(target)) {
            Ok(()) => {
                if let Ok(now) = ctx.dir.current() {
                    log::debug!("working directory is now {}", now.display());
                }
            }
            Err(e) => {
                log::debug!("cd {} failed: {}", Path::new(target).display(), e);
                report(ctx.stderr, &ctx.config.name, describe(&e))?;
            }
        },
    }
    Ok(Continuation::Continue)
}

fn help(ctx: &mut BuiltinContext<'_>) -> Result<Continuation, ShellError> {
    let out = &mut *ctx.stdout;
    writeln!(out, "{}", ctx.config.banner)?;
    writeln!(out, "Type program names and arguments, and hit enter.")?;
    writeln!(out, "The following are built in:")?;
    for builtin in Builtin::ALL {
        writeln!(out, "  {}", builtin.name())?;
    }
    writeln!(out, "Use the man command for information on other programs.")?;
    out.flush()?;
    Ok(Continuation::Continue)
}
