use anyhow::Context;
use lsh::config::DEFAULT_NAME;
use lsh::{Interpreter, ShellError};
use std::io;
use std::process::ExitCode;

fn run() -> anyhow::Result<()> {
    let mut sh: Interpreter = Interpreter::default();
    sh.repl(io::stdin().lock(), &mut io::stdout(), &mut io::stderr())
        .context("command loop aborted")
}

// Arguments given to the interpreter itself are ignored.
fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("{:#}", e);
            let message = match e.downcast_ref::<ShellError>() {
                Some(fatal) => fatal.to_string(),
                None => format!("{:#}", e),
            };
            eprintln!("{DEFAULT_NAME}: {message}");
            ExitCode::FAILURE
        }
    }
}
