use std::env as stdenv;
use std::io;
use std::path::{Path, PathBuf};

/// Narrow access to the working directory.
///
/// The directory is process-wide OS state: relative paths given to builtins and
/// the search for external programs both resolve against it. Every read and
/// write the interpreter performs goes through this trait so tests can swap in
/// a stub.
pub trait WorkingDir {
    fn current(&self) -> io::Result<PathBuf>;
    fn change(&mut self, path: &Path) -> io::Result<()>;
}

/// The real working directory of this process.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessWorkingDir;

impl WorkingDir for ProcessWorkingDir {
    fn current(&self) -> io::Result<PathBuf> {
        stdenv::current_dir()
    }

    fn change(&mut self, path: &Path) -> io::Result<()> {
        stdenv::set_current_dir(path)
    }
}
