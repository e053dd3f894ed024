//! Splitting of a command line into whitespace-delimited arguments.
//!
//! There is no quoting, escaping or expansion: every maximal run of
//! [`DELIMITERS`] separates two tokens. Tokens keep the exact bytes of the
//! line, so paths that are not valid UTF-8 reach `cd` and child processes
//! untouched.

use crate::error::ShellError;
use std::ffi::{OsStr, OsString};
use std::fmt;

/// Bytes that separate tokens: space, tab, carriage return, newline, bell.
pub const DELIMITERS: [u8; 5] = *b" \t\r\n\x07";

/// Ordered, non-empty tokens of one command line. The first one names the command.
///
/// No token is empty or contains a delimiter. Indexing past the last token
/// with [`ArgVector::get`] yields `None`, which plays the role of the
/// terminating marker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgVector {
    args: Vec<OsString>,
}

impl ArgVector {
    /// Build a vector from pieces of text, splitting each piece on
    /// [`DELIMITERS`] exactly as a command line would be.
    pub fn from_tokens<I, S>(pieces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut args = Vec::new();
        for piece in pieces {
            let bytes = os_bytes(piece.as_ref());
            args.extend(tokens(&bytes).map(|t| os_from_vec(t.to_vec())));
        }
        Self { args }
    }

    /// The command name, `None` for a blank line.
    pub fn command(&self) -> Option<&OsStr> {
        self.get(0)
    }

    pub fn get(&self, idx: usize) -> Option<&OsStr> {
        self.args.get(idx).map(OsString::as_os_str)
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OsStr> {
        self.args.iter().map(OsString::as_os_str)
    }

    /// Everything after the command name.
    pub fn args(&self) -> &[OsString] {
        self.args.get(1..).unwrap_or(&[])
    }

    /// Tokens re-joined by a single space, lossily decoded for display.
    pub fn join(&self) -> String {
        self.iter()
            .map(OsStr::to_string_lossy)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for ArgVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join())
    }
}

/// Split `line` on runs of [`DELIMITERS`].
///
/// The token list starts with room for `initial` entries and grows by
/// `increment` whenever it fills up.
pub fn split_into_tokens(
    line: &[u8],
    initial: usize,
    increment: usize,
) -> Result<ArgVector, ShellError> {
    let increment = increment.max(1);
    let mut args: Vec<OsString> = Vec::new();
    args.try_reserve_exact(initial)?;

    for token in tokens(line) {
        if args.len() == args.capacity() {
            log::trace!("growing token list to {} entries", args.capacity() + increment);
            args.try_reserve_exact(increment)?;
        }
        let mut owned = Vec::new();
        owned.try_reserve_exact(token.len())?;
        owned.extend_from_slice(token);
        args.push(os_from_vec(owned));
    }

    Ok(ArgVector { args })
}

fn tokens(bytes: &[u8]) -> impl Iterator<Item = &[u8]> {
    bytes
        .split(|b| DELIMITERS.contains(b))
        .filter(|t| !t.is_empty())
}

#[cfg(unix)]
fn os_from_vec(bytes: Vec<u8>) -> OsString {
    use std::os::unix::ffi::OsStringExt;
    OsString::from_vec(bytes)
}

#[cfg(not(unix))]
fn os_from_vec(bytes: Vec<u8>) -> OsString {
    String::from_utf8_lossy(&bytes).into_owned().into()
}

#[cfg(unix)]
fn os_bytes(s: &OsStr) -> std::borrow::Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    std::borrow::Cow::Borrowed(s.as_bytes())
}

#[cfg(not(unix))]
fn os_bytes(s: &OsStr) -> std::borrow::Cow<'_, [u8]> {
    std::borrow::Cow::Owned(s.to_string_lossy().into_owned().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(line: &str) -> ArgVector {
        split_into_tokens(line.as_bytes(), 64, 64).unwrap()
    }

    fn words(argv: &ArgVector) -> Vec<String> {
        argv.iter().map(|t| t.to_string_lossy().into_owned()).collect()
    }

    #[test]
    fn test_simple_command() {
        let argv = split("ls -l /tmp");
        assert_eq!(argv.command(), Some(OsStr::new("ls")));
        assert_eq!(argv.args(), &[OsString::from("-l"), OsString::from("/tmp")]);
        assert_eq!(argv.len(), 3);
        assert_eq!(argv.get(3), None);
    }

    #[test]
    fn test_every_delimiter_splits() {
        let argv = split("a b\tc\rd\ne\x07f");
        assert_eq!(words(&argv), ["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn test_runs_of_delimiters_collapse() {
        let argv = split("  echo \t\t hello   \r\n world  ");
        assert_eq!(argv.join(), "echo hello world");
        assert!(argv.iter().all(|t| !t.is_empty()));
    }

    #[test]
    fn test_blank_lines_have_no_tokens() {
        for line in ["", "   ", " \t  ", "\r\n", "\x07\x07"] {
            let argv = split(line);
            assert!(argv.is_empty(), "expected no tokens for {line:?}");
            assert_eq!(argv.command(), None);
            assert!(argv.args().is_empty());
        }
    }

    #[test]
    fn test_other_whitespace_is_not_a_delimiter() {
        // Only the five delimiter characters split; a vertical tab stays in the token.
        let argv = split("a\x0bb c");
        assert_eq!(words(&argv), ["a\x0bb", "c"]);
    }

    #[test]
    fn test_many_tokens_grow_the_list() {
        let line = (0..500).map(|i| i.to_string()).collect::<Vec<_>>().join(" ");
        let argv = split_into_tokens(line.as_bytes(), 1, 3).unwrap();
        assert_eq!(argv.len(), 500);
        assert_eq!(argv.get(499), Some(OsStr::new("499")));
        assert_eq!(argv.join(), line);
    }

    #[test]
    fn test_rejoin_normalizes_whitespace() {
        let line = "\tgit   commit  -m\tmsg ";
        let expected = line.split_whitespace().collect::<Vec<_>>().join(" ");
        assert_eq!(split(line).to_string(), expected);
    }

    #[test]
    fn test_token_list_allocation_failure() {
        let err = split_into_tokens(b"ls", usize::MAX, 1).unwrap_err();
        assert!(matches!(err, ShellError::Allocation(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_bytes_are_preserved() {
        use std::os::unix::ffi::OsStrExt;
        let argv = split_into_tokens(b"cd d\xff", 4, 4).unwrap();
        assert_eq!(argv.get(1).map(OsStr::as_bytes), Some(&b"d\xff"[..]));
    }

    #[test]
    fn test_from_tokens_drops_empty() {
        let argv = ArgVector::from_tokens(["cd", "", "/tmp"]);
        assert_eq!(argv.join(), "cd /tmp");
    }

    #[test]
    fn test_from_tokens_splits_on_delimiters() {
        let argv = ArgVector::from_tokens(["ls -l", "a\tb", "c\x07\r\n"]);
        assert_eq!(words(&argv), ["ls", "-l", "a", "b", "c"]);
        assert!(
            argv.iter()
                .all(|t| !os_bytes(t).iter().any(|b| DELIMITERS.contains(b)))
        );
    }
}
