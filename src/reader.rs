//! Acquisition of raw command lines from the input stream.

use crate::error::ShellError;
use std::io::{BufRead, ErrorKind};

/// Outcome of a single read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// The raw bytes of a line without its terminating line break. May be empty.
    Text(Vec<u8>),
    /// The stream ended before any byte of a new line was read.
    Eof,
}

/// Reads newline-terminated lines into a buffer that grows in fixed steps.
pub struct LineReader<R> {
    input: R,
    initial: usize,
    increment: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(input: R, initial: usize, increment: usize) -> Self {
        Self {
            input,
            initial,
            increment: increment.max(1),
        }
    }

    /// Read up to the next `\n` or the end of the stream.
    ///
    /// An unterminated final line is returned as [`Line::Text`]; the call after
    /// it yields [`Line::Eof`]. Bytes are passed through as read, whatever
    /// their encoding.
    pub fn read_line(&mut self) -> Result<Line, ShellError> {
        let mut buffer: Vec<u8> = Vec::new();
        buffer.try_reserve_exact(self.initial)?;
        let mut seen_any = false;

        loop {
            let available = match self.input.fill_buf() {
                Ok(bytes) => bytes,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };

            if available.is_empty() {
                if !seen_any {
                    log::debug!("end of input");
                    return Ok(Line::Eof);
                }
                break;
            }
            seen_any = true;

            let (chunk, consumed, finished) = match available.iter().position(|&b| b == b'\n') {
                Some(idx) => (&available[..idx], idx + 1, true),
                None => (available, available.len(), false),
            };
            grow(&mut buffer, chunk.len(), self.increment)?;
            buffer.extend_from_slice(chunk);
            self.input.consume(consumed);

            if finished {
                break;
            }
        }

        Ok(Line::Text(buffer))
    }
}

/// Grow `buffer` by whole increments until `needed` more bytes fit.
fn grow(buffer: &mut Vec<u8>, needed: usize, increment: usize) -> Result<(), ShellError> {
    while buffer.capacity() - buffer.len() < needed {
        let target = buffer.capacity().saturating_add(increment);
        log::trace!("growing line buffer to {} bytes", target);
        buffer.try_reserve_exact(target - buffer.len())?;
    }
    Ok(())
}
