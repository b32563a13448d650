use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use crate::utils::signal::Interrupted;

/// Line-based console: one input stream, one output stream.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Reads one line without its line terminator. Closed input counts as
    /// an interrupt. Bytes that are not UTF-8 are replaced, never rejected.
    pub fn read_line(&mut self) -> Result<String> {
        self.output.flush().context("Failed to flush output")?;

        let mut bytes = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut bytes)
            .context("Failed to read input")?;
        if read == 0 {
            return Err(Interrupted.into());
        }

        if bytes.ends_with(b"\n") {
            bytes.pop();
            if bytes.ends_with(b"\r") {
                bytes.pop();
            }
        }

        // Undecodable bytes become U+FFFD.
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
