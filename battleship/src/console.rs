use std::io::{self, BufRead, Write};

use battlegrid::game::{InputSource, Rejection, RejectionSink};

/// Helper to read input from the player.
pub struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    pub fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Converts
    /// to ascii lower before running the checker.
    pub fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Wait for the player to press enter.
    pub fn pause(&mut self) -> io::Result<()> {
        self.read_input_inner("Press [ENTER] ...")
    }

    /// Helper to print the prompt, clear the string buffer and read a line. Reports end of
    /// input as [`io::ErrorKind::UnexpectedEof`].
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            ));
        }
        Ok(())
    }
}

impl<B: BufRead> InputSource for InputReader<B> {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        println!();
        self.read_input_inner(prompt)?;
        Ok(self.buf.trim().to_owned())
    }
}

/// Tells the player why their target was not accepted.
pub struct ConsoleSink;

impl RejectionSink for ConsoleSink {
    fn reject(&mut self, rejection: &Rejection) {
        println!("{}. Hold your fire!", rejection);
    }
}
