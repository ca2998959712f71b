//! Buffered file sink for the generated listing.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// A buffered text sink. `close` must be called exactly once after
/// all writes succeed; a run that fails mid-write abandons the sink
/// without closing it.
pub struct FileOutput {
    writer: BufWriter<File>,
}

impl FileOutput {
    /// Creates (or truncates) the output file.
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }

    /// Writes one line of text followed by a newline.
    pub fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.write_all(b"\n")
    }

    /// Writes a single newline.
    pub fn new_line(&mut self) -> io::Result<()> {
        self.writer.write_all(b"\n")
    }

    /// Flushes buffered output and closes the file.
    pub fn close(mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
