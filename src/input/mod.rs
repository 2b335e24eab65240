mod completer;
mod editor;

pub use completer::ShellCompleter;
pub use editor::EditorSource;

use std::io::{self, BufRead, Write};

/// Where the loop driver gets its next line from.
pub trait LineSource {
    /// Shows `prompt` and blocks for one `\n`-terminated line. The
    /// delimiter is kept, and the bytes are returned as read: a line need
    /// not be valid UTF-8.
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> io::Result<Vec<u8>>;
}

/// Reads from any buffered reader, writing the prompt to the output stream.
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> io::Result<Vec<u8>> {
        out.write_all(prompt.as_bytes())?;
        out.flush()?;

        let mut line = Vec::new();
        self.reader.read_until(b'\n', &mut line)?;
        // A missing delimiter means the stream ended; the fragment is dropped.
        if line.last() != Some(&b'\n') {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "EOF"));
        }
        Ok(line)
    }
}
