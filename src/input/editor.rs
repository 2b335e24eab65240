use std::io::{self, Write};

use rustyline::{config::Configurer, error::ReadlineError, history::DefaultHistory, Editor};
use tracing::trace;

use super::{LineSource, ShellCompleter};
use crate::error::ShellError;
use crate::shell::ExitSender;

/// Interactive source backed by a `rustyline` editor.
///
/// History is kept in memory for arrow-key recall and is never written to
/// disk.
pub struct EditorSource {
    editor: Editor<ShellCompleter, DefaultHistory>,
    exit: ExitSender,
}

impl EditorSource {
    pub fn new(exit: ExitSender) -> Result<Self, ShellError> {
        let mut editor = Editor::<ShellCompleter, DefaultHistory>::new()?;
        editor.set_helper(Some(ShellCompleter::new()));
        editor.set_auto_add_history(true);

        Ok(Self { editor, exit })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str, _out: &mut dyn Write) -> io::Result<Vec<u8>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let mut bytes = line.into_bytes();
                bytes.push(b'\n');
                Ok(bytes)
            }
            Err(ReadlineError::Interrupted) => {
                trace!("interrupted at prompt");
                self.exit.request();
                Err(io::Error::new(io::ErrorKind::Interrupted, "interrupted"))
            }
            Err(ReadlineError::Eof) => Err(io::Error::new(io::ErrorKind::UnexpectedEof, "EOF")),
            Err(ReadlineError::Io(e)) => Err(e),
            Err(e) => Err(io::Error::new(io::ErrorKind::Other, e.to_string())),
        }
    }
}
