mod command;

use std::borrow::Cow;

use rustyline::{
    completion::{Completer, FilenameCompleter, Pair},
    highlight::{CmdKind, Highlighter},
    hint::Hinter,
    validate::Validator,
    Context, Helper,
};

use self::command::CommandCompleter;
use crate::highlight::SyntaxHighlighter;

/// Line-editor helper: completion and command-word highlighting.
pub struct ShellCompleter {
    command_completer: CommandCompleter,
    path_completer: FilenameCompleter,
    highlighter: SyntaxHighlighter,
}

impl Default for ShellCompleter {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellCompleter {
    pub fn new() -> Self {
        ShellCompleter {
            command_completer: CommandCompleter::new(),
            path_completer: FilenameCompleter::new(),
            highlighter: SyntaxHighlighter::new(),
        }
    }
}

impl Helper for ShellCompleter {}

impl Highlighter for ShellCompleter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight_command(line)
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }
}

impl Hinter for ShellCompleter {
    type Hint = String;
}

impl Validator for ShellCompleter {}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let before_cursor = &line[..pos];
        let word_start = before_cursor
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);

        // Only the first word names a command; the rest are paths.
        if before_cursor[..word_start].trim().is_empty() {
            let prefix = &before_cursor[word_start..];
            Ok((word_start, self.command_completer.complete_command(prefix)))
        } else {
            self.path_completer.complete_path(line, pos)
        }
    }
}
