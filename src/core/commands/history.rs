use super::{Command, CommandError};
use std::ffi::OsString;
use std::io::Write;

pub const HISTORY_NOTICE: &str = "History command is not implemented yet.";

/// Placeholder: command history is not kept.
#[derive(Clone, Copy, Debug, Default)]
pub struct HistoryCommand;

impl Command for HistoryCommand {
    fn execute(&self, _args: &[OsString], out: &mut dyn Write) -> Result<(), CommandError> {
        writeln!(out, "{}", HISTORY_NOTICE).map_err(|e| CommandError::io("history", e))
    }
}
