use super::{Command, CommandError};
use crate::shell::ExitSender;
use std::ffi::OsString;
use std::io::Write;

/// Queues an exit request; the loop stops before reading the next line.
#[derive(Clone, Debug)]
pub struct ExitCommand {
    exit: ExitSender,
}

impl ExitCommand {
    pub fn new(exit: ExitSender) -> Self {
        Self { exit }
    }
}

impl Command for ExitCommand {
    fn execute(&self, _args: &[OsString], _out: &mut dyn Write) -> Result<(), CommandError> {
        self.exit.request();
        Ok(())
    }
}
