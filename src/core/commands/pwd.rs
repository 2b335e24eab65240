use super::{Command, CommandError};
use std::env;
use std::ffi::OsString;
use std::io::Write;

#[derive(Clone, Copy, Debug, Default)]
pub struct PwdCommand;

impl Command for PwdCommand {
    fn execute(&self, _args: &[OsString], out: &mut dyn Write) -> Result<(), CommandError> {
        let wd = env::current_dir().map_err(|e| CommandError::io("pwd", e))?;
        writeln!(out, "{}", wd.display()).map_err(|e| CommandError::io("pwd", e))
    }
}
