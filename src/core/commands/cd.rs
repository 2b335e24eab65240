use super::{Command, CommandError};
use std::env;
use std::ffi::OsString;
use std::io::Write;

#[derive(Clone, Copy, Debug, Default)]
pub struct CdCommand;

impl Command for CdCommand {
    fn execute(&self, args: &[OsString], _out: &mut dyn Write) -> Result<(), CommandError> {
        let target = args.first().ok_or(CommandError::MissingArgument("cd"))?;

        env::set_current_dir(target)
            .map_err(|e| CommandError::io(format!("cd {}", target.to_string_lossy()), e))
    }
}
