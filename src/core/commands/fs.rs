//! `mkdir` and `rm`. Both stop at the first failing operand and leave
//! earlier operands applied.

use super::{Command, CommandError};
use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::Path;

#[derive(Clone, Copy, Debug, Default)]
pub struct MkdirCommand;

impl Command for MkdirCommand {
    fn execute(&self, args: &[OsString], _out: &mut dyn Write) -> Result<(), CommandError> {
        if args.is_empty() {
            return Err(CommandError::MissingOperand("mkdir"));
        }

        for dir in args {
            fs::create_dir(dir).map_err(|e| {
                CommandError::io(format!("mkdir {}", dir.to_string_lossy()), e)
            })?;
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct RmCommand;

impl RmCommand {
    // Empty directories are removed too; anything else goes through unlink.
    fn remove(path: &Path) -> std::io::Result<()> {
        match fs::symlink_metadata(path) {
            Ok(meta) if meta.is_dir() => fs::remove_dir(path),
            _ => fs::remove_file(path),
        }
    }
}

impl Command for RmCommand {
    fn execute(&self, args: &[OsString], _out: &mut dyn Write) -> Result<(), CommandError> {
        if args.is_empty() {
            return Err(CommandError::MissingOperand("rm"));
        }

        for file in args {
            Self::remove(Path::new(file))
                .map_err(|e| CommandError::io(format!("rm {}", file.to_string_lossy()), e))?;
        }
        Ok(())
    }
}
