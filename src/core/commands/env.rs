use super::{Command, CommandError};
use std::env;
use std::ffi::{OsStr, OsString};
use std::io::Write;
use std::os::unix::ffi::OsStrExt;

/// Prints the inherited environment, or just the named variables.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnvCommand;

impl EnvCommand {
    fn write_pair(key: &OsStr, value: &OsStr, out: &mut dyn Write) -> std::io::Result<()> {
        out.write_all(key.as_bytes())?;
        out.write_all(b"=")?;
        out.write_all(value.as_bytes())?;
        out.write_all(b"\n")
    }

    fn print_all(&self, out: &mut dyn Write) -> std::io::Result<()> {
        for (key, value) in env::vars_os() {
            Self::write_pair(&key, &value, out)?;
        }
        Ok(())
    }

    fn print_named(&self, names: &[OsString], out: &mut dyn Write) -> std::io::Result<()> {
        for name in names {
            match env::var_os(name) {
                Some(value) => Self::write_pair(name, &value, out)?,
                None => {
                    out.write_all(name.as_bytes())?;
                    out.write_all(b" not found in environment variables\n")?;
                }
            }
        }
        Ok(())
    }
}

impl Command for EnvCommand {
    fn execute(&self, args: &[OsString], out: &mut dyn Write) -> Result<(), CommandError> {
        let written = if args.is_empty() {
            self.print_all(out)
        } else {
            self.print_named(args, out)
        };
        written.map_err(|e| CommandError::io("env", e))
    }
}
