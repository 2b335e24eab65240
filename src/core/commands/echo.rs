use super::{Command, CommandError};
use std::ffi::OsString;
use std::io::Write;
use std::os::unix::ffi::OsStrExt;

#[derive(Clone, Copy, Debug, Default)]
pub struct EchoCommand;

impl EchoCommand {
    fn write_args(args: &[OsString], out: &mut dyn Write) -> std::io::Result<()> {
        for (i, arg) in args.iter().enumerate() {
            if i > 0 {
                out.write_all(b" ")?;
            }
            out.write_all(arg.as_bytes())?;
        }
        out.write_all(b"\n")
    }
}

impl Command for EchoCommand {
    fn execute(&self, args: &[OsString], out: &mut dyn Write) -> Result<(), CommandError> {
        Self::write_args(args, out).map_err(|e| CommandError::io("echo", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    fn run(args: &[&[u8]]) -> Vec<u8> {
        let args: Vec<OsString> = args.iter().map(|a| OsStr::from_bytes(a).to_os_string()).collect();
        let mut out: Vec<u8> = Vec::new();
        EchoCommand.execute(&args, &mut out).unwrap();
        out
    }

    #[test]
    fn test_echo_joins_with_single_spaces() {
        assert_eq!(run(&[b"a", b"b", b"c"]), b"a b c\n");
    }

    #[test]
    fn test_echo_without_arguments_prints_empty_line() {
        assert_eq!(run(&[]), b"\n");
    }

    #[test]
    fn test_echo_does_not_parse_flags() {
        assert_eq!(run(&[b"-n", b"x"]), b"-n x\n");
    }

    #[test]
    fn test_echo_writes_raw_bytes() {
        assert_eq!(run(&[b"caf\xe9", b"ok"]), b"caf\xe9 ok\n");
    }
}
