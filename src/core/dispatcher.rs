use std::ffi::{OsStr, OsString};
use std::io::Write;
use std::os::unix::ffi::OsStrExt;

use tracing::debug;

use super::commands::{
    Builtin, CdCommand, Command, CommandError, EchoCommand, EnvCommand, ExitCommand,
    HistoryCommand, MkdirCommand, PwdCommand, RmCommand,
};
use crate::process::ProcessExecutor;
use crate::shell::ExitSender;

/// Splits a line on runs of whitespace. No quoting or escaping.
///
/// Bytes pass through untouched, so arguments need not be UTF-8. Lines that
/// do decode are split on Unicode whitespace; anything else only on ASCII
/// whitespace.
pub fn tokenize(line: &[u8]) -> Vec<OsString> {
    match std::str::from_utf8(line) {
        Ok(text) => text.split_whitespace().map(OsString::from).collect(),
        Err(_) => line
            .split(|b| b.is_ascii_whitespace())
            .filter(|word| !word.is_empty())
            .map(|word| OsStr::from_bytes(word).to_os_string())
            .collect(),
    }
}

/// Routes one input line to a built-in or to an external process.
#[derive(Clone, Debug)]
pub struct Dispatcher {
    exit: ExitCommand,
    process_executor: ProcessExecutor,
}

impl Dispatcher {
    pub fn new(exit: ExitSender) -> Self {
        Self {
            exit: ExitCommand::new(exit),
            process_executor: ProcessExecutor::new(),
        }
    }

    /// Runs `line`. Built-in output goes to `out`; external commands write
    /// straight to the process's own stdout and stderr.
    pub fn handle(&self, out: &mut dyn Write, line: &[u8]) -> Result<(), CommandError> {
        let tokens = tokenize(line);
        let Some((name, args)) = tokens.split_first() else {
            return Ok(());
        };

        match name.to_str().and_then(Builtin::from_name) {
            Some(builtin) => {
                debug!(%builtin, ?args, "running builtin");
                self.run_builtin(builtin, args, out)
            }
            None => {
                debug!(command = ?name, ?args, "running external command");
                self.process_executor
                    .spawn_process(name, args)
                    .map_err(CommandError::from)
            }
        }
    }

    fn run_builtin(
        &self,
        builtin: Builtin,
        args: &[OsString],
        out: &mut dyn Write,
    ) -> Result<(), CommandError> {
        match builtin {
            Builtin::Cd => CdCommand.execute(args, out),
            Builtin::Env => EnvCommand.execute(args, out),
            Builtin::Exit => self.exit.execute(args, out),
            Builtin::Echo => EchoCommand.execute(args, out),
            Builtin::Pwd => PwdCommand.execute(args, out),
            Builtin::History => HistoryCommand.execute(args, out),
            Builtin::Mkdir => MkdirCommand.execute(args, out),
            Builtin::Rm => RmCommand.execute(args, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::ProcessError;
    use crate::shell::exit_signal;
    use crate::shell::ExitReceiver;

    fn setup() -> (Dispatcher, ExitReceiver) {
        let (tx, rx) = exit_signal();
        (Dispatcher::new(tx), rx)
    }

    fn handle(dispatcher: &Dispatcher, line: &str) -> (Result<(), CommandError>, String) {
        let mut out: Vec<u8> = Vec::new();
        let result = dispatcher.handle(&mut out, line.as_bytes());
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_tokenize_collapses_whitespace() {
        assert_eq!(tokenize(b"  echo \t a   b \n"), vec!["echo", "a", "b"]);
        assert!(tokenize(b" \t \n").is_empty());
    }

    #[test]
    fn test_tokenize_keeps_non_utf8_bytes() {
        let tokens = tokenize(b"echo  caf\xe9\tna\xefve\n");
        let bytes: Vec<&[u8]> = tokens.iter().map(|t| t.as_bytes()).collect();
        assert_eq!(bytes, vec![&b"echo"[..], &b"caf\xe9"[..], &b"na\xefve"[..]]);
    }

    #[test]
    fn test_blank_lines_are_no_ops() {
        let (dispatcher, rx) = setup();
        for line in ["", "\n", "   ", " \t \r\n"] {
            let (result, output) = handle(&dispatcher, line);
            assert!(result.is_ok());
            assert!(output.is_empty());
        }
        assert!(!rx.is_requested());
    }

    #[test]
    fn test_repeated_whitespace_matches_single_spaces() {
        let (dispatcher, _rx) = setup();
        let (spaced, spaced_out) = handle(&dispatcher, "echo   a   b\n");
        let (single, single_out) = handle(&dispatcher, "echo a b\n");
        assert!(spaced.is_ok() && single.is_ok());
        assert_eq!(spaced_out, "a b\n");
        assert_eq!(spaced_out, single_out);
    }

    #[test]
    fn test_echo_without_arguments() {
        let (dispatcher, _rx) = setup();
        let (result, output) = handle(&dispatcher, "echo\n");
        assert!(result.is_ok());
        assert_eq!(output, "\n");
    }

    #[test]
    fn test_exit_only_queues_request() {
        let (dispatcher, rx) = setup();
        let (result, output) = handle(&dispatcher, "exit\n");
        assert!(result.is_ok());
        assert!(output.is_empty());
        assert!(rx.is_requested());
    }

    #[test]
    fn test_builtin_names_are_case_sensitive() {
        let (dispatcher, rx) = setup();
        let (result, _) = handle(&dispatcher, "EXIT\n");
        assert!(matches!(
            result,
            Err(CommandError::Process(ProcessError::CommandNotFound(_)))
        ));
        assert!(!rx.is_requested());
    }

    #[test]
    fn test_cd_without_argument_is_reported() {
        let (dispatcher, _rx) = setup();
        let (result, _) = handle(&dispatcher, "cd\n");
        assert_eq!(result.unwrap_err().to_string(), "cd: missing argument");
    }

    #[test]
    fn test_env_lookup() {
        let (dispatcher, _rx) = setup();
        std::env::remove_var("FERRULE_DISPATCH_FOO");
        let (_, missing) = handle(&dispatcher, "env FERRULE_DISPATCH_FOO\n");
        assert!(missing.contains("FERRULE_DISPATCH_FOO"));
        assert!(missing.contains("not found"));

        std::env::set_var("FERRULE_DISPATCH_FOO", "bar");
        let (_, found) = handle(&dispatcher, "env FERRULE_DISPATCH_FOO\n");
        assert_eq!(found, "FERRULE_DISPATCH_FOO=bar\n");
    }

    #[test]
    fn test_history_stub() {
        let (dispatcher, _rx) = setup();
        let (result, output) = handle(&dispatcher, "history\n");
        assert!(result.is_ok());
        assert_eq!(output, "History command is not implemented yet.\n");
    }

    #[test]
    fn test_unknown_command_goes_to_external_execution() {
        let (dispatcher, _rx) = setup();
        let (result, output) = handle(&dispatcher, "notarealcommand123 --flag\n");
        assert!(output.is_empty());
        assert_eq!(
            result.unwrap_err().to_string(),
            "notarealcommand123: command not found"
        );
    }

    #[test]
    fn test_external_failure_is_reported() {
        let (dispatcher, _rx) = setup();
        let (result, _) = handle(&dispatcher, "false\n");
        assert!(matches!(
            result,
            Err(CommandError::Process(ProcessError::Failed { .. }))
        ));
    }

    #[test]
    fn test_external_output_bypasses_writer() {
        let (dispatcher, _rx) = setup();
        let (result, output) = handle(&dispatcher, "true ignored arguments\n");
        assert!(result.is_ok());
        assert!(output.is_empty());
    }

    #[test]
    fn test_mkdir_partial_application() {
        let (dispatcher, _rx) = setup();
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        std::fs::create_dir(&a).unwrap();

        let line = format!("mkdir {} {}\n", a.display(), b.display());
        let (result, _) = handle(&dispatcher, &line);

        assert!(result
            .unwrap_err()
            .to_string()
            .starts_with(&format!("mkdir {}:", a.display())));
        assert!(!b.exists());
    }

    #[test]
    fn test_non_utf8_arguments_reach_builtins() {
        let (dispatcher, _rx) = setup();
        let mut out: Vec<u8> = Vec::new();
        dispatcher.handle(&mut out, b"echo caf\xe9 ok\n").unwrap();
        assert_eq!(out, b"caf\xe9 ok\n");
    }

    #[test]
    fn test_non_utf8_command_name_is_external() {
        let (dispatcher, _rx) = setup();
        let result = dispatcher.handle(&mut std::io::sink(), b"ech\xf6\n");
        assert!(matches!(
            result,
            Err(CommandError::Process(ProcessError::CommandNotFound(_)))
        ));
    }
}
