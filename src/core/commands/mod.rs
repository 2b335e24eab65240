use std::ffi::OsString;
use std::io::Write;

mod cd;
mod echo;
mod env;
mod exit;
mod fs;
mod history;
mod pwd;

pub use cd::CdCommand;
pub use echo::EchoCommand;
pub use env::EnvCommand;
pub use exit::ExitCommand;
pub use fs::{MkdirCommand, RmCommand};
pub use history::HistoryCommand;
pub use pwd::PwdCommand;

use crate::process::ProcessError;

#[derive(Debug)]
pub enum CommandError {
    MissingArgument(&'static str),
    MissingOperand(&'static str),
    Io {
        context: String,
        source: std::io::Error,
    },
    Process(ProcessError),
}

impl CommandError {
    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        CommandError::Io {
            context: context.into(),
            source,
        }
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::MissingArgument(cmd) => write!(f, "{}: missing argument", cmd),
            CommandError::MissingOperand(cmd) => write!(f, "{}: missing operand", cmd),
            CommandError::Io { context, source } => write!(f, "{}: {}", context, source),
            CommandError::Process(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::Io { source, .. } => Some(source),
            CommandError::Process(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ProcessError> for CommandError {
    fn from(err: ProcessError) -> Self {
        CommandError::Process(err)
    }
}

pub trait Command {
    fn execute(&self, args: &[OsString], out: &mut dyn Write) -> Result<(), CommandError>;
}

/// The closed set of commands the shell runs in-process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Builtin {
    Cd,
    Env,
    Exit,
    Echo,
    Pwd,
    History,
    Mkdir,
    Rm,
}

impl Builtin {
    pub const ALL: [Builtin; 8] = [
        Builtin::Cd,
        Builtin::Env,
        Builtin::Exit,
        Builtin::Echo,
        Builtin::Pwd,
        Builtin::History,
        Builtin::Mkdir,
        Builtin::Rm,
    ];

    /// Case-sensitive lookup.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "cd" => Some(Builtin::Cd),
            "env" => Some(Builtin::Env),
            "exit" => Some(Builtin::Exit),
            "echo" => Some(Builtin::Echo),
            "pwd" => Some(Builtin::Pwd),
            "history" => Some(Builtin::History),
            "mkdir" => Some(Builtin::Mkdir),
            "rm" => Some(Builtin::Rm),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Builtin::Cd => "cd",
            Builtin::Env => "env",
            Builtin::Exit => "exit",
            Builtin::Echo => "echo",
            Builtin::Pwd => "pwd",
            Builtin::History => "history",
            Builtin::Mkdir => "mkdir",
            Builtin::Rm => "rm",
        }
    }

    pub fn is_builtin(name: &str) -> bool {
        Self::from_name(name).is_some()
    }
}

impl std::fmt::Display for Builtin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
