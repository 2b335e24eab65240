use std::fmt;
use std::process::ExitStatus;

pub mod executor;

pub use executor::ProcessExecutor;

#[derive(Debug)]
pub enum ProcessError {
    CommandNotFound(String),
    Spawn { name: String, source: std::io::Error },
    Wait { name: String, source: std::io::Error },
    Failed { name: String, status: ExitStatus },
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::CommandNotFound(cmd) => write!(f, "{}: command not found", cmd),
            ProcessError::Spawn { name, source } => write!(f, "{}: {}", name, source),
            ProcessError::Wait { name, source } => write!(f, "{}: wait failed: {}", name, source),
            ProcessError::Failed { name, status } => write!(f, "{}: {}", name, status),
        }
    }
}

impl std::error::Error for ProcessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProcessError::Spawn { source, .. } | ProcessError::Wait { source, .. } => Some(source),
            _ => None,
        }
    }
}
