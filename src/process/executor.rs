use std::ffi::{OsStr, OsString};
use std::io::ErrorKind;
use std::process::{Command, Stdio};

use tracing::{debug, trace};

use super::ProcessError;

/// Runs anything that is not a built-in as a child process.
///
/// The child shares the shell's stdout and stderr and reads from the null
/// device. The shell blocks until it exits.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }

    pub fn spawn_process(&self, name: &OsStr, args: &[OsString]) -> Result<(), ProcessError> {
        let display_name = || name.to_string_lossy().into_owned();
        let mut command = Command::new(name);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ProcessError::CommandNotFound(display_name()));
            }
            Err(e) => {
                return Err(ProcessError::Spawn {
                    name: display_name(),
                    source: e,
                });
            }
        };

        trace!(pid = child.id(), command = ?name, "spawned child");

        let status = child.wait().map_err(|e| ProcessError::Wait {
            name: display_name(),
            source: e,
        })?;

        debug!(command = ?name, %status, "child exited");

        if status.success() {
            Ok(())
        } else {
            Err(ProcessError::Failed {
                name: display_name(),
                status,
            })
        }
    }
}
