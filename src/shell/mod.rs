use std::io::Write;

use tracing::{debug, info};

mod exit;
mod session;

pub use exit::{exit_signal, ExitReceiver, ExitSender};
pub use session::{current_username, OsSession, SessionInfo};

use crate::{core::Dispatcher, error::ShellError, input::LineSource};

pub const EXIT_NOTICE: &str = "exiting gracefully...";

/// The read-prompt-dispatch loop.
///
/// `exit` only queues a request on the exit signal; the loop checks it at
/// the top of each iteration, so nothing queued after `exit` is read.
pub struct Shell<S = OsSession> {
    dispatcher: Dispatcher,
    exit_tx: ExitSender,
    exit_rx: ExitReceiver,
    session: S,
}

impl Shell<OsSession> {
    pub fn new() -> Self {
        Self::with_session(OsSession)
    }
}

impl Default for Shell<OsSession> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SessionInfo> Shell<S> {
    pub fn with_session(session: S) -> Self {
        let (exit_tx, exit_rx) = exit_signal();
        Shell {
            dispatcher: Dispatcher::new(exit_tx.clone()),
            exit_tx,
            exit_rx,
            session,
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// A handle that asks the loop to stop at its next iteration.
    pub fn exit_sender(&self) -> ExitSender {
        self.exit_tx.clone()
    }

    /// Routes SIGINT to a graceful exit instead of killing the shell.
    pub fn install_interrupt_handler(&self) -> Result<(), ShellError> {
        let exit = self.exit_sender();
        ctrlc::set_handler(move || exit.request())?;
        Ok(())
    }

    /// Runs until an exit request is observed. Every other failure is
    /// written to `err` and the loop goes back to the prompt.
    pub fn run(
        &mut self,
        input: &mut dyn LineSource,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<(), ShellError> {
        loop {
            if self.exit_rx.is_requested() {
                info!("exit requested, leaving loop");
                writeln!(out, "{}", EXIT_NOTICE)?;
                out.flush()?;
                return Ok(());
            }

            let prompt = match self.session.prompt() {
                Ok(prompt) => prompt,
                Err(e) => {
                    report(err, &e);
                    continue;
                }
            };

            let line = match input.read_line(&prompt, out) {
                Ok(line) => line,
                Err(e) => {
                    debug!(kind = ?e.kind(), "read failed");
                    report(err, &e);
                    continue;
                }
            };

            if let Err(e) = self.dispatcher.handle(out, &line) {
                debug!(error = %e, "dispatch failed");
                report(err, &e);
            }
        }
    }
}

fn report(err: &mut dyn Write, e: &dyn std::fmt::Display) {
    let _ = writeln!(err, "{}", e);
    let _ = err.flush();
}
