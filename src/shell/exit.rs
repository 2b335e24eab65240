use std::sync::mpsc::{self, Receiver, SyncSender, TryRecvError, TrySendError};

use tracing::trace;

/// Room for a late or duplicate request without ever blocking the sender.
const EXIT_CAPACITY: usize = 2;

/// Sending half of the exit signal, held by the `exit` built-in and the
/// SIGINT handler.
#[derive(Clone, Debug)]
pub struct ExitSender {
    tx: SyncSender<()>,
}

/// Receiving half of the exit signal, polled by the loop driver.
#[derive(Debug)]
pub struct ExitReceiver {
    rx: Receiver<()>,
}

pub fn exit_signal() -> (ExitSender, ExitReceiver) {
    let (tx, rx) = mpsc::sync_channel(EXIT_CAPACITY);
    (ExitSender { tx }, ExitReceiver { rx })
}

impl ExitSender {
    /// Queues an exit request. Never blocks.
    pub fn request(&self) {
        match self.tx.try_send(()) {
            Ok(()) => trace!("exit requested"),
            // A full channel already holds a pending request.
            Err(TrySendError::Full(())) => trace!("exit already pending"),
            Err(TrySendError::Disconnected(())) => trace!("exit requested after shutdown"),
        }
    }
}

impl ExitReceiver {
    /// Non-blocking check for a pending exit request.
    pub fn is_requested(&self) -> bool {
        match self.rx.try_recv() {
            Ok(()) => true,
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_pending() {
        let (_tx, rx) = exit_signal();
        assert!(!rx.is_requested());
    }

    #[test]
    fn test_request_is_observed_once() {
        let (tx, rx) = exit_signal();
        tx.request();
        assert!(rx.is_requested());
        assert!(!rx.is_requested());
    }

    #[test]
    fn test_extra_requests_do_not_block() {
        let (tx, rx) = exit_signal();
        for _ in 0..5 {
            tx.request();
        }
        assert!(rx.is_requested());
    }

    #[test]
    fn test_request_from_another_thread() {
        let (tx, rx) = exit_signal();
        let remote = tx.clone();
        std::thread::spawn(move || remote.request()).join().unwrap();
        assert!(rx.is_requested());
    }

    #[test]
    fn test_request_after_receiver_dropped() {
        let (tx, rx) = exit_signal();
        drop(rx);
        tx.request();
    }
}
