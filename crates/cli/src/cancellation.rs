//! CLI cancellation utilities.
//!
//! Responsibilities:
//! - Provide a cloneable cancellation token tripped by Ctrl+C.
//! - Race an in-flight provider operation against the token.
//! - Define the `Cancelled` marker error and the SIGINT exit code (130).
//!
//! Does NOT handle:
//! - Installing signal handlers (done in `main()`).
//!
//! Invariants:
//! - Once cancelled, token remains cancelled forever.
//! - A cancelled operation's future is dropped, abandoning any open request.

use std::fmt;
use std::future::Future;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use tokio::sync::Notify;

/// Cancellation token usable across async tasks.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel token (idempotent).
    pub fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::SeqCst) {
            self.notify.notify_waiters();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Await cancellation.
    ///
    /// The `notified()` future is created before the flag is checked so a
    /// concurrent `cancel()` cannot be missed.
    pub async fn cancelled(&self) {
        let notified = self.notify.notified();
        if self.is_cancelled() {
            return;
        }
        notified.await;
    }

    /// Run `operation` unless the token trips first.
    pub async fn run<F, T, E>(&self, operation: F) -> anyhow::Result<T>
    where
        F: Future<Output = Result<T, E>>,
        E: Into<anyhow::Error>,
    {
        tokio::select! {
            result = operation => result.map_err(Into::into),
            () = self.cancelled() => Err(Cancelled.into()),
        }
    }
}

/// Marker error used to indicate user-driven cancellation.
#[derive(Debug, Clone, Copy)]
pub struct Cancelled;

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cancelled")
    }
}

impl std::error::Error for Cancelled {}

pub fn is_cancelled_error(err: &anyhow::Error) -> bool {
    err.is::<Cancelled>()
}

/// Print standard cancellation message to stderr.
pub fn print_cancelled_message() {
    eprintln!("^C\nOperation cancelled by user");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_completes_when_not_cancelled() {
        let token = CancellationToken::new();
        let value = token
            .run(async { Ok::<_, std::io::Error>(7) })
            .await
            .unwrap();
        assert_eq!(value, 7);
    }

    #[tokio::test]
    async fn test_run_returns_cancelled_after_cancel() {
        let token = CancellationToken::new();
        token.cancel();
        let err = token
            .run(std::future::pending::<Result<(), std::io::Error>>())
            .await
            .unwrap_err();
        assert!(is_cancelled_error(&err));
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let token = CancellationToken::new();
        token.cancel();
        token.cancel();
        assert!(token.clone().is_cancelled());
    }
}
