use std::sync::{Condvar, Mutex};
use std::time::Duration;

/// Process-wide stop request shared by the signal handler, the console and
/// the main thread.
///
/// Waiting threads block on a condition variable and wake as soon as the
/// signal is triggered.
pub struct ShutdownSignal {
    triggered: Mutex<bool>,
    condvar: Condvar,
}

impl ShutdownSignal {
    pub fn new() -> Self {
        Self {
            triggered: Mutex::new(false),
            condvar: Condvar::new(),
        }
    }

    /// Request shutdown and wake every waiter. Idempotent.
    pub fn trigger(&self) {
        // A poisoned lock still holds a usable flag
        let mut triggered = self.triggered.lock().unwrap_or_else(|e| e.into_inner());
        *triggered = true;
        self.condvar.notify_all();
    }

    pub fn is_triggered(&self) -> bool {
        *self.triggered.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Block for at most `timeout`.
    ///
    /// Returns `true` if shutdown was requested.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let guard = self.triggered.lock().unwrap_or_else(|e| e.into_inner());
        let (guard, _) = self
            .condvar
            .wait_timeout_while(guard, timeout, |triggered| !*triggered)
            .unwrap_or_else(|e| e.into_inner());
        *guard
    }

    /// Block until shutdown is requested
    pub fn wait(&self) {
        let guard = self.triggered.lock().unwrap_or_else(|e| e.into_inner());
        let _guard = self
            .condvar
            .wait_while(guard, |triggered| !*triggered)
            .unwrap_or_else(|e| e.into_inner());
    }
}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}
