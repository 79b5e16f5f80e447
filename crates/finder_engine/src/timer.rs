use std::time::Duration;

use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;

/// A single cancelable scheduled callback.
///
/// Scheduling again cancels the countdown that is already armed, and dropping
/// the timer cancels it too, so at most one callback is pending at a time.
/// A callback that has already started running is not interrupted.
pub struct DebounceTimer {
    runtime: Handle,
    armed: Option<CancellationToken>,
}

impl DebounceTimer {
    pub fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            armed: None,
        }
    }

    pub fn schedule<F>(&mut self, delay: Duration, callback: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        let token = CancellationToken::new();
        let cancelled = token.clone();
        self.runtime.spawn(async move {
            tokio::select! {
                biased;
                _ = cancelled.cancelled() => {}
                _ = tokio::time::sleep(delay) => callback(),
            }
        });
        self.armed = Some(token);
    }

    /// Returns whether a countdown was armed.
    pub fn cancel(&mut self) -> bool {
        match self.armed.take() {
            Some(token) => {
                token.cancel();
                true
            }
            None => false,
        }
    }
}

impl Drop for DebounceTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
