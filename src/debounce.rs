//! Debounce timer with cancel-and-replace semantics
//!
//! Each `schedule()` call cancels whatever is still waiting and starts a fresh
//! quiet period. Only the timer is cancellable: once the quiet period elapses the
//! action moves to its own task and runs to completion even if `cancel()` or a
//! new `schedule()` comes in afterwards.

use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Quiet period used for search-as-you-type
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(300);

/// Owns at most one pending timer. Must be used from inside a tokio runtime.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Run `action` after the quiet period, replacing any pending action
    pub fn schedule<F>(&mut self, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();

        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            tokio::spawn(action);
        }));
    }

    /// Clear the pending timer. Returns true if one was still waiting.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                true
            }
            _ => false,
        }
    }

    /// Whether a timer is still inside its quiet period
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_PERIOD)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tokio::time::sleep;

    fn recorder() -> Arc<Mutex<Vec<&'static str>>> {
        Arc::new(Mutex::new(Vec::new()))
    }

    fn push(log: &Arc<Mutex<Vec<&'static str>>>, value: &'static str) -> impl Future<Output = ()> {
        let log = log.clone();
        async move { log.lock().unwrap().push(value) }
    }

    #[tokio::test(start_paused = true)]
    async fn fires_after_quiet_period() {
        let fired = recorder();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        debouncer.schedule(push(&fired, "phone"));
        assert!(debouncer.is_pending());

        sleep(Duration::from_millis(299)).await;
        assert!(fired.lock().unwrap().is_empty());

        sleep(Duration::from_millis(2)).await;
        assert_eq!(*fired.lock().unwrap(), vec!["phone"]);
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_schedules_collapse_to_last() {
        let fired = recorder();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        for value in ["p", "ph", "pho", "phone"] {
            debouncer.schedule(push(&fired, value));
            sleep(Duration::from_millis(100)).await;
        }

        // Last schedule was at t=300; it fires at t=600
        sleep(Duration::from_millis(199)).await;
        assert!(fired.lock().unwrap().is_empty());

        sleep(Duration::from_millis(2)).await;
        assert_eq!(*fired.lock().unwrap(), vec!["phone"]);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_drops_pending_action() {
        let fired = recorder();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        debouncer.schedule(push(&fired, "phone"));
        assert!(debouncer.cancel());
        assert!(!debouncer.cancel());

        sleep(Duration::from_secs(1)).await;
        assert!(fired.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_after_firing_does_not_interrupt_action() {
        let fired = recorder();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        let log = fired.clone();
        debouncer.schedule(async move {
            log.lock().unwrap().push("started");
            sleep(Duration::from_millis(500)).await;
            log.lock().unwrap().push("finished");
        });

        sleep(Duration::from_millis(350)).await;
        assert!(!debouncer.cancel());

        sleep(Duration::from_millis(500)).await;
        assert_eq!(*fired.lock().unwrap(), vec!["started", "finished"]);
    }

    #[tokio::test(start_paused = true)]
    async fn drop_cancels_pending_timer() {
        let fired = recorder();
        {
            let mut debouncer = Debouncer::default();
            debouncer.schedule(push(&fired, "phone"));
        }

        sleep(Duration::from_secs(1)).await;
        assert!(fired.lock().unwrap().is_empty());
    }
}
