//! Cancellation: the shared stop flag and the timer that raises it.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::trace;

/// The stop flag was raised while a branch was being searched.
///
/// Never escapes the driver; it only tells callers that the depth in
/// progress is incomplete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("search cancelled")]
pub struct Cancelled;

/// The stop flag and the clock of one search call.
pub struct SearchControl {
    stopped: Arc<AtomicBool>,
    start: Instant,
}

impl SearchControl {
    pub fn new(stopped: Arc<AtomicBool>) -> Self {
        Self {
            stopped,
            start: Instant::now(),
        }
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// `Err(Cancelled)` once the flag is up.
    #[inline]
    pub fn check(&self) -> Result<(), Cancelled> {
        if self.is_stopped() { Err(Cancelled) } else { Ok(()) }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn stop_flag(&self) -> &Arc<AtomicBool> {
        &self.stopped
    }
}

/// Raises a stop flag once `budget` has passed, unless dropped first.
///
/// The waiting thread sleeps on a channel, so dropping the timer wakes it
/// immediately instead of leaving it to run out the budget.
pub struct Timer {
    cancel: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Timer {
    pub fn start(budget: Duration, stopped: Arc<AtomicBool>) -> Self {
        let (cancel, wait) = mpsc::channel::<()>();
        let handle = std::thread::spawn(move || match wait.recv_timeout(budget) {
            Err(RecvTimeoutError::Timeout) => {
                trace!(budget_ms = budget.as_millis() as u64, "time budget spent");
                stopped.store(true, Ordering::Relaxed);
            }
            Ok(()) | Err(RecvTimeoutError::Disconnected) => {}
        });
        Self {
            cancel: Some(cancel),
            handle: Some(handle),
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        // Closing the channel wakes the thread early.
        drop(self.cancel.take());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_follows_the_flag() {
        let flag = Arc::new(AtomicBool::new(false));
        let control = SearchControl::new(Arc::clone(&flag));
        assert_eq!(control.check(), Ok(()));
        flag.store(true, Ordering::Relaxed);
        assert_eq!(control.check(), Err(Cancelled));
        assert!(control.stop_flag().load(Ordering::Relaxed));
    }

    #[test]
    fn timer_raises_the_flag() {
        let flag = Arc::new(AtomicBool::new(false));
        let _timer = Timer::start(Duration::from_millis(10), Arc::clone(&flag));
        let deadline = Instant::now() + Duration::from_secs(5);
        while !flag.load(Ordering::Relaxed) && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(1));
        }
        assert!(flag.load(Ordering::Relaxed));
    }

    #[test]
    fn dropped_timer_never_fires() {
        let flag = Arc::new(AtomicBool::new(false));
        let start = Instant::now();
        drop(Timer::start(Duration::from_secs(60), Arc::clone(&flag)));
        assert!(start.elapsed() < Duration::from_secs(10));
        assert!(!flag.load(Ordering::Relaxed));
    }
}
