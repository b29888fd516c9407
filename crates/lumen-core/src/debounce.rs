//! Trailing-edge debouncer with a single owned timer.
//!
//! [`Debouncer::schedule`] stores the latest value and (re)starts one tokio
//! timer; when the timer fires, the value is handed to the sink. Scheduling
//! again before the delay elapses replaces the value and restarts the timer,
//! so a burst of calls results in exactly one delivery carrying the last
//! value. [`Debouncer::flush`] delivers immediately on the caller's thread.
//!
//! Each scheduled value is delivered at most once: the pending slot is taken
//! under a lock by whichever of the timer task or `flush` gets there first.
//! The lock is held until the sink returns, so once `cancel` or `flush`
//! returns no older delivery can still land.

use std::{
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use tokio::task::JoinHandle;

type Sink<T> = Arc<dyn Fn(T) + Send + Sync>;

pub struct Debouncer<T> {
    delay: Duration,
    pending: Arc<Mutex<Option<T>>>,
    timer: Option<JoinHandle<()>>,
    sink: Sink<T>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Creates a debouncer that delivers values to `sink` after `delay` of
    /// inactivity.
    pub fn new(delay: Duration, sink: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self {
            delay,
            pending: Arc::new(Mutex::new(None)),
            timer: None,
            sink: Arc::new(sink),
        }
    }

    /// Replaces the pending value and restarts the timer.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn schedule(&mut self, value: T) {
        *lock(&self.pending) = Some(value);
        self.abort_timer();

        let pending = Arc::clone(&self.pending);
        let sink = Arc::clone(&self.sink);
        let delay = self.delay;
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut slot = lock(&pending);
            if let Some(value) = slot.take() {
                sink(value);
            }
        }));
    }

    /// Delivers the pending value now. Returns whether anything was pending.
    pub fn flush(&mut self) -> bool {
        self.abort_timer();
        let mut slot = lock(&self.pending);
        match slot.take() {
            Some(value) => {
                (self.sink)(value);
                true
            }
            None => false,
        }
    }

    /// Drops the pending value without delivering it.
    ///
    /// Waits for a delivery the timer has already started.
    pub fn cancel(&mut self) {
        self.abort_timer();
        lock(&self.pending).take();
    }

    pub fn is_pending(&self) -> bool {
        lock(&self.pending).is_some()
    }

    fn abort_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl<T> fmt::Debug for Debouncer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .field("timer_running", &self.timer.is_some())
            .finish()
    }
}

fn lock<T>(slot: &Mutex<Option<T>>) -> MutexGuard<'_, Option<T>> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}
