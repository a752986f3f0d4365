//! Repeating timers behind a small trait, so the typing animation can be
//! driven by tokio in the binary and by hand in tests.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// Callback invoked on every tick of a repeating schedule.
pub type TickFn = Box<dyn FnMut() + Send + 'static>;

/// Something that can call a function at a fixed interval.
pub trait Scheduler {
    /// Starts calling `tick` every `interval` until the returned handle is
    /// cancelled or dropped.
    fn schedule_repeating(&self, interval: Duration, tick: TickFn) -> CancelHandle;
}

/// Stops a repeating schedule.
///
/// Dropping the handle cancels the schedule as well.
#[must_use = "dropping the handle cancels the schedule"]
pub struct CancelHandle {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl CancelHandle {
    pub fn new<F>(cancel: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Cancels the schedule. No tick is delivered after this returns.
    pub fn cancel(mut self) {
        self.cancel_now();
    }

    fn cancel_now(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for CancelHandle {
    fn drop(&mut self) {
        self.cancel_now();
    }
}

impl fmt::Debug for CancelHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CancelHandle")
            .field("live", &self.cancel.is_some())
            .finish()
    }
}

/// Scheduler backed by `tokio::time::interval`.
///
/// Must be used from within a tokio runtime. The first tick fires one
/// `interval` after scheduling.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

impl Scheduler for TokioScheduler {
    fn schedule_repeating(&self, interval: Duration, mut tick: TickFn) -> CancelHandle {
        // tokio panics on a zero period
        let period = interval.max(Duration::from_millis(1));

        let task: JoinHandle<()> = tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                tick();
            }
        });

        CancelHandle::new(move || task.abort())
    }
}

struct Slot {
    interval: Duration,
    tick: TickFn,
    cancelled: Arc<AtomicBool>,
}

/// Deterministic scheduler that only ticks when [`ManualScheduler::fire`]
/// is called.
///
/// Clones share the same set of schedules.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    slots: Arc<Mutex<Vec<Slot>>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs every live schedule once and returns how many ticks were delivered.
    pub fn fire(&self) -> usize {
        let mut slots = self.lock();
        slots.retain(|slot| !slot.cancelled.load(Ordering::SeqCst));
        for slot in slots.iter_mut() {
            (slot.tick)();
        }
        slots.len()
    }

    /// Number of schedules that have not been cancelled.
    pub fn pending(&self) -> usize {
        self.lock()
            .iter()
            .filter(|slot| !slot.cancelled.load(Ordering::SeqCst))
            .count()
    }

    /// Intervals of the live schedules, oldest first.
    pub fn intervals(&self) -> Vec<Duration> {
        self.lock()
            .iter()
            .filter(|slot| !slot.cancelled.load(Ordering::SeqCst))
            .map(|slot| slot.interval)
            .collect()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Slot>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualScheduler")
            .field("pending", &self.pending())
            .finish()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_repeating(&self, interval: Duration, tick: TickFn) -> CancelHandle {
        let cancelled = Arc::new(AtomicBool::new(false));
        self.lock().push(Slot {
            interval,
            tick,
            cancelled: Arc::clone(&cancelled),
        });

        CancelHandle::new(move || cancelled.store(true, Ordering::SeqCst))
    }
}
