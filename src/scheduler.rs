// SPDX-License-Identifier: MPL-2.0
//! Cancellable timers over a virtual clock.
//!
//! The notification engine never sleeps and never asks the host for timers.
//! Every delay (auto-close, fade ticks, spinner frames) is a deadline in a
//! [`Scheduler`], and time only moves when the owner calls
//! [`Scheduler::fire_next`] / [`Scheduler::settle`]. Tests fast-forward the
//! clock; an Iced application feeds it from a `time::every` subscription.
//!
//! # Example
//!
//! ```
//! use iced_toasts::scheduler::Scheduler;
//! use std::time::Duration;
//!
//! let mut scheduler = Scheduler::new();
//! let handle = scheduler.schedule_once(Duration::from_millis(30), "close");
//!
//! let target = Duration::from_millis(50);
//! let fired = scheduler.fire_next(target).expect("deadline passed");
//! assert_eq!(fired.handle, handle);
//! assert_eq!(fired.payload, "close");
//! assert_eq!(scheduler.now(), Duration::from_millis(30));
//!
//! scheduler.settle(target);
//! assert_eq!(scheduler.now(), target);
//! assert!(!scheduler.cancel(handle)); // already fired
//! ```

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

/// Shortest interval a repeating timer may use.
const MIN_REPEAT_INTERVAL: Duration = Duration::from_micros(1);

/// Handle to a scheduled timer, used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// A timer whose deadline has been reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fired<T> {
    pub handle: TimerHandle,
    /// Deadline the timer was due at (the clock now reads this value).
    pub at: Duration,
    pub payload: T,
}

#[derive(Debug, Clone)]
struct Entry<T> {
    handle: TimerHandle,
    payload: T,
    repeat: Option<Duration>,
}

/// Deadline-ordered set of one-shot and repeating timers.
///
/// Timers sharing a deadline fire in scheduling order.
#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    now: Duration,
    next_seq: u64,
    next_handle: u64,
    queue: BTreeMap<(Duration, u64), Entry<T>>,
    index: HashMap<TimerHandle, (Duration, u64)>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    /// Creates an empty scheduler whose clock reads zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            next_handle: 0,
            queue: BTreeMap::new(),
            index: HashMap::new(),
        }
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Fires once, `after` from now.
    pub fn schedule_once(&mut self, after: Duration, payload: T) -> TimerHandle {
        self.insert(after, payload, None)
    }

    /// Fires every `interval`, first at now + `interval`, until cancelled.
    pub fn schedule_repeating(&mut self, interval: Duration, payload: T) -> TimerHandle {
        let interval = interval.max(MIN_REPEAT_INTERVAL);
        self.insert(interval, payload, Some(interval))
    }

    /// Cancels a timer. Returns false when it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.index.remove(&handle) {
            Some(key) => self.queue.remove(&key).is_some(),
            None => false,
        }
    }

    /// Whether the timer is still waiting to fire.
    #[must_use]
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.index.contains_key(&handle)
    }

    /// Earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.keys().next().map(|(deadline, _)| *deadline)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Moves the clock to `target` once every due timer has been fired.
    ///
    /// The clock never goes backwards.
    pub fn settle(&mut self, target: Duration) {
        self.now = self.now.max(target);
    }

    fn insert(&mut self, after: Duration, payload: T, repeat: Option<Duration>) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        let deadline = self.now + after;
        self.enqueue(
            deadline,
            Entry {
                handle,
                payload,
                repeat,
            },
        );
        handle
    }

    fn enqueue(&mut self, deadline: Duration, entry: Entry<T>) {
        let key = (deadline, self.next_seq);
        self.next_seq += 1;
        self.index.insert(entry.handle, key);
        self.queue.insert(key, entry);
    }
}

impl<T: Clone> Scheduler<T> {
    /// Pops the earliest timer due at or before `target`.
    ///
    /// The clock moves to that timer's deadline. Repeating timers are
    /// re-armed before being returned, so a handler may cancel them.
    pub fn fire_next(&mut self, target: Duration) -> Option<Fired<T>> {
        let key = *self.queue.keys().next()?;
        let (deadline, _) = key;
        if deadline > target {
            return None;
        }

        let entry = self.queue.remove(&key)?;
        self.index.remove(&entry.handle);
        self.now = self.now.max(deadline);

        let fired = Fired {
            handle: entry.handle,
            at: deadline,
            payload: entry.payload.clone(),
        };
        if let Some(interval) = entry.repeat {
            self.enqueue(deadline + interval, entry);
        }
        Some(fired)
    }

    /// Fires everything due up to `target` and settles the clock there.
    pub fn drain_until(&mut self, target: Duration) -> Vec<Fired<T>> {
        let mut fired = Vec::new();
        while let Some(next) = self.fire_next(target) {
            fired.push(next);
        }
        self.settle(target);
        fired
    }
}
