//! One-shot tasks and a cooperative timer queue running on virtual time.
//!
//! The browser hands one-shot timers to `setTimeout` (see `enhance`); the
//! [`TimerQueue`] runs the same tasks against a clock the caller advances, so
//! the page can be stepped through deterministically.

use std::collections::BTreeMap;

/// Work the page defers until a timer fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Task {
    RestoreButton,
    RevealCard(usize),
}

/// A task to run once, `delay_ms` after it was handed out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scheduled {
    pub delay_ms: u32,
    pub task: Task,
}

impl Scheduled {
    pub fn new(delay_ms: u32, task: Task) -> Self {
        Self { delay_ms, task }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

/// A timer that came due during [`TimerQueue::advance_to`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fired<T> {
    pub id: TimerId,
    pub due: u64,
    pub task: T,
}

/// Pending one-shot timers ordered by due time, then by scheduling order.
#[derive(Debug)]
pub struct TimerQueue<T> {
    now: u64,
    next_id: u64,
    pending: BTreeMap<(u64, TimerId), T>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            now: 0,
            next_id: 0,
            pending: BTreeMap::new(),
        }
    }

    pub fn now(&self) -> u64 {
        self.now
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn next_due(&self) -> Option<u64> {
        self.pending.keys().next().map(|(due, _)| *due)
    }

    /// Queue `task` to fire once at `now + delay_ms`.
    pub fn schedule(&mut self, delay_ms: u32, task: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let due = self.now.saturating_add(u64::from(delay_ms));
        self.pending.insert((due, id), task);
        id
    }

    pub fn cancel(&mut self, id: TimerId) -> bool {
        let key = self.pending.keys().find(|(_, pending)| *pending == id).copied();
        match key {
            Some(key) => self.pending.remove(&key).is_some(),
            None => false,
        }
    }

    /// Drops every pending timer. Returns how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let cancelled = self.pending.len();
        self.pending.clear();
        cancelled
    }

    /// Pops the earliest timer due at or before `until`, moving the clock to
    /// its due time. When nothing is due the clock moves to `until`.
    pub fn pop_due(&mut self, until: u64) -> Option<Fired<T>> {
        let until = until.max(self.now);
        let key = match self.pending.keys().next() {
            Some(&(due, id)) if due <= until => (due, id),
            _ => {
                self.now = until;
                return None;
            }
        };
        let task = self.pending.remove(&key)?;
        self.now = self.now.max(key.0);
        Some(Fired {
            id: key.1,
            due: key.0,
            task,
        })
    }

    /// Moves the clock to `until` and returns everything that came due, in order.
    /// The clock never runs backwards.
    pub fn advance_to(&mut self, until: u64) -> Vec<Fired<T>> {
        let mut fired = Vec::new();
        while let Some(timer) = self.pop_due(until) {
            fired.push(timer);
        }
        fired
    }
}
