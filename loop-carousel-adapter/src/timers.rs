use std::collections::BTreeMap;

use loop_carousel::{Scheduler, Task, TimerHandle};

/// A deterministic, virtual-time implementation of [`Scheduler`].
///
/// Timers are ordered by due time, then by scheduling order. Nothing fires on its own: the
/// owner pops due timers with [`Self::pop_due`] and delivers them to the carousel.
#[derive(Clone, Debug, Default)]
pub struct TimerQueue {
    now_ms: u64,
    next_id: u64,
    pending: BTreeMap<(u64, u64), Task>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Moves the clock. Time never goes backwards.
    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn count(&self, mut f: impl FnMut(&Task) -> bool) -> usize {
        self.pending.values().filter(|task| f(task)).count()
    }

    pub fn next_due_ms(&self) -> Option<u64> {
        self.pending.keys().next().map(|&(due, _)| due)
    }

    /// Due time of `handle`, if it is still pending.
    pub fn due_ms(&self, handle: TimerHandle) -> Option<u64> {
        self.pending
            .keys()
            .find(|&&(_, id)| id == handle.raw())
            .map(|&(due, _)| due)
    }

    /// Removes and returns the earliest timer due at or before `until_ms`.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<(u64, TimerHandle, Task)> {
        let (&(due, id), _) = self.pending.first_key_value()?;
        if due > until_ms {
            return None;
        }
        let task = self.pending.remove(&(due, id))?;
        Some((due, TimerHandle::new(id), task))
    }
}

impl Scheduler for TimerQueue {
    fn schedule(&mut self, task: Task, delay_ms: u64) -> TimerHandle {
        self.next_id = self.next_id.saturating_add(1);
        let due = self.now_ms.saturating_add(delay_ms);
        self.pending.insert((due, self.next_id), task);
        TimerHandle::new(self.next_id)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.pending.retain(|&(_, id), _| id != handle.raw());
    }
}
