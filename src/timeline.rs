//! Time-ordered queue of pending events, drained by the frame tick.

use std::collections::VecDeque;

#[derive(Debug, Clone)]
struct Scheduled<T> {
    due: f64,
    item: T,
}

/// Pending items ordered by due time (milliseconds). Items sharing a due
/// time come out in the order they were pushed.
#[derive(Debug, Clone)]
pub struct Timeline<T> {
    entries: VecDeque<Scheduled<T>>,
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }
}

impl<T> Timeline<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, due: f64, item: T) {
        // Waves are pushed in ascending order, so this is almost always the back.
        let at = self.entries.partition_point(|e| e.due <= due);
        self.entries.insert(at, Scheduled { due, item });
    }

    pub fn pop_due(&mut self, now: f64) -> Option<T> {
        if self.entries.front()?.due <= now {
            self.entries.pop_front().map(|e| e.item)
        } else {
            None
        }
    }

    /// Drains every item due at or before `now`.
    pub fn due(&mut self, now: f64) -> impl Iterator<Item = T> + '_ {
        std::iter::from_fn(move || self.pop_due(now))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
