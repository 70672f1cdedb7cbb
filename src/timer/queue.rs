//! Virtual-time task queue.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::Task;

/// Identifier assigned to each scheduled task, in scheduling order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TaskId(pub u64);

/// A task waiting for its due time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTask {
    pub id: TaskId,
    /// Virtual time at which the task fires.
    pub due: Duration,
    pub task: Task,
}

/// Pending one-shot tasks plus the virtual clock they run against.
///
/// Tasks are not cancellable. Due tasks come out ordered by due time, ties
/// broken by scheduling order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TaskQueue {
    now: Duration,
    next_id: u64,
    pending: Vec<ScheduledTask>,
}

impl TaskQueue {
    /// Create an empty queue at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule `task` to fire `delay` after the current time.
    pub fn schedule(&mut self, delay: Duration, task: Task) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.pending.push(ScheduledTask {
            id,
            due: self.now.saturating_add(delay),
            task,
        });
        id
    }

    /// Move the clock forward and drain every task that is now due.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<ScheduledTask> {
        self.now = self.now.saturating_add(elapsed);

        let now = self.now;
        let (mut due, waiting): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|t| t.due <= now);
        self.pending = waiting;

        due.sort_by_key(|t| (t.due, t.id));
        due
    }

    /// Earliest due time among pending tasks.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.iter().map(|t| t.due).min()
    }

    /// Time left until the next task is due, zero if one is already due.
    #[must_use]
    pub fn time_until_next(&self) -> Option<Duration> {
        self.next_deadline().map(|due| due.saturating_sub(self.now))
    }

    /// True if a task of this kind is pending.
    #[must_use]
    pub fn has_pending(&self, matches: impl Fn(&Task) -> bool) -> bool {
        self.pending.iter().any(|t| matches(&t.task))
    }
}
