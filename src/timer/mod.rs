//! One-shot deferred tasks on a virtual clock.
//!
//! The game never sleeps. Instead the controller schedules tasks at a
//! virtual time and the host moves the clock forward with `advance`. Each
//! task reads the game state when it fires, not when it was scheduled.
//!
//! ## Tick semantics
//!
//! `TaskQueue::advance` drains the tasks that were due when it was called.
//! Anything scheduled while those tasks run waits for the next call, even
//! with a zero delay. That is how the completion signal is deferred to the
//! tick after the final resolution.
//!
//! ```
//! use std::time::Duration;
//! use memory_match::timer::{Task, TaskQueue};
//!
//! let mut queue = TaskQueue::new();
//! queue.schedule(Duration::from_millis(1000), Task::Resolve { matched: false });
//!
//! assert!(queue.advance(Duration::from_millis(999)).is_empty());
//! assert_eq!(queue.advance(Duration::from_millis(1)).len(), 1);
//! ```

mod queue;

pub use queue::{ScheduledTask, TaskId, TaskQueue};

use serde::{Deserialize, Serialize};

/// Work deferred by the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Task {
    /// Settle every face-up tile: matched if `matched`, face down otherwise.
    Resolve { matched: bool },

    /// Signal the completion hook.
    Complete,
}
