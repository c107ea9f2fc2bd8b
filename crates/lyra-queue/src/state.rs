// SPDX-FileCopyrightText: 2026 Lyra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Queue state shared between the controller and the scheduler loop.

use std::fmt;

use lyra_core::UserId;

/// Mutable state of one conversation's playback queue.
///
/// Lives behind a single `Arc<Mutex<_>>` per conversation; every reader
/// and writer locks it, so position updates from commands and from the
/// scheduler tick never interleave mid-update. `items` is an immutable
/// snapshot taken when playback started.
#[derive(Debug)]
pub struct QueueState {
    pub items: Vec<String>,
    pub position: usize,
    pub owner: UserId,
    /// Cleared when the queue is stopped, superseded, or finished. A
    /// scheduler loop that observes `alive == false` exits without
    /// touching `position` again.
    pub alive: bool,
}

impl QueueState {
    pub fn new(items: Vec<String>, owner: UserId) -> Self {
        Self {
            items,
            position: 0,
            owner,
            alive: true,
        }
    }

    /// The item at the current position.
    pub fn current(&self) -> &str {
        &self.items[self.position]
    }

    /// Whether the current position is the final item.
    pub fn at_last(&self) -> bool {
        self.position + 1 == self.items.len()
    }
}

/// Read-only snapshot of a live queue, taken under the state lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueStatus {
    pub current: String,
    /// Zero-based position of `current` in the queue.
    pub position: usize,
    pub total: usize,
    pub owner: UserId,
    /// The next few items after `current`, capped by configuration.
    pub upcoming: Vec<String>,
}

/// What a queue had played when it was stopped or completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueSummary {
    /// Number of items played through, counting the one current at stop.
    pub played: usize,
    pub total: usize,
}

impl fmt::Display for QueueSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {} played", self.played, self.total)
    }
}
