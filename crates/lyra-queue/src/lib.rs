// SPDX-FileCopyrightText: 2026 Lyra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sequential playback queues with timed auto-advance.
//!
//! Each conversation holds at most one live queue. The
//! [`QueueController`] is the command surface (`start`, `skip`, `stop`,
//! `status`); each `start` spawns a scheduler loop that advances the
//! queue once per configured tick and announces the new item through a
//! [`lyra_core::NotificationSink`]. All mutation of a queue goes through
//! one `Mutex<QueueState>`, and the loop re-reads the position every
//! tick, so skips and ticks compose without replaying or dropping items.

pub mod controller;
mod scheduler;
pub mod state;

pub use controller::{QueueController, SkipOutcome};
pub use state::{QueueState, QueueStatus, QueueSummary};
