// SPDX-FileCopyrightText: 2026 Lyra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The per-queue scheduler loop: timed auto-advance through a queue.
//!
//! One loop is spawned per `start` and owns the lifetime of exactly one
//! queue. The loop never caches the queue position across ticks; every
//! tick re-locks the state and re-reads it, so a `skip` that landed
//! between ticks is advanced *from*, not overwritten.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use lyra_core::{ChatId, NotificationSink};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::controller::QueueHandle;
use crate::state::QueueState;

/// Lifecycle phase of one scheduler loop, for exit logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Running,
    Advancing,
    Finished,
    Stopped,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Running => "running",
            Phase::Advancing => "advancing",
            Phase::Finished => "finished",
            Phase::Stopped => "stopped",
        };
        f.write_str(name)
    }
}

/// Outcome of one locked advance step.
enum Advance {
    Playing {
        item: String,
        position: usize,
        total: usize,
    },
    Finished {
        total: usize,
    },
    /// The queue was stopped or superseded since the last tick.
    Halted,
}

pub(crate) fn spawn(
    chat: ChatId,
    state: Arc<Mutex<QueueState>>,
    cancel: CancellationToken,
    queues: Arc<DashMap<ChatId, QueueHandle>>,
    sink: Arc<dyn NotificationSink>,
    tick: Duration,
) -> JoinHandle<()> {
    tokio::spawn(run(chat, state, cancel, queues, sink, tick))
}

async fn run(
    chat: ChatId,
    state: Arc<Mutex<QueueState>>,
    cancel: CancellationToken,
    queues: Arc<DashMap<ChatId, QueueHandle>>,
    sink: Arc<dyn NotificationSink>,
    tick: Duration,
) {
    // The first item is announced by the caller of `start`; the first
    // advance happens one full tick later.
    let mut interval = time::interval_at(time::Instant::now() + tick, tick);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut phase = Phase::Running;
    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                phase = Phase::Stopped;
                break;
            }
            _ = interval.tick() => {
                phase = Phase::Advancing;
                match advance(&state).await {
                    Advance::Playing { item, position, total } => {
                        debug!(chat = %chat, position, total, "queue advanced");
                        if let Err(err) = sink.notify(&chat, now_playing(&item)).await {
                            warn!(chat = %chat, error = %err, "notification delivery failed, halting queue");
                            phase = Phase::Stopped;
                            break;
                        }
                        phase = Phase::Running;
                    }
                    Advance::Finished { total } => {
                        phase = Phase::Finished;
                        debug!(chat = %chat, total, "queue finished");
                        if let Err(err) = sink.notify(&chat, completed(total)).await {
                            warn!(chat = %chat, error = %err, "completion notification failed");
                        }
                        break;
                    }
                    Advance::Halted => {
                        phase = Phase::Stopped;
                        break;
                    }
                }
            }
        }
    }

    // A loop only ever removes its own queue; a fresh queue installed by
    // a superseding start holds a different state allocation and stays.
    queues.remove_if(&chat, |_, handle| Arc::ptr_eq(&handle.state, &state));
    debug!(chat = %chat, phase = %phase, "scheduler loop exited");
}

/// Lock the state, advance one position, report what to announce.
async fn advance(state: &Mutex<QueueState>) -> Advance {
    let mut queue = state.lock().await;
    if !queue.alive {
        return Advance::Halted;
    }
    queue.position += 1;
    if queue.position >= queue.items.len() {
        queue.alive = false;
        return Advance::Finished {
            total: queue.items.len(),
        };
    }
    Advance::Playing {
        item: queue.items[queue.position].clone(),
        position: queue.position,
        total: queue.items.len(),
    }
}

pub(crate) fn now_playing(item: &str) -> String {
    format!("now playing: {item}")
}

fn completed(total: usize) -> String {
    format!("queue complete: {total} items played")
}
