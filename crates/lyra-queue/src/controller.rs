// SPDX-FileCopyrightText: 2026 Lyra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command surface over per-conversation playback queues.

use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use lyra_core::{ChatId, LyraError, NotificationSink, UserId};
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::scheduler;
use crate::state::{QueueState, QueueStatus, QueueSummary};

/// Map entry for one conversation's live queue.
///
/// `state` is the single logical lock for that queue; `cancel` tells the
/// owning scheduler loop to wind down at the next await point.
pub(crate) struct QueueHandle {
    pub(crate) state: Arc<Mutex<QueueState>>,
    pub(crate) cancel: CancellationToken,
}

impl QueueHandle {
    fn clone_parts(&self) -> (Arc<Mutex<QueueState>>, CancellationToken) {
        (Arc::clone(&self.state), self.cancel.clone())
    }
}

/// Result of a skip command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipOutcome {
    /// The queue moved to a new current item.
    Advanced(String),
    /// The skip was issued on the final item; the queue is finished.
    Completed(QueueSummary),
}

/// Starts, skips, stops, and inspects playback queues, one per chat.
///
/// Cheap to clone and share; all clones operate on the same queue map.
#[derive(Clone)]
pub struct QueueController {
    queues: Arc<DashMap<ChatId, QueueHandle>>,
    sink: Arc<dyn NotificationSink>,
    tick: Duration,
    upcoming_preview: usize,
}

impl QueueController {
    pub fn new(sink: Arc<dyn NotificationSink>, tick: Duration, upcoming_preview: usize) -> Self {
        Self {
            queues: Arc::new(DashMap::new()),
            sink,
            tick,
            upcoming_preview,
        }
    }

    /// Start playback of `items` in `chat`, superseding any live queue.
    ///
    /// The previous queue (if any) is invalidated and its loop cancelled
    /// before the fresh queue becomes visible, so no window exists where
    /// two loops advance the same conversation. Returns the first item
    /// for the caller to announce; subsequent items are announced by the
    /// scheduler loop at each tick.
    pub async fn start(
        &self,
        chat: &ChatId,
        requester: &UserId,
        collection_name: &str,
        items: Vec<String>,
    ) -> Result<String, LyraError> {
        if items.is_empty() {
            return Err(LyraError::EmptyCollection {
                name: collection_name.to_string(),
            });
        }

        if let Some((_, old)) = self.queues.remove(chat) {
            old.cancel.cancel();
            old.state.lock().await.alive = false;
            debug!(chat = %chat, "superseded previous queue");
        }

        let first = items[0].clone();
        let total = items.len();
        let state = Arc::new(Mutex::new(QueueState::new(items, requester.clone())));
        let cancel = CancellationToken::new();
        self.queues.insert(
            chat.clone(),
            QueueHandle {
                state: Arc::clone(&state),
                cancel: cancel.clone(),
            },
        );
        scheduler::spawn(
            chat.clone(),
            state,
            cancel,
            Arc::clone(&self.queues),
            Arc::clone(&self.sink),
            self.tick,
        );

        info!(chat = %chat, owner = %requester, collection = collection_name, total, "queue started");
        Ok(first)
    }

    /// Advance the live queue by one item immediately.
    ///
    /// A skip on the final item finishes the queue instead of running
    /// past the end. The scheduler's next tick advances from the skipped
    /// position, so an interleaved tick and skip never replay an item.
    pub async fn skip(&self, chat: &ChatId) -> Result<SkipOutcome, LyraError> {
        let (state, cancel) = self.live_handle(chat)?;
        let mut queue = state.lock().await;
        if !queue.alive {
            return Err(self.no_active_queue(chat));
        }
        if queue.at_last() {
            queue.alive = false;
            let summary = QueueSummary {
                played: queue.items.len(),
                total: queue.items.len(),
            };
            drop(queue);
            cancel.cancel();
            self.remove_entry(chat, &state);
            info!(chat = %chat, "skip on final item finished queue");
            return Ok(SkipOutcome::Completed(summary));
        }
        queue.position += 1;
        let item = queue.current().to_string();
        debug!(chat = %chat, position = queue.position, "skipped to next item");
        Ok(SkipOutcome::Advanced(item))
    }

    /// Halt the live queue and report how far it got.
    pub async fn stop(&self, chat: &ChatId) -> Result<QueueSummary, LyraError> {
        let (state, cancel) = self.live_handle(chat)?;
        let mut queue = state.lock().await;
        if !queue.alive {
            return Err(self.no_active_queue(chat));
        }
        queue.alive = false;
        let summary = QueueSummary {
            played: queue.position + 1,
            total: queue.items.len(),
        };
        drop(queue);
        cancel.cancel();
        self.remove_entry(chat, &state);
        info!(chat = %chat, played = summary.played, total = summary.total, "queue stopped");
        Ok(summary)
    }

    /// Snapshot the live queue: current item, progress, owner, and the
    /// next few upcoming items.
    pub async fn status(&self, chat: &ChatId) -> Result<QueueStatus, LyraError> {
        let (state, _) = self.live_handle(chat)?;
        let queue = state.lock().await;
        if !queue.alive {
            return Err(self.no_active_queue(chat));
        }
        let upcoming_from = queue.position + 1;
        let upcoming = queue
            .items
            .iter()
            .skip(upcoming_from)
            .take(self.upcoming_preview)
            .cloned()
            .collect();
        Ok(QueueStatus {
            current: queue.current().to_string(),
            position: queue.position,
            total: queue.items.len(),
            owner: queue.owner.clone(),
            upcoming,
        })
    }

    /// Whether a queue entry exists for the chat (live or winding down).
    pub fn has_queue(&self, chat: &ChatId) -> bool {
        self.queues.contains_key(chat)
    }

    /// Chats with a queue entry, for shutdown draining.
    pub fn active_chats(&self) -> Vec<ChatId> {
        self.queues.iter().map(|e| e.key().clone()).collect()
    }

    /// Stop every live queue, announcing nothing. Used on shutdown.
    pub async fn stop_all(&self) {
        for chat in self.active_chats() {
            if let Some((_, handle)) = self.queues.remove(&chat) {
                handle.cancel.cancel();
                handle.state.lock().await.alive = false;
                debug!(chat = %chat, "queue stopped for shutdown");
            }
        }
    }

    fn live_handle(
        &self,
        chat: &ChatId,
    ) -> Result<(Arc<Mutex<QueueState>>, CancellationToken), LyraError> {
        // Clone out of the map guard before any await.
        self.queues
            .get(chat)
            .map(|entry| entry.clone_parts())
            .ok_or_else(|| self.no_active_queue(chat))
    }

    fn remove_entry(&self, chat: &ChatId, state: &Arc<Mutex<QueueState>>) {
        self.queues
            .remove_if(chat, |_, handle| Arc::ptr_eq(&handle.state, state));
    }

    fn no_active_queue(&self, chat: &ChatId) -> LyraError {
        LyraError::NoActiveQueue {
            chat: chat.to_string(),
        }
    }
}
