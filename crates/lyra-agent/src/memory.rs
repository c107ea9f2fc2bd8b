// SPDX-FileCopyrightText: 2026 Lyra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Short-term conversation memory.
//!
//! Keeps the last few exchanges per user, used to build the prompt for
//! free-form replies. In-process only; nothing survives a restart.

use std::collections::{HashMap, VecDeque};

use lyra_core::UserId;
use tracing::debug;

/// How many exchanges are kept per user.
const DEFAULT_CAPACITY: usize = 10;

/// How much of each line is quoted back into the prompt.
const SNIPPET_CHARS: usize = 60;

/// One remembered user line and the reply it got.
#[derive(Debug, Clone)]
pub struct Exchange {
    pub user_line: String,
    pub reply: String,
}

/// Bounded per-user ring of recent exchanges.
#[derive(Debug)]
pub struct ConversationMemory {
    capacity: usize,
    exchanges: HashMap<UserId, VecDeque<Exchange>>,
}

impl Default for ConversationMemory {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl ConversationMemory {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            exchanges: HashMap::new(),
        }
    }

    /// Record one exchange, evicting the oldest past capacity.
    pub fn record(&mut self, user: &UserId, user_line: &str, reply: &str) {
        let ring = self.exchanges.entry(user.clone()).or_default();
        ring.push_back(Exchange {
            user_line: user_line.to_string(),
            reply: reply.to_string(),
        });
        while ring.len() > self.capacity {
            ring.pop_front();
        }
        debug!(user = %user, remembered = ring.len(), "recorded exchange");
    }

    /// Number of exchanges remembered for the user.
    pub fn len(&self, user: &UserId) -> usize {
        self.exchanges.get(user).map(|r| r.len()).unwrap_or(0)
    }

    pub fn clear(&mut self, user: &UserId) {
        self.exchanges.remove(user);
    }

    /// Render the remembered exchanges as numbered prompt context.
    ///
    /// Returns `None` when nothing is remembered, so the caller can skip
    /// the section entirely.
    pub fn context(&self, user: &UserId, display_name: &str) -> Option<String> {
        let ring = self.exchanges.get(user)?;
        if ring.is_empty() {
            return None;
        }
        let mut out = format!("Recent conversation with {display_name}:\n");
        for (i, exchange) in ring.iter().enumerate() {
            out.push_str(&format!(
                "{}. They said: {}\n   I replied: {}\n",
                i + 1,
                snippet(&exchange.user_line),
                snippet(&exchange.reply),
            ));
        }
        Some(out)
    }

    /// Render the remembered exchanges as a numbered recap addressed to
    /// the user themselves ("you said / i replied").
    ///
    /// Returns `None` when nothing is remembered.
    pub fn recap(&self, user: &UserId) -> Option<String> {
        let ring = self.exchanges.get(user)?;
        if ring.is_empty() {
            return None;
        }
        let mut out = String::new();
        for (i, exchange) in ring.iter().enumerate() {
            out.push_str(&format!(
                "{}. you: {}\n   me: {}\n",
                i + 1,
                snippet(&exchange.user_line),
                snippet(&exchange.reply),
            ));
        }
        Some(out)
    }
}

fn snippet(text: &str) -> String {
    if text.chars().count() <= SNIPPET_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(SNIPPET_CHARS).collect();
    format!("{cut}...")
}
