// SPDX-FileCopyrightText: 2026 Lyra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Owner-scoped named collections (the source material calls these
//! "playlists").
//!
//! The [`CollectionStore`] is an explicit keyed store shared by reference
//! between the agent and the queue controller; no process-wide singletons.
//! Collections grow append-only; deletion is out of scope.

pub mod store;

pub use store::{Collection, CollectionStore};
