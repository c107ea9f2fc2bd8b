// SPDX-FileCopyrightText: 2026 Lyra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The collection store: create/append, fuzzy name lookup, item search.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use lyra_core::UserId;
use tracing::{debug, info};

/// A named, owner-scoped ordered set of item names.
///
/// The name key is the exact string as classified; item deduplication is
/// case-insensitive with insertion order preserved.
#[derive(Debug, Clone)]
pub struct Collection {
    pub name: String,
    pub items: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Collection {
    fn new(name: String) -> Self {
        Self {
            name,
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Append an item unless an equal one (case-insensitive) is present.
    fn push_unique(&mut self, item: String) -> bool {
        let exists = self
            .items
            .iter()
            .any(|existing| existing.eq_ignore_ascii_case(&item));
        if exists {
            return false;
        }
        self.items.push(item);
        true
    }
}

/// Maps conversation participants to their named collections.
///
/// Per-owner collections are kept in creation order; all lookups scan in
/// that order so earliest-created wins on ties. No time-based behavior.
#[derive(Debug, Default)]
pub struct CollectionStore {
    owners: DashMap<UserId, Vec<Collection>>,
}

impl CollectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the named collection for `owner` if absent and append each
    /// item that is not already present (case-insensitive comparison).
    ///
    /// Side-effect-free if the collection exists and all items are present.
    pub fn append(&self, owner: &UserId, name: &str, items: Vec<String>) {
        let mut collections = self.owners.entry(owner.clone()).or_default();

        let collection = match collections.iter_mut().find(|c| c.name == name) {
            Some(existing) => existing,
            None => {
                info!(owner = %owner, name = name, "created collection");
                collections.push(Collection::new(name.to_string()));
                collections.last_mut().expect("just pushed")
            }
        };

        let mut added = 0usize;
        for item in items {
            if collection.push_unique(item) {
                added += 1;
            }
        }
        debug!(owner = %owner, name = name, added, total = collection.items.len(), "appended items");
    }

    /// Find the first collection whose name contains the query as a
    /// substring, or whose query contains the name (case-insensitive),
    /// preferring the earliest-created match.
    pub fn find_by_fuzzy_name(&self, owner: &UserId, query: &str) -> Option<Collection> {
        let query_lower = query.to_lowercase();
        let collections = self.owners.get(owner)?;
        collections
            .iter()
            .find(|c| {
                let name_lower = c.name.to_lowercase();
                name_lower.contains(&query_lower) || query_lower.contains(&name_lower)
            })
            .cloned()
    }

    /// Scan all of the owner's collections in creation order (items in
    /// insertion order) for the first item matching the query by
    /// bidirectional case-insensitive substring.
    ///
    /// Returns the matched item and the name of the collection holding it.
    pub fn find_item(&self, owner: &UserId, item_query: &str) -> Option<(String, String)> {
        let query_lower = item_query.to_lowercase();
        let collections = self.owners.get(owner)?;
        for collection in collections.iter() {
            for item in &collection.items {
                let item_lower = item.to_lowercase();
                if item_lower.contains(&query_lower) || query_lower.contains(&item_lower) {
                    return Some((item.clone(), collection.name.clone()));
                }
            }
        }
        None
    }

    /// All collections owned by `owner`, in creation order.
    pub fn list(&self, owner: &UserId) -> Vec<Collection> {
        self.owners
            .get(owner)
            .map(|c| c.clone())
            .unwrap_or_default()
    }
}
