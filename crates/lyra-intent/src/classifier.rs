// SPDX-FileCopyrightText: 2026 Lyra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deterministic intent classification over the pattern library.

use lyra_core::Utterance;
use tracing::debug;

use crate::{Intent, PatternLibrary};

/// Classifies one utterance against the pattern library.
///
/// Pure given the library: the same utterance always yields the same
/// intent, classification never fails, and ambiguous input resolves by
/// the library's fixed precedence order.
pub struct IntentClassifier {
    library: PatternLibrary,
}

impl IntentClassifier {
    /// Create a classifier over the given pattern library.
    pub fn new(library: PatternLibrary) -> Self {
        Self { library }
    }

    /// Classify an utterance into at most one intent.
    ///
    /// Unmatched input yields [`Intent::NoMatch`], never an error.
    pub fn classify(&self, utterance: &Utterance) -> Intent {
        let intent = self.library.match_first(&utterance.text);
        debug!(
            kind = %intent.kind(),
            chat = %utterance.chat,
            chat_kind = %utterance.chat_kind,
            "classified utterance"
        );
        intent
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new(PatternLibrary::default())
    }
}
