// SPDX-FileCopyrightText: 2026 Lyra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Intent classification for the Lyra chat assistant.
//!
//! This crate provides:
//! - [`Intent`]: the structured meaning of a free-text utterance
//! - [`PatternLibrary`]: one explicit ordered list of (kind, pattern,
//!   extractor) rules, making precedence auditable in isolation from
//!   chat handling
//! - [`IntentClassifier`]: deterministic, pure classification that never
//!   errors; unmatched input always yields [`Intent::NoMatch`]
//!
//! Precedence across intent kinds is fixed: collection creation >
//! playback request > choice > prediction > rating > no match.

pub mod choice;
pub mod classifier;
pub mod patterns;
pub mod tokenize;

pub use classifier::IntentClassifier;
pub use patterns::{IntentKind, PatternLibrary};
pub use tokenize::split_items;

/// The classified structured meaning of a free-text utterance.
///
/// Produced fresh per utterance; never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Create (or grow) a named collection from a free-text item list.
    CreateCollection { name: String, items: Vec<String> },
    /// Request playback of a named collection.
    PlayRequest { query: String },
    /// Request a selection between two or more alternatives.
    ChoiceRequest { options: Vec<String> },
    /// Request a prediction about some subject.
    PredictionRequest { subject: String },
    /// Request a rating of some subject.
    RatingRequest { subject: String },
    /// No confident intent; routed to the LLM fallthrough.
    NoMatch,
}

impl Intent {
    /// The kind tag of this intent, for logging.
    pub fn kind(&self) -> IntentKind {
        match self {
            Intent::CreateCollection { .. } => IntentKind::CreateCollection,
            Intent::PlayRequest { .. } => IntentKind::PlayRequest,
            Intent::ChoiceRequest { .. } => IntentKind::ChoiceRequest,
            Intent::PredictionRequest { .. } => IntentKind::PredictionRequest,
            Intent::RatingRequest { .. } => IntentKind::RatingRequest,
            Intent::NoMatch => IntentKind::NoMatch,
        }
    }
}
