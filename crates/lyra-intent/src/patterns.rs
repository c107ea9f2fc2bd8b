// SPDX-FileCopyrightText: 2026 Lyra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The ordered pattern library.
//!
//! All intent patterns live in one explicit ordered list of
//! (kind, matcher, extractor) rules evaluated in a single place, so the
//! precedence across intent kinds is auditable and unit-testable in
//! isolation from chat handling. First rule that extracts a complete
//! intent wins.

use regex::{Captures, Regex};

use crate::choice;
use crate::tokenize::split_items;
use crate::Intent;

/// Tag identifying the kind of a classified intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentKind {
    CreateCollection,
    PlayRequest,
    ChoiceRequest,
    PredictionRequest,
    RatingRequest,
    NoMatch,
}

impl std::fmt::Display for IntentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntentKind::CreateCollection => write!(f, "create_collection"),
            IntentKind::PlayRequest => write!(f, "play_request"),
            IntentKind::ChoiceRequest => write!(f, "choice_request"),
            IntentKind::PredictionRequest => write!(f, "prediction_request"),
            IntentKind::RatingRequest => write!(f, "rating_request"),
            IntentKind::NoMatch => write!(f, "no_match"),
        }
    }
}

/// Extractor turning a regex match into a complete intent, or `None` to
/// fall through to the next rule.
type Extract = fn(&Captures<'_>, &PatternLibrary) -> Option<Intent>;

enum Matcher {
    /// A single regex with an extractor for its capture groups.
    Pattern { regex: Regex, extract: Extract },
    /// Choice detection is multi-step (gate + ranked option extraction) and
    /// lives in [`crate::choice`]; it still occupies one slot in the order.
    Choice,
}

struct Rule {
    kind: IntentKind,
    matcher: Matcher,
}

/// Ordered sets of text patterns per intent kind.
///
/// Pure data plus a matching function; holds no conversation state.
pub struct PatternLibrary {
    rules: Vec<Rule>,
    min_item_len: usize,
}

impl PatternLibrary {
    /// Build the library with the given minimum item-name length for the
    /// creation tokenizer.
    pub fn new(min_item_len: usize) -> Self {
        let rules = vec![
            // --- 1. Collection creation ---
            pattern(
                IntentKind::CreateCollection,
                r"(?is)^\s*create\s+(?:a\s+)?(?:playlist|collection)\s+([^:\n]+?)\s*:\s*(.+)$",
                extract_creation,
            ),
            pattern(
                IntentKind::CreateCollection,
                r"(?is)\bmy\s+([^:\n]+?)\s+(?:playlist|collection)\s*:\s*(.+)$",
                extract_creation,
            ),
            pattern(
                IntentKind::CreateCollection,
                r"(?is)\bwhen\s+i'?m\s+(sad|happy|angry|excited|chill|romantic|energetic)\s*:\s*(.+)$",
                extract_mood_creation,
            ),
            pattern(
                IntentKind::CreateCollection,
                r"(?is)\bfor\s+(workout|study|sleep|party|driving|relaxation)\s*:\s*(.+)$",
                extract_mood_creation,
            ),
            // --- 2. Playback request ---
            pattern(
                IntentKind::PlayRequest,
                r"(?i)\bplay\s+my\s+(.+?)\s+playlist\b",
                extract_play,
            ),
            pattern(
                IntentKind::PlayRequest,
                r"(?i)\bplay\s+(.+?)\s+playlist\b",
                extract_play,
            ),
            pattern(
                IntentKind::PlayRequest,
                r"(?i)\bstart\s+my\s+(.+?)\s+songs\b",
                extract_play,
            ),
            pattern(
                IntentKind::PlayRequest,
                r"(?i)\bput\s+on\s+my\s+(.+?)\s+music\b",
                extract_play,
            ),
            pattern(
                IntentKind::PlayRequest,
                r"(?i)\bi\s+want\s+to\s+hear\s+my\s+(.+?)\s+playlist\b",
                extract_play,
            ),
            // --- 3. Choice between alternatives ---
            Rule {
                kind: IntentKind::ChoiceRequest,
                matcher: Matcher::Choice,
            },
            // --- 4. Prediction ---
            pattern(
                IntentKind::PredictionRequest,
                r"(?i)^\s*predict\s+(.+?)\s*[?.!]*\s*$",
                extract_prediction,
            ),
            pattern(
                IntentKind::PredictionRequest,
                r"(?i)\bwill\s+(.+?)\s*\?\s*$",
                extract_prediction,
            ),
            // --- 5. Rating ---
            pattern(
                IntentKind::RatingRequest,
                r"(?i)\brate\s+(?:my\s+|this\s+|the\s+)?(.+?)\s*(?:out\s+of\s+(?:10|ten))?\s*[?.!]*$",
                extract_rating,
            ),
            pattern(
                IntentKind::RatingRequest,
                r"(?i)\bgive\s+(?:me\s+)?a\s+rating\s+(?:for|on)\s+(.+?)\s*[?.!]*$",
                extract_rating,
            ),
        ];

        Self {
            rules,
            min_item_len,
        }
    }

    /// Minimum length of tokenized item names.
    pub fn min_item_len(&self) -> usize {
        self.min_item_len
    }

    /// Evaluate rules in precedence order and return the first complete
    /// intent, or [`Intent::NoMatch`] when nothing fires.
    pub fn match_first(&self, text: &str) -> Intent {
        for rule in &self.rules {
            match &rule.matcher {
                Matcher::Pattern { regex, extract } => {
                    if let Some(caps) = regex.captures(text)
                        && let Some(intent) = extract(&caps, self)
                    {
                        tracing::trace!(kind = %rule.kind, "intent rule fired");
                        return intent;
                    }
                }
                Matcher::Choice => {
                    if choice::is_choice_request(text)
                        && let Some(options) = choice::extract_options(text)
                    {
                        tracing::trace!(kind = %rule.kind, "intent rule fired");
                        return Intent::ChoiceRequest { options };
                    }
                }
            }
        }
        Intent::NoMatch
    }
}

impl Default for PatternLibrary {
    fn default() -> Self {
        Self::new(3)
    }
}

fn pattern(kind: IntentKind, regex: &str, extract: Extract) -> Rule {
    Rule {
        kind,
        matcher: Matcher::Pattern {
            regex: Regex::new(regex).expect("intent pattern is valid"),
            extract,
        },
    }
}

/// Creation with an explicit name: group 1 = name, group 2 = items blob.
fn extract_creation(caps: &Captures<'_>, library: &PatternLibrary) -> Option<Intent> {
    let name = caps[1].trim().to_lowercase();
    let items = split_items(&caps[2], library.min_item_len);
    if name.is_empty() || items.is_empty() {
        return None;
    }
    Some(Intent::CreateCollection { name, items })
}

/// Mood/activity creation: group 1 = mood word, group 2 = items blob.
/// The collection is named "<mood> mood".
fn extract_mood_creation(caps: &Captures<'_>, library: &PatternLibrary) -> Option<Intent> {
    let name = format!("{} mood", caps[1].trim().to_lowercase());
    let items = split_items(&caps[2], library.min_item_len);
    if items.is_empty() {
        return None;
    }
    Some(Intent::CreateCollection { name, items })
}

fn extract_play(caps: &Captures<'_>, _library: &PatternLibrary) -> Option<Intent> {
    let query = caps[1].trim().to_string();
    (!query.is_empty()).then(|| Intent::PlayRequest { query })
}

fn extract_prediction(caps: &Captures<'_>, _library: &PatternLibrary) -> Option<Intent> {
    let subject = caps[1].trim().to_string();
    (!subject.is_empty()).then(|| Intent::PredictionRequest { subject })
}

fn extract_rating(caps: &Captures<'_>, _library: &PatternLibrary) -> Option<Intent> {
    let subject = caps[1].trim().to_string();
    (!subject.is_empty()).then(|| Intent::RatingRequest { subject })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library() -> PatternLibrary {
        PatternLibrary::default()
    }

    #[test]
    fn create_playlist_with_explicit_name() {
        let intent = library().match_first("create playlist roadtrip: song one, song two");
        assert_eq!(
            intent,
            Intent::CreateCollection {
                name: "roadtrip".into(),
                items: vec!["song one".into(), "song two".into()],
            }
        );
    }

    #[test]
    fn my_playlist_phrasing_extracts_bare_name() {
        let intent = library().match_first("my chill playlist: song1, song2");
        assert_eq!(
            intent,
            Intent::CreateCollection {
                name: "chill".into(),
                items: vec!["song1".into(), "song2".into()],
            }
        );
    }

    #[test]
    fn mood_phrasing_names_the_mood() {
        let intent = library().match_first("when I'm sad: rainy day, blue in green");
        assert_eq!(
            intent,
            Intent::CreateCollection {
                name: "sad mood".into(),
                items: vec!["rainy day".into(), "blue in green".into()],
            }
        );
    }

    #[test]
    fn activity_phrasing_names_the_activity() {
        let intent = library().match_first("for workout: eye of the tiger, thunderstruck");
        let Intent::CreateCollection { name, items } = intent else {
            panic!("expected creation intent");
        };
        assert_eq!(name, "workout mood");
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn creation_with_no_usable_items_falls_through() {
        // All tokens are shorter than the minimum item length.
        let intent = library().match_first("my chill playlist: a, b");
        assert_eq!(intent, Intent::NoMatch);
    }

    #[test]
    fn play_request_phrasings() {
        for text in [
            "play my chill playlist",
            "play chill playlist",
            "start my chill songs",
            "put on my chill music",
            "i want to hear my chill playlist",
        ] {
            let intent = library().match_first(text);
            assert_eq!(
                intent,
                Intent::PlayRequest {
                    query: "chill".into()
                },
                "failed for: {text}"
            );
        }
    }

    #[test]
    fn creation_beats_playback_and_choice() {
        // Contains "play" phrasing and commas, but the creation pattern has
        // highest precedence.
        let intent = library().match_first("my play playlist: song1, song2");
        assert!(matches!(intent, Intent::CreateCollection { .. }));
    }

    #[test]
    fn declarative_creation_is_never_a_choice() {
        // No question mark and no choice keyword: must not classify as choice
        // even though it contains a comma-separated list.
        let intent = library().match_first("my chill playlist: song1, song2");
        assert!(matches!(intent, Intent::CreateCollection { .. }));
    }

    #[test]
    fn choice_request_extraction() {
        let intent = library().match_first("should i watch Movie A or Movie B?");
        assert_eq!(
            intent,
            Intent::ChoiceRequest {
                options: vec!["Movie A".into(), "Movie B".into()],
            }
        );
    }

    #[test]
    fn prediction_request() {
        let intent = library().match_first("will it rain tomorrow?");
        assert_eq!(
            intent,
            Intent::PredictionRequest {
                subject: "it rain tomorrow".into()
            }
        );
    }

    #[test]
    fn rating_request() {
        let intent = library().match_first("rate my new haircut out of 10");
        assert_eq!(
            intent,
            Intent::RatingRequest {
                subject: "new haircut".into()
            }
        );
    }

    #[test]
    fn unmatched_input_is_no_match() {
        assert_eq!(library().match_first("hello there"), Intent::NoMatch);
        assert_eq!(library().match_first(""), Intent::NoMatch);
    }

    #[test]
    fn kind_display() {
        assert_eq!(IntentKind::CreateCollection.to_string(), "create_collection");
        assert_eq!(IntentKind::NoMatch.to_string(), "no_match");
    }
}
