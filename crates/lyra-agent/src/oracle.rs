// SPDX-FileCopyrightText: 2026 Lyra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Stateless reply generators for choices, predictions, and ratings,
//! plus the handful of canned phrase responses.

use rand::seq::SliceRandom;
use rand::Rng;

const PREDICTION_OUTCOMES: &[&str] = &[
    "all signs point to yes",
    "looking very likely",
    "the odds are in your favor",
    "hard to say, ask me again later",
    "i wouldn't count on it",
    "very doubtful",
    "absolutely, no question about it",
];

const CHOICE_TEMPLATES: &[&str] = &[
    "easy one: go with {option}!",
    "i'd pick {option}, no contest",
    "{option}, trust me on this",
    "hmm, tough call, but {option} wins",
];

/// Pick one of the extracted options, with a playful framing.
pub fn choose(options: &[String]) -> String {
    let mut rng = rand::thread_rng();
    let option = match options.choose(&mut rng) {
        Some(o) => o.as_str(),
        None => return "give me at least two things to choose between!".to_string(),
    };
    let template = CHOICE_TEMPLATES
        .choose(&mut rng)
        .copied()
        .unwrap_or("go with {option}!");
    template.replace("{option}", option)
}

/// Answer a "will ..." or "predict ..." question.
pub fn predict(subject: &str) -> String {
    let mut rng = rand::thread_rng();
    let outcome = PREDICTION_OUTCOMES
        .choose(&mut rng)
        .copied()
        .unwrap_or("hard to say");
    let subject = subject.trim();
    if subject.is_empty() {
        outcome.to_string()
    } else {
        format!("{subject}? {outcome}")
    }
}

/// Rate a subject on a 1 to 10 scale.
pub fn rate(subject: &str) -> String {
    let mut rng = rand::thread_rng();
    let score: u32 = rng.gen_range(1..=10);
    let verdict = match score {
        9..=10 => "outstanding",
        7..=8 => "really good",
        5..=6 => "decent",
        3..=4 => "not great",
        _ => "rough",
    };
    let subject = subject.trim();
    if subject.is_empty() {
        format!("{score}/10, {verdict}")
    } else {
        format!("i'd give {subject} a {score}/10, {verdict}")
    }
}

/// Fixed replies to a few recognized phrases, checked before the
/// provider fallthrough. Returns `None` when no phrase matches.
pub fn special_response(text: &str, display_name: &str) -> Option<String> {
    let lower = text.to_lowercase();

    if ["who created you", "who made you", "who built you", "your creator"]
        .iter()
        .any(|phrase| lower.contains(phrase))
    {
        return Some(
            "I'm Lyra, put together by a few people who wanted a chat companion with music powers!"
                .to_string(),
        );
    }

    if ["good night", "goodnight", "sleep well"]
        .iter()
        .any(|phrase| lower.contains(phrase))
    {
        return Some(format!("Sweet dreams, {display_name}! See you tomorrow."));
    }

    None
}
