// SPDX-FileCopyrightText: 2026 Lyra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Choice-request detection and option extraction.
//!
//! A choice request fires on explicit connective keywords ("should i",
//! "which is better", "can't decide") or on a separator token combined with
//! a trailing question mark. Option extraction tries patterns in a fixed
//! preference order; the first pattern leaving at least two non-empty
//! cleaned options wins.

use regex::Regex;

/// Connective keywords that mark a choice request on their own.
const CHOICE_KEYWORDS: &[&str] = &["should i", "which is better", "can't decide", "cant decide"];

/// Leading filler words stripped from extracted options.
const FILLER_PREFIXES: &[&str] = &[
    "should i", "to", "the", "a", "an", "go", "do", "eat", "watch", "play", "buy",
];

/// Punctuation trimmed from the tail of extracted options.
const TRAILING_PUNCT: &[char] = &['?', '!', '.', ',', ';', ':'];

/// Option extraction patterns, tried in preference order.
struct ChoicePatterns {
    or_split: Regex,
    vs_split: Regex,
    either_or: Regex,
}

impl ChoicePatterns {
    fn new() -> Self {
        Self {
            or_split: Regex::new(r"(?i)^(.+?)\s+or\s+(.+)$").expect("or pattern is valid"),
            vs_split: Regex::new(r"(?i)^(.+?)\s+(?:vs\.?|versus)\s+(.+)$")
                .expect("vs pattern is valid"),
            either_or: Regex::new(r"(?i)\beither\s+(.+?)\s+or\s+(.+)$")
                .expect("either pattern is valid"),
        }
    }
}

/// Whether the utterance looks like a choice request at all.
///
/// Either a connective keyword is present, or a separator token combined
/// with a trailing question mark.
pub fn is_choice_request(text: &str) -> bool {
    let lower = text.to_lowercase();
    if CHOICE_KEYWORDS.iter().any(|k| lower.contains(k)) {
        return true;
    }

    let has_separator = lower.contains(" or ")
        || lower.contains(" vs ")
        || lower.contains(" vs. ")
        || lower.contains(" versus ")
        || (lower.contains("either") && lower.contains(" or "));
    has_separator && text.trim_end().ends_with('?')
}

/// Extract two or more cleaned options from a choice request.
///
/// Returns `None` when fewer than two non-empty options survive cleaning;
/// the caller falls through toward no-match.
pub fn extract_options(text: &str) -> Option<Vec<String>> {
    let patterns = ChoicePatterns::new();
    let trimmed = text.trim().trim_end_matches(TRAILING_PUNCT).trim();
    let lower = trimmed.to_lowercase();

    // 1. Explicit "A or B" (deferring "either...or" to its own pattern).
    if !lower.contains("either")
        && let Some(caps) = patterns.or_split.captures(trimmed)
        && let Some(options) = accept(&[&caps[1], &caps[2]])
    {
        return Some(options);
    }

    // 2. Comma-separated list.
    if trimmed.contains(',') {
        let parts: Vec<&str> = trimmed.split(',').collect();
        if parts.len() >= 2
            && let Some(options) = accept(&parts)
        {
            return Some(options);
        }
    }

    // 3. "A vs/versus B".
    if let Some(caps) = patterns.vs_split.captures(trimmed)
        && let Some(options) = accept(&[&caps[1], &caps[2]])
    {
        return Some(options);
    }

    // 4. "either A or B".
    if let Some(caps) = patterns.either_or.captures(trimmed)
        && let Some(options) = accept(&[&caps[1], &caps[2]])
    {
        return Some(options);
    }

    None
}

/// Clean candidate options and accept the set only if at least two remain.
fn accept(raw: &[&str]) -> Option<Vec<String>> {
    let options: Vec<String> = raw
        .iter()
        .map(|o| clean_option(o))
        .filter(|o| !o.is_empty())
        .collect();
    (options.len() >= 2).then_some(options)
}

/// Strip leading filler words and trailing punctuation from one option.
fn clean_option(raw: &str) -> String {
    let mut s = raw.trim().trim_end_matches(TRAILING_PUNCT).trim_end();
    while let Some(rest) = strip_one_filler(s) {
        s = rest;
    }
    // An option that is nothing but a filler word carries no content.
    if FILLER_PREFIXES.iter().any(|f| s.eq_ignore_ascii_case(f)) {
        return String::new();
    }
    s.to_string()
}

/// Strip a single leading filler word, case-insensitively.
fn strip_one_filler(s: &str) -> Option<&str> {
    for filler in FILLER_PREFIXES {
        if s.len() > filler.len()
            && s.is_char_boundary(filler.len())
            && s[..filler.len()].eq_ignore_ascii_case(filler)
            && s[filler.len()..].starts_with(' ')
        {
            return Some(s[filler.len()..].trim_start());
        }
    }
    None
}
