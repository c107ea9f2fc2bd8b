// SPDX-FileCopyrightText: 2026 Lyra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Item-list tokenization for collection creation.
//!
//! Splits a raw items blob on an ordered list of delimiters, strips
//! numbering and bullet prefixes, and discards tokens below the minimum
//! length. Tokenization is idempotent: the output tokens contain none of
//! the delimiters, so re-splitting any of them yields the token unchanged.

use regex::Regex;

/// Delimiters applied in order when splitting an items blob.
const DELIMITERS: [char; 7] = ['\n', ',', ';', '|', '-', '\u{2022}', '*'];

/// Split a raw items blob into cleaned item names.
///
/// Tokens shorter than `min_len` characters are discarded.
pub fn split_items(text: &str, min_len: usize) -> Vec<String> {
    let numbering = Regex::new(r"^\d+[.)]\s*").expect("numbering pattern is valid");

    let mut tokens: Vec<&str> = vec![text];
    for delim in DELIMITERS {
        tokens = tokens
            .iter()
            .flat_map(|t| t.split(delim))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect();
    }

    tokens
        .into_iter()
        .map(|t| numbering.replace(t, "").trim().to_string())
        .filter(|t| t.chars().count() >= min_len)
        .collect()
}
