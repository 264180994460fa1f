//! Letter-run tokenizer
//!
//! A token is a maximal run of characters in Unicode general category `L`, in any
//! script. Digits, connector punctuation (`_`), combining marks, whitespace and
//! everything else end a run. Matching is greedy and left to right; case is kept
//! verbatim. There is no stemming, hyphen handling or compound splitting.

use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

static LETTER_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{L}+").unwrap());

/// Iterate over the word tokens of `text`, in order of appearance.
pub fn tokens(text: &str) -> impl Iterator<Item = &str> + '_ {
    LETTER_RUN.find_iter(text).map(|m| m.as_str())
}

/// Like [`tokens`], with the byte range of each token in `text`.
pub fn token_spans(text: &str) -> impl Iterator<Item = (Range<usize>, &str)> + '_ {
    LETTER_RUN.find_iter(text).map(|m| (m.range(), m.as_str()))
}
