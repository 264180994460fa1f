//! Word frequency index
//!
//! Keys are exact-case words: `Wort` and `wort` are counted separately. Every
//! token enters the index, whatever its length or script; filtering belongs to
//! the selector. The index also remembers the order in which words were first
//! seen, which the selector uses as its last tie-break.

use crate::tokenize;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    count: u64,
    first_seen: usize,
}

/// Mapping from distinct word to its number of occurrences.
#[derive(Debug, Clone, Default)]
pub struct FrequencyIndex {
    entries: HashMap<String, Entry>,
    total: u64,
}

impl FrequencyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every token of `text`.
    pub fn from_text(text: &str) -> Self {
        Self::from_tokens(tokenize::tokens(text))
    }

    pub fn from_tokens<'a, I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut index = Self::new();
        for token in tokens {
            index.add(token);
        }
        index
    }

    /// Record one occurrence of `word`.
    pub fn add(&mut self, word: &str) {
        self.total += 1;
        if let Some(entry) = self.entries.get_mut(word) {
            entry.count += 1;
            return;
        }
        let first_seen = self.entries.len();
        self.entries.insert(
            word.to_string(),
            Entry {
                count: 1,
                first_seen,
            },
        );
    }

    /// Occurrences of `word`, exact case.
    pub fn get(&self, word: &str) -> Option<u64> {
        self.entries.get(word).map(|e| e.count)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of tokens counted, duplicates included
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Entries as `(word, count, first_seen)`, in no particular order.
    pub(crate) fn raw_entries(&self) -> impl Iterator<Item = (&str, u64, usize)> {
        self.entries
            .iter()
            .map(|(word, e)| (word.as_str(), e.count, e.first_seen))
    }

    /// Words and counts in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        let mut entries: Vec<_> = self.raw_entries().collect();
        entries.sort_by_key(|&(_, _, first_seen)| first_seen);
        entries.into_iter().map(|(word, count, _)| (word, count))
    }
}
