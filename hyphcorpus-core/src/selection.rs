//! Candidate selection
//!
//! Orders a [`FrequencyIndex`] and yields a bounded, filtered prefix of it.
//!
//! Ordering is total and depends only on the index:
//!
//! 1. occurrence count, descending
//! 2. lowercased word, ascending (code point order)
//! 3. first occurrence in the source, ascending
//!
//! The third key only separates words that are equal ignoring case, such as
//! `Der` and `der`. Words shorter than `min_length` characters are skipped and
//! never count toward `max_words`. Production is lazy: once `max_words` records
//! have been yielded the rest of the sorted entries are never looked at.

use crate::frequency::FrequencyIndex;

/// A frequency-index entry lifted into selection order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRecord {
    pub word: String,
    pub count: u64,
}

/// Length and yield constraints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Minimum word length in characters
    pub min_length: usize,
    /// Cap on yielded records; 0 means unbounded
    pub max_words: usize,
}

impl Default for Selection {
    fn default() -> Self {
        Selection {
            min_length: 6,
            max_words: 5000,
        }
    }
}

impl Selection {
    pub fn new(min_length: usize, max_words: usize) -> Self {
        Selection {
            min_length,
            max_words,
        }
    }

    /// The cap as an option, `None` when unbounded.
    pub fn cap(&self) -> Option<usize> {
        (self.max_words > 0).then_some(self.max_words)
    }

    pub fn is_eligible(&self, word: &str) -> bool {
        word.chars().count() >= self.min_length
    }

    /// Yield eligible candidates from `index` in selection order.
    pub fn select<'a>(&self, index: &'a FrequencyIndex) -> Candidates<'a> {
        let mut ordered: Vec<(&'a str, u64, usize)> = index.raw_entries().collect();
        ordered.sort_by_cached_key(|&(word, count, first_seen)| {
            (std::cmp::Reverse(count), word.to_lowercase(), first_seen)
        });

        Candidates {
            ordered: ordered.into_iter(),
            selection: *self,
            yielded: 0,
        }
    }
}

/// Lazy iterator returned by [`Selection::select`]
pub struct Candidates<'a> {
    ordered: std::vec::IntoIter<(&'a str, u64, usize)>,
    selection: Selection,
    yielded: usize,
}

impl<'a> Iterator for Candidates<'a> {
    type Item = CandidateRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.selection.cap() == Some(self.yielded) {
            return None;
        }
        for (word, count, _) in self.ordered.by_ref() {
            if !self.selection.is_eligible(word) {
                continue;
            }
            self.yielded += 1;
            return Some(CandidateRecord {
                word: word.to_string(),
                count,
            });
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(index: &FrequencyIndex, selection: Selection) -> Vec<(String, u64)> {
        selection
            .select(index)
            .map(|c| (c.word, c.count))
            .collect()
    }

    #[test]
    fn test_round_trip_scenario() {
        let index = FrequencyIndex::from_text("Der Baum wächst, der Baum wächst.");
        let selected = words(&index, Selection::new(3, 10));

        assert_eq!(
            selected,
            vec![
                ("Baum".to_string(), 2),
                ("wächst".to_string(), 2),
                ("Der".to_string(), 1),
                ("der".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_case_only_ties_follow_first_occurrence() {
        let index = FrequencyIndex::from_text("der Der DER");
        let selected = words(&index, Selection::new(1, 0));
        let order: Vec<_> = selected.iter().map(|(w, _)| w.as_str()).collect();
        assert_eq!(order, vec!["der", "Der", "DER"]);
    }

    #[test]
    fn test_ties_in_count_sort_case_insensitively() {
        let index = FrequencyIndex::from_text("zebra Apfel birne");
        let selected = words(&index, Selection::new(1, 0));
        let order: Vec<_> = selected.iter().map(|(w, _)| w.as_str()).collect();
        assert_eq!(order, vec!["Apfel", "birne", "zebra"]);
    }

    #[test]
    fn test_short_words_do_not_count_toward_cap() {
        let index = FrequencyIndex::from_text("ab ab ab ab Fenster Fenster Tischlein Haus");
        let selected = words(&index, Selection::new(6, 2));

        assert_eq!(
            selected,
            vec![("Fenster".to_string(), 2), ("Tischlein".to_string(), 1)]
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // "Größe" is five characters but seven bytes
        let index = FrequencyIndex::from_text("Größe");
        assert!(words(&index, Selection::new(6, 0)).is_empty());
        assert_eq!(words(&index, Selection::new(5, 0)).len(), 1);
    }

    #[test]
    fn test_zero_cap_is_unbounded() {
        let text = (0..50)
            .map(|i| format!("wort{}x", "a".repeat(i)))
            .collect::<Vec<_>>()
            .join(" ");
        let index = FrequencyIndex::from_text(&text);
        assert_eq!(Selection::new(1, 0).select(&index).count(), 50);
    }

    #[test]
    fn test_stops_after_cap() {
        let index = FrequencyIndex::from_text("eins zwei drei vier fünf");
        let mut candidates = Selection::new(1, 2).select(&index);
        assert!(candidates.next().is_some());
        assert!(candidates.next().is_some());
        assert!(candidates.next().is_none());
        assert!(candidates.next().is_none());
    }
}
