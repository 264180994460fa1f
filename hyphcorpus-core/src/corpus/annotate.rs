//! Oracle annotation of selected candidates

use super::AnnotatedRecord;
use crate::oracle::Hyphenator;
use crate::selection::CandidateRecord;

/// Pairs candidates with their hyphenated rendering.
///
/// Every candidate produces exactly one record, in input order. Renderings
/// without break markers are kept.
pub struct Annotator<H> {
    hyphenator: H,
}

impl<H: Hyphenator> Annotator<H> {
    pub fn new(hyphenator: H) -> Self {
        Annotator { hyphenator }
    }

    pub fn annotate(&self, candidate: CandidateRecord) -> AnnotatedRecord {
        let hyphenated = self.hyphenator.hyphenate(&candidate.word);
        AnnotatedRecord {
            word: candidate.word,
            hyphenated,
            count: candidate.count,
        }
    }

    pub fn annotate_all<I>(&self, candidates: I) -> Vec<AnnotatedRecord>
    where
        I: IntoIterator<Item = CandidateRecord>,
    {
        candidates
            .into_iter()
            .map(|candidate| self.annotate(candidate))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::HyphenatedForm;

    /// Breaks after every second character of words longer than four
    struct EveryTwo;
    impl Hyphenator for EveryTwo {
        fn hyphenate(&self, word: &str) -> HyphenatedForm {
            if word.chars().count() <= 4 {
                return HyphenatedForm::unbroken(word);
            }
            let breaks: Vec<usize> = word
                .char_indices()
                .enumerate()
                .filter(|(i, _)| *i > 0 && i % 2 == 0)
                .map(|(_, (offset, _))| offset)
                .collect();
            HyphenatedForm::from_byte_breaks(word, &breaks)
        }
    }

    fn candidate(word: &str, count: u64) -> CandidateRecord {
        CandidateRecord {
            word: word.to_string(),
            count,
        }
    }

    #[test]
    fn test_annotates_in_order() {
        let annotator = Annotator::new(EveryTwo);
        let records =
            annotator.annotate_all(vec![candidate("Fenster", 3), candidate("Baum", 1)]);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].word, "Fenster");
        assert_eq!(records[0].hyphenated.as_str(), "Fe=ns=te=r");
        assert_eq!(records[0].count, 3);
        assert_eq!(records[1].word, "Baum");
    }

    #[test]
    fn test_zero_breakpoint_word_is_kept() {
        let annotator = Annotator::new(EveryTwo);
        let record = annotator.annotate(candidate("Baum", 7));

        assert_eq!(record.hyphenated.as_str(), record.word);
        assert!(record.break_positions().is_empty());
    }

    #[test]
    fn test_accepts_boxed_hyphenator() {
        let boxed: Box<dyn Hyphenator> = Box::new(EveryTwo);
        let annotator = Annotator::new(boxed.as_ref());
        assert_eq!(annotator.annotate(candidate("Hallo", 1)).hyphenated.as_str(), "Ha=ll=o");
    }
}
