//! Run statistics printed after a successful run

use hyphcorpus_core::pipeline::{RunSummary, EXAMPLE_COUNT};
use std::fmt::Write;

pub fn format_summary(summary: &RunSummary) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "\n=== Statistics ===");
    let _ = writeln!(out, "Total unique words extracted: {}", summary.unique_words);
    let _ = writeln!(out, "Words with hyphenation points: {}", summary.records_written);
    let _ = writeln!(
        out,
        "Average hyphenation points per word: {:.2}",
        summary.average_breaks()
    );

    let _ = writeln!(out, "\n=== Examples (first {}) ===", EXAMPLE_COUNT);
    for record in &summary.examples {
        let _ = writeln!(
            out,
            "  {:20} -> {:30} (appears {}x)",
            record.word,
            record.hyphenated.as_str(),
            record.count
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyphcorpus_core::corpus::AnnotatedRecord;
    use hyphcorpus_core::oracle::HyphenatedForm;

    #[test]
    fn formats_statistics_and_examples() {
        let summary = RunSummary {
            total_tokens: 40,
            unique_words: 12,
            records_written: 1,
            total_breaks: 3,
            examples: vec![AnnotatedRecord {
                word: "Silbentrennung".to_string(),
                hyphenated: HyphenatedForm::new("Sil=ben=tren=nung"),
                count: 4,
            }],
        };

        let text = format_summary(&summary);
        assert!(text.contains("Total unique words extracted: 12\n"));
        assert!(text.contains("Average hyphenation points per word: 3.00\n"));
        assert!(text.contains("=== Examples (first 10) ===\n"));
        assert!(text.contains(
            "  Silbentrennung       -> Sil=ben=tren=nung              (appears 4x)\n"
        ));
    }

    #[test]
    fn empty_run_reports_zero_average() {
        let text = format_summary(&RunSummary::default());
        assert!(text.contains("Average hyphenation points per word: 0.00\n"));
        assert!(text.contains("=== Examples (first 10) ==="));
    }
}
