//! Reading corpus files back
//!
//! Consumers (hyphenation test suites) need the records and, for each record,
//! the expected break positions. Comment lines and blank lines are skipped; the
//! recognised header keys fill in [`CorpusMetadata`]. Every other line must hold
//! exactly three `|`-separated fields with an integer count.

use super::{AnnotatedRecord, Corpus, FIELD_SEPARATOR};
use crate::oracle::HyphenatedForm;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    /// A data line that is not `word|hyphenated|count` (1-based line number)
    Malformed { line: usize, reason: String },
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Malformed { line, reason } => {
                write!(f, "malformed corpus line {}: {}", line, reason)
            }
        }
    }
}

impl std::error::Error for ReadError {}

pub fn parse_corpus(text: &str) -> Result<Corpus, ReadError> {
    let mut corpus = Corpus::default();

    for (number, line) in text.lines().enumerate() {
        let number = number + 1;
        let line = line.trim_end_matches('\r');

        if line.trim().is_empty() {
            continue;
        }
        if let Some(comment) = line.strip_prefix('#') {
            read_header(comment.trim(), &mut corpus);
            continue;
        }

        corpus.records.push(parse_record(line, number)?);
    }

    Ok(corpus)
}

fn read_header(comment: &str, corpus: &mut Corpus) {
    let Some((key, value)) = comment.split_once(':') else {
        return;
    };
    let value = value.trim();
    let metadata = &mut corpus.metadata;
    match key.trim() {
        "Source" => metadata.source = value.to_string(),
        "Language" => metadata.language = value.to_string(),
        "Min prefix" => metadata.min_prefix = value.parse().unwrap_or(metadata.min_prefix),
        "Min suffix" => metadata.min_suffix = value.parse().unwrap_or(metadata.min_suffix),
        _ => {}
    }
}

fn parse_record(line: &str, number: usize) -> Result<AnnotatedRecord, ReadError> {
    let malformed = |reason: String| ReadError::Malformed {
        line: number,
        reason,
    };

    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    let [word, hyphenated, count] = fields.as_slice() else {
        return Err(malformed(format!(
            "expected 3 fields, found {}",
            fields.len()
        )));
    };

    if word.is_empty() {
        return Err(malformed("empty word".to_string()));
    }
    let count = count
        .trim()
        .parse::<u64>()
        .map_err(|e| malformed(format!("invalid count '{}': {}", count, e)))?;

    Ok(AnnotatedRecord {
        word: word.to_string(),
        hyphenated: HyphenatedForm::new(*hyphenated),
        count,
    })
}
