//! Annotated corpus records and their file format
//!
//! A corpus file is a commented metadata header followed by one
//! `word|hyphenated_form|count` line per record, in selection order:
//!
//! ```text
//! # Hyphenation Test Data
//! # Source: roman.epub
//! # Language: de_DE
//! ...
//! #
//!
//! Silbentrennung|Sil=ben=tren=nung|12
//! ```

pub mod annotate;
pub mod reader;
pub mod writer;

pub use annotate::Annotator;
pub use reader::{parse_corpus, ReadError};
pub use writer::{write_corpus, WriteError};

use crate::oracle::HyphenatedForm;

/// Field separator of data lines
pub const FIELD_SEPARATOR: char = '|';

/// One output line: a word, its oracle rendering and its source frequency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedRecord {
    pub word: String,
    pub hyphenated: HyphenatedForm,
    pub count: u64,
}

impl AnnotatedRecord {
    /// Code-point positions of the breaks in `word`.
    pub fn break_positions(&self) -> Vec<usize> {
        self.hyphenated.break_positions()
    }
}

/// Run metadata recorded in the file header
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CorpusMetadata {
    /// Input file name, without directories
    pub source: String,
    pub language: String,
    pub min_prefix: usize,
    pub min_suffix: usize,
}

/// A corpus read back from disk
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Corpus {
    pub metadata: CorpusMetadata,
    pub records: Vec<AnnotatedRecord>,
}
