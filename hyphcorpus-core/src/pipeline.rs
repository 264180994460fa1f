//! End-to-end corpus generation
//!
//! [`run`] strings the stages together for one input file:
//!
//! 1. initialize the oracle (an unsupported language stops the run here)
//! 2. decode the input into a [`TextBlob`]
//! 3. count letter runs into a [`FrequencyIndex`]
//! 4. select and annotate candidates
//! 5. persist the corpus, all or nothing
//!
//! [`build_records`] covers steps 3 and 4 for callers that already hold text
//! and a hyphenator.

use crate::corpus::writer::persist_corpus;
use crate::corpus::{AnnotatedRecord, Annotator, CorpusMetadata};
use crate::error::Error;
use crate::frequency::FrequencyIndex;
use crate::oracle::registry::DEFAULT_BACKEND;
use crate::oracle::{HyphenationPolicy, Hyphenator, OracleRegistry};
use crate::selection::Selection;
use crate::source::{self, TextBlob};
use std::path::Path;

/// Number of records kept in [`RunSummary::examples`]
pub const EXAMPLE_COUNT: usize = 10;

/// Everything a run needs besides its paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Oracle backend name in the registry
    pub backend: String,
    pub policy: HyphenationPolicy,
    pub selection: Selection,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        PipelineOptions {
            backend: DEFAULT_BACKEND.to_string(),
            policy: HyphenationPolicy::default(),
            selection: Selection::default(),
        }
    }
}

/// Statistics of a finished run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Tokens in the source, duplicates included
    pub total_tokens: u64,
    /// Distinct words in the source, before any filtering
    pub unique_words: usize,
    /// Data lines written
    pub records_written: usize,
    /// Break markers across all written records
    pub total_breaks: usize,
    /// The first records, in output order
    pub examples: Vec<AnnotatedRecord>,
}

impl RunSummary {
    fn new(index: &FrequencyIndex, records: &[AnnotatedRecord]) -> Self {
        RunSummary {
            total_tokens: index.total(),
            unique_words: index.len(),
            records_written: records.len(),
            total_breaks: records.iter().map(|r| r.hyphenated.break_count()).sum(),
            examples: records.iter().take(EXAMPLE_COUNT).cloned().collect(),
        }
    }

    /// Mean break markers per record, 0 for an empty corpus
    pub fn average_breaks(&self) -> f64 {
        if self.records_written == 0 {
            0.0
        } else {
            self.total_breaks as f64 / self.records_written as f64
        }
    }
}

/// Count, select and annotate the words of `text`.
pub fn build_records<H: Hyphenator>(
    text: &TextBlob,
    selection: &Selection,
    hyphenator: H,
) -> (FrequencyIndex, Vec<AnnotatedRecord>) {
    let index = FrequencyIndex::from_text(text.as_str());
    log::info!(
        "Found {} total words, {} unique",
        index.total(),
        index.len()
    );

    let annotator = Annotator::new(hyphenator);
    let records = annotator.annotate_all(selection.select(&index));
    log::info!("Generated {} hyphenated words", records.len());

    (index, records)
}

/// File name recorded in the corpus header
pub fn source_name(input: &Path) -> String {
    input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string())
}

/// Generate the corpus for `input` and write it to `output`.
pub fn run(
    input: &Path,
    output: &Path,
    options: &PipelineOptions,
    registry: &OracleRegistry,
) -> Result<RunSummary, Error> {
    log::info!(
        "Initializing hyphenator '{}' for language: {} (min_prefix={}, min_suffix={})",
        options.backend,
        options.policy.language,
        options.policy.min_prefix,
        options.policy.min_suffix
    );
    let hyphenator = registry.load(&options.backend, &options.policy)?;

    log::info!("Reading from: {}", input.display());
    let text = source::load(input)?;
    if text.is_empty() {
        log::warn!("{} contains no text", input.display());
    } else {
        log::debug!("Decoded {} bytes of text", text.len());
    }

    let (index, records) = build_records(&text, &options.selection, hyphenator.as_ref());
    drop(text);

    let metadata = CorpusMetadata {
        source: source_name(input),
        language: options.policy.language.clone(),
        min_prefix: options.policy.min_prefix,
        min_suffix: options.policy.min_suffix,
    };
    persist_corpus(output, &metadata, &records)?;

    Ok(RunSummary::new(&index, &records))
}
