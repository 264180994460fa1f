//! # hyphcorpus-core
//!
//! Builds ground-truth hyphenation corpora from natural-language text.
//!
//! Architecture
//!
//!     The pipeline is strictly linear, every stage owning one concern:
//!
//!     source      -> TextBlob        (plain text or packaged document)
//!     tokenize    -> letter runs     (Unicode category L, case preserved)
//!     frequency   -> FrequencyIndex  (word -> occurrences)
//!     selection   -> candidates      (count desc, case-insensitive alpha, first seen)
//!     corpus      -> records + file  (oracle annotation, serialization, reading back)
//!
//!     The hyphenation oracle is not implemented here. It sits behind the
//!     [`oracle::Hyphenator`] trait, produced by an [`oracle::OracleBackend`] looked up
//!     by name in the [`oracle::OracleRegistry`]. Extraction and selection never see a
//!     concrete oracle.
//!
//!     This is a pure lib: it powers hyphcorpus-cli but does no printing. Progress goes
//!     through the `log` facade and results come back as values.
//!
//!     The file structure :
//!     .
//!     ├── error.rs                # Crate-level Error
//!     ├── source                  # Container decoding
//!     ├── tokenize.rs
//!     ├── frequency.rs
//!     ├── selection.rs
//!     ├── oracle                  # Hyphenator seam, registry and backends
//!     ├── corpus                  # Annotation, writer, reader
//!     ├── pipeline.rs             # End-to-end run
//!     └── lib.rs

pub mod corpus;
pub mod error;
pub mod frequency;
pub mod oracle;
pub mod pipeline;
pub mod selection;
pub mod source;
pub mod tokenize;

pub use error::Error;
