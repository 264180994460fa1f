//! Crate-level error
//!
//! Whole-run failures only. Per-member archive failures never reach this type;
//! the extractor logs and skips them.

use crate::corpus::{ReadError, WriteError};
use crate::oracle::OracleError;
use crate::source::SourceError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input could not be read or decoded
    Source(SourceError),
    /// The hyphenation oracle could not be initialized
    Oracle(OracleError),
    /// The corpus file could not be written
    Write(WriteError),
    /// A corpus file could not be parsed
    Read(ReadError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Source(e) => write!(f, "Input error: {}", e),
            Error::Oracle(e) => write!(f, "Hyphenation error: {}", e),
            Error::Write(e) => write!(f, "Output error: {}", e),
            Error::Read(e) => write!(f, "Corpus error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Source(e) => Some(e),
            Error::Oracle(e) => Some(e),
            Error::Write(e) => Some(e),
            Error::Read(e) => Some(e),
        }
    }
}

impl From<SourceError> for Error {
    fn from(err: SourceError) -> Self {
        Error::Source(err)
    }
}

impl From<OracleError> for Error {
    fn from(err: OracleError) -> Self {
        Error::Oracle(err)
    }
}

impl From<WriteError> for Error {
    fn from(err: WriteError) -> Self {
        Error::Write(err)
    }
}

impl From<ReadError> for Error {
    fn from(err: ReadError) -> Self {
        Error::Read(err)
    }
}
