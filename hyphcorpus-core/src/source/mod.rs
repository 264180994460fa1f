//! Container decoding
//!
//! Turns an input path into a single [`TextBlob`]. Two containers are understood:
//!
//! - plain UTF-8 text files, read verbatim ([`plain`])
//! - packaged documents (`.epub`), whose markup members are tag-stripped and
//!   concatenated ([`package`])
//!
//! The file handle lives only for the duration of [`load`].

pub mod package;
pub mod plain;

use std::fmt;
use std::path::{Path, PathBuf};

/// All decoded text of one input source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlob {
    text: String,
}

impl TextBlob {
    pub fn new<S: Into<String>>(text: S) -> Self {
        TextBlob { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl From<String> for TextBlob {
    fn from(text: String) -> Self {
        TextBlob::new(text)
    }
}

/// Which decoder handles a given path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    PlainText,
    PackagedDocument,
}

impl SourceKind {
    /// Pick the decoder from the file extension (case-insensitive).
    pub fn detect(path: &Path) -> Self {
        let is_package = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| package::PACKAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
            .unwrap_or(false);

        if is_package {
            SourceKind::PackagedDocument
        } else {
            SourceKind::PlainText
        }
    }
}

/// Fatal input-access failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The file could not be opened or read
    Io { path: PathBuf, message: String },
    /// A plain-text input is not valid UTF-8
    InvalidUtf8 { path: PathBuf, message: String },
    /// A packaged document is not a readable archive
    Archive { path: PathBuf, message: String },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Io { path, message } => {
                write!(f, "cannot read '{}': {}", path.display(), message)
            }
            SourceError::InvalidUtf8 { path, message } => {
                write!(f, "'{}' is not valid UTF-8: {}", path.display(), message)
            }
            SourceError::Archive { path, message } => {
                write!(f, "cannot open archive '{}': {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for SourceError {}

/// Decode `path` with the decoder its extension selects.
pub fn load<P: AsRef<Path>>(path: P) -> Result<TextBlob, SourceError> {
    let path = path.as_ref();
    match SourceKind::detect(path) {
        SourceKind::PackagedDocument => {
            log::info!("Detected packaged document; extracting markup members");
            package::load(path)
        }
        SourceKind::PlainText => plain::load(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest(
        path,
        expected,
        case("book.txt", SourceKind::PlainText),
        case("book", SourceKind::PlainText),
        case("book.epub", SourceKind::PackagedDocument),
        case("dir/Book.EPUB", SourceKind::PackagedDocument),
        case("book.epub.txt", SourceKind::PlainText)
    )]
    fn test_detect_kind(path: &str, expected: SourceKind) {
        assert_eq!(SourceKind::detect(Path::new(path)), expected);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load("does/not/exist.txt").unwrap_err();
        assert!(
            matches!(err, SourceError::Io { ref path, .. } if path == Path::new("does/not/exist.txt"))
        );
    }
}
