//! Plain-text loader

use super::{SourceError, TextBlob};
use std::fs;
use std::path::Path;

/// Read the whole file as UTF-8. Invalid UTF-8 is fatal, not repaired.
pub fn load(path: &Path) -> Result<TextBlob, SourceError> {
    let bytes = fs::read(path).map_err(|e| SourceError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let text = String::from_utf8(bytes).map_err(|e| SourceError::InvalidUtf8 {
        path: path.to_path_buf(),
        message: e.utf8_error().to_string(),
    })?;

    log::debug!("Read {} bytes of plain text from {}", text.len(), path.display());
    Ok(TextBlob::new(text))
}
