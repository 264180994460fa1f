//! Packaged-document extractor
//!
//! A packaged document (e-book container) is a zip archive holding many markup
//! files plus stylesheets, images and metadata. Only the markup members carry
//! prose, so only those are read. Each one is decoded leniently, every tag is
//! replaced by a single space, and the results are joined with newlines in the
//! order the archive lists them.
//!
//! A member that fails to read is skipped with a warning; it never aborts the
//! extraction. Failing to open the archive itself does.

use super::{SourceError, TextBlob};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;
use zip::result::ZipError;
use zip::ZipArchive;

/// File extensions (lowercase) that select this decoder
pub const PACKAGE_EXTENSIONS: &[&str] = &["epub"];

/// Member suffixes (lowercase) treated as markup
pub const MARKUP_SUFFIXES: &[&str] = &[".xhtml", ".html", ".htm"];

static TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());

pub fn load(path: &Path) -> Result<TextBlob, SourceError> {
    let file = File::open(path).map_err(|e| SourceError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let text = extract_markup(file).map_err(|e| SourceError::Archive {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(TextBlob::new(text))
}

/// Extract and concatenate the tag-stripped text of every markup member.
///
/// Only errors opening the archive directory are returned; per-member failures
/// are logged and skipped.
pub fn extract_markup<R: Read + Seek>(reader: R) -> Result<String, ZipError> {
    let mut archive = ZipArchive::new(reader)?;
    let mut texts = Vec::new();

    for index in 0..archive.len() {
        let mut member = match archive.by_index(index) {
            Ok(member) => member,
            Err(e) => {
                log::warn!("Skipping archive member #{}: {}", index, e);
                continue;
            }
        };

        let name = member.name().to_string();
        if !is_markup_member(&name) {
            log::debug!("Ignoring non-markup member {}", name);
            continue;
        }

        let mut bytes = Vec::new();
        if let Err(e) = member.read_to_end(&mut bytes) {
            log::warn!("Skipping archive member {}: {}", name, e);
            continue;
        }

        texts.push(strip_tags(&String::from_utf8_lossy(&bytes)));
    }

    log::debug!("Extracted {} markup members", texts.len());
    Ok(texts.join("\n"))
}

pub fn is_markup_member(name: &str) -> bool {
    let lower = name.to_lowercase();
    MARKUP_SUFFIXES.iter().any(|suffix| lower.ends_with(suffix))
}

/// Replace every `<...>` construct with a single space.
pub fn strip_tags(markup: &str) -> String {
    TAG_REGEX.replace_all(markup, " ").into_owned()
}
