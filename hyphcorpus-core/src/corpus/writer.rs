//! Corpus serialization
//!
//! [`write_corpus`] formats into any writer. [`persist_corpus`] writes a whole
//! file: the data goes to a temporary file next to the destination, which is
//! renamed into place only once everything has been flushed. A failed write
//! leaves no output file behind.
//!
//! The staged file gets the permissions a plain `File::create` would give it
//! (0o666 less the umask on Unix). When the destination already exists, its
//! permissions carry over to the replacement.

use super::{AnnotatedRecord, CorpusMetadata, FIELD_SEPARATOR};
use std::fmt;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Mode requested for new corpus files, before the umask applies
#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o666;

/// Output failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteError {
    /// The destination could not be created, written or replaced
    Io { path: PathBuf, message: String },
    /// A record cannot be represented on one data line
    InvalidRecord { word: String },
}

impl fmt::Display for WriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteError::Io { path, message } => {
                write!(f, "cannot write '{}': {}", path.display(), message)
            }
            WriteError::InvalidRecord { word } => {
                write!(f, "record '{}' contains a field separator or line break", word)
            }
        }
    }
}

impl std::error::Error for WriteError {}

fn is_field_safe(field: &str) -> bool {
    !field.contains([FIELD_SEPARATOR, '\n', '\r'])
}

/// Reject records whose fields would break the line format.
pub fn validate_records(records: &[AnnotatedRecord]) -> Result<(), WriteError> {
    for record in records {
        if !is_field_safe(&record.word) || !is_field_safe(record.hyphenated.as_str()) {
            return Err(WriteError::InvalidRecord {
                word: record.word.clone(),
            });
        }
    }
    Ok(())
}

/// Serialize the header and one line per record, in the given order.
pub fn write_corpus<W: Write>(
    writer: &mut W,
    metadata: &CorpusMetadata,
    records: &[AnnotatedRecord],
) -> io::Result<()> {
    writeln!(writer, "# Hyphenation Test Data")?;
    writeln!(writer, "# Source: {}", metadata.source)?;
    writeln!(writer, "# Language: {}", metadata.language)?;
    writeln!(writer, "# Min prefix: {}", metadata.min_prefix)?;
    writeln!(writer, "# Min suffix: {}", metadata.min_suffix)?;
    writeln!(writer, "# Total words: {}", records.len())?;
    writeln!(writer, "# Format: word | hyphenated_form | frequency_in_source")?;
    writeln!(writer, "#")?;
    writeln!(writer, "# Hyphenation points are marked with '='")?;
    writeln!(writer, "# Example: Silbentrennung -> Sil=ben=tren=nung")?;
    writeln!(writer, "#")?;
    writeln!(writer)?;

    for record in records {
        writeln!(
            writer,
            "{}{sep}{}{sep}{}",
            record.word,
            record.hyphenated,
            record.count,
            sep = FIELD_SEPARATOR
        )?;
    }
    Ok(())
}

/// Render a corpus to a string.
pub fn corpus_to_string(metadata: &CorpusMetadata, records: &[AnnotatedRecord]) -> String {
    let mut buffer = Vec::new();
    write_corpus(&mut buffer, metadata, records).expect("writing to a Vec cannot fail");
    String::from_utf8(buffer).expect("corpus fields are UTF-8 strings")
}

/// Create the temporary file that will replace `path`.
fn stage_next_to(path: &Path, directory: &Path) -> io::Result<NamedTempFile> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(".hyphcorpus").suffix(".tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(NEW_FILE_MODE));
    }
    let staged = builder.tempfile_in(directory)?;

    if let Ok(existing) = fs::metadata(path) {
        staged.as_file().set_permissions(existing.permissions())?;
    }
    Ok(staged)
}

/// Write the corpus to `path`, all or nothing.
pub fn persist_corpus(
    path: &Path,
    metadata: &CorpusMetadata,
    records: &[AnnotatedRecord],
) -> Result<(), WriteError> {
    validate_records(records)?;

    let io_error = |e: io::Error| WriteError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = stage_next_to(path, directory).map_err(io_error)?;
    {
        let mut writer = BufWriter::new(staged.as_file_mut());
        write_corpus(&mut writer, metadata, records).map_err(io_error)?;
        writer.flush().map_err(io_error)?;
    }
    staged.as_file().sync_all().map_err(io_error)?;
    staged.persist(path).map_err(|e| io_error(e.error))?;

    log::info!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}
