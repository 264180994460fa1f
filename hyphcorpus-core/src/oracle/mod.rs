//! Hyphenation oracle seam
//!
//! The corpus pipeline never hyphenates words itself. It asks a [`Hyphenator`],
//! a configured oracle that renders a word with [`BREAK_MARKER`] at each permitted
//! syllable boundary. Hyphenators are produced by an [`OracleBackend`] from a
//! [`HyphenationPolicy`]; backends are registered by name in the
//! [`OracleRegistry`].
//!
//! Initialization is the only fallible step. Once a hyphenator exists, every word
//! gets an answer, possibly with no breaks at all.

pub mod patterns;
pub mod registry;

pub use patterns::PatternBackend;
pub use registry::OracleRegistry;

use std::fmt;

/// Inline marker for a permitted hyphenation point
pub const BREAK_MARKER: char = '=';

/// Language and placement constraints handed to a backend, unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HyphenationPolicy {
    /// Locale identifier, e.g. `de_DE`
    pub language: String,
    /// Minimum letters before the first break
    pub min_prefix: usize,
    /// Minimum letters after the last break
    pub min_suffix: usize,
}

impl HyphenationPolicy {
    pub fn new<S: Into<String>>(language: S, min_prefix: usize, min_suffix: usize) -> Self {
        HyphenationPolicy {
            language: language.into(),
            min_prefix,
            min_suffix,
        }
    }
}

impl Default for HyphenationPolicy {
    fn default() -> Self {
        HyphenationPolicy::new("de_DE", 2, 2)
    }
}

/// A word rendered with break markers, e.g. `Sil=ben=tren=nung`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HyphenatedForm(String);

impl HyphenatedForm {
    /// Wrap an already-marked rendering.
    pub fn new<S: Into<String>>(rendered: S) -> Self {
        HyphenatedForm(rendered.into())
    }

    /// A rendering with no break points.
    pub fn unbroken(word: &str) -> Self {
        HyphenatedForm(word.to_string())
    }

    /// Insert markers into `word` before each byte offset in `breaks`.
    ///
    /// Offsets must lie on char boundaries strictly inside the word; others are
    /// ignored.
    pub fn from_byte_breaks(word: &str, breaks: &[usize]) -> Self {
        let mut rendered = String::with_capacity(word.len() + breaks.len());
        let mut last = 0;
        let mut sorted: Vec<usize> = breaks
            .iter()
            .copied()
            .filter(|&b| b > 0 && b < word.len() && word.is_char_boundary(b))
            .collect();
        sorted.sort_unstable();
        sorted.dedup();

        for offset in sorted {
            rendered.push_str(&word[last..offset]);
            rendered.push(BREAK_MARKER);
            last = offset;
        }
        rendered.push_str(&word[last..]);
        HyphenatedForm(rendered)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of break markers
    pub fn break_count(&self) -> usize {
        self.0.chars().filter(|&c| c == BREAK_MARKER).count()
    }

    /// The rendering with markers removed.
    pub fn bare_word(&self) -> String {
        self.0.chars().filter(|&c| c != BREAK_MARKER).collect()
    }

    /// Code-point offsets into the bare word before which a marker appears.
    pub fn break_positions(&self) -> Vec<usize> {
        let mut positions = Vec::new();
        let mut index = 0;
        for c in self.0.chars() {
            if c == BREAK_MARKER {
                positions.push(index);
            } else {
                index += 1;
            }
        }
        positions
    }
}

impl fmt::Display for HyphenatedForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A configured oracle: one language, one prefix/suffix policy.
pub trait Hyphenator {
    /// Render `word` with [`BREAK_MARKER`] at each permitted break.
    ///
    /// A result without markers is a valid answer.
    fn hyphenate(&self, word: &str) -> HyphenatedForm;
}

impl<H: Hyphenator + ?Sized> Hyphenator for &H {
    fn hyphenate(&self, word: &str) -> HyphenatedForm {
        (**self).hyphenate(word)
    }
}

impl<H: Hyphenator + ?Sized> Hyphenator for Box<H> {
    fn hyphenate(&self, word: &str) -> HyphenatedForm {
        (**self).hyphenate(word)
    }
}

/// Trait for oracle backends
///
/// A backend turns a [`HyphenationPolicy`] into a ready [`Hyphenator`], failing
/// up front when it cannot serve the requested language.
pub trait OracleBackend: Send + Sync {
    /// The name of this backend (e.g. "patterns")
    fn name(&self) -> &str;

    /// Optional description of this backend
    fn description(&self) -> &str {
        ""
    }

    /// Language codes this backend accepts (sorted)
    fn languages(&self) -> Vec<String>;

    /// Build a hyphenator for `policy`
    fn load(&self, policy: &HyphenationPolicy) -> Result<Box<dyn Hyphenator>, OracleError>;
}

/// Oracle initialization failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OracleError {
    /// No backend registered under this name
    BackendNotFound(String),
    /// The backend has no dictionary for this language
    UnsupportedLanguage { language: String, backend: String },
    /// The backend knows the language but could not load it
    LoadFailed { language: String, message: String },
}

impl fmt::Display for OracleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OracleError::BackendNotFound(name) => {
                write!(f, "hyphenation backend '{}' not found", name)
            }
            OracleError::UnsupportedLanguage { language, backend } => write!(
                f,
                "language '{}' is not supported by the '{}' hyphenation backend",
                language, backend
            ),
            OracleError::LoadFailed { language, message } => write!(
                f,
                "failed to load hyphenation dictionary for '{}': {}",
                language, message
            ),
        }
    }
}

impl std::error::Error for OracleError {}
