//! Shared configuration loader for the hyphcorpus tools.
//!
//! `defaults/hyphcorpus.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files and
//! command-line overrides on top of those defaults via [`Loader`] before
//! deserializing into [`HyphcorpusConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use hyphcorpus_core::oracle::HyphenationPolicy;
use hyphcorpus_core::pipeline::PipelineOptions;
use hyphcorpus_core::selection::Selection;
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/hyphcorpus.default.toml");

/// Name of the optional configuration file picked up from the working directory
pub const LOCAL_CONFIG_FILE: &str = "hyphcorpus.toml";

/// Top-level configuration consumed by hyphcorpus applications.
#[derive(Debug, Clone, Deserialize)]
pub struct HyphcorpusConfig {
    pub hyphenation: HyphenationConfig,
    pub selection: SelectionConfig,
}

/// Oracle selection and the policy handed to it.
#[derive(Debug, Clone, Deserialize)]
pub struct HyphenationConfig {
    pub backend: String,
    pub language: String,
    pub min_prefix: usize,
    pub min_suffix: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SelectionConfig {
    pub min_length: usize,
    pub max_words: usize,
}

impl HyphcorpusConfig {
    /// Convert into the options the pipeline runs with.
    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            backend: self.hyphenation.backend.clone(),
            policy: HyphenationPolicy::new(
                self.hyphenation.language.clone(),
                self.hyphenation.min_prefix,
                self.hyphenation.min_suffix,
            ),
            selection: Selection::new(self.selection.min_length, self.selection.max_words),
        }
    }
}

/// Builds a [`HyphcorpusConfig`] in three layers: the embedded defaults, then a
/// TOML file (`--config` or the local `hyphcorpus.toml`), then individual
/// command-line flags, each layer winning over the one before.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer the file named by `--config`; it must exist.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer a file that may be absent, such as the local `hyphcorpus.toml`.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Override one dotted key, e.g. `selection.max_words`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Override `key` only for flags the user actually passed.
    pub fn set_override_option<I>(self, key: &str, value: Option<I>) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        match value {
            Some(value) => self.set_override(key, value),
            None => Ok(self),
        }
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<HyphcorpusConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<HyphcorpusConfig, ConfigError> {
    Loader::new().build()
}
