//! Knuth-Liang pattern backend
//!
//! Backed by the `hyphenation` crate's embedded TeX pattern dictionaries. Locale
//! codes are accepted as `ll_CC`, `ll-CC` or bare `ll`; a region this table does
//! not know falls back to the bare language, the way LibreOffice-style
//! dictionaries are looked up.

use super::{HyphenatedForm, HyphenationPolicy, Hyphenator, OracleBackend, OracleError};
use hyphenation::{Language, Load, Standard};

const BACKEND_NAME: &str = "patterns";

const LOCALES: &[(&str, Language)] = &[
    ("cs", Language::Czech),
    ("cs_CZ", Language::Czech),
    ("da", Language::Danish),
    ("da_DK", Language::Danish),
    ("de", Language::German1996),
    ("de_AT", Language::German1996),
    ("de_CH", Language::GermanSwiss),
    ("de_DE", Language::German1996),
    ("en", Language::EnglishUS),
    ("en_GB", Language::EnglishGB),
    ("en_US", Language::EnglishUS),
    ("es", Language::Spanish),
    ("es_ES", Language::Spanish),
    ("fi", Language::Finnish),
    ("fi_FI", Language::Finnish),
    ("fr", Language::French),
    ("fr_FR", Language::French),
    ("hu", Language::Hungarian),
    ("hu_HU", Language::Hungarian),
    ("it", Language::Italian),
    ("it_IT", Language::Italian),
    ("nb", Language::NorwegianBokmal),
    ("nb_NO", Language::NorwegianBokmal),
    ("nl", Language::Dutch),
    ("nl_NL", Language::Dutch),
    ("pl", Language::Polish),
    ("pl_PL", Language::Polish),
    ("pt", Language::Portuguese),
    ("pt_BR", Language::Portuguese),
    ("pt_PT", Language::Portuguese),
    ("ru", Language::Russian),
    ("ru_RU", Language::Russian),
    ("sv", Language::Swedish),
    ("sv_SE", Language::Swedish),
    ("uk", Language::Ukrainian),
    ("uk_UA", Language::Ukrainian),
];

/// Map a locale code onto an embedded dictionary language.
pub fn resolve_language(code: &str) -> Option<Language> {
    let normalized = code.trim().replace('-', "_");
    let mut parts = normalized.splitn(2, '_');
    let language = parts.next()?.to_ascii_lowercase();
    if language.is_empty() {
        return None;
    }

    let lookup = |key: &str| {
        LOCALES
            .iter()
            .find(|(code, _)| *code == key)
            .map(|&(_, lang)| lang)
    };

    if let Some(region) = parts.next() {
        let key = format!("{}_{}", language, region.to_ascii_uppercase());
        if let Some(lang) = lookup(&key) {
            return Some(lang);
        }
    }
    lookup(&language)
}

/// Backend over the embedded Knuth-Liang dictionaries
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternBackend;

impl OracleBackend for PatternBackend {
    fn name(&self) -> &str {
        BACKEND_NAME
    }

    fn description(&self) -> &str {
        "Knuth-Liang patterns embedded from the TeX hyphenation project"
    }

    fn languages(&self) -> Vec<String> {
        let mut codes: Vec<String> = LOCALES.iter().map(|(code, _)| code.to_string()).collect();
        codes.sort();
        codes
    }

    fn load(&self, policy: &HyphenationPolicy) -> Result<Box<dyn Hyphenator>, OracleError> {
        let language =
            resolve_language(&policy.language).ok_or_else(|| OracleError::UnsupportedLanguage {
                language: policy.language.clone(),
                backend: BACKEND_NAME.to_string(),
            })?;

        let mut dictionary =
            Standard::from_embedded(language).map_err(|e| OracleError::LoadFailed {
                language: policy.language.clone(),
                message: e.to_string(),
            })?;
        dictionary.minima = (policy.min_prefix, policy.min_suffix);

        log::info!(
            "Loaded {:?} patterns for {} (min_prefix={}, min_suffix={})",
            language,
            policy.language,
            policy.min_prefix,
            policy.min_suffix
        );
        Ok(Box::new(PatternHyphenator { dictionary }))
    }
}

struct PatternHyphenator {
    dictionary: Standard,
}

impl Hyphenator for PatternHyphenator {
    fn hyphenate(&self, word: &str) -> HyphenatedForm {
        let hyphenated = hyphenation::Hyphenator::hyphenate(&self.dictionary, word);
        HyphenatedForm::from_byte_breaks(word, &hyphenated.breaks)
    }
}
