//! Oracle registry for backend discovery and selection
//!
//! Backends are registered and retrieved by name. The default registry holds the
//! embedded pattern backend; callers with other oracles register their own.

use super::{HyphenationPolicy, Hyphenator, OracleBackend, OracleError};
use std::collections::HashMap;

/// Name of the backend used when none is configured
pub const DEFAULT_BACKEND: &str = "patterns";

pub struct OracleRegistry {
    backends: HashMap<String, Box<dyn OracleBackend>>,
}

impl OracleRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        OracleRegistry {
            backends: HashMap::new(),
        }
    }

    /// Register a backend
    ///
    /// If a backend with the same name already exists, it will be replaced.
    pub fn register<B: OracleBackend + 'static>(&mut self, backend: B) {
        self.backends
            .insert(backend.name().to_string(), Box::new(backend));
    }

    pub fn get(&self, name: &str) -> Result<&dyn OracleBackend, OracleError> {
        self.backends
            .get(name)
            .map(|b| b.as_ref())
            .ok_or_else(|| OracleError::BackendNotFound(name.to_string()))
    }

    /// List all available backend names (sorted)
    pub fn list_backends(&self) -> Vec<String> {
        let mut names: Vec<_> = self.backends.keys().cloned().collect();
        names.sort();
        names
    }

    /// Initialize a hyphenator from the named backend
    pub fn load(
        &self,
        backend: &str,
        policy: &HyphenationPolicy,
    ) -> Result<Box<dyn Hyphenator>, OracleError> {
        self.get(backend)?.load(policy)
    }

    /// Create a registry with the built-in backends
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(super::PatternBackend);
        registry
    }
}

impl Default for OracleRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::HyphenatedForm;

    struct Upper;
    impl Hyphenator for Upper {
        fn hyphenate(&self, word: &str) -> HyphenatedForm {
            HyphenatedForm::new(word.to_uppercase())
        }
    }

    struct TestBackend;
    impl OracleBackend for TestBackend {
        fn name(&self) -> &str {
            "test"
        }
        fn languages(&self) -> Vec<String> {
            vec!["tlh".to_string()]
        }
        fn load(&self, policy: &HyphenationPolicy) -> Result<Box<dyn Hyphenator>, OracleError> {
            if policy.language == "tlh" {
                Ok(Box::new(Upper))
            } else {
                Err(OracleError::UnsupportedLanguage {
                    language: policy.language.clone(),
                    backend: self.name().to_string(),
                })
            }
        }
    }

    #[test]
    fn test_registry_creation() {
        let registry = OracleRegistry::new();
        assert!(registry.list_backends().is_empty());
    }

    #[test]
    fn test_registry_register_and_load() {
        let mut registry = OracleRegistry::new();
        registry.register(TestBackend);

        assert_eq!(registry.list_backends(), vec!["test".to_string()]);
        let hyphenator = registry
            .load("test", &HyphenationPolicy::new("tlh", 2, 2))
            .unwrap();
        assert_eq!(hyphenator.hyphenate("qapla").as_str(), "QAPLA");
    }

    #[test]
    fn test_registry_unknown_backend() {
        let registry = OracleRegistry::new();
        let result = registry.load("missing", &HyphenationPolicy::default());
        assert!(matches!(result, Err(OracleError::BackendNotFound(name)) if name == "missing"));
    }

    #[test]
    fn test_defaults_include_patterns() {
        let registry = OracleRegistry::default();
        assert_eq!(registry.list_backends(), vec![DEFAULT_BACKEND.to_string()]);
    }
}
