//! Options controlling how the registry loads catalogs and where the
//! translator falls back to.

use crate::plural_rules::REFERENCE_LANGUAGE;

/// Load and lookup behavior for [`crate::Registry`] and [`crate::Translator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryOptions {
    /// Language consulted when a key is missing from the requested one.
    pub reference_language: String,
    /// Rejects catalogs whose plural entries do not have the language's
    /// declared number of forms.
    pub strict: bool,
}

impl Default for RegistryOptions {
    fn default() -> Self {
        Self {
            reference_language: REFERENCE_LANGUAGE.to_string(),
            strict: false,
        }
    }
}

impl RegistryOptions {
    /// Creates default options (`en_US` reference, lenient loading).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the reference language.
    pub fn with_reference_language(mut self, language: impl Into<String>) -> Self {
        self.reference_language = language.into();
        self
    }

    /// Enables/disables strict loading.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = RegistryOptions::new();
        assert_eq!(options.reference_language, "en_US");
        assert!(!options.strict);
    }

    #[test]
    fn test_builder() {
        let options = RegistryOptions::new()
            .with_reference_language("fr_FR")
            .with_strict(true);
        assert_eq!(options.reference_language, "fr_FR");
        assert!(options.strict);
    }
}
