//! Message lookup with reference-language fallback.
//!
//! Lookups never fail. A message missing from the requested language is
//! taken from the reference language; if that has nothing either, the key
//! itself is returned so the end user always sees some text.

use std::{fmt::Display, sync::Arc};

use crate::{
    catalog::Catalog,
    options::RegistryOptions,
    placeholder,
    plural_rules::{self, LanguageDescriptor},
    provider::Provider,
    registry::Registry,
};

#[derive(Debug)]
pub struct Translator {
    registry: Registry,
}

impl Translator {
    pub fn new<P: Provider + 'static>(provider: P) -> Self {
        Self::from_registry(Registry::new(provider))
    }

    pub fn with_options<P: Provider + 'static>(provider: P, options: RegistryOptions) -> Self {
        Self::from_registry(Registry::with_options(provider, options))
    }

    pub fn from_registry(registry: Registry) -> Self {
        Translator { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn available_languages(&self) -> &'static [LanguageDescriptor] {
        self.registry.available_languages()
    }

    /// Returns a handle that translates into `language`.
    pub fn printer(&self, language: impl Into<String>) -> Printer<'_> {
        Printer {
            translator: self,
            language: language.into(),
        }
    }

    /// Resolves a singular message.
    pub fn translate(&self, language: &str, key: &str) -> String {
        self.resolve(language, key, |catalog| catalog.singular(key))
    }

    /// Resolves a plural message for `count`.
    ///
    /// The form index is selected by `language`'s plural rule; the same
    /// index is used when falling back to the reference language. For an
    /// unknown language the reference language's rule picks the index.
    pub fn translate_plural(&self, language: &str, key: &str, count: u64) -> String {
        let index = match plural_rules::select_form(language, count) {
            Ok(index) => index,
            Err(err) => {
                tracing::warn!(language, key, error = %err, "cannot select plural form");
                let reference = &self.registry.options().reference_language;
                match plural_rules::select_form(reference, count) {
                    Ok(index) => index,
                    Err(_) => return key.to_string(),
                }
            }
        };
        self.resolve(language, key, |catalog| catalog.plural_form(key, index))
    }

    /// Resolves a singular message and fills its substitution slots.
    pub fn translate_with(&self, language: &str, key: &str, args: &[&dyn Display]) -> String {
        placeholder::fill(&self.translate(language, key), args)
    }

    /// Resolves a plural message and fills its substitution slots.
    pub fn translate_plural_with(
        &self,
        language: &str,
        key: &str,
        count: u64,
        args: &[&dyn Display],
    ) -> String {
        placeholder::fill(&self.translate_plural(language, key, count), args)
    }

    fn resolve<F>(&self, language: &str, key: &str, pick: F) -> String
    where
        F: Fn(&Catalog) -> Option<&str>,
    {
        if let Some(found) = self.catalog(language).as_deref().and_then(&pick) {
            return found.to_string();
        }

        let reference = self.registry.options().reference_language.as_str();
        if !self.is_reference(language) {
            if let Some(found) = self.catalog(reference).as_deref().and_then(&pick) {
                tracing::debug!(language, key, "message taken from reference language");
                return found.to_string();
            }
        }

        tracing::debug!(language, key, "no translation, returning key");
        key.to_string()
    }

    fn catalog(&self, language: &str) -> Option<Arc<Catalog>> {
        match self.registry.get(language) {
            Ok(catalog) => Some(catalog),
            Err(err) => {
                tracing::warn!(language, error = %err, "catalog unavailable");
                None
            }
        }
    }

    fn is_reference(&self, language: &str) -> bool {
        let reference = &self.registry.options().reference_language;
        match (
            plural_rules::descriptor(language),
            plural_rules::descriptor(reference),
        ) {
            (Ok(a), Ok(b)) => a.id == b.id,
            _ => language == reference,
        }
    }
}

/// A [`Translator`] bound to one language, typically one per request.
#[derive(Debug, Clone)]
pub struct Printer<'a> {
    translator: &'a Translator,
    language: String,
}

impl Printer<'_> {
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn print(&self, key: &str) -> String {
        self.translator.translate(&self.language, key)
    }

    pub fn print_with(&self, key: &str, args: &[&dyn Display]) -> String {
        self.translator.translate_with(&self.language, key, args)
    }

    pub fn plural(&self, key: &str, count: u64) -> String {
        self.translator.translate_plural(&self.language, key, count)
    }

    pub fn plural_with(&self, key: &str, count: u64, args: &[&dyn Display]) -> String {
        self.translator
            .translate_plural_with(&self.language, key, count, args)
    }
}
