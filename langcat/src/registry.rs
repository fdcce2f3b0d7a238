//! The catalog registry: one lazily parsed, memoized [`Catalog`] per
//! supported language.
//!
//! The registry is an ordinary value owned by the host application. Each
//! supported language gets a slot that is initialized at most once; the
//! first caller fetches and parses, concurrent callers for the same
//! language block on that parse, and everyone afterwards shares the result.
//! Failures are memoized as well, so a broken language file is parsed once
//! and reported to every caller rather than retried.

use std::{
    collections::HashMap,
    sync::{Arc, OnceLock},
};

use crate::{
    catalog::{self, Catalog},
    error::Error,
    options::RegistryOptions,
    plural_rules::{self, LanguageDescriptor},
    provider::Provider,
    validation::Report,
};

type Slot = OnceLock<Result<Arc<Catalog>, Error>>;

pub struct Registry {
    provider: Box<dyn Provider>,
    options: RegistryOptions,
    slots: HashMap<&'static str, Slot>,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("options", &self.options)
            .field("loaded", &self.loaded_languages().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl Registry {
    /// Creates an empty registry reading from `provider` with default options.
    pub fn new<P: Provider + 'static>(provider: P) -> Self {
        Self::with_options(provider, RegistryOptions::default())
    }

    pub fn with_options<P: Provider + 'static>(provider: P, options: RegistryOptions) -> Self {
        let slots = plural_rules::available_languages()
            .iter()
            .map(|d| (d.id, Slot::new()))
            .collect();
        Registry {
            provider: Box::new(provider),
            options,
            slots,
        }
    }

    pub fn options(&self) -> &RegistryOptions {
        &self.options
    }

    pub fn provider(&self) -> &dyn Provider {
        self.provider.as_ref()
    }

    /// The fixed set of supported languages. Does not touch the provider.
    pub fn available_languages(&self) -> &'static [LanguageDescriptor] {
        plural_rules::available_languages()
    }

    /// Returns the catalog for `language`, loading it on first use.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownLanguage`] if `language` is not a supported language
    ///   (the provider is not consulted).
    /// - Whatever the provider or parser reported on the first load. The
    ///   same error is returned on every later call.
    pub fn get(&self, language: &str) -> Result<Arc<Catalog>, Error> {
        let descriptor = plural_rules::descriptor(language)?;
        let slot = self
            .slots
            .get(descriptor.id)
            .ok_or_else(|| Error::UnknownLanguage(language.to_string()))?;
        slot.get_or_init(|| self.load(descriptor)).clone()
    }

    /// Whether `language` has been loaded (successfully or not).
    pub fn is_loaded(&self, language: &str) -> bool {
        plural_rules::descriptor(language)
            .ok()
            .and_then(|d| self.slots.get(d.id))
            .is_some_and(|slot| slot.get().is_some())
    }

    /// Identifiers of languages whose slot has been initialized, sorted.
    pub fn loaded_languages(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.available_languages()
            .iter()
            .map(|d| d.id)
            .filter(|id| self.slots.get(id).is_some_and(|slot| slot.get().is_some()))
    }

    /// Loads every supported language, returning each outcome in table order.
    pub fn load_all(&self) -> Vec<(&'static str, Result<Arc<Catalog>, Error>)> {
        self.available_languages()
            .iter()
            .map(|d| (d.id, self.get(d.id)))
            .collect()
    }

    fn load(&self, descriptor: &'static LanguageDescriptor) -> Result<Arc<Catalog>, Error> {
        tracing::debug!(language = descriptor.id, "loading catalog");

        let outcome = self
            .provider
            .fetch(descriptor.id)
            .and_then(|bytes| catalog::parse(&bytes))
            .and_then(|catalog| {
                if self.options.strict {
                    let mut report = Report::default();
                    report.check_form_counts(descriptor, &catalog);
                    report.into_result()?;
                }
                Ok(Arc::new(catalog))
            });

        match &outcome {
            Ok(catalog) => tracing::debug!(
                language = descriptor.id,
                messages = catalog.len(),
                "catalog cached"
            ),
            Err(err) => tracing::debug!(language = descriptor.id, error = %err, "catalog load failed"),
        }
        outcome
    }
}
