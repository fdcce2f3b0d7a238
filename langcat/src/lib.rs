#![forbid(unsafe_code)]
//! Message catalogs for Rust applications.
//!
//! Each supported language has a flat JSON file of messages: a string value
//! is a singular message, an array of strings holds the plural forms of a
//! message in the order the language's plural rule numbers them.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use langcat::{DirectoryProvider, Translator};
//!
//! let translator = Translator::new(DirectoryProvider::new("translations"));
//!
//! // Singular lookup, falling back to en_US and then to the key itself
//! let title = translator.translate("fr_FR", "page.unread.title");
//!
//! // Plural lookup, picking the right form for Russian
//! let count = translator.translate_plural_with("ru_RU", "page.unread.count", 21, &[&21]);
//! # let _ = (title, count);
//! ```
//!
//! # Components
//!
//! - [`catalog`]: parses one language's JSON into a [`Catalog`]
//! - [`plural_rules`]: the supported languages and their plural rules
//! - [`Registry`]: lazily loads and memoizes one catalog per language
//! - [`Translator`]: lookups with reference-language fallback
//! - [`validation`]: completeness and consistency checks for tooling

pub mod catalog;
pub mod error;
pub mod options;
pub mod placeholder;
pub mod plural_rules;
pub mod provider;
pub mod registry;
pub mod traits;
pub mod translator;
pub mod validation;

// Re-export most used types for easy consumption
pub use crate::{
    catalog::{Catalog, parse},
    error::Error,
    options::RegistryOptions,
    plural_rules::{
        LanguageDescriptor, PluralRule, REFERENCE_LANGUAGE, available_languages, form_count,
        select_form,
    },
    provider::{DirectoryProvider, MemoryProvider, Provider},
    registry::Registry,
    translator::{Printer, Translator},
    validation::{Issue, MessageKind, Report, validate_registry},
};
