//! Consistency checks over loaded catalogs, for diagnostics tooling and CI.
//!
//! Every check appends to a [`Report`] instead of stopping at the first
//! problem, so one run lists every `(language, key)` pair that needs work.
//! None of these findings affect lookups: the translator still falls back
//! to the reference language or the key itself.

use std::fmt::Display;

use serde::Serialize;

use crate::{
    catalog::Catalog,
    error::Error,
    placeholder,
    plural_rules::{self, LanguageDescriptor},
    registry::Registry,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Singular,
    Plural,
}

impl Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageKind::Singular => write!(f, "singular"),
            MessageKind::Plural => write!(f, "plural"),
        }
    }
}

/// One validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum Issue {
    /// The catalog has no messages of this kind at all.
    EmptyCatalog { language: String, kind: MessageKind },
    /// An empty string, an empty plural list, or an empty plural form.
    EmptyValue {
        language: String,
        key: String,
        kind: MessageKind,
    },
    FormCountMismatch {
        language: String,
        key: String,
        expected: usize,
        found: usize,
    },
    /// A key of the reference language is absent.
    MissingKey {
        language: String,
        key: String,
        kind: MessageKind,
    },
    PlaceholderMismatch {
        language: String,
        key: String,
        expected: Vec<String>,
        found: Vec<String>,
    },
}

impl Issue {
    pub fn language(&self) -> &str {
        match self {
            Issue::EmptyCatalog { language, .. }
            | Issue::EmptyValue { language, .. }
            | Issue::FormCountMismatch { language, .. }
            | Issue::MissingKey { language, .. }
            | Issue::PlaceholderMismatch { language, .. } => language,
        }
    }

    pub fn key(&self) -> Option<&str> {
        match self {
            Issue::EmptyCatalog { .. } => None,
            Issue::EmptyValue { key, .. }
            | Issue::FormCountMismatch { key, .. }
            | Issue::MissingKey { key, .. }
            | Issue::PlaceholderMismatch { key, .. } => Some(key),
        }
    }
}

impl Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Issue::EmptyCatalog { language, kind } => {
                write!(f, "lang='{}': no {} messages", language, kind)
            }
            Issue::EmptyValue {
                language,
                key,
                kind,
            } => write!(f, "lang='{}' key='{}': empty {} value", language, key, kind),
            Issue::FormCountMismatch {
                language,
                key,
                expected,
                found,
            } => write!(
                f,
                "lang='{}' key='{}': expected {} plural forms, found {}",
                language, key, expected, found
            ),
            Issue::MissingKey {
                language,
                key,
                kind,
            } => write!(
                f,
                "lang='{}' key='{}': missing {} translation",
                language, key, kind
            ),
            Issue::PlaceholderMismatch {
                language,
                key,
                expected,
                found,
            } => write!(
                f,
                "lang='{}' key='{}': placeholders [{}] do not match reference [{}]",
                language,
                key,
                found.join(", "),
                expected.join(", ")
            ),
        }
    }
}

/// Accumulated validation findings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    issues: Vec<Issue>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn push(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    pub fn extend(&mut self, other: Report) {
        self.issues.extend(other.issues);
    }

    /// Flags a catalog without any singular or without any plural messages.
    pub fn check_not_empty(&mut self, language: &str, catalog: &Catalog) {
        if catalog.singulars().is_empty() {
            self.push(Issue::EmptyCatalog {
                language: language.to_string(),
                kind: MessageKind::Singular,
            });
        }
        if catalog.plurals().is_empty() {
            self.push(Issue::EmptyCatalog {
                language: language.to_string(),
                kind: MessageKind::Plural,
            });
        }
    }

    /// Flags empty singular strings, empty plural lists and empty forms.
    pub fn check_empty_values(&mut self, language: &str, catalog: &Catalog) {
        for key in sorted_keys(catalog.singulars()) {
            if catalog.singular(key).is_some_and(str::is_empty) {
                self.push(Issue::EmptyValue {
                    language: language.to_string(),
                    key: key.to_string(),
                    kind: MessageKind::Singular,
                });
            }
        }
        for key in sorted_keys(catalog.plurals()) {
            let forms = catalog.plural(key).unwrap_or_default();
            if forms.is_empty() || forms.iter().any(String::is_empty) {
                self.push(Issue::EmptyValue {
                    language: language.to_string(),
                    key: key.to_string(),
                    kind: MessageKind::Plural,
                });
            }
        }
    }

    /// Flags plural entries whose length differs from the language's form count.
    pub fn check_form_counts(&mut self, descriptor: &LanguageDescriptor, catalog: &Catalog) {
        let expected = descriptor.form_count();
        for key in sorted_keys(catalog.plurals()) {
            let found = catalog.plural(key).map_or(0, <[String]>::len);
            if found != expected {
                self.push(Issue::FormCountMismatch {
                    language: descriptor.id.to_string(),
                    key: key.to_string(),
                    expected,
                    found,
                });
            }
        }
    }

    /// Flags every reference key missing from `catalog`, singulars and
    /// plurals checked separately.
    pub fn check_completeness(&mut self, reference: &Catalog, language: &str, catalog: &Catalog) {
        for key in sorted_keys(reference.singulars()) {
            if catalog.singular(key).is_none() {
                self.push(Issue::MissingKey {
                    language: language.to_string(),
                    key: key.to_string(),
                    kind: MessageKind::Singular,
                });
            }
        }
        for key in sorted_keys(reference.plurals()) {
            if catalog.plural(key).is_none() {
                self.push(Issue::MissingKey {
                    language: language.to_string(),
                    key: key.to_string(),
                    kind: MessageKind::Plural,
                });
            }
        }
    }

    /// Flags translations whose slots differ from the reference message.
    ///
    /// Plural messages are compared on their last form, the one used for
    /// general counts in every rule family.
    pub fn check_placeholders(&mut self, reference: &Catalog, language: &str, catalog: &Catalog) {
        for key in sorted_keys(reference.singulars()) {
            if let (Some(expected), Some(found)) = (reference.singular(key), catalog.singular(key)) {
                self.compare_slots(language, key, expected, found);
            }
        }
        for key in sorted_keys(reference.plurals()) {
            let expected = reference.plural(key).and_then(<[String]>::last);
            let found = catalog.plural(key).and_then(<[String]>::last);
            if let (Some(expected), Some(found)) = (expected, found) {
                self.compare_slots(language, key, expected, found);
            }
        }
    }

    fn compare_slots(&mut self, language: &str, key: &str, expected: &str, found: &str) {
        let expected = placeholder::signature(expected);
        let found = placeholder::signature(found);
        if expected != found {
            self.push(Issue::PlaceholderMismatch {
                language: language.to_string(),
                key: key.to_string(),
                expected,
                found,
            });
        }
    }

    /// `Ok(())` when no issues were found, otherwise a validation error
    /// listing one issue per line.
    pub fn into_result(self) -> Result<(), Error> {
        if self.issues.is_empty() {
            return Ok(());
        }
        let lines: Vec<String> = self.issues.iter().map(Issue::to_string).collect();
        Err(Error::validation_error(format!(
            "Catalog validation failed:\n{}",
            lines.join("\n")
        )))
    }
}

fn sorted_keys<V>(map: &std::collections::HashMap<String, V>) -> Vec<&str> {
    let mut keys: Vec<&str> = map.keys().map(String::as_str).collect();
    keys.sort_unstable();
    keys
}

/// Runs the single-language checks: non-empty maps, empty values, form counts.
pub fn validate_catalog(descriptor: &LanguageDescriptor, catalog: &Catalog) -> Report {
    let mut report = Report::new();
    report.check_not_empty(descriptor.id, catalog);
    report.check_empty_values(descriptor.id, catalog);
    report.check_form_counts(descriptor, catalog);
    report
}

/// Runs the cross-language checks of `catalog` against the reference catalog.
pub fn validate_against_reference(reference: &Catalog, language: &str, catalog: &Catalog) -> Report {
    let mut report = Report::new();
    report.check_completeness(reference, language, catalog);
    report.check_placeholders(reference, language, catalog);
    report
}

/// Loads every supported language through `registry` and validates it.
///
/// # Errors
///
/// The first load failure, reference language included. Findings about the
/// data itself are returned in the report, not as errors.
pub fn validate_registry(registry: &Registry) -> Result<Report, Error> {
    let reference_descriptor = plural_rules::descriptor(&registry.options().reference_language)?;
    let reference = registry.get(reference_descriptor.id)?;

    let mut report = Report::new();
    for descriptor in registry.available_languages() {
        let catalog = registry.get(descriptor.id)?;
        report.extend(validate_catalog(descriptor, &catalog));
        if descriptor.id != reference_descriptor.id {
            report.extend(validate_against_reference(&reference, descriptor.id, &catalog));
        }
    }

    tracing::debug!(
        languages = registry.available_languages().len(),
        issues = report.len(),
        "validated registry"
    );
    Ok(report)
}
