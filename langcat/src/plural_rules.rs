use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::Serialize;
use unic_langid::LanguageIdentifier;

use crate::error::Error;

/// The language whose key set defines completeness for all others.
pub const REFERENCE_LANGUAGE: &str = "en_US";

/// Cardinal plural rule families.
///
/// The set is closed: every supported language maps to exactly one family,
/// and the family fixes how many plural forms the language's catalog holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PluralRule {
    /// One form regardless of count (Chinese, Japanese, Indonesian, ...).
    Invariant,
    /// `1` versus everything else.
    OneOther,
    /// Russian/Ukrainian: one (1, 21, 101), few (2-4, 22-24), many.
    EastSlavic,
    /// Like East Slavic but only exactly `1` takes the first form.
    Polish,
    /// one (1), few (0, 2-19, 101-119), other.
    Romanian,
}

impl PluralRule {
    /// Number of plural forms a catalog must provide for this family.
    pub const fn form_count(self) -> usize {
        match self {
            PluralRule::Invariant => 1,
            PluralRule::OneOther => 2,
            PluralRule::EastSlavic | PluralRule::Polish | PluralRule::Romanian => 3,
        }
    }

    /// Returns the zero-based form index for `n`, always `< form_count()`.
    pub fn select(self, n: u64) -> usize {
        let (n10, n100) = (n % 10, n % 100);
        match self {
            PluralRule::Invariant => 0,
            PluralRule::OneOther => usize::from(n != 1),
            PluralRule::EastSlavic => {
                if n10 == 1 && n100 != 11 {
                    0
                } else if (2..=4).contains(&n10) && !(12..=14).contains(&n100) {
                    1
                } else {
                    2
                }
            }
            PluralRule::Polish => {
                if n == 1 {
                    0
                } else if (2..=4).contains(&n10) && !(12..=14).contains(&n100) {
                    1
                } else {
                    2
                }
            }
            PluralRule::Romanian => {
                if n == 1 {
                    0
                } else if n == 0 || (1..=19).contains(&n100) {
                    1
                } else {
                    2
                }
            }
        }
    }
}

/// A supported language: identifier, native display name and plural rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub rule: PluralRule,
}

impl LanguageDescriptor {
    pub const fn form_count(&self) -> usize {
        self.rule.form_count()
    }
}

const fn lang(id: &'static str, name: &'static str, rule: PluralRule) -> LanguageDescriptor {
    LanguageDescriptor { id, name, rule }
}

/// Every language the engine knows about, sorted by identifier.
pub static LANGUAGES: [LanguageDescriptor; 20] = [
    lang("de_DE", "Deutsch", PluralRule::OneOther),
    lang("el_EL", "Ελληνικά", PluralRule::OneOther),
    lang("en_US", "English", PluralRule::OneOther),
    lang("es_ES", "Español", PluralRule::OneOther),
    lang("fi_FI", "Suomi", PluralRule::OneOther),
    lang("fr_FR", "Français", PluralRule::OneOther),
    lang("hi_IN", "हिन्दी", PluralRule::OneOther),
    lang("id_ID", "Bahasa Indonesia", PluralRule::Invariant),
    lang("it_IT", "Italiano", PluralRule::OneOther),
    lang("ja_JP", "日本語", PluralRule::Invariant),
    lang("nan_Latn_pehoeji", "Pe̍h-ōe-jī", PluralRule::Invariant),
    lang("nl_NL", "Nederlands", PluralRule::OneOther),
    lang("pl_PL", "Polski", PluralRule::Polish),
    lang("pt_BR", "Português Brasileiro", PluralRule::OneOther),
    lang("ro_RO", "Română", PluralRule::Romanian),
    lang("ru_RU", "Русский", PluralRule::EastSlavic),
    lang("tr_TR", "Türkçe", PluralRule::OneOther),
    lang("uk_UA", "Українська", PluralRule::EastSlavic),
    lang("zh_CN", "简体中文", PluralRule::Invariant),
    lang("zh_TW", "繁體中文", PluralRule::Invariant),
];

lazy_static! {
    static ref BY_ID: HashMap<&'static str, &'static LanguageDescriptor> =
        LANGUAGES.iter().map(|d| (d.id, d)).collect();

    /// Canonical BCP 47 form (`en-US`) → descriptor, for tags that are not
    /// spelled exactly like a table identifier.
    static ref BY_TAG: HashMap<String, &'static LanguageDescriptor> = LANGUAGES
        .iter()
        .filter_map(|d| canonical_tag(d.id).map(|tag| (tag, d)))
        .collect();
}

fn canonical_tag(language: &str) -> Option<String> {
    language
        .replace('_', "-")
        .parse::<LanguageIdentifier>()
        .ok()
        .map(|id| id.to_string())
}

/// Looks up the descriptor for `language`.
///
/// Exact identifiers (`pt_BR`) match directly; other spellings of the same
/// tag (`pt-BR`, `pt_br`) are normalized first.
pub fn descriptor(language: &str) -> Result<&'static LanguageDescriptor, Error> {
    if let Some(&found) = BY_ID.get(language) {
        return Ok(found);
    }
    canonical_tag(language)
        .and_then(|tag| BY_TAG.get(&tag).copied())
        .ok_or_else(|| Error::UnknownLanguage(language.to_string()))
}

/// Returns the number of plural forms declared for `language`.
pub fn form_count(language: &str) -> Result<usize, Error> {
    descriptor(language).map(LanguageDescriptor::form_count)
}

/// Returns the plural-form index `count` selects in `language`.
pub fn select_form(language: &str, count: u64) -> Result<usize, Error> {
    descriptor(language).map(|d| d.rule.select(count))
}

/// All supported languages, sorted by identifier.
pub fn available_languages() -> &'static [LanguageDescriptor] {
    &LANGUAGES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_form_russian() {
        assert_eq!(select_form("ru_RU", 1).unwrap(), 0);
        assert_eq!(select_form("ru_RU", 2).unwrap(), 1);
        assert_eq!(select_form("ru_RU", 5).unwrap(), 2);
        assert_eq!(select_form("ru_RU", 11).unwrap(), 2);
        assert_eq!(select_form("ru_RU", 12).unwrap(), 2);
        assert_eq!(select_form("ru_RU", 21).unwrap(), 0);
        assert_eq!(select_form("ru_RU", 22).unwrap(), 1);
        assert_eq!(select_form("ru_RU", 0).unwrap(), 2);
        assert_eq!(select_form("ru_RU", 111).unwrap(), 2);
    }

    #[test]
    fn test_select_form_english() {
        assert_eq!(select_form("en_US", 0).unwrap(), 1);
        assert_eq!(select_form("en_US", 1).unwrap(), 0);
        assert_eq!(select_form("en_US", 2).unwrap(), 1);
    }

    #[test]
    fn test_select_form_invariant() {
        for n in [0, 1, 2, 5, 11, 21, 100, u64::MAX] {
            assert_eq!(select_form("zh_CN", n).unwrap(), 0);
            assert_eq!(select_form("ja_JP", n).unwrap(), 0);
        }
    }

    #[test]
    fn test_select_form_polish() {
        assert_eq!(select_form("pl_PL", 1).unwrap(), 0);
        assert_eq!(select_form("pl_PL", 3).unwrap(), 1);
        assert_eq!(select_form("pl_PL", 13).unwrap(), 2);
        assert_eq!(select_form("pl_PL", 21).unwrap(), 2);
        assert_eq!(select_form("pl_PL", 24).unwrap(), 1);
    }

    #[test]
    fn test_select_form_romanian() {
        assert_eq!(select_form("ro_RO", 1).unwrap(), 0);
        assert_eq!(select_form("ro_RO", 0).unwrap(), 1);
        assert_eq!(select_form("ro_RO", 2).unwrap(), 1);
        assert_eq!(select_form("ro_RO", 19).unwrap(), 1);
        assert_eq!(select_form("ro_RO", 20).unwrap(), 2);
        assert_eq!(select_form("ro_RO", 100).unwrap(), 2);
        assert_eq!(select_form("ro_RO", 101).unwrap(), 1);
        assert_eq!(select_form("ro_RO", 120).unwrap(), 2);
    }

    #[test]
    fn test_unknown_language() {
        let err = select_form("xx_XX", 1).unwrap_err();
        assert!(matches!(err, Error::UnknownLanguage(ref l) if l == "xx_XX"));
        assert!(form_count("not a language").is_err());
    }

    #[test]
    fn test_descriptor_normalizes_tag() {
        assert_eq!(descriptor("en-US").unwrap().id, "en_US");
        assert_eq!(descriptor("pt_br").unwrap().id, "pt_BR");
        assert_eq!(descriptor("nan-Latn-pehoeji").unwrap().id, "nan_Latn_pehoeji");
        // Base language alone is not a registered identifier.
        assert!(descriptor("en").is_err());
    }

    #[test]
    fn test_form_counts() {
        assert_eq!(form_count("de_DE").unwrap(), 2);
        assert_eq!(form_count("id_ID").unwrap(), 1);
        assert_eq!(form_count("uk_UA").unwrap(), 3);
        assert_eq!(form_count("ro_RO").unwrap(), 3);
    }

    #[test]
    fn test_table_sorted_and_unique() {
        let ids: Vec<_> = available_languages().iter().map(|d| d.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(ids, sorted);
        assert!(ids.contains(&REFERENCE_LANGUAGE));
    }
}
