//! printf-style substitution slots in messages.
//!
//! Messages may carry slots such as `%s`, `%d`, `%v` or positional
//! `%2$s`; `%%` is a literal percent sign. This module fills slots with
//! caller arguments and extracts a slot "signature" so translations can be
//! compared against the reference language.

use std::fmt::Display;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref SLOT_REGEX: Regex = Regex::new(r"%%|%(?:([1-9][0-9]*)\$)?l{0,2}([a-zA-Z])").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderToken {
    pub index: Option<usize>,
    pub kind: char,
}

impl PlaceholderToken {
    pub fn to_signature(&self) -> String {
        match self.index {
            Some(i) => format!("{}${}", i, self.kind),
            None => format!("{}", self.kind),
        }
    }

    fn from_captures(caps: &Captures<'_>) -> Option<Self> {
        let kind = caps.get(2)?.as_str().chars().next()?;
        let index = caps.get(1).and_then(|m| m.as_str().parse().ok());
        Some(PlaceholderToken {
            index,
            kind: kind.to_ascii_lowercase(),
        })
    }
}

/// Extracts slot tokens from a message in occurrence order, ignoring `%%`.
pub fn extract_placeholders(input: &str) -> Vec<PlaceholderToken> {
    SLOT_REGEX
        .captures_iter(input)
        .filter_map(|caps| PlaceholderToken::from_captures(&caps))
        .collect()
}

/// Normalized slot signature, sorted so reordered positional slots compare
/// equal.
pub fn signature(input: &str) -> Vec<String> {
    let mut sig: Vec<String> = extract_placeholders(input)
        .iter()
        .map(PlaceholderToken::to_signature)
        .collect();
    sig.sort();
    sig
}

/// Fills the slots of `template` with `args`.
///
/// Sequential slots consume arguments left to right; positional slots
/// (`%2$s`) pick the 1-based argument. A slot without a matching argument
/// is left as written. `%%` becomes `%`.
pub fn fill(template: &str, args: &[&dyn Display]) -> String {
    let mut next = 0usize;
    SLOT_REGEX
        .replace_all(template, |caps: &Captures<'_>| {
            let Some(token) = PlaceholderToken::from_captures(caps) else {
                return "%".to_string();
            };
            let position = match token.index {
                Some(i) => i - 1,
                None => {
                    next += 1;
                    next - 1
                }
            };
            match args.get(position) {
                Some(arg) => arg.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_tokens() {
        let tokens = extract_placeholders("Hello %1$s, you have %2$d items and %s extra");
        assert_eq!(
            tokens.iter().map(|t| t.to_signature()).collect::<Vec<_>>(),
            vec!["1$s", "2$d", "s"]
        );
    }

    #[test]
    fn test_length_modifier_dropped() {
        assert_eq!(signature("%ld files"), vec!["d"]);
    }

    #[test]
    fn test_ignore_escaped_percent() {
        assert_eq!(signature("Discount: 50%% and value %d"), vec!["d"]);
    }

    #[test]
    fn test_signature_ignores_order() {
        assert_eq!(signature("%2$s by %1$s"), signature("%1$s by %2$s"));
        assert_ne!(signature("%s"), signature("%d"));
    }

    #[test]
    fn test_fill_sequential() {
        let out = fill("%d new entries in %s", &[&3, &"Feeds"]);
        assert_eq!(out, "3 new entries in Feeds");
    }

    #[test]
    fn test_fill_positional() {
        let out = fill("%2$s, %1$s", &[&"World", &"Hello"]);
        assert_eq!(out, "Hello, World");
    }

    #[test]
    fn test_fill_missing_argument_left_verbatim() {
        let out = fill("%s and %s", &[&"one"]);
        assert_eq!(out, "one and %s");
    }

    #[test]
    fn test_fill_escaped_percent() {
        let out = fill("100%% of %v", &[&"feeds"]);
        assert_eq!(out, "100% of feeds");
    }

    #[test]
    fn test_fill_without_slots() {
        assert_eq!(fill("plain text", &[&1]), "plain text");
    }
}
