//! The per-language message catalog and its JSON parser.
//!
//! Translation data for one language is a flat JSON object. A string value
//! is a singular message; an array of strings is a plural message whose
//! elements are the plural forms in rule order:
//!
//! ```json
//! {
//!     "page.title": "Unread",
//!     "entry.count": ["%d entry", "%d entries"]
//! }
//! ```

use std::{
    collections::{BTreeMap, HashMap},
    io::Write,
};

use serde::{Deserialize, Serialize};

use crate::{error::Error, traits::Parser};

/// One raw value of the translation object, decided per key.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Message {
    Singular(String),
    Plural(Vec<String>),
}

#[derive(Serialize)]
#[serde(untagged)]
enum MessageRef<'a> {
    Singular(&'a str),
    Plural(&'a [String]),
}

/// Parsed singular and plural messages for a single language.
///
/// A catalog is immutable once parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    singulars: HashMap<String, String>,
    plurals: HashMap<String, Vec<String>>,
}

impl Catalog {
    /// Returns the singular message for `key`.
    pub fn singular(&self, key: &str) -> Option<&str> {
        self.singulars.get(key).map(String::as_str)
    }

    /// Returns all plural forms for `key`, in form-index order.
    pub fn plural(&self, key: &str) -> Option<&[String]> {
        self.plurals.get(key).map(Vec::as_slice)
    }

    /// Returns one plural form, or `None` if the key is absent or the index
    /// is out of range.
    pub fn plural_form(&self, key: &str, index: usize) -> Option<&str> {
        self.plural(key)
            .and_then(|forms| forms.get(index))
            .map(String::as_str)
    }

    pub fn singulars(&self) -> &HashMap<String, String> {
        &self.singulars
    }

    pub fn plurals(&self) -> &HashMap<String, Vec<String>> {
        &self.plurals
    }

    /// Total number of messages, singular and plural.
    pub fn len(&self) -> usize {
        self.singulars.len() + self.plurals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.singulars.is_empty() && self.plurals.is_empty()
    }
}

impl Parser for Catalog {
    fn from_str(s: &str) -> Result<Self, Error> {
        let raw: HashMap<String, Message> = serde_json::from_str(s)?;

        let mut catalog = Catalog::default();
        for (key, message) in raw {
            match message {
                Message::Singular(value) => {
                    catalog.singulars.insert(key, value);
                }
                Message::Plural(forms) => {
                    catalog.plurals.insert(key, forms);
                }
            }
        }

        tracing::debug!(
            singulars = catalog.singulars.len(),
            plurals = catalog.plurals.len(),
            "parsed catalog"
        );
        Ok(catalog)
    }

    /// Writes the catalog back as a JSON object with sorted keys.
    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        let mut sorted: BTreeMap<&str, MessageRef<'_>> = BTreeMap::new();
        for (key, value) in &self.singulars {
            sorted.insert(key, MessageRef::Singular(value));
        }
        for (key, forms) in &self.plurals {
            sorted.insert(key, MessageRef::Plural(forms));
        }
        serde_json::to_writer_pretty(&mut writer, &sorted)?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

/// Parses raw translation bytes for one language into a [`Catalog`].
///
/// Malformed input yields [`Error::Parse`] (or [`Error::Encoding`] for
/// undecodable bytes); no partially populated catalog is ever returned.
pub fn parse(bytes: &[u8]) -> Result<Catalog, Error> {
    Catalog::from_bytes(bytes)
}
