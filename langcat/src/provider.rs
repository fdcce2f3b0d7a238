//! Sources of raw translation bytes.
//!
//! The engine never decides where translation data lives. A [`Provider`]
//! hands back the bytes for one language identifier, and the registry
//! parses them.

use std::{
    borrow::Cow,
    collections::HashMap,
    io,
    path::{Path, PathBuf},
};

use crate::error::Error;

/// Supplies raw translation bytes for a language identifier.
pub trait Provider: Send + Sync {
    /// Returns the bytes for `language`, or [`Error::NotFound`] when the
    /// provider has no data for it.
    fn fetch(&self, language: &str) -> Result<Cow<'_, [u8]>, Error>;
}

/// Reads `<root>/<language>.json` from the file system.
#[derive(Debug, Clone)]
pub struct DirectoryProvider {
    root: PathBuf,
    extension: String,
}

impl DirectoryProvider {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            extension: String::from("json"),
        }
    }

    /// Uses a file extension other than `json`.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file holding `language`'s translations.
    pub fn path_for(&self, language: &str) -> PathBuf {
        self.root.join(format!("{}.{}", language, self.extension))
    }
}

impl Provider for DirectoryProvider {
    fn fetch(&self, language: &str) -> Result<Cow<'_, [u8]>, Error> {
        let path = self.path_for(language);
        match std::fs::read(&path) {
            Ok(bytes) => Ok(Cow::Owned(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(Error::not_found(language)),
            Err(e) => Err(Error::from(e)),
        }
    }
}

/// Holds translation bytes in memory, e.g. data embedded with `include_bytes!`.
#[derive(Debug, Clone, Default)]
pub struct MemoryProvider {
    sources: HashMap<String, Cow<'static, [u8]>>,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the bytes for `language`.
    pub fn with(mut self, language: impl Into<String>, bytes: impl Into<Cow<'static, [u8]>>) -> Self {
        self.insert(language, bytes);
        self
    }

    pub fn insert(&mut self, language: impl Into<String>, bytes: impl Into<Cow<'static, [u8]>>) {
        self.sources.insert(language.into(), bytes.into());
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.sources.keys().map(String::as_str)
    }
}

impl Provider for MemoryProvider {
    fn fetch(&self, language: &str) -> Result<Cow<'_, [u8]>, Error> {
        self.sources
            .get(language)
            .map(|bytes| Cow::Borrowed(bytes.as_ref()))
            .ok_or_else(|| Error::not_found(language))
    }
}
