//! All error types for the langcat crate.
//!
//! Errors are `Clone` so that a memoized load failure can be handed to every
//! caller of [`crate::Registry::get`]; non-cloneable sources are shared
//! behind an `Arc`.

use std::sync::Arc;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(Arc<serde_json::Error>),

    #[error("encoding error: {0}")]
    Encoding(String),

    #[error("unknown language `{0}`")]
    UnknownLanguage(String),

    #[error("no translation data found for language `{0}`")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(Arc<std::io::Error>),

    #[error("validation error: {0}")]
    Validation(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(Arc::new(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(Arc::new(err))
    }
}

impl Error {
    /// Creates a new validation error
    pub fn validation_error(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }

    /// Creates a new not-found error for a language
    pub fn not_found(language: impl Into<String>) -> Self {
        Error::NotFound(language.into())
    }

    /// Whether this error came from malformed translation data.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Error::Parse(_) | Error::Encoding(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_parse_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("{ invalid json }").unwrap_err();
        let error = Error::from(json_error);
        assert!(error.to_string().contains("parse error"));
        assert!(error.is_parse_error());
    }

    #[test]
    fn test_io_error() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let error = Error::from(io_error);
        assert!(error.to_string().contains("I/O error"));
        assert!(!error.is_parse_error());
    }

    #[test]
    fn test_unknown_language_error() {
        let error = Error::UnknownLanguage("xx_XX".to_string());
        assert_eq!(error.to_string(), "unknown language `xx_XX`");
    }

    #[test]
    fn test_not_found_error() {
        let error = Error::not_found("fr_FR");
        assert_eq!(
            error.to_string(),
            "no translation data found for language `fr_FR`"
        );
    }

    #[test]
    fn test_validation_error() {
        let error = Error::validation_error("Validation failed");
        assert_eq!(error.to_string(), "validation error: Validation failed");
    }

    #[test]
    fn test_clone_shares_source() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = Error::from(json_error);
        let cloned = error.clone();
        assert_eq!(error.to_string(), cloned.to_string());
    }

    #[test]
    fn test_error_debug() {
        let error = Error::UnknownLanguage("test".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("UnknownLanguage"));
        assert!(debug.contains("test"));
    }
}
