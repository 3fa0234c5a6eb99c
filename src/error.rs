//! Unified error handling for the loctag crate
//!
//! The parser reports [`ParseErrors`]; the adapter layers (header, cookie,
//! query, path, environment) add their own absence failures on top. This
//! module consolidates both into a single [`Error`] enum so helpers across
//! module boundaries share one `Result` type.
//!
//! Nothing here is fatal: every error is recoverable by the caller
//! substituting a default tag, which is exactly what the `try_*` helper
//! variants do.

use thiserror::Error;

// Re-export the parser errors for convenience
pub use crate::parser::errors::{ParseError, ParseErrorKind, ParseErrors};

/// Unified error type for the loctag crate
#[derive(Error, Debug)]
pub enum Error {
    /// The candidate tag failed the grammar; carries every violation found
    #[error("invalid language tag: {0}")]
    Tag(#[from] ParseErrors),

    /// A required header is absent or not readable as a string
    #[error("header '{0}' is missing or unreadable")]
    MissingHeader(&'static str),

    /// The named cookie was not found in the Cookie header
    #[error("cookie '{0}' not found")]
    MissingCookie(String),

    /// The named query parameter was not present in the URL
    #[error("query parameter '{0}' not found")]
    MissingQueryParam(String),

    /// The path strategy produced no locale segment
    #[error("no locale segment in path '{0}'")]
    MissingPathSegment(String),

    /// No usable locale in LC_ALL, LC_MESSAGES, or LANG
    #[error("no locale found in environment")]
    EnvLocaleNotFound,

    /// A value could not be encoded as an HTTP header
    #[error("value is not a valid HTTP header: {0}")]
    InvalidHeaderValue(String),
}

impl Error {
    /// Whether this error means the input was absent, as opposed to
    /// present but malformed
    ///
    /// Absence is the common fallback case for the `try_*` helpers;
    /// malformed input usually deserves a log line.
    pub fn is_absence(&self) -> bool {
        matches!(
            self,
            Self::MissingHeader(_)
                | Self::MissingCookie(_)
                | Self::MissingQueryParam(_)
                | Self::MissingPathSegment(_)
                | Self::EnvLocaleNotFound
        )
    }
}

/// Result type alias using the unified Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_locale_id;

    #[test]
    fn test_parse_errors_convert() {
        let parse_err = parse_locale_id("de-1901-1901").unwrap_err();
        let unified: Error = parse_err.into();
        assert!(matches!(unified, Error::Tag(_)));
        assert!(!unified.is_absence());
    }

    #[test]
    fn test_absence_classification() {
        assert!(Error::MissingCookie("locale".into()).is_absence());
        assert!(Error::EnvLocaleNotFound.is_absence());
        assert!(!Error::InvalidHeaderValue("\n".into()).is_absence());
    }

    #[test]
    fn test_display() {
        let err = Error::MissingQueryParam("locale".into());
        assert_eq!(err.to_string(), "query parameter 'locale' not found");
    }
}
