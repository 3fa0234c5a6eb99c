//! Typed errors for the language tag parser
//!
//! Every grammar violation maps to one [`ParseError`] variant with a stable
//! numeric code and a fixed message; the codes are the only externally
//! visible "wire format" of the parser. The language-identifier stages
//! aggregate their errors into a [`ParseErrors`] list instead of failing
//! fast, so a caller sees every problem with a tag at once.

use thiserror::Error;

/// Classification of parse errors, used for handling strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// A required component is absent
    Missing,
    /// A component is present but has the wrong character class
    Malformed,
    /// A component is present, with the right character class but a
    /// disallowed length
    Length,
    /// A variant or singleton extension appears more than once
    Duplicate,
}

/// A single violation of the BCP-47 / Unicode language tag grammar
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The mandatory language subtag is absent or empty
    #[error("missing unicode language subtag")]
    MissingLanguage,

    /// Language subtag present but not 2-3 or 5-8 characters long
    #[error("unicode language subtag has invalid length")]
    InvalidLanguageLength,

    /// Language subtag with the right length but non-alphabetic content
    #[error("malformed unicode language subtag")]
    MalformedLanguage,

    /// Script subtag candidate that is not exactly 4 characters long
    #[error("unicode script subtag has invalid length")]
    InvalidScriptLength,

    /// 4-character script candidate with non-alphabetic content
    #[error("malformed unicode script subtag")]
    MalformedScript,

    /// Region subtag candidate with a length that matches neither the
    /// 2-letter nor the 3-digit form
    #[error("unicode region subtag has invalid length")]
    InvalidRegionLength,

    /// Region subtag candidate with mixed or wrong character content
    #[error("malformed unicode region subtag")]
    MalformedRegion,

    /// The same variant subtag appears twice
    #[error("duplicate unicode variant subtag '{0}'")]
    DuplicateVariant(String),

    /// Input left over after a complete language identifier
    #[error("unexpected subtag '{0}' after unicode language identifier")]
    UnexpectedSubtag(String),

    /// A chunk in extension position that is not a singleton letter, or an
    /// "other" extension with no value chunks
    #[error("malformed extension")]
    MalformedExtension,

    /// A singleton extension letter appears more than once
    #[error("there can only be one -{0}- extension")]
    DuplicateExtension(char),

    /// A `-u-` extension with neither attributes nor keywords
    #[error("malformed -u- unicode locale extension")]
    MalformedUnicodeExtension,

    /// A `-t-` extension with neither a tlang nor any tfield
    #[error("malformed -t- transformed extension")]
    MalformedTransformed,

    /// A tkey with no following tvalue chunk
    #[error("missing tvalue for tkey '{0}'")]
    MissingTValue(String),

    /// An `-x-` extension with no value chunks
    #[error("malformed -x- private use extension")]
    MalformedPrivateUse,
}

impl ParseError {
    /// Stable numeric code for this error
    pub fn code(&self) -> u8 {
        match self {
            Self::MissingLanguage => 1,
            Self::InvalidLanguageLength => 2,
            Self::MalformedLanguage => 3,
            Self::InvalidScriptLength => 4,
            Self::MalformedScript => 5,
            Self::InvalidRegionLength => 6,
            Self::MalformedRegion => 7,
            Self::DuplicateVariant(_) => 8,
            Self::UnexpectedSubtag(_) => 9,
            Self::MalformedExtension => 10,
            Self::DuplicateExtension(_) => 11,
            Self::MalformedUnicodeExtension => 12,
            Self::MalformedTransformed => 13,
            Self::MissingTValue(_) => 14,
            Self::MalformedPrivateUse => 15,
        }
    }

    /// Taxonomy bucket for this error
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            Self::MissingLanguage | Self::MissingTValue(_) => ParseErrorKind::Missing,
            Self::InvalidLanguageLength
            | Self::InvalidScriptLength
            | Self::InvalidRegionLength => ParseErrorKind::Length,
            Self::DuplicateVariant(_) | Self::DuplicateExtension(_) => ParseErrorKind::Duplicate,
            Self::MalformedLanguage
            | Self::MalformedScript
            | Self::MalformedRegion
            | Self::UnexpectedSubtag(_)
            | Self::MalformedExtension
            | Self::MalformedUnicodeExtension
            | Self::MalformedTransformed
            | Self::MalformedPrivateUse => ParseErrorKind::Malformed,
        }
    }
}

/// Ordered, non-empty list of parse errors for one tag
///
/// The subtag stages do not fail fast; each stage appends its error and
/// parsing continues, so the list preserves grammar order (language, script,
/// region, variants, extensions).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrors(Vec<ParseError>);

impl ParseErrors {
    /// Build from a collected error list
    ///
    /// Callers only construct this with at least one error; an empty list
    /// means the parse succeeded and no `ParseErrors` value exists.
    pub(crate) fn new(errors: Vec<ParseError>) -> Self {
        debug_assert!(!errors.is_empty());
        Self(errors)
    }

    /// The individual errors, in grammar order
    pub fn errors(&self) -> &[ParseError] {
        &self.0
    }

    /// The numeric codes, in grammar order
    pub fn codes(&self) -> Vec<u8> {
        self.0.iter().map(ParseError::code).collect()
    }

    /// The first error in grammar order
    pub fn first(&self) -> &ParseError {
        // Non-empty by construction; fall back to a static value rather
        // than panic if that invariant is ever broken.
        self.0.first().unwrap_or(&ParseError::MissingLanguage)
    }

    /// Number of errors
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with collection types
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseErrors {}

impl IntoIterator for ParseErrors {
    type Item = ParseError;
    type IntoIter = std::vec::IntoIter<ParseError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
