//! BCP-47 / Unicode language tag parsing and validation
//!
//! A recursive-descent parser over the LDML `unicode_language_id` grammar
//! and the `u`/`t`/`x`/other extensions. The whole-tag parse is a fixed
//! pipeline:
//!
//! ```text
//! Start -> Language -> Script -> Region -> Variants -> Extensions* -> End
//! ```
//!
//! Each arrow is taken only while chunks remain and the current stage's
//! grammar matches. The language identifier stages aggregate their errors
//! (see [`ParseErrors`]); extension errors are terminal. The parser is a
//! pure function: no I/O, no shared state, safe to call concurrently.
//!
//! # Example
//!
//! ```
//! use loctag::parser::parse_language_id;
//!
//! let id = parse_language_id("zh-Hans-CN")?;
//! assert_eq!(id.language, "zh");
//! assert_eq!(id.script.as_deref(), Some("Hans"));
//! assert_eq!(id.region.as_deref(), Some("CN"));
//! # Ok::<(), loctag::parser::ParseErrors>(())
//! ```

mod chars;
pub mod errors;
mod extensions;
mod subtags;

pub use errors::{ParseError, ParseErrorKind, ParseErrors};

use crate::models::{UnicodeLanguageId, UnicodeLocaleId};
use subtags::{Cursor, Mode};

/// Split a tag into its hyphen-delimited chunks
fn split_tag(tag: &str) -> Vec<&str> {
    tag.split('-').collect()
}

/// Parse a bare `unicode_language_id` (no extensions allowed)
///
/// Returns the structured breakdown, or the ordered list of every grammar
/// violation found. Trailing input after the language identifier is
/// reported as [`ParseError::UnexpectedSubtag`].
pub fn parse_language_id(tag: &str) -> Result<UnicodeLanguageId, ParseErrors> {
    let chunks = split_tag(tag);
    let mut cursor = Cursor::new(&chunks);
    let (id, mut errors) = subtags::parse_unicode_language_id(&mut cursor, Mode::Strict);
    if let Some(chunk) = cursor.peek() {
        errors.push(ParseError::UnexpectedSubtag(chunk.to_string()));
    }
    if errors.is_empty() {
        Ok(id)
    } else {
        Err(ParseErrors::new(errors))
    }
}

/// Parse a full Unicode locale identifier, extensions included
pub fn parse_locale_id(tag: &str) -> Result<UnicodeLocaleId, ParseErrors> {
    let chunks = split_tag(tag);
    let mut cursor = Cursor::new(&chunks);
    let (lang, mut errors) = subtags::parse_unicode_language_id(&mut cursor, Mode::Strict);

    let extensions = match extensions::parse_extensions(&mut cursor) {
        Ok(extensions) => extensions,
        Err(error) => {
            errors.push(error);
            Vec::new()
        }
    };

    if errors.is_empty() {
        Ok(UnicodeLocaleId { lang, extensions })
    } else {
        Err(ParseErrors::new(errors))
    }
}

/// Whether `tag` is a well-formed Unicode locale identifier
///
/// Attempts a full parse and swallows the structured error.
pub fn validate(tag: &str) -> bool {
    parse_locale_id(tag).is_ok()
}

impl std::str::FromStr for UnicodeLanguageId {
    type Err = ParseErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_language_id(s)
    }
}

impl std::str::FromStr for UnicodeLocaleId {
    type Err = ParseErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_locale_id(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Extension;

    #[test]
    fn test_language_only() {
        let id = parse_language_id("en").unwrap();
        assert_eq!(id.language, "en");
        assert_eq!(id.script, None);
        assert_eq!(id.region, None);
        assert!(id.variants.is_empty());
    }

    #[test]
    fn test_language_region() {
        let id = parse_language_id("en-US").unwrap();
        assert_eq!(id.language, "en");
        assert_eq!(id.script, None);
        assert_eq!(id.region.as_deref(), Some("US"));
        assert!(id.variants.is_empty());
    }

    #[test]
    fn test_language_script_region() {
        let id = parse_language_id("zh-Hans-CN").unwrap();
        assert_eq!(id.language, "zh");
        assert_eq!(id.script.as_deref(), Some("Hans"));
        assert_eq!(id.region.as_deref(), Some("CN"));
    }

    #[test]
    fn test_root() {
        let id = parse_language_id("root").unwrap();
        assert_eq!(id.language, "root");
        assert_eq!(id.script, None);
        assert_eq!(id.region, None);
    }

    #[test]
    fn test_empty_tag_is_missing_language() {
        let errors = parse_language_id("").unwrap_err();
        assert_eq!(errors.errors(), &[ParseError::MissingLanguage]);
    }

    #[test]
    fn test_duplicate_variant() {
        let errors = parse_language_id("de-1901-1901").unwrap_err();
        assert_eq!(
            errors.errors(),
            &[ParseError::DuplicateVariant("1901".into())]
        );
    }

    #[test]
    fn test_variants_ordered() {
        let id = parse_language_id("sl-rozaj-biske").unwrap();
        assert_eq!(id.variants, vec!["rozaj", "biske"]);
    }

    #[test]
    fn test_language_id_rejects_trailing_extension() {
        let errors = parse_language_id("en-US-u-ca").unwrap_err();
        assert_eq!(errors.errors(), &[ParseError::UnexpectedSubtag("u".into())]);
    }

    #[test]
    fn test_locale_id_without_extensions() {
        let locale = parse_locale_id("en-US").unwrap();
        assert_eq!(locale.lang.language, "en");
        assert!(locale.extensions.is_empty());
    }

    #[test]
    fn test_locale_id_with_every_extension_type() {
        let locale = parse_locale_id("en-US-u-ca-buddhist-t-en-us-h0-hybrid-x-foo").unwrap();
        assert_eq!(locale.lang.region.as_deref(), Some("US"));
        let singletons: Vec<char> = locale
            .extensions
            .iter()
            .map(Extension::singleton)
            .collect();
        assert_eq!(singletons, vec!['u', 't', 'x']);
        assert_eq!(locale.to_string(), "en-US-u-ca-buddhist-t-en-us-h0-hybrid-x-foo");
    }

    #[test]
    fn test_locale_id_duplicate_extension() {
        let errors = parse_locale_id("en-u-ca-buddhist-u-hc-h12").unwrap_err();
        assert_eq!(errors.errors(), &[ParseError::DuplicateExtension('u')]);
    }

    #[test]
    fn test_locale_id_aggregates_language_errors_with_extension_errors() {
        // Bad language subtag, then a malformed -u- extension.
        let errors = parse_locale_id("a1c4-u").unwrap_err();
        assert_eq!(
            errors.errors(),
            &[
                ParseError::InvalidLanguageLength,
                ParseError::MalformedUnicodeExtension
            ]
        );
    }

    #[test]
    fn test_empty_chunk_in_tag() {
        assert!(parse_locale_id("en--US").is_err());
        assert!(parse_locale_id("en-").is_err());
        assert!(parse_locale_id("-en").is_err());
    }

    #[test]
    fn test_validate() {
        for tag in [
            "en",
            "en-US",
            "zh-Hans-CN",
            "de-DE-1901",
            "root",
            "ja-JP-u-ca-japanese",
            "und-t-mul",
            "en-a-bbb-x-a",
        ] {
            assert!(validate(tag), "'{tag}' should validate");
        }
        for tag in ["", "e", "en-", "de-1901-1901", "en-u", "en-x", "1abc"] {
            assert!(!validate(tag), "'{tag}' should not validate");
        }
    }

    #[test]
    fn test_from_str() {
        let id: UnicodeLanguageId = "pt-BR".parse().unwrap();
        assert_eq!(id.region.as_deref(), Some("BR"));
        let locale: UnicodeLocaleId = "pt-BR-u-co-phonebk".parse().unwrap();
        assert_eq!(locale.extensions.len(), 1);
        assert!("pt--BR".parse::<UnicodeLocaleId>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for tag in ["en", "en-US", "zh-Hans-CN", "de-DE-1901", "sl-rozaj-biske"] {
            let id = parse_language_id(tag).unwrap();
            assert_eq!(id.to_string(), tag);
        }
    }
}
