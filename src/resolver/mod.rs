//! Locale extraction from URLs
//!
//! Reads a locale from a URL path segment or query parameter. The path
//! side takes an explicit [`PathLocaleParser`] strategy argument instead
//! of a process-wide configurable default, so two call sites with
//! different URL layouts never fight over shared state.

use tracing::debug;
use url::Url;

use crate::error::{Error, Result};
use crate::models::UnicodeLocaleId;
use crate::parser::parse_locale_id;

/// Query parameter consulted when the caller does not name one
pub const DEFAULT_QUERY_PARAM: &str = "locale";

/// Strategy for picking the locale-bearing segment out of a URL path
pub trait PathLocaleParser {
    /// The candidate locale segment for `path`, or `None` when the path
    /// carries no locale under this layout
    fn locale_segment<'a>(&self, path: &'a str) -> Option<&'a str>;
}

/// The default layout: the locale is the first path segment, as in
/// `/en-US/about`
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstSegment;

impl PathLocaleParser for FirstSegment {
    fn locale_segment<'a>(&self, path: &'a str) -> Option<&'a str> {
        path.split('/').find(|segment| !segment.is_empty())
    }
}

/// Read a locale from the URL path using the given strategy
///
/// A segment the strategy produces but the grammar rejects is a parse
/// error, not an absence.
pub fn path_locale(url: &Url, strategy: &impl PathLocaleParser) -> Result<UnicodeLocaleId> {
    let segment = strategy
        .locale_segment(url.path())
        .ok_or_else(|| Error::MissingPathSegment(url.path().to_string()))?;
    Ok(parse_locale_id(segment)?)
}

/// Like [`path_locale`], but falls back to `default` on any failure
pub fn try_path_locale(
    url: &Url,
    strategy: &impl PathLocaleParser,
    default: &UnicodeLocaleId,
) -> UnicodeLocaleId {
    match path_locale(url, strategy) {
        Ok(locale) => locale,
        Err(error) => {
            debug!(%error, path = url.path(), "falling back to default locale");
            default.clone()
        }
    }
}

/// Read a locale from the named query parameter
///
/// The first occurrence of `param` wins when the query repeats it.
pub fn query_locale(url: &Url, param: &str) -> Result<UnicodeLocaleId> {
    let value = url
        .query_pairs()
        .find(|(key, _)| key == param)
        .map(|(_, value)| value.into_owned())
        .ok_or_else(|| Error::MissingQueryParam(param.to_string()))?;
    Ok(parse_locale_id(&value)?)
}

/// Like [`query_locale`], but falls back to `default` on any failure
pub fn try_query_locale(url: &Url, param: &str, default: &UnicodeLocaleId) -> UnicodeLocaleId {
    match query_locale(url, param) {
        Ok(locale) => locale,
        Err(error) => {
            debug!(%error, param, "falling back to default locale");
            default.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_first_segment_strategy() {
        assert_eq!(FirstSegment.locale_segment("/en-US/about"), Some("en-US"));
        assert_eq!(FirstSegment.locale_segment("/ja"), Some("ja"));
        assert_eq!(FirstSegment.locale_segment("/"), None);
        assert_eq!(FirstSegment.locale_segment(""), None);
    }

    #[test]
    fn test_path_locale() {
        let locale = path_locale(&url("https://example.com/en-US/about"), &FirstSegment).unwrap();
        assert_eq!(locale.to_string(), "en-US");
    }

    #[test]
    fn test_path_locale_empty_path() {
        let result = path_locale(&url("https://example.com/"), &FirstSegment);
        assert!(matches!(result, Err(Error::MissingPathSegment(_))));
    }

    #[test]
    fn test_path_locale_invalid_segment() {
        let result = path_locale(&url("https://example.com/static/app.js"), &FirstSegment);
        assert!(matches!(result, Err(Error::Tag(_))));
    }

    #[test]
    fn test_custom_strategy() {
        // Layout with a version prefix: /v2/<locale>/...
        struct SecondSegment;
        impl PathLocaleParser for SecondSegment {
            fn locale_segment<'a>(&self, path: &'a str) -> Option<&'a str> {
                path.split('/').filter(|s| !s.is_empty()).nth(1)
            }
        }
        let locale =
            path_locale(&url("https://example.com/v2/fr-CA/about"), &SecondSegment).unwrap();
        assert_eq!(locale.to_string(), "fr-CA");
    }

    #[test]
    fn test_try_path_locale_fallback() {
        let default: UnicodeLocaleId = "en".parse().unwrap();
        let locale = try_path_locale(&url("https://example.com/"), &FirstSegment, &default);
        assert_eq!(locale, default);
    }

    #[test]
    fn test_query_locale() {
        let locale = query_locale(&url("https://example.com/?locale=ja"), "locale").unwrap();
        assert_eq!(locale.to_string(), "ja");
    }

    #[test]
    fn test_query_locale_first_occurrence_wins() {
        let locale =
            query_locale(&url("https://example.com/?locale=ja&locale=ko"), "locale").unwrap();
        assert_eq!(locale.to_string(), "ja");
    }

    #[test]
    fn test_query_locale_missing_param() {
        let result = query_locale(&url("https://example.com/?lang=ja"), DEFAULT_QUERY_PARAM);
        assert!(matches!(result, Err(Error::MissingQueryParam(_))));
    }

    #[test]
    fn test_try_query_locale_fallback() {
        let default: UnicodeLocaleId = "en-US".parse().unwrap();
        let locale = try_query_locale(&url("https://example.com/?locale=bogus--"), "locale", &default);
        assert_eq!(locale, default);
    }
}
