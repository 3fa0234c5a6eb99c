//! Locale extraction from HTTP headers
//!
//! Parses `Accept-Language` into a quality-ordered preference list, picks
//! the best supported tag for it, and reads/writes a locale cookie. All
//! helpers operate on [`axum::http::HeaderMap`] so they slot into any
//! handler that exposes request or response headers.
//!
//! Helpers come in pairs: the plain form returns [`Error`] on absent or
//! malformed input, the `try_` form logs and falls back to a
//! caller-supplied default.

use axum::http::header::{ACCEPT_LANGUAGE, COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue};
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::UnicodeLocaleId;
use crate::parser::parse_locale_id;

/// One entry of an `Accept-Language` header
#[derive(Debug, Clone, PartialEq)]
pub struct LanguagePreference {
    /// The language range as sent, e.g. `en-US` or `*`
    pub tag: String,
    /// RFC 4647 quality weight, clamped to 0.0..=1.0
    pub quality: f32,
}

/// Parse an `Accept-Language` header value into preferences ordered by
/// descending quality
///
/// Entries without a `q` parameter, or with one that does not parse as a
/// number, weigh 1.0. Empty entries are skipped. The sort is stable so
/// equal weights keep header order.
pub fn parse_accept_language(header: &str) -> Vec<LanguagePreference> {
    let mut preferences: Vec<LanguagePreference> = header
        .split(',')
        .filter_map(|entry| {
            let mut parts = entry.split(';');
            let tag = parts.next()?.trim();
            if tag.is_empty() {
                return None;
            }
            let mut quality = 1.0f32;
            for param in parts {
                if let Some((key, value)) = param.split_once('=') {
                    if key.trim() == "q" {
                        if let Ok(q) = value.trim().parse::<f32>() {
                            quality = q.clamp(0.0, 1.0);
                        }
                    }
                }
            }
            Some(LanguagePreference {
                tag: tag.to_string(),
                quality,
            })
        })
        .collect();
    preferences.sort_by(|a, b| {
        b.quality
            .partial_cmp(&a.quality)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    preferences
}

fn accept_language(headers: &HeaderMap) -> Result<&str> {
    headers
        .get(ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .ok_or(Error::MissingHeader("accept-language"))
}

/// The raw language ranges of the request's `Accept-Language` header,
/// ordered by descending quality
///
/// Wildcard entries are kept; tags are not validated here.
pub fn header_languages(headers: &HeaderMap) -> Result<Vec<String>> {
    let header = accept_language(headers)?;
    Ok(parse_accept_language(header)
        .into_iter()
        .map(|preference| preference.tag)
        .collect())
}

/// The most-preferred valid locale of the request's `Accept-Language`
/// header
///
/// Wildcards and tags that fail the grammar are skipped; if nothing
/// valid remains the first parse failure is returned.
pub fn header_locale(headers: &HeaderMap) -> Result<UnicodeLocaleId> {
    let header = accept_language(headers)?;
    let mut first_failure = None;
    for preference in parse_accept_language(header) {
        if preference.tag == "*" {
            continue;
        }
        match parse_locale_id(&preference.tag) {
            Ok(locale) => return Ok(locale),
            Err(errors) => {
                first_failure.get_or_insert(errors);
            }
        }
    }
    match first_failure {
        Some(errors) => Err(errors.into()),
        None => Err(Error::MissingHeader("accept-language")),
    }
}

/// Like [`header_locale`], but falls back to `default` on any failure
pub fn try_header_locale(headers: &HeaderMap, default: &UnicodeLocaleId) -> UnicodeLocaleId {
    match header_locale(headers) {
        Ok(locale) => locale,
        Err(error) => {
            debug!(%error, "falling back to default locale");
            default.clone()
        }
    }
}

/// Pick the best supported tag for an ordered preference list
///
/// Matching is tried in preference order: an exact case-insensitive tag
/// match wins, then a supported tag whose primary language equals the
/// preference's, and a `*` preference matches the first supported tag.
/// Returns `None` when nothing matches.
pub fn negotiate<'a>(preferences: &[LanguagePreference], supported: &[&'a str]) -> Option<&'a str> {
    for preference in preferences {
        if preference.tag == "*" {
            if let Some(first) = supported.first() {
                return Some(*first);
            }
            continue;
        }
        if let Some(exact) = supported
            .iter()
            .find(|candidate| candidate.eq_ignore_ascii_case(&preference.tag))
        {
            return Some(*exact);
        }
        let primary = preference
            .tag
            .split('-')
            .next()
            .unwrap_or(preference.tag.as_str());
        if let Some(by_language) = supported.iter().find(|candidate| {
            candidate
                .split('-')
                .next()
                .is_some_and(|lang| lang.eq_ignore_ascii_case(primary))
        }) {
            return Some(*by_language);
        }
    }
    None
}

/// Read a locale from the named cookie of the request's `Cookie` header
///
/// A present but invalid cookie value is a parse error, not an absence.
pub fn cookie_locale(headers: &HeaderMap, name: &str) -> Result<UnicodeLocaleId> {
    let header = headers
        .get(COOKIE)
        .and_then(|value| value.to_str().ok())
        .ok_or(Error::MissingHeader("cookie"))?;
    let value = header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
        .ok_or_else(|| Error::MissingCookie(name.to_string()))?;
    Ok(parse_locale_id(value)?)
}

/// Like [`cookie_locale`], but falls back to `default` on any failure
pub fn try_cookie_locale(
    headers: &HeaderMap,
    name: &str,
    default: &UnicodeLocaleId,
) -> UnicodeLocaleId {
    match cookie_locale(headers, name) {
        Ok(locale) => locale,
        Err(error) => {
            debug!(%error, cookie = name, "falling back to default locale");
            default.clone()
        }
    }
}

/// Append a `Set-Cookie` header carrying the locale under `name`
///
/// The cookie is path-wide (`Path=/`); expiry and other attributes are
/// left to the caller's cookie layer.
pub fn set_cookie_locale(
    headers: &mut HeaderMap,
    name: &str,
    locale: &UnicodeLocaleId,
) -> Result<()> {
    let cookie = format!("{name}={locale}; Path=/");
    let value =
        HeaderValue::from_str(&cookie).map_err(|_| Error::InvalidHeaderValue(cookie.clone()))?;
    headers.append(SET_COOKIE, value);
    Ok(())
}
