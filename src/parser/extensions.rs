//! Extension parsers for Unicode locale identifiers
//!
//! Handles the `-u-`, `-t-`, `-x-`, and other single-letter extensions per
//! TR35. Unlike the language identifier stages, extension errors are hard:
//! the first violation terminates the parse.

use super::chars::{alphanum_ranged, is_alpha, is_alphanum, is_digit};
use super::errors::ParseError;
use super::subtags::{language_shaped, parse_unicode_language_id, Cursor, Mode};
use crate::models::{Extension, KeyValue};

/// A tkey: a letter followed by a digit
fn tkey_shaped(chunk: &str) -> bool {
    let mut chars = chunk.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(first), Some(second), None) if is_alpha(first) && is_digit(second)
    )
}

/// A `-u-` keyword key: an alphanumeric followed by a letter
fn ukey_shaped(chunk: &str) -> bool {
    let mut chars = chunk.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(first), Some(second), None) if is_alphanum(first) && is_alpha(second)
    )
}

/// Parse every extension record from the remaining chunks
///
/// Dispatches on the singleton letter and enforces the singleton rule: a
/// second `u`, `t`, or `x` extension, or a second instance of the same
/// other letter, is a hard [`ParseError::DuplicateExtension`] rather than
/// being merged or overwritten. Records keep encounter order.
pub(crate) fn parse_extensions(cursor: &mut Cursor<'_>) -> Result<Vec<Extension>, ParseError> {
    let mut extensions: Vec<Extension> = Vec::new();
    let mut seen: Vec<char> = Vec::new();

    while let Some(chunk) = cursor.peek() {
        let mut chars = chunk.chars();
        let singleton = match (chars.next(), chars.next()) {
            (Some(first), None) if is_alpha(first) => first.to_ascii_lowercase(),
            _ => return Err(ParseError::MalformedExtension),
        };
        cursor.bump();

        if seen.contains(&singleton) {
            return Err(ParseError::DuplicateExtension(singleton));
        }
        seen.push(singleton);

        let extension = match singleton {
            'u' => parse_unicode_extension(cursor)?,
            't' => parse_transformed_extension(cursor)?,
            'x' => parse_private_use_extension(cursor)?,
            other => parse_other_extension(other, cursor)?,
        };
        extensions.push(extension);
    }

    Ok(extensions)
}

/// Parse a `-u-` extension body: attributes (3-8 alphanumerics) followed by
/// keyword entries (2-character key, optional hyphen-joined value chunks)
///
/// Zero attributes and zero keywords is malformed.
fn parse_unicode_extension(cursor: &mut Cursor<'_>) -> Result<Extension, ParseError> {
    let mut attributes: Vec<String> = Vec::new();
    while let Some(chunk) = cursor.peek() {
        if !alphanum_ranged(chunk, 3, 8) {
            break;
        }
        attributes.push(chunk.to_string());
        cursor.bump();
    }

    let mut keywords: Vec<KeyValue> = Vec::new();
    while let Some(chunk) = cursor.peek() {
        if !ukey_shaped(chunk) {
            break;
        }
        let key = chunk.to_string();
        cursor.bump();

        let mut values: Vec<&str> = Vec::new();
        while let Some(value) = cursor.peek() {
            if !alphanum_ranged(value, 3, 8) {
                break;
            }
            values.push(value);
            cursor.bump();
        }
        let value = if values.is_empty() {
            None
        } else {
            Some(values.join("-"))
        };
        keywords.push((key, value));
    }

    if attributes.is_empty() && keywords.is_empty() {
        return Err(ParseError::MalformedUnicodeExtension);
    }
    Ok(Extension::Unicode {
        attributes,
        keywords,
    })
}

/// Parse a `-t-` extension body: an optional embedded language identifier
/// followed by tfield entries (tkey plus one or more 3-8 alphanumeric
/// value chunks)
///
/// The embedded language id is only attempted when the next chunk matches
/// the language grammar, and it is parsed in partial mode so trailing
/// chunks stay available to the tfield loop. A tkey with no value chunk is
/// an error, as is a `-t-` with neither a tlang nor any tfield.
fn parse_transformed_extension(cursor: &mut Cursor<'_>) -> Result<Extension, ParseError> {
    let mut lang = None;
    if let Some(chunk) = cursor.peek() {
        if language_shaped(chunk) {
            let (id, errors) = parse_unicode_language_id(cursor, Mode::Partial);
            if let Some(error) = errors.into_iter().next() {
                return Err(error);
            }
            lang = Some(id);
        }
    }

    let mut fields: Vec<KeyValue> = Vec::new();
    while let Some(chunk) = cursor.peek() {
        if !tkey_shaped(chunk) {
            break;
        }
        let key = chunk.to_string();
        cursor.bump();

        let mut values: Vec<&str> = Vec::new();
        while let Some(value) = cursor.peek() {
            if !alphanum_ranged(value, 3, 8) {
                break;
            }
            values.push(value);
            cursor.bump();
        }
        if values.is_empty() {
            return Err(ParseError::MissingTValue(key));
        }
        fields.push((key, Some(values.join("-"))));
    }

    if lang.is_none() && fields.is_empty() {
        return Err(ParseError::MalformedTransformed);
    }
    Ok(Extension::Transformed { lang, fields })
}

/// Parse an `-x-` body: one or more 1-8 alphanumeric chunks, hyphen-joined
fn parse_private_use_extension(cursor: &mut Cursor<'_>) -> Result<Extension, ParseError> {
    let values = collect_value_chunks(cursor, 1, 8);
    if values.is_empty() {
        return Err(ParseError::MalformedPrivateUse);
    }
    Ok(Extension::PrivateUse {
        value: values.join("-"),
    })
}

/// Parse an other-singleton body: one or more 2-8 alphanumeric chunks,
/// hyphen-joined
fn parse_other_extension(
    singleton: char,
    cursor: &mut Cursor<'_>,
) -> Result<Extension, ParseError> {
    let values = collect_value_chunks(cursor, 2, 8);
    if values.is_empty() {
        return Err(ParseError::MalformedExtension);
    }
    Ok(Extension::Other {
        singleton,
        value: values.join("-"),
    })
}

fn collect_value_chunks<'a>(cursor: &mut Cursor<'a>, min: usize, max: usize) -> Vec<&'a str> {
    let mut values = Vec::new();
    while let Some(chunk) = cursor.peek() {
        if !alphanum_ranged(chunk, min, max) {
            break;
        }
        values.push(chunk);
        cursor.bump();
    }
    values
}
