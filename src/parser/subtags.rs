//! Stage parsers for the `unicode_language_id` grammar
//!
//! The tag is split on `-` into chunks and threaded through four stages in
//! strict order: language, script, region, variants. Script and region are
//! optional; a chunk that does not match the current stage is declined and
//! left for the next one, except in terminal position where the stage
//! reports its typed error. Stage errors aggregate instead of aborting, so
//! the caller sees every problem with a tag at once.

use super::chars::{alpha_sized, alphanum_ranged, all_match, is_alpha, is_alphanum, is_digit, length_in};
use super::errors::ParseError;
use crate::models::UnicodeLanguageId;

/// Allowed language subtag lengths (2-3 or 5-8; 4 is reserved for scripts)
const LANGUAGE_LENGTHS: &[usize] = &[2, 3, 5, 6, 7, 8];

/// The literal language subtag accepted without length or class checks
const ROOT: &str = "root";

/// Whether stages in terminal position report errors or decline
///
/// `Partial` is used for the language identifier embedded in a `-t-`
/// extension, where trailing chunks legitimately belong to the tfield loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    Strict,
    Partial,
}

/// Forward-only cursor over the hyphen-split chunks of a tag
#[derive(Debug)]
pub(crate) struct Cursor<'a> {
    chunks: &'a [&'a str],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(chunks: &'a [&'a str]) -> Self {
        Self { chunks, pos: 0 }
    }

    /// The current chunk, without consuming it
    pub(crate) fn peek(&self) -> Option<&'a str> {
        self.chunks.get(self.pos).copied()
    }

    /// Consume the current chunk
    pub(crate) fn bump(&mut self) {
        if self.pos < self.chunks.len() {
            self.pos += 1;
        }
    }

    /// Whether the current chunk is the last one
    pub(crate) fn at_last(&self) -> bool {
        self.pos + 1 == self.chunks.len()
    }
}

/// A chunk that can only be a region: 2 letters or 3 digits
fn region_shaped(chunk: &str) -> bool {
    alpha_sized(chunk, &[2]) || (chunk.len() == 3 && all_match(chunk, is_digit))
}

/// A chunk matching the variant grammar: digit + 3 alphanumerics, or 5-8
/// alphanumerics
pub(crate) fn variant_shaped(chunk: &str) -> bool {
    if chunk.len() == 4 {
        let mut chars = chunk.chars();
        matches!(chars.next(), Some(first) if is_digit(first)) && chars.all(is_alphanum)
    } else {
        alphanum_ranged(chunk, 5, 8)
    }
}

/// A chunk matching the language subtag grammar (including `root`)
pub(crate) fn language_shaped(chunk: &str) -> bool {
    chunk == ROOT || alpha_sized(chunk, LANGUAGE_LENGTHS)
}

/// Parse the mandatory language subtag
///
/// `root` is special-cased and bypasses the length and class checks. A
/// length failure takes precedence over the character-class check. The
/// offending chunk is consumed on error so later stages can still run.
pub(crate) fn parse_language_subtag(
    cursor: &mut Cursor<'_>,
    errors: &mut Vec<ParseError>,
) -> Option<String> {
    let Some(chunk) = cursor.peek() else {
        errors.push(ParseError::MissingLanguage);
        return None;
    };
    if chunk.is_empty() {
        errors.push(ParseError::MissingLanguage);
        cursor.bump();
        return None;
    }
    if chunk == ROOT {
        cursor.bump();
        return Some(ROOT.to_string());
    }
    if !length_in(chunk, LANGUAGE_LENGTHS) {
        errors.push(ParseError::InvalidLanguageLength);
        cursor.bump();
        return None;
    }
    if !all_match(chunk, is_alpha) {
        errors.push(ParseError::MalformedLanguage);
        cursor.bump();
        return None;
    }
    cursor.bump();
    Some(chunk.to_string())
}

/// Parse the optional script subtag (exactly 4 letters)
///
/// A missing or empty chunk is not an error. A mismatching chunk that can
/// only belong to a later stage (region-shaped, or variant-shaped with a
/// digit) is declined and left unconsumed; otherwise, in terminal position
/// under [`Mode::Strict`], the stage reports a length or class error.
pub(crate) fn parse_script_subtag(
    cursor: &mut Cursor<'_>,
    mode: Mode,
    errors: &mut Vec<ParseError>,
) -> Option<String> {
    let chunk = cursor.peek()?;
    // Length-1 chunks are extension singletons, never scripts.
    if chunk.len() <= 1 {
        return None;
    }
    if alpha_sized(chunk, &[4]) {
        cursor.bump();
        return Some(chunk.to_string());
    }
    if region_shaped(chunk) || (variant_shaped(chunk) && !all_match(chunk, is_alpha)) {
        return None;
    }
    if mode == Mode::Strict && cursor.at_last() {
        if chunk.len() == 4 {
            errors.push(ParseError::MalformedScript);
        } else {
            errors.push(ParseError::InvalidScriptLength);
        }
        cursor.bump();
    }
    None
}

/// Classify a failed region candidate
///
/// Exact length is checked first, then character class. A right-shape,
/// wrong-class chunk (2 digits, or 3 letters) reports the length error,
/// because the other length is the valid alternative for that class.
fn region_error(chunk: &str) -> ParseError {
    match chunk.len() {
        2 if all_match(chunk, is_digit) => ParseError::InvalidRegionLength,
        2 => ParseError::MalformedRegion,
        3 if all_match(chunk, is_alpha) => ParseError::InvalidRegionLength,
        3 => ParseError::MalformedRegion,
        _ => ParseError::InvalidRegionLength,
    }
}

/// Parse the optional region subtag (2 letters or 3 digits)
///
/// Same decline rules as the script stage: a variant-shaped chunk belongs
/// to the variants stage, and a non-terminal mismatch is left for later
/// stages to report.
pub(crate) fn parse_region_subtag(
    cursor: &mut Cursor<'_>,
    mode: Mode,
    errors: &mut Vec<ParseError>,
) -> Option<String> {
    let chunk = cursor.peek()?;
    if chunk.len() <= 1 {
        return None;
    }
    if region_shaped(chunk) {
        cursor.bump();
        return Some(chunk.to_string());
    }
    if variant_shaped(chunk) {
        return None;
    }
    if mode == Mode::Strict && cursor.at_last() {
        errors.push(region_error(chunk));
        cursor.bump();
    }
    None
}

/// Greedily parse the variant sequence
///
/// Consumes chunks from the front for as long as each matches the variant
/// grammar; the first non-matching chunk belongs to the extensions and
/// stops the stage without error. An exact repeat of an accumulated variant
/// reports [`ParseError::DuplicateVariant`] and aborts the stage.
pub(crate) fn parse_variants(cursor: &mut Cursor<'_>, errors: &mut Vec<ParseError>) -> Vec<String> {
    let mut variants: Vec<String> = Vec::new();
    while let Some(chunk) = cursor.peek() {
        if !variant_shaped(chunk) {
            break;
        }
        if variants.iter().any(|seen| seen == chunk) {
            errors.push(ParseError::DuplicateVariant(chunk.to_string()));
            cursor.bump();
            break;
        }
        variants.push(chunk.to_string());
        cursor.bump();
    }
    variants
}

/// Run the four stages in order, aggregating every stage error
///
/// Construction proceeds even when a stage fails (the field stays omitted),
/// so the caller receives the composite error list rather than the first
/// failure.
pub(crate) fn parse_unicode_language_id(
    cursor: &mut Cursor<'_>,
    mode: Mode,
) -> (UnicodeLanguageId, Vec<ParseError>) {
    let mut errors = Vec::new();

    let language = parse_language_subtag(cursor, &mut errors);
    let script = parse_script_subtag(cursor, mode, &mut errors);
    let region = parse_region_subtag(cursor, mode, &mut errors);
    let variants = parse_variants(cursor, &mut errors);

    let id = UnicodeLanguageId {
        language: language.unwrap_or_default(),
        script,
        region,
        variants,
    };
    (id, errors)
}
