//! Character-class and length primitives for subtag grammar checks
//!
//! Every BCP-47 subtag class is defined by an ASCII character class plus an
//! enumerated set of valid lengths, so these helpers are used by all of the
//! stage parsers.

/// ASCII letter, either case
pub(crate) fn is_alpha(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

/// ASCII digit
pub(crate) fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// ASCII letter or digit
pub(crate) fn is_alphanum(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
}

/// Whether every character of `chunk` satisfies `pred`
///
/// An empty chunk vacuously matches; callers check emptiness first.
pub(crate) fn all_match(chunk: &str, pred: impl Fn(char) -> bool) -> bool {
    chunk.chars().all(pred)
}

/// Whether the chunk length is a member of the allowed set
pub(crate) fn length_in(chunk: &str, allowed: &[usize]) -> bool {
    allowed.contains(&chunk.len())
}

/// All-alphabetic chunk with a length in the allowed set
pub(crate) fn alpha_sized(chunk: &str, allowed: &[usize]) -> bool {
    length_in(chunk, allowed) && all_match(chunk, is_alpha)
}

/// All-alphanumeric chunk with a length in the given inclusive range
pub(crate) fn alphanum_ranged(chunk: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&chunk.len()) && all_match(chunk, is_alphanum)
}
