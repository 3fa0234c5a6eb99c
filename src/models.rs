//! Core data structures for parsed language tags
//!
//! All values here are transient, immutable parse results: constructed from
//! a single input string by [`crate::parser`], consumed immediately by the
//! caller, never persisted or mutated after construction.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A key with an optional hyphen-joined value, as found in `-u-` keywords
/// and `-t-` fields
pub type KeyValue = (String, Option<String>);

/// The parsed core of a language tag: `language[-script][-region][-variants]`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UnicodeLanguageId {
    /// Language subtag: 2-3 or 5-8 letters, or the literal `root`
    pub language: String,

    /// Script subtag: exactly 4 letters
    pub script: Option<String>,

    /// Region subtag: exactly 2 letters or exactly 3 digits
    pub region: Option<String>,

    /// Variant subtags in input order; duplicates are a parse error, never
    /// silently dropped
    pub variants: Vec<String>,
}

impl fmt::Display for UnicodeLanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)?;
        if let Some(script) = &self.script {
            write!(f, "-{script}")?;
        }
        if let Some(region) = &self.region {
            write!(f, "-{region}")?;
        }
        for variant in &self.variants {
            write!(f, "-{variant}")?;
        }
        Ok(())
    }
}

/// One extension record of a Unicode locale identifier
///
/// Each singleton letter may appear at most once per tag: one `u`, one `t`,
/// one `x`, and one per remaining letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Extension {
    /// `-u-` Unicode locale extension: attributes and keyword pairs
    #[serde(rename = "u")]
    Unicode {
        /// Bare 3-8 character modifier subtags, in input order
        attributes: Vec<String>,
        /// Keyword pairs, in input order; a key may carry no value
        keywords: Vec<KeyValue>,
    },

    /// `-t-` transformed content extension: optional source language plus
    /// tfield pairs
    #[serde(rename = "t")]
    Transformed {
        /// The embedded source language identifier, if present
        lang: Option<UnicodeLanguageId>,
        /// tkey/tvalue pairs, in input order
        fields: Vec<KeyValue>,
    },

    /// `-x-` private use extension
    #[serde(rename = "x")]
    PrivateUse {
        /// Hyphen-joined value chunks
        value: String,
    },

    /// Any other single-letter extension
    #[serde(rename = "other")]
    Other {
        /// The singleton letter (never `t`, `u`, or `x`)
        singleton: char,
        /// Hyphen-joined value chunks
        value: String,
    },
}

impl Extension {
    /// The singleton letter introducing this extension
    pub fn singleton(&self) -> char {
        match self {
            Self::Unicode { .. } => 'u',
            Self::Transformed { .. } => 't',
            Self::PrivateUse { .. } => 'x',
            Self::Other { singleton, .. } => *singleton,
        }
    }
}

fn write_key_values(f: &mut fmt::Formatter<'_>, pairs: &[KeyValue]) -> fmt::Result {
    for (key, value) in pairs {
        write!(f, "-{key}")?;
        if let Some(value) = value {
            write!(f, "-{value}")?;
        }
    }
    Ok(())
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unicode {
                attributes,
                keywords,
            } => {
                f.write_str("u")?;
                for attr in attributes {
                    write!(f, "-{attr}")?;
                }
                write_key_values(f, keywords)
            }
            Self::Transformed { lang, fields } => {
                f.write_str("t")?;
                if let Some(lang) = lang {
                    write!(f, "-{lang}")?;
                }
                write_key_values(f, fields)
            }
            Self::PrivateUse { value } => write!(f, "x-{value}"),
            Self::Other { singleton, value } => write!(f, "{singleton}-{value}"),
        }
    }
}

/// A full Unicode locale identifier: language id plus extension records in
/// input order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UnicodeLocaleId {
    /// The core language identifier
    pub lang: UnicodeLanguageId,

    /// Extension records, at most one per singleton letter
    pub extensions: Vec<Extension>,
}

impl UnicodeLocaleId {
    /// Look up an extension record by its singleton letter
    pub fn extension(&self, singleton: char) -> Option<&Extension> {
        self.extensions
            .iter()
            .find(|ext| ext.singleton() == singleton.to_ascii_lowercase())
    }
}

impl fmt::Display for UnicodeLocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lang)?;
        for ext in &self.extensions {
            write!(f, "-{ext}")?;
        }
        Ok(())
    }
}
