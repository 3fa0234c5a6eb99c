//! loctag - BCP-47 / Unicode language tag parsing and locale extraction
//!
//! Decomposes language tags into language, script, region, variants, and
//! extensions per the Unicode LDML grammar, and extracts locales from the
//! places applications actually find them: HTTP headers, cookies, URLs,
//! and the process environment.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - [`parser`] - The tag parser and validator (the core)
//! - [`models`] - Parsed tag structures
//! - [`header`] - Accept-Language, negotiation, and cookie helpers
//! - [`resolver`] - URL path and query extraction
//! - [`detect`] - Environment locale detection
//! - [`error`] - Unified error type
//!
//! # Example
//!
//! ```
//! use loctag::parser::parse_locale_id;
//!
//! let locale = parse_locale_id("ja-JP-u-ca-japanese")?;
//! assert_eq!(locale.lang.language, "ja");
//! assert_eq!(locale.lang.region.as_deref(), Some("JP"));
//! assert!(locale.extension('u').is_some());
//! # Ok::<(), loctag::parser::ParseErrors>(())
//! ```

pub mod detect;
pub mod error;
pub mod header;
pub mod models;
pub mod parser;
pub mod resolver;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::detect::{env_locale, system_locale};
    pub use crate::error::{Error, ParseError, ParseErrorKind, ParseErrors, Result};
    pub use crate::header::{
        header_languages, header_locale, negotiate, parse_accept_language, LanguagePreference,
    };
    pub use crate::models::{Extension, KeyValue, UnicodeLanguageId, UnicodeLocaleId};
    pub use crate::parser::{parse_language_id, parse_locale_id, validate};
    pub use crate::resolver::{path_locale, query_locale, FirstSegment, PathLocaleParser};
}

// Direct re-exports for convenience
pub use models::{Extension, UnicodeLanguageId, UnicodeLocaleId};
pub use parser::{parse_language_id, parse_locale_id, validate};
