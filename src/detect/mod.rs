//! Locale detection from the process environment
//!
//! POSIX systems advertise the user's locale through `LC_ALL`,
//! `LC_MESSAGES`, and `LANG`, in that priority order. The values use the
//! POSIX spelling (`en_US.UTF-8`, `sr_RS@latin`), which is normalized to
//! the BCP-47 hyphenated form before validation.

use tracing::debug;

use crate::error::{Error, Result};
use crate::models::UnicodeLocaleId;
use crate::parser::parse_locale_id;

/// Environment variables consulted, highest priority first
pub const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Normalize a POSIX locale string to a BCP-47 candidate
///
/// Strips the `@modifier` and `.codeset` suffixes and swaps `_` for `-`.
/// The `C` and `POSIX` locales name no language, so they normalize to
/// nothing, as does an empty value.
pub fn normalize_posix(value: &str) -> Option<String> {
    let value = value.split('@').next().unwrap_or(value);
    let value = value.split('.').next().unwrap_or(value);
    let value = value.trim();
    if value.is_empty() || value == "C" || value == "POSIX" {
        return None;
    }
    Some(value.replace('_', "-"))
}

/// The first non-empty locale value in the environment, normalized but
/// not yet validated
pub fn system_locale() -> Option<String> {
    for var in LOCALE_VARS {
        if let Ok(value) = std::env::var(var) {
            if let Some(normalized) = normalize_posix(&value) {
                debug!(var, value = %normalized, "detected system locale");
                return Some(normalized);
            }
        }
    }
    None
}

/// The environment's locale, validated through the tag grammar
pub fn env_locale() -> Result<UnicodeLocaleId> {
    let candidate = system_locale().ok_or(Error::EnvLocaleNotFound)?;
    Ok(parse_locale_id(&candidate)?)
}

/// Like [`env_locale`], but falls back to `default` on any failure
pub fn try_env_locale(default: &UnicodeLocaleId) -> UnicodeLocaleId {
    match env_locale() {
        Ok(locale) => locale,
        Err(error) => {
            debug!(%error, "falling back to default locale");
            default.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_locale_vars() {
        for var in LOCALE_VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_normalize_posix() {
        assert_eq!(normalize_posix("en_US.UTF-8"), Some("en-US".into()));
        assert_eq!(normalize_posix("sr_RS@latin"), Some("sr-RS".into()));
        assert_eq!(normalize_posix("ja_JP.eucJP"), Some("ja-JP".into()));
        assert_eq!(normalize_posix("de"), Some("de".into()));
        assert_eq!(normalize_posix("C"), None);
        assert_eq!(normalize_posix("C.UTF-8"), None);
        assert_eq!(normalize_posix("POSIX"), None);
        assert_eq!(normalize_posix(""), None);
    }

    #[test]
    #[serial]
    fn test_lc_all_wins() {
        clear_locale_vars();
        std::env::set_var("LANG", "de_DE.UTF-8");
        std::env::set_var("LC_MESSAGES", "fr_FR.UTF-8");
        std::env::set_var("LC_ALL", "ja_JP.UTF-8");
        assert_eq!(system_locale().as_deref(), Some("ja-JP"));
        clear_locale_vars();
    }

    #[test]
    #[serial]
    fn test_lang_is_last_resort() {
        clear_locale_vars();
        std::env::set_var("LANG", "en_US.UTF-8");
        assert_eq!(system_locale().as_deref(), Some("en-US"));
        clear_locale_vars();
    }

    #[test]
    #[serial]
    fn test_posix_value_is_skipped() {
        clear_locale_vars();
        std::env::set_var("LC_ALL", "C");
        std::env::set_var("LANG", "ko_KR.UTF-8");
        assert_eq!(system_locale().as_deref(), Some("ko-KR"));
        clear_locale_vars();
    }

    #[test]
    #[serial]
    fn test_env_locale_missing() {
        clear_locale_vars();
        assert!(matches!(env_locale(), Err(Error::EnvLocaleNotFound)));
        let default: UnicodeLocaleId = "en".parse().unwrap();
        assert_eq!(try_env_locale(&default), default);
    }

    #[test]
    #[serial]
    fn test_env_locale_validates() {
        clear_locale_vars();
        std::env::set_var("LC_ALL", "zh_Hans_CN.UTF-8");
        let locale = env_locale().unwrap();
        assert_eq!(locale.to_string(), "zh-Hans-CN");
        clear_locale_vars();
    }
}
