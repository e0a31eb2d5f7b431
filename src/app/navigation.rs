//! Navigation - Hard Navigation Targets
//!
//! Path derivation for the language reload. A navigation here is a full
//! window reload, not an in-memory page switch: the handler tears down the
//! window and every global entity before reopening at the target path.

use crate::error::{Error, Result};
use crate::i18n::Language;

/// Derive the navigation path for a language ("/" + code)
pub fn path_for(lang: Language) -> String {
    format!("/{}", lang.code())
}

/// Resolve the language a navigation path points at
pub fn language_for_path(path: &str) -> Result<Language> {
    let code = path.strip_prefix('/').unwrap_or(path);
    Language::from_code(code).ok_or_else(|| Error::UnknownPath {
        path: path.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_for_language() {
        assert_eq!(path_for(Language::En), "/en");
        assert_eq!(path_for(Language::Fr), "/fr");
        assert_eq!(path_for(Language::Ar), "/ar");
    }

    #[test]
    fn test_path_round_trip() {
        for lang in Language::all() {
            let path = path_for(*lang);
            assert_eq!(language_for_path(&path).expect("resolve"), *lang);
        }
    }

    #[test]
    fn test_unknown_path_is_an_error() {
        assert!(language_for_path("/de").is_err());
        assert!(language_for_path("").is_err());
    }
}
