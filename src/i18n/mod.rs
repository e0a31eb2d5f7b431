//! i18n - Internationalization Module
//!
//! Provides the fixed language set and simple translation lookups using a
//! static HashMap. Namespaces from the translation resources are folded into
//! the key prefix (`sidebar-`, `modal-`, `home-`, ...).

use std::collections::HashMap;
use std::sync::OnceLock;

use gpui::SharedString;

/// Supported display languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// English
    #[default]
    En,
    /// French
    Fr,
    /// Arabic
    Ar,
}

impl Language {
    /// Locale code used in navigation paths and persisted preferences
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
            Language::Ar => "ar",
        }
    }

    /// Native-script display label shown in the selector modal
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Fr => "Français",
            Language::Ar => "عربي",
        }
    }

    /// Parse a locale code back into a language
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en" => Some(Language::En),
            "fr" => Some(Language::Fr),
            "ar" => Some(Language::Ar),
            _ => None,
        }
    }

    /// All selectable languages, in modal display order
    pub fn all() -> &'static [Language] {
        &[Language::En, Language::Fr, Language::Ar]
    }
}

/// Resolve the language from the OS locale, if it maps onto the fixed set
pub fn system_language() -> Option<Language> {
    let locale = locale_config::Locale::user_default().to_string();
    // "fr-FR" / "fr_FR.UTF-8" -> "fr"
    let tag = locale
        .split(|c: char| c == '-' || c == '_' || c == '.')
        .next()
        .unwrap_or_default();
    Language::from_code(tag)
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, [&'static str; 3]>> = OnceLock::new();

/// Initialize translations (key -> [en, fr, ar])
fn init_translations() -> HashMap<&'static str, [&'static str; 3]> {
    let mut map = HashMap::new();

    // App
    map.insert("app-title", ["Converse", "Converse", "Converse"]);

    // Sidebar
    map.insert(
        "sidebar-change-language",
        ["Change Language", "Changer de langue", "تغيير اللغة"],
    );
    map.insert(
        "sidebar-settings",
        ["Settings", "Paramètres", "الإعدادات"],
    );

    // Language modal
    map.insert(
        "modal-available-languages",
        ["Available Languages", "Langues disponibles", "اللغات المتوفرة"],
    );
    map.insert(
        "modal-select-language",
        ["Select Language", "Sélectionner la langue", "اختر اللغة"],
    );

    // Home page
    map.insert(
        "home-welcome",
        ["Welcome to Converse", "Bienvenue sur Converse", "مرحبا بكم في كونفيرس"],
    );
    map.insert(
        "home-signed-out",
        ["Not signed in", "Non connecté", "غير مسجل الدخول"],
    );

    // Toasts
    map.insert(
        "toast-language-changed",
        ["Language updated", "Langue mise à jour", "تم تحديث اللغة"],
    );

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, [&'static str; 3]> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key for the given language
pub fn t(lang: Language, key: &str) -> SharedString {
    if let Some(entries) = translations().get(key) {
        let text = match lang {
            Language::En => entries[0],
            Language::Fr => entries[1],
            Language::Ar => entries[2],
        };
        SharedString::from(text)
    } else {
        // Fallback: return the key itself
        SharedString::from(key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), Some(*lang));
        }
        assert_eq!(Language::from_code("zz"), None);
    }

    #[test]
    fn test_lookup_per_language() {
        assert_eq!(t(Language::En, "sidebar-change-language"), "Change Language");
        assert_eq!(t(Language::Fr, "sidebar-change-language"), "Changer de langue");
        assert_eq!(t(Language::Ar, "sidebar-change-language"), "تغيير اللغة");
    }

    #[test]
    fn test_lookup_falls_back_to_key() {
        assert_eq!(t(Language::En, "missing-key"), "missing-key");
    }
}
