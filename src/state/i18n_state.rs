//! I18nState - Internationalization State

use crate::i18n::Language;

/// State for internationalization
#[derive(Debug, Clone)]
pub struct I18nState {
    /// Active display language for this window
    pub language: Language,
}

impl Default for I18nState {
    fn default() -> Self {
        Self {
            language: Language::En,
        }
    }
}

impl I18nState {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Set the active language
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_language() {
        let mut state = I18nState::default();
        assert_eq!(state.language, Language::En);
        state.set_language(Language::Ar);
        assert_eq!(state.language, Language::Ar);
    }
}
