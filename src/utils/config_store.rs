//! ConfigStore - Local Configuration Storage
//!
//! JSON preference files under the local data directory. The language
//! preference is written here synchronously before a reload is issued, so
//! the choice survives the teardown of all in-memory state.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::i18n::Language;

/// File name of the persisted language preference
pub const LOCALE_PREF_FILE: &str = "locale.json";

/// Persisted language preference
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocalePreference {
    /// Locale code, empty when no preference has been stored yet
    #[serde(default)]
    pub code: String,
}

impl LocalePreference {
    pub fn language(&self) -> Option<Language> {
        Language::from_code(&self.code)
    }
}

/// Get the application data directory
pub fn app_data_dir() -> Result<PathBuf> {
    let dir = dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not find local data directory"))?
        .join("converse-gui");

    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

/// Load a JSON config file
pub fn load_config<T: DeserializeOwned + Default>(filename: &str) -> Result<T> {
    let path = app_data_dir()?.join(filename);

    if !path.exists() {
        return Ok(T::default());
    }

    let content = fs::read_to_string(&path)?;
    let config: T = serde_json::from_str(&content)?;
    Ok(config)
}

/// Save a JSON config file
pub fn save_config<T: Serialize>(filename: &str, config: &T) -> Result<()> {
    let path = app_data_dir()?.join(filename);
    let content = serde_json::to_string_pretty(config)?;
    fs::write(&path, content)?;
    Ok(())
}

/// Persist the language preference. Must complete before navigation fires.
pub fn save_language(lang: Language) -> Result<()> {
    save_config(
        LOCALE_PREF_FILE,
        &LocalePreference {
            code: lang.code().to_string(),
        },
    )
}

/// Load the persisted language preference, if any
pub fn load_language() -> Option<Language> {
    load_config::<LocalePreference>(LOCALE_PREF_FILE)
        .ok()
        .and_then(|pref| pref.language())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_preference_round_trip() {
        let pref = LocalePreference {
            code: "fr".to_string(),
        };
        let json = serde_json::to_string(&pref).expect("serialize");
        let back: LocalePreference = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.language(), Some(Language::Fr));
    }

    #[test]
    fn test_empty_preference_has_no_language() {
        let pref: LocalePreference = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(pref.language(), None);
    }
}
