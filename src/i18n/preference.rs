use web_sys::Storage;

use super::Language;
use crate::config::LANGUAGE_STORAGE_KEY;
use crate::error::PageError;

/// Key-value storage the language preference lives in.
pub trait PreferenceBackend {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), PageError>;
}

/// `window.localStorage`, if the browser lets us have it.
pub struct BrowserStorage {
    storage: Option<Storage>,
}

impl BrowserStorage {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("local storage unavailable, language preference will not persist");
        }
        Self { storage }
    }
}

impl PreferenceBackend for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), PageError> {
        let storage = self.storage.as_ref().ok_or(PageError::StorageUnavailable)?;
        storage.set_item(key, value)?;
        Ok(())
    }
}

pub struct LanguagePreference<B> {
    backend: B,
}

impl<B: PreferenceBackend> LanguagePreference<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Stored language, or the default when nothing usable is stored.
    pub fn get(&self) -> Language {
        self.backend
            .read(LANGUAGE_STORAGE_KEY)
            .and_then(|code| Language::from_code(&code))
            .unwrap_or(Language::DEFAULT)
    }

    /// Persists `lang`. Callers reload the page afterwards; nothing is
    /// re-laid out in place.
    pub fn set(&mut self, lang: Language) -> Result<(), PageError> {
        self.backend.write(LANGUAGE_STORAGE_KEY, lang.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Direction;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryBackend {
        entries: HashMap<String, String>,
        read_only: bool,
    }

    impl PreferenceBackend for MemoryBackend {
        fn read(&self, key: &str) -> Option<String> {
            self.entries.get(key).cloned()
        }

        fn write(&mut self, key: &str, value: &str) -> Result<(), PageError> {
            if self.read_only {
                return Err(PageError::StorageUnavailable);
            }
            self.entries.insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[test]
    fn unset_preference_defaults_to_english() {
        let preference = LanguagePreference::new(MemoryBackend::default());
        assert_eq!(preference.get(), Language::En);
    }

    #[test]
    fn unsupported_stored_code_defaults_to_english() {
        let mut backend = MemoryBackend::default();
        backend.entries.insert("language".into(), "klingon".into());
        let preference = LanguagePreference::new(backend);
        assert_eq!(preference.get(), Language::En);
    }

    #[test]
    fn set_persists_under_language_key() {
        let mut preference = LanguagePreference::new(MemoryBackend::default());
        preference.set(Language::Ar).unwrap();
        assert_eq!(preference.backend.entries.get("language").map(String::as_str), Some("ar"));
        assert_eq!(preference.get(), Language::Ar);
    }

    #[test]
    fn reloaded_preference_drives_direction() {
        let mut preference = LanguagePreference::new(MemoryBackend::default());
        for lang in Language::ALL {
            preference.set(lang).unwrap();
            // A reload constructs a fresh store over the same storage
            let reloaded = LanguagePreference::new(MemoryBackend {
                entries: preference.backend.entries.clone(),
                read_only: false,
            });
            let expected = if lang == Language::Ar { Direction::Rtl } else { Direction::Ltr };
            assert_eq!(reloaded.get().direction(), expected);
        }
    }

    #[test]
    fn write_failure_is_reported() {
        let mut preference = LanguagePreference::new(MemoryBackend {
            read_only: true,
            ..Default::default()
        });
        assert!(matches!(preference.set(Language::Es), Err(PageError::StorageUnavailable)));
        assert_eq!(preference.get(), Language::En);
    }
}
