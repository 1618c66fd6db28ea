//! Supported languages and the translation dictionary.
//!
//! The dictionary is a nested `language -> key -> text` map shipped as a JSON
//! asset. It is only ever read; lookups fall back to English.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::PageError;

pub mod preference;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    En,
    Ar,
    Es,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Ar, Language::Es];

    /// Used when nothing is stored and as the lookup fallback.
    pub const DEFAULT: Language = Language::En;

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
            Language::Es => "es",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        let code = code.trim();
        Language::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code))
    }

    pub fn label(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ar => "العربية",
            Language::Es => "Español",
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Language::Ar => Direction::Rtl,
            _ => Direction::Ltr,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct Translations {
    resources: HashMap<String, HashMap<String, String>>,
}

impl Translations {
    pub fn from_json(json: &str) -> Result<Self, PageError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Text for `key` in `lang`, or in the default language when `lang`
    /// lacks it. `None` when no language has the key.
    pub fn lookup(&self, lang: Language, key: &str) -> Option<&str> {
        self.lookup_exact(lang, key)
            .or_else(|| self.lookup_exact(Language::DEFAULT, key))
    }

    fn lookup_exact(&self, lang: Language, key: &str) -> Option<&str> {
        self.resources
            .get(lang.code())
            .and_then(|entries| entries.get(key))
            .map(String::as_str)
    }

    pub fn has_language(&self, lang: Language) -> bool {
        self.resources.contains_key(lang.code())
    }
}
