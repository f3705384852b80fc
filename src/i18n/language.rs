//! Language type: a validated handle onto a registry entry.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated language.
///
/// Only enabled registry languages can be constructed, so every `Language`
/// in the program resolves to a `LanguageConfig`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "hi")
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };
    pub const HINDI: Language = Language { code: "hi" };
    pub const TAMIL: Language = Language { code: "ta" };
    pub const SPANISH: Language = Language { code: "es" };

    /// Create a Language from an ISO 639-1 code.
    pub fn from_code(code: &str) -> Result<Language> {
        match LanguageRegistry::get().get_by_code(code) {
            Some(config) if config.enabled => Ok(Language { code: config.code }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Create a Language from its English name ("Hindi").
    pub fn from_name(name: &str) -> Result<Language> {
        match LanguageRegistry::get().get_by_name(name) {
            Some(config) if config.enabled => Ok(Language { code: config.code }),
            Some(_) => bail!("Language '{}' is not enabled", name),
            None => bail!("Unknown language: '{}'", name),
        }
    }

    /// Accept either an English name or an ISO code, name first.
    pub fn parse(value: &str) -> Result<Language> {
        Self::from_name(value).or_else(|_| Self::from_code(value.trim()))
    }

    /// The default display and posting language.
    pub fn canonical() -> Language {
        Language {
            code: LanguageRegistry::get().canonical().code,
        }
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Full registry configuration for this language.
    ///
    /// # Panics
    /// Panics if the code is missing from the registry, which cannot happen
    /// for a `Language` built through `from_code`, `from_name` or a constant.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// English name, used in prompts and in the JSON API.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::canonical()
    }
}

impl fmt::Debug for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Language({})", self.code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Language::parse(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_resolve() {
        assert_eq!(Language::ENGLISH.name(), "English");
        assert_eq!(Language::HINDI.name(), "Hindi");
        assert_eq!(Language::TAMIL.name(), "Tamil");
        assert_eq!(Language::SPANISH.native_name(), "Español");
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Language::from_name("Hindi").ok(), Some(Language::HINDI));
        assert_eq!(Language::from_name(" english ").ok(), Some(Language::ENGLISH));
    }

    #[test]
    fn test_from_name_unknown() {
        let err = Language::from_name("Klingon").unwrap_err();
        assert!(err.to_string().contains("Unknown language"));
    }

    #[test]
    fn test_from_code_unknown() {
        assert!(Language::from_code("xx").is_err());
        assert!(Language::from_code("").is_err());
    }

    #[test]
    fn test_parse_accepts_name_or_code() {
        assert_eq!(Language::parse("Tamil").ok(), Some(Language::TAMIL));
        assert_eq!(Language::parse("ta").ok(), Some(Language::TAMIL));
        assert!(Language::parse("Elvish").is_err());
    }

    #[test]
    fn test_canonical_is_default() {
        assert_eq!(Language::default(), Language::ENGLISH);
        assert!(Language::canonical().is_canonical());
        assert!(!Language::HINDI.is_canonical());
    }

    #[test]
    fn test_serializes_as_name() {
        let json = serde_json::to_string(&Language::HINDI).expect("Should serialize");
        assert_eq!(json, "\"Hindi\"");
    }

    #[test]
    fn test_deserializes_from_name_or_code() {
        let by_name: Language = serde_json::from_str("\"Marathi\"").expect("name");
        let by_code: Language = serde_json::from_str("\"mr\"").expect("code");
        assert_eq!(by_name, by_code);
        assert!(serde_json::from_str::<Language>("\"Latin\"").is_err());
    }

    #[test]
    fn test_debug_and_display() {
        assert_eq!(format!("{:?}", Language::TAMIL), "Language(ta)");
        assert_eq!(Language::TAMIL.to_string(), "Tamil");
    }
}
