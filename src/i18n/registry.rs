//! Language registry: the fixed set of languages a job posting can be
//! authored in or displayed in.
//!
//! The registry is a lazily initialized singleton behind `OnceLock`. It never
//! changes after first access.

use std::sync::OnceLock;

/// Metadata for one supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 code (e.g., "en", "hi")
    pub code: &'static str,

    /// English name, also used in translation prompts (e.g., "Hindi")
    pub name: &'static str,

    /// Name in the language itself (e.g., "हिन्दी")
    pub native_name: &'static str,

    /// Default display and posting language (exactly one entry)
    pub is_canonical: bool,

    /// Whether the language can be selected
    pub enabled: bool,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global registry, initializing it on first call.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Look up a language by ISO code (case-insensitive).
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages
            .iter()
            .find(|lang| lang.code.eq_ignore_ascii_case(code))
    }

    /// Look up a language by English name (case-insensitive).
    pub fn get_by_name(&self, name: &str) -> Option<&LanguageConfig> {
        let name = name.trim();
        self.languages
            .iter()
            .find(|lang| lang.name.eq_ignore_ascii_case(name))
    }

    /// All enabled languages, in registry (selector) order.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// The canonical language.
    ///
    /// # Panics
    /// Panics if the registry does not define exactly one canonical language.
    pub fn canonical(&self) -> &LanguageConfig {
        let canonical_langs: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_canonical)
            .collect();

        match canonical_langs.len() {
            0 => panic!("No canonical language found in registry"),
            1 => canonical_langs[0],
            _ => panic!("Multiple canonical languages found in registry"),
        }
    }
}

fn lang(code: &'static str, name: &'static str, native_name: &'static str) -> LanguageConfig {
    LanguageConfig {
        code,
        name,
        native_name,
        is_canonical: false,
        enabled: true,
    }
}

/// Languages offered by the job board selectors, in display order.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            is_canonical: true,
            ..lang("en", "English", "English")
        },
        lang("hi", "Hindi", "हिन्दी"),
        lang("ta", "Tamil", "தமிழ்"),
        lang("te", "Telugu", "తెలుగు"),
        lang("kn", "Kannada", "ಕನ್ನಡ"),
        lang("ml", "Malayalam", "മലയാളം"),
        lang("bn", "Bengali", "বাংলা"),
        lang("mr", "Marathi", "मराठी"),
        lang("gu", "Gujarati", "ગુજરાતી"),
        lang("pa", "Punjabi", "ਪੰਜਾਬੀ"),
        lang("es", "Spanish", "Español"),
        lang("fr", "French", "Français"),
        lang("de", "German", "Deutsch"),
        lang("zh", "Mandarin", "普通话"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();
        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_registry_has_fourteen_languages() {
        assert_eq!(LanguageRegistry::get().list_enabled().len(), 14);
    }

    #[test]
    fn test_selector_order_starts_with_english_then_hindi() {
        let enabled = LanguageRegistry::get().list_enabled();
        assert_eq!(enabled[0].name, "English");
        assert_eq!(enabled[1].name, "Hindi");
        assert_eq!(enabled[13].name, "Mandarin");
    }

    #[test]
    fn test_get_by_name_is_case_insensitive() {
        let registry = LanguageRegistry::get();
        let config = registry.get_by_name("tamil").expect("Tamil should exist");
        assert_eq!(config.code, "ta");
        assert_eq!(config.native_name, "தமிழ்");
    }

    #[test]
    fn test_get_by_code() {
        let registry = LanguageRegistry::get();
        assert_eq!(registry.get_by_code("pa").map(|c| c.name), Some("Punjabi"));
        assert_eq!(registry.get_by_code("HI").map(|c| c.name), Some("Hindi"));
        assert!(registry.get_by_code("xx").is_none());
    }

    #[test]
    fn test_canonical_is_english() {
        let canonical = LanguageRegistry::get().canonical();
        assert_eq!(canonical.code, "en");
        assert!(canonical.is_canonical);
    }

    #[test]
    fn test_codes_are_unique() {
        let enabled = LanguageRegistry::get().list_enabled();
        let mut codes: Vec<_> = enabled.iter().map(|l| l.code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), enabled.len());
    }
}
