//! Translation cache keyed by (job id, target language).
//!
//! Entries are inserted whole, so a key resolves to a complete projection or
//! to nothing. An optional capacity evicts the least recently written entries,
//! skipping those of the protected (displayed) language.

use crate::i18n::Language;
use crate::store::JobId;
use lru::LruCache;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Translated copy of a posting's displayable fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslatedProjection {
    pub title: String,
    pub location: String,
    pub description: String,
}

pub type CacheKey = (JobId, Language);

pub struct TranslationCache {
    /// Ordered most recently written first
    entries: LruCache<CacheKey, TranslatedProjection>,
    capacity: Option<usize>,
    /// Language whose entries are never evicted (the one on screen)
    protected: Option<Language>,
}

impl fmt::Debug for TranslationCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslationCache")
            .field("len", &self.entries.len())
            .field("capacity", &self.capacity)
            .field("protected", &self.protected)
            .finish()
    }
}

impl Default for TranslationCache {
    fn default() -> Self {
        Self::new()
    }
}

impl TranslationCache {
    /// Unbounded cache.
    pub fn new() -> Self {
        Self {
            entries: LruCache::unbounded(),
            capacity: None,
            protected: None,
        }
    }

    /// Cache holding at most `capacity` projections. Zero means unbounded.
    ///
    /// Entries for the protected language do not count towards eviction, so
    /// the cache may exceed `capacity` when that language alone needs more.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: (capacity > 0).then_some(capacity),
            ..Self::new()
        }
    }

    /// Projection of job `id` in `lang`, if one has been merged.
    pub fn get(&self, id: JobId, lang: Language) -> Option<&TranslatedProjection> {
        self.entries.peek(&(id, lang))
    }

    /// Whether a projection exists for the key.
    pub fn contains(&self, id: JobId, lang: Language) -> bool {
        self.entries.contains(&(id, lang))
    }

    /// Exempt `language` from eviction, releasing any previous protection.
    pub fn protect(&mut self, language: Language) {
        if self.protected != Some(language) {
            self.protected = Some(language);
            self.evict_to_capacity();
        }
    }

    /// Merge entries, overwriting existing keys.
    pub fn put_many<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (CacheKey, TranslatedProjection)>,
    {
        for (key, projection) in entries {
            self.entries.put(key, projection);
            self.evict_to_capacity();
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn evict_to_capacity(&mut self) {
        let Some(capacity) = self.capacity else {
            return;
        };
        let protected = self.protected;
        while self.entries.len() > capacity {
            // Oldest write first; protected entries are skipped.
            let oldest = self
                .entries
                .iter()
                .rev()
                .map(|(key, _)| *key)
                .find(|(_, lang)| Some(*lang) != protected);
            let Some(key) = oldest else {
                break;
            };
            debug!(job_id = key.0, language = %key.1, "Evicting cached translation");
            self.entries.pop(&key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projection(title: &str) -> TranslatedProjection {
        TranslatedProjection {
            title: title.to_string(),
            location: format!("{title} location"),
            description: format!("{title} description"),
        }
    }

    #[test]
    fn test_get_absent() {
        let cache = TranslationCache::new();
        assert!(cache.get(1, Language::HINDI).is_none());
    }

    #[test]
    fn test_put_many_then_get() {
        let mut cache = TranslationCache::new();
        cache.put_many([((1, Language::HINDI), projection("कटाई सहायक"))]);
        assert_eq!(
            cache.get(1, Language::HINDI).map(|p| p.title.as_str()),
            Some("कटाई सहायक")
        );
    }

    #[test]
    fn test_key_isolation() {
        let mut cache = TranslationCache::new();
        cache.put_many([((1, Language::HINDI), projection("hindi"))]);

        assert!(cache.get(1, Language::TAMIL).is_none());
        assert!(cache.get(2, Language::HINDI).is_none());
    }

    #[test]
    fn test_put_many_overwrites_same_key() {
        let mut cache = TranslationCache::new();
        cache.put_many([((1, Language::HINDI), projection("first"))]);
        cache.put_many([((1, Language::HINDI), projection("second"))]);

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(1, Language::HINDI), Some(&projection("second")));
    }

    #[test]
    fn test_clear() {
        let mut cache = TranslationCache::new();
        cache.put_many([
            ((1, Language::HINDI), projection("a")),
            ((2, Language::TAMIL), projection("b")),
        ]);
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_capacity_evicts_oldest_write() {
        let mut cache = TranslationCache::with_capacity(2);
        cache.put_many([
            ((1, Language::HINDI), projection("one")),
            ((2, Language::HINDI), projection("two")),
        ]);

        // Rewriting 1 makes 2 the eviction candidate.
        cache.put_many([((1, Language::HINDI), projection("one again"))]);
        cache.put_many([((3, Language::HINDI), projection("three"))]);

        assert_eq!(cache.len(), 2);
        assert!(cache.contains(1, Language::HINDI));
        assert!(!cache.contains(2, Language::HINDI));
        assert!(cache.contains(3, Language::HINDI));
    }

    #[test]
    fn test_protected_language_is_never_evicted() {
        let mut cache = TranslationCache::with_capacity(2);
        cache.protect(Language::HINDI);
        cache.put_many([
            ((1, Language::TAMIL), projection("ta one")),
            ((2, Language::TAMIL), projection("ta two")),
            ((3, Language::HINDI), projection("hi three")),
        ]);
        assert!(!cache.contains(1, Language::TAMIL));
        assert!(cache.contains(2, Language::TAMIL));

        cache.put_many([
            ((4, Language::HINDI), projection("hi four")),
            ((5, Language::HINDI), projection("hi five")),
        ]);

        // Only protected entries remain, even above capacity.
        assert_eq!(cache.len(), 3);
        assert!(!cache.contains(2, Language::TAMIL));
        for id in 3..=5 {
            assert!(cache.contains(id, Language::HINDI));
        }
    }

    #[test]
    fn test_changing_protection_trims_former_language() {
        let mut cache = TranslationCache::with_capacity(1);
        cache.protect(Language::HINDI);
        cache.put_many([
            ((1, Language::HINDI), projection("a")),
            ((2, Language::HINDI), projection("b")),
        ]);
        assert_eq!(cache.len(), 2);

        cache.protect(Language::TAMIL);
        assert_eq!(cache.len(), 1);
        assert!(cache.contains(2, Language::HINDI));
    }

    #[test]
    fn test_zero_capacity_is_unbounded() {
        let mut cache = TranslationCache::with_capacity(0);
        cache.put_many((1..=50).map(|id| ((id, Language::TAMIL), projection("x"))));
        assert_eq!(cache.len(), 50);
    }
}
