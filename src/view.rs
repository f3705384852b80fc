use crate::cache::TranslationCache;
use crate::i18n::Language;
use crate::store::{JobId, JobRecord};
use serde::Serialize;

/// One row of the rendered job list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRecord {
    pub id: JobId,
    pub title: String,
    pub location: String,
    pub description: String,
    pub contact: String,
    pub native_language: Language,
    /// True when the text came from a cached projection
    pub translated: bool,
}

impl DisplayRecord {
    fn native(record: &JobRecord) -> Self {
        Self {
            id: record.id,
            title: record.title.clone(),
            location: record.location.clone(),
            description: record.description.clone(),
            contact: record.contact.clone(),
            native_language: record.native_language,
            translated: false,
        }
    }
}

/// Build the display list for `display_language`, preserving record order.
///
/// Records already in the display language are shown as authored. Others use
/// their cached projection, or their native text until one arrives.
pub fn materialize(
    records: &[JobRecord],
    cache: &TranslationCache,
    display_language: Language,
) -> Vec<DisplayRecord> {
    records
        .iter()
        .map(|record| {
            if record.native_language == display_language {
                return DisplayRecord::native(record);
            }
            match cache.get(record.id, display_language) {
                Some(projection) => DisplayRecord {
                    title: projection.title.clone(),
                    location: projection.location.clone(),
                    description: projection.description.clone(),
                    translated: true,
                    ..DisplayRecord::native(record)
                },
                None => DisplayRecord::native(record),
            }
        })
        .collect()
}
