use crate::i18n::Language;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type JobId = u64;

/// A job posting as stored. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: JobId,
    pub title: String,
    pub location: String,
    pub description: String,
    pub contact: String,
    pub native_language: Language,
    pub posted_at: DateTime<Utc>,
}

/// Fields submitted from the posting form.
#[derive(Debug, Clone, Deserialize)]
pub struct JobRecordInput {
    pub title: String,
    pub location: String,
    pub description: String,
    pub contact: String,
    #[serde(default)]
    pub native_language: Language,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum JobInputError {
    #[error("All fields are required. Missing: {0}")]
    MissingField(&'static str),
}

impl JobRecordInput {
    /// Posting form rule: every field must be non-blank.
    pub fn validate(&self) -> Result<(), JobInputError> {
        let fields = [
            ("title", &self.title),
            ("location", &self.location),
            ("description", &self.description),
            ("contact", &self.contact),
        ];
        match fields.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((name, _)) => Err(JobInputError::MissingField(name)),
            None => Ok(()),
        }
    }
}

/// Canonical list of job postings, most recent first.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<JobRecord>,
    next_id: JobId,
}

impl RecordStore {
    /// Empty store; the first appended posting gets id 1.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Store pre-filled with the board's sample postings.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        // Appended oldest first so the listed order survives front insertion.
        for input in sample_jobs().into_iter().rev() {
            store.append(input);
        }
        store
    }

    /// Assign a fresh id and insert at the front.
    ///
    /// # Arguments
    /// * `input` - Posting fields; validate them first with [`JobRecordInput::validate`]
    ///
    /// # Returns
    /// The stored record, including its id and posting time
    pub fn append(&mut self, input: JobRecordInput) -> JobRecord {
        let id = self.next_id.max(1);
        self.next_id = id + 1;

        let record = JobRecord {
            id,
            title: input.title,
            location: input.location,
            description: input.description,
            contact: input.contact,
            native_language: input.native_language,
            posted_at: Utc::now(),
        };
        self.records.insert(0, record.clone());
        record
    }

    /// All postings, most recent first.
    pub fn all(&self) -> &[JobRecord] {
        &self.records
    }

    /// Look up a posting by id.
    pub fn get(&self, id: JobId) -> Option<&JobRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Number of stored postings.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn sample_jobs() -> Vec<JobRecordInput> {
    vec![
        JobRecordInput {
            title: "Harvest Helper".to_string(),
            location: "Punjab, India".to_string(),
            description: "Need 5 experienced workers for wheat harvesting season. Accommodation provided.".to_string(),
            contact: "agri-jobs@example.com".to_string(),
            native_language: Language::ENGLISH,
        },
        JobRecordInput {
            title: "सिंचाई विशेषज्ञ".to_string(),
            location: "महाराष्ट्र, भारत".to_string(),
            description: "एक बड़े अंगूर के बाग के लिए ड्रिप सिंचाई प्रणालियों का प्रबंधन करने के लिए एक विशेषज्ञ की तलाश है।".to_string(),
            contact: "vineyard-careers@example.com".to_string(),
            native_language: Language::HINDI,
        },
        JobRecordInput {
            title: "Farm Equipment Operator".to_string(),
            location: "Haryana, India".to_string(),
            description: "Experienced operator needed for tractors and combine harvesters. Seasonal position.".to_string(),
            contact: "+91-9876543210".to_string(),
            native_language: Language::ENGLISH,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(title: &str, language: Language) -> JobRecordInput {
        JobRecordInput {
            title: title.to_string(),
            location: "Nashik".to_string(),
            description: "Grape picking".to_string(),
            contact: "farm@example.com".to_string(),
            native_language: language,
        }
    }

    #[test]
    fn test_append_assigns_increasing_ids() {
        let mut store = RecordStore::new();
        let first = store.append(input("One", Language::ENGLISH));
        let second = store.append(input("Two", Language::HINDI));
        assert!(second.id > first.id);
    }

    #[test]
    fn test_append_inserts_most_recent_first() {
        let mut store = RecordStore::new();
        store.append(input("Older", Language::ENGLISH));
        store.append(input("Newer", Language::ENGLISH));

        let titles: Vec<_> = store.all().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Newer", "Older"]);
    }

    #[test]
    fn test_append_returns_stored_record() {
        let mut store = RecordStore::new();
        let record = store.append(input("Pruner", Language::TAMIL));
        assert_eq!(store.get(record.id), Some(&record));
        assert_eq!(record.native_language, Language::TAMIL);
    }

    #[test]
    fn test_default_store_still_starts_ids_at_one() {
        let mut store = RecordStore::default();
        assert_eq!(store.append(input("A", Language::ENGLISH)).id, 1);
        assert_eq!(store.append(input("B", Language::ENGLISH)).id, 2);
    }

    #[test]
    fn test_seeded_store_keeps_sample_order() {
        let store = RecordStore::seeded();
        assert_eq!(store.len(), 3);
        let titles: Vec<_> = store.all().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Harvest Helper", "सिंचाई विशेषज्ञ", "Farm Equipment Operator"]
        );
        assert_eq!(store.all()[1].native_language, Language::HINDI);
    }

    #[test]
    fn test_get_unknown_id() {
        assert!(RecordStore::seeded().get(999).is_none());
    }

    #[test]
    fn test_validate_accepts_complete_input() {
        assert!(input("Harvester", Language::ENGLISH).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_field() {
        let mut job = input("Harvester", Language::ENGLISH);
        job.contact = "   ".to_string();
        assert_eq!(job.validate(), Err(JobInputError::MissingField("contact")));
    }

    #[test]
    fn test_input_defaults_to_canonical_language() {
        let job: JobRecordInput = serde_json::from_value(serde_json::json!({
            "title": "Weeding",
            "location": "Ooty",
            "description": "Tea estate",
            "contact": "tea@example.com"
        }))
        .expect("Should deserialize");
        assert_eq!(job.native_language, Language::ENGLISH);
    }
}
