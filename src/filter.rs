use crate::view::DisplayRecord;
use serde::{Deserialize, Serialize};

/// Applied search criteria. A blank field matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub location: String,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.title.trim().is_empty() && self.location.trim().is_empty()
    }

    /// Whether `record`'s displayed title and location satisfy both criteria.
    pub fn matches(&self, record: &DisplayRecord) -> bool {
        contains_ignore_case(&record.title, &self.title)
            && contains_ignore_case(&record.location, &self.location)
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    // Whitespace-only means "no criterion"; otherwise the needle is used as typed.
    needle.trim().is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Narrow an already materialized (possibly translated) list.
pub fn filter(records: Vec<DisplayRecord>, criteria: &FilterCriteria) -> Vec<DisplayRecord> {
    if criteria.is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|record| criteria.matches(record))
        .collect()
}
