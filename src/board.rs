use crate::cache::TranslationCache;
use crate::coordinator::{BoardState, TranslationCoordinator};
use crate::filter::{filter, FilterCriteria};
use crate::i18n::{Language, MetricsReport};
use crate::store::{JobId, JobRecord, JobRecordInput, RecordStore};
use crate::translator::JobTranslator;
use crate::view::{materialize, DisplayRecord};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// Snapshot handed to the rendering layer.
#[derive(Debug, Clone, Serialize)]
pub struct BoardView {
    pub display_language: Language,
    pub is_translating: bool,
    pub filter: FilterCriteria,
    pub jobs: Vec<DisplayRecord>,
}

/// Shared handle onto the job board. Clones refer to the same board.
pub struct JobBoard<T> {
    inner: Arc<TranslationCoordinator<T>>,
}

impl<T> Clone for JobBoard<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: JobTranslator + 'static> JobBoard<T> {
    /// Board showing `store` in the canonical language. No cycle runs until a
    /// posting, a language change or [`JobBoard::refresh`].
    pub fn new(translator: T, store: RecordStore, cache: TranslationCache) -> Self {
        Self {
            inner: Arc::new(TranslationCoordinator::new(
                translator,
                BoardState::new(store, cache),
            )),
        }
    }

    /// Append a posting and bring translations up to date for it.
    ///
    /// # Returns
    /// The stored record, with its assigned id
    ///
    /// # Panics
    /// Panics outside a tokio runtime when a translation fetch is needed,
    /// since the cycle is spawned onto the current runtime.
    pub fn post_job(&self, input: JobRecordInput) -> JobRecord {
        let record = self.inner.lock().store.append(input);
        info!(
            job_id = record.id,
            native_language = %record.native_language,
            "Job posted"
        );
        self.inner.trigger();
        record
    }

    /// Switch the display language. Re-selecting the current language is a no-op.
    ///
    /// # Panics
    /// Panics outside a tokio runtime when a translation fetch is needed,
    /// since the cycle is spawned onto the current runtime.
    pub fn set_display_language(&self, language: Language) {
        {
            let mut state = self.inner.lock();
            if state.display_language == language {
                return;
            }
            info!(
                from = %state.display_language,
                to = %language,
                "Display language changed"
            );
            state.display_language = language;
        }
        self.inner.trigger();
    }

    /// Re-run the coordinator for unchanged inputs (startup, manual retry).
    ///
    /// # Panics
    /// Panics outside a tokio runtime when a translation fetch is needed,
    /// since the cycle is spawned onto the current runtime.
    pub fn refresh(&self) {
        self.inner.trigger();
    }

    /// Replace the applied filter. No translation is triggered.
    pub fn apply_filter(&self, criteria: FilterCriteria) {
        self.inner.lock().filter = criteria;
    }

    /// Reset to the empty filter, showing every posting again.
    pub fn clear_filter(&self) {
        self.inner.lock().filter = FilterCriteria::default();
    }

    /// Criteria last passed to [`JobBoard::apply_filter`].
    pub fn applied_filter(&self) -> FilterCriteria {
        self.inner.lock().filter.clone()
    }

    pub fn display_language(&self) -> Language {
        self.inner.lock().display_language
    }

    /// Materialized and filtered list, in store order.
    pub fn display_records(&self) -> Vec<DisplayRecord> {
        let state = self.inner.lock();
        let records = materialize(state.store.all(), &state.cache, state.display_language);
        filter(records, &state.filter)
    }

    /// Full snapshot: language, translating flag, filter and filtered list.
    pub fn view(&self) -> BoardView {
        let state = self.inner.lock();
        let records = materialize(state.store.all(), &state.cache, state.display_language);
        BoardView {
            display_language: state.display_language,
            is_translating: self.inner.is_translating(),
            filter: state.filter.clone(),
            jobs: filter(records, &state.filter),
        }
    }

    /// Whether a translation cycle is in flight.
    pub fn is_translating(&self) -> bool {
        self.inner.is_translating()
    }

    /// Stored (untranslated) posting by id.
    pub fn job(&self, id: JobId) -> Option<JobRecord> {
        self.inner.lock().store.get(id).cloned()
    }

    /// Number of postings on the board.
    pub fn job_count(&self) -> usize {
        self.inner.lock().store.len()
    }

    /// Number of projections currently held in the translation cache.
    pub fn cached_translations(&self) -> usize {
        self.inner.lock().cache.len()
    }

    /// Snapshot of the translation counters.
    pub fn metrics(&self) -> MetricsReport {
        self.inner.metrics().report()
    }

    /// The translation backend this board fetches through.
    pub fn translator(&self) -> &T {
        self.inner.translator()
    }

    /// Resolve once no translation cycle is in flight.
    pub async fn settled(&self) {
        let mut translating = self.inner.subscribe();
        // The sender lives as long as the board, so this cannot fail while we hold `self`.
        let _ = translating.wait_for(|in_flight| !*in_flight).await;
    }
}
