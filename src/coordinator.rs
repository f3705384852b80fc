//! Translation coordinator: keeps the cache populated for the current
//! records and display language.
//!
//! A cycle is planned synchronously under the state lock (clear, diff, mark
//! translating) and its fetches then run on one spawned task. Triggers that
//! arrive while a cycle is in flight only mark the state dirty; the running
//! task re-plans with the latest inputs once its merges are done, so there is
//! never more than one cycle (and one writer per key) at a time.

use crate::cache::{TranslatedProjection, TranslationCache};
use crate::filter::FilterCriteria;
use crate::i18n::{Language, TranslationMetrics};
use crate::store::{JobRecord, RecordStore};
use crate::translator::JobTranslator;
use futures::stream::{FuturesUnordered, StreamExt};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Everything the board mutates. Guarded by one mutex that is never held
/// across an await.
#[derive(Debug)]
pub(crate) struct BoardState {
    pub(crate) store: RecordStore,
    pub(crate) cache: TranslationCache,
    pub(crate) display_language: Language,
    pub(crate) filter: FilterCriteria,
    cycle_running: bool,
    dirty: bool,
}

impl BoardState {
    pub(crate) fn new(store: RecordStore, cache: TranslationCache) -> Self {
        Self {
            store,
            cache,
            display_language: Language::canonical(),
            filter: FilterCriteria::default(),
            cycle_running: false,
            dirty: false,
        }
    }
}

/// Outcome of diffing records against the cache for one language.
#[derive(Debug, PartialEq, Eq)]
pub enum Plan {
    /// Every record is already in the display language.
    ClearCache,
    /// Nothing left to fetch.
    UpToDate,
    /// Records whose projection for `language` is missing.
    Fetch {
        language: Language,
        jobs: Vec<JobRecord>,
        cached: usize,
    },
}

/// Compute what a cycle has to do, without side effects.
pub fn plan(records: &[JobRecord], cache: &TranslationCache, display_language: Language) -> Plan {
    if records
        .iter()
        .all(|record| record.native_language == display_language)
    {
        return Plan::ClearCache;
    }

    let (cached, missing): (Vec<&JobRecord>, Vec<&JobRecord>) = records
        .iter()
        .filter(|record| record.native_language != display_language)
        .partition(|record| cache.contains(record.id, display_language));

    if missing.is_empty() {
        return Plan::UpToDate;
    }

    Plan::Fetch {
        language: display_language,
        jobs: missing.into_iter().cloned().collect(),
        cached: cached.len(),
    }
}

/// A planned batch of fetches for one language.
struct Batch {
    language: Language,
    jobs: Vec<JobRecord>,
}

pub(crate) struct TranslationCoordinator<T> {
    state: Mutex<BoardState>,
    translator: T,
    metrics: TranslationMetrics,
    translating: watch::Sender<bool>,
}

impl<T: JobTranslator + 'static> TranslationCoordinator<T> {
    pub(crate) fn new(translator: T, state: BoardState) -> Self {
        let (translating, _) = watch::channel(false);
        Self {
            state: Mutex::new(state),
            translator,
            metrics: TranslationMetrics::new(),
            translating,
        }
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, BoardState> {
        // A panic while holding the lock leaves plain data behind; keep serving it.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub(crate) fn translator(&self) -> &T {
        &self.translator
    }

    pub(crate) fn metrics(&self) -> &TranslationMetrics {
        &self.metrics
    }

    pub(crate) fn is_translating(&self) -> bool {
        *self.translating.borrow()
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<bool> {
        self.translating.subscribe()
    }

    /// React to a change of records or display language.
    ///
    /// Must be called from within a tokio runtime when a fetch is needed.
    pub(crate) fn trigger(self: &Arc<Self>) {
        let batch = {
            let mut state = self.lock();
            if state.cycle_running {
                debug!("Translation cycle in flight, deferring re-plan");
                state.dirty = true;
                return;
            }
            let Some(batch) = self.plan_locked(&mut state) else {
                return;
            };
            state.cycle_running = true;
            self.translating.send_replace(true);
            batch
        };

        tokio::spawn(Arc::clone(self).run(batch));
    }

    /// Steps 1-3 of a cycle, applied to locked state.
    fn plan_locked(&self, state: &mut BoardState) -> Option<Batch> {
        let display_language = state.display_language;
        state.cache.protect(display_language);
        match plan(state.store.all(), &state.cache, state.display_language) {
            Plan::ClearCache => {
                if !state.cache.is_empty() {
                    debug!(
                        language = %state.display_language,
                        entries = state.cache.len(),
                        "All jobs are native to the display language, clearing translation cache"
                    );
                }
                state.cache.clear();
                None
            }
            Plan::UpToDate => {
                debug!(language = %state.display_language, "Translations up to date");
                None
            }
            Plan::Fetch {
                language,
                jobs,
                cached,
            } => {
                self.metrics.record_cache_hits(cached);
                self.metrics.record_cache_misses(jobs.len());
                Some(Batch { language, jobs })
            }
        }
    }

    async fn run(self: Arc<Self>, mut batch: Batch) {
        loop {
            info!(
                "Translating {} job(s) to {}",
                batch.jobs.len(),
                batch.language.name()
            );
            let translated = self.fetch_and_merge(&batch).await;
            self.metrics.record_cycle();
            info!(
                "Translation cycle for {} finished: {}/{} succeeded",
                batch.language.name(),
                translated,
                batch.jobs.len()
            );

            let next = {
                let mut state = self.lock();
                let next = if std::mem::take(&mut state.dirty) {
                    self.plan_locked(&mut state)
                } else {
                    None
                };
                if next.is_none() {
                    state.cycle_running = false;
                    self.translating.send_replace(false);
                }
                next
            };

            match next {
                Some(next) => batch = next,
                None => return,
            }
        }
    }

    /// Fetch every job in the batch concurrently, merging each success as
    /// soon as it lands. Returns the number of successful fetches.
    async fn fetch_and_merge(&self, batch: &Batch) -> usize {
        let language = batch.language;
        let mut pending: FuturesUnordered<_> = batch
            .jobs
            .iter()
            .map(|job| async move {
                self.metrics.record_api_call();
                let result = self.translator.fetch_translation(job, language).await;
                (job, result)
            })
            .collect();

        let mut succeeded = 0;
        while let Some((job, result)) = pending.next().await {
            match result {
                Ok(projection) => {
                    succeeded += 1;
                    self.merge(job, language, projection);
                }
                Err(e) => {
                    self.metrics.record_api_failure();
                    warn!(
                        job_id = job.id,
                        language = %language,
                        error = %e,
                        "Translation failed, keeping native text"
                    );
                }
            }
        }
        succeeded
    }

    fn merge(&self, job: &JobRecord, language: Language, projection: TranslatedProjection) {
        if job.native_language == language {
            return;
        }
        let mut state = self.lock();
        let display_language = state.display_language;
        state.cache.protect(display_language);
        state.cache.put_many([((job.id, language), projection)]);
    }
}
