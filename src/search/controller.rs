use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::catalog::CatalogStore;
use crate::error::CriteriaError;
use crate::models::Campsite;
use crate::search::criteria::{CriteriaPatch, FilterCriteria};
use crate::search::predicate::filter_catalog;
use crate::search::suggest::suggest;

/// Tunable controller constants
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Quiet period after the last keystroke before the query commits
    pub debounce: Duration,
    /// Maximum number of completions returned by `suggestions`
    pub suggestion_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(300),
            suggestion_limit: 8,
        }
    }
}

struct ControllerState {
    /// Raw input text, updated on every keystroke for display
    raw_query: String,
    /// Query last committed by a fired debounce timer; results reflect this
    committed_query: String,
    criteria: FilterCriteria,
    /// Bumped on every query change; a debounce task only commits if its
    /// generation is still current
    generation: u64,
    pending: Option<JoinHandle<()>>,
    results: Arc<Vec<Campsite>>,
}

struct Inner {
    catalog: Arc<CatalogStore>,
    config: SearchConfig,
    state: Mutex<ControllerState>,
    results_tx: watch::Sender<Arc<Vec<Campsite>>>,
    recomputes: AtomicU64,
}

impl Inner {
    /// Derive results from (catalog, committed query, criteria) and publish.
    /// Never called with stale inputs: callers hold the state lock.
    fn recompute(&self, state: &mut ControllerState) {
        let catalog = self.catalog.get_all();
        let results = Arc::new(filter_catalog(
            &catalog,
            &state.committed_query,
            &state.criteria,
        ));
        debug!(
            query = %state.committed_query,
            total = catalog.len(),
            matched = results.len(),
            "recomputed search results"
        );
        state.results = results.clone();
        self.recomputes.fetch_add(1, Ordering::Relaxed);
        self.results_tx.send_replace(results);
    }
}

/// Single source of truth for the current query, criteria and derived result
/// list.
///
/// Query changes are debounced; criteria changes recompute immediately.
/// Results are always a pure function of `(catalog, committed query,
/// criteria)`, never mutated independently. Cloning yields another handle to
/// the same controller. `set_query` schedules its debounce timer on the
/// ambient tokio runtime.
#[derive(Clone)]
pub struct SearchController {
    inner: Arc<Inner>,
}

impl SearchController {
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        Self::with_config(catalog, SearchConfig::default())
    }

    pub fn with_config(catalog: Arc<CatalogStore>, config: SearchConfig) -> Self {
        let results: Arc<Vec<Campsite>> = Arc::new(Vec::new());
        let (results_tx, _) = watch::channel(results.clone());
        Self {
            inner: Arc::new(Inner {
                catalog,
                config,
                state: Mutex::new(ControllerState {
                    raw_query: String::new(),
                    committed_query: String::new(),
                    criteria: FilterCriteria::default(),
                    generation: 0,
                    pending: None,
                    results,
                }),
                results_tx,
                recomputes: AtomicU64::new(0),
            }),
        }
    }

    /// Store the raw text immediately and schedule a debounced recompute.
    /// Rapid calls coalesce: the pending timer is cancelled and restarted,
    /// so only the final text is ever committed.
    pub fn set_query(&self, text: impl Into<String>) {
        let mut state = self.lock_state();
        state.raw_query = text.into();
        state.generation += 1;
        let generation = state.generation;
        if let Some(pending) = state.pending.take() {
            pending.abort();
        }
        let inner = self.inner.clone();
        state.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(inner.config.debounce).await;
            let mut state = inner.state.lock().expect("controller state poisoned");
            if state.generation != generation {
                // superseded by a newer keystroke between wake-up and lock
                return;
            }
            state.committed_query = state.raw_query.clone();
            state.pending = None;
            inner.recompute(&mut state);
        }));
    }

    /// Merge a patch into the current criteria and recompute immediately.
    /// An invalid merged result is rejected: prior criteria and results stay
    /// in effect and the error is returned to the caller.
    pub fn set_criteria(&self, patch: CriteriaPatch) -> Result<(), CriteriaError> {
        let mut state = self.lock_state();
        let merged = state.criteria.merged(&patch);
        if let Err(err) = merged.validate() {
            warn!(%err, "rejected criteria update");
            return Err(err);
        }
        state.criteria = merged;
        self.inner.recompute(&mut state);
        Ok(())
    }

    /// Reset query and criteria, cancel any pending debounce and recompute
    /// against the full catalog
    pub fn clear(&self) {
        let mut state = self.lock_state();
        state.generation += 1;
        if let Some(pending) = state.pending.take() {
            pending.abort();
        }
        state.raw_query.clear();
        state.committed_query.clear();
        state.criteria = FilterCriteria::default();
        self.inner.recompute(&mut state);
    }

    /// Recompute with the current query and criteria. Called by the
    /// composition root once the catalog finishes loading.
    pub fn refresh(&self) {
        let mut state = self.lock_state();
        self.inner.recompute(&mut state);
    }

    /// Current derived result list; empty before the first computation,
    /// never null. Catalog order is preserved.
    pub fn results(&self) -> Arc<Vec<Campsite>> {
        self.lock_state().results.clone()
    }

    /// Change feed of derived results for grid/map/detail views
    pub fn subscribe(&self) -> watch::Receiver<Arc<Vec<Campsite>>> {
        self.inner.results_tx.subscribe()
    }

    /// Raw query text, for display while a debounce is pending
    pub fn query(&self) -> String {
        self.lock_state().raw_query.clone()
    }

    pub fn criteria(&self) -> FilterCriteria {
        self.lock_state().criteria.clone()
    }

    /// Number of recomputations executed so far; coalesced keystrokes count
    /// once
    pub fn recompute_count(&self) -> u64 {
        self.inner.recomputes.load(Ordering::Relaxed)
    }

    /// Completions for a partial query, capped at the configured limit
    pub fn suggestions(&self, partial: &str) -> Vec<String> {
        let catalog = self.inner.catalog.get_all();
        suggest(partial, &catalog, self.inner.config.suggestion_limit)
    }

    fn lock_state(&self) -> MutexGuard<'_, ControllerState> {
        self.inner.state.lock().expect("controller state poisoned")
    }
}
