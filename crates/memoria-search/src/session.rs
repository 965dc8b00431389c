//! Debounced search session.
//!
//! A [`SearchSession`] owns the state behind a search box: the raw query,
//! the debounced query, the ranked results, the pending flag and the result
//! type filter. Typing re-arms a single debounce task; only the keystroke
//! that is followed by a full quiet period triggers scoring.
//!
//! State is published through a [`tokio::sync::watch`] channel so a
//! presentation layer can await changes with [`SearchSession::subscribe`].
//!
//! `set_query` and `sync_from_url` spawn onto the current Tokio runtime and
//! must be called from within one.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, info};

use memoria_core::defaults::SEARCH_QUERY_PARAM;
use memoria_core::RecordStore;

use crate::aggregate::{search_all, SearchResult};
use crate::config::SearchConfig;
use crate::navigation::{query_param, search_url, Navigator};
use crate::record::ResultKind;

/// Snapshot of a search session.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchState {
    /// Text as typed.
    pub query: String,
    /// Last query that survived the debounce window.
    pub debounced_query: String,
    /// Ranked results for `debounced_query`.
    pub results: Vec<SearchResult>,
    /// True while scoring for `debounced_query` is in flight.
    pub is_pending: bool,
    /// Result kinds to show. Empty shows all.
    pub selected_kinds: BTreeSet<ResultKind>,
}

impl SearchState {
    /// Results whose kind is selected, or every result when none is.
    pub fn filtered_results(&self) -> Vec<&SearchResult> {
        self.results
            .iter()
            .filter(|r| self.selected_kinds.is_empty() || self.selected_kinds.contains(&r.kind))
            .collect()
    }
}

/// Stateful search controller with a cancellable debounce timer.
pub struct SearchSession {
    store: Arc<RecordStore>,
    config: SearchConfig,
    navigator: Arc<dyn Navigator>,
    state: Arc<watch::Sender<SearchState>>,
    generation: Arc<AtomicU64>,
    pending: Option<JoinHandle<()>>,
}

impl SearchSession {
    pub fn new(
        store: Arc<RecordStore>,
        config: SearchConfig,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let (state, _) = watch::channel(SearchState::default());
        Self {
            store,
            config,
            navigator,
            state: Arc::new(state),
            generation: Arc::new(AtomicU64::new(0)),
            pending: None,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Current state, cloned.
    pub fn snapshot(&self) -> SearchState {
        self.state.borrow().clone()
    }

    pub fn query(&self) -> String {
        self.state.borrow().query.clone()
    }

    pub fn results(&self) -> Vec<SearchResult> {
        self.state.borrow().results.clone()
    }

    pub fn is_pending(&self) -> bool {
        self.state.borrow().is_pending
    }

    pub fn selected_kinds(&self) -> BTreeSet<ResultKind> {
        self.state.borrow().selected_kinds.clone()
    }

    /// Results narrowed by the selected result kinds.
    pub fn filtered_results(&self) -> Vec<SearchResult> {
        self.state
            .borrow()
            .filtered_results()
            .into_iter()
            .cloned()
            .collect()
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }

    /// Update the raw query and restart the debounce timer.
    pub fn set_query(&mut self, text: impl Into<String>) {
        let query = text.into();
        self.state.send_modify(|s| s.query = query.clone());
        self.arm(query);
    }

    /// Cancel any pending search and reset query, results and type filters.
    pub fn clear_query(&mut self) {
        self.cancel_pending();
        self.state.send_modify(|s| *s = SearchState::default());
        debug!(
            subsystem = "search",
            component = "session",
            op = "clear_query",
            "Search cleared"
        );
    }

    /// Show or hide results of `kind`.
    pub fn toggle_type_filter(&mut self, kind: ResultKind) {
        self.state.send_modify(|s| {
            if !s.selected_kinds.remove(&kind) {
                s.selected_kinds.insert(kind);
            }
        });
    }

    /// Navigate to the full results page for the current query.
    ///
    /// Returns `false` without navigating when the query is blank.
    pub fn submit(&self) -> bool {
        let query = self.query();
        if query.trim().is_empty() {
            return false;
        }
        let url = search_url(&query);
        info!(
            subsystem = "search",
            component = "session",
            op = "submit",
            url = %url,
            "Navigating to search page"
        );
        self.navigator.push(&url);
        true
    }

    /// Adopt the `q` parameter of `url` as the query when it is present,
    /// non-empty and different from the current query.
    pub fn sync_from_url(&mut self, url: &str) {
        let Some(query) = query_param(url, SEARCH_QUERY_PARAM) else {
            return;
        };
        if query.is_empty() || query == self.state.borrow().query {
            return;
        }
        debug!(
            subsystem = "search",
            component = "session",
            op = "sync_from_url",
            query = %query,
            "Query adopted from URL"
        );
        self.set_query(query);
    }

    fn cancel_pending(&mut self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    fn arm(&mut self, query: String) {
        self.cancel_pending();
        let generation = self.generation.load(Ordering::SeqCst);

        let state = Arc::clone(&self.state);
        let current = Arc::clone(&self.generation);
        let store = Arc::clone(&self.store);
        let config = self.config.clone();

        self.pending = Some(tokio::spawn(async move {
            sleep(config.debounce).await;

            if query.trim().is_empty() {
                publish_if_current(&state, &current, generation, |s| {
                    s.debounced_query = query;
                    s.results.clear();
                    s.is_pending = false;
                });
                return;
            }

            let started = publish_if_current(&state, &current, generation, |s| {
                s.debounced_query = query.clone();
                s.is_pending = true;
            });
            if !started {
                return;
            }

            let results = search_all(&store, &query, &config);

            // Superseded while scoring: leave the state to the newer search.
            publish_if_current(&state, &current, generation, |s| {
                s.results = results;
                s.is_pending = false;
            });
        }));
    }
}

/// Apply `update` only while `generation` is still the live one.
///
/// The check runs under the channel's write lock. `cancel_pending` bumps the
/// generation before the caller resets or re-arms, so a superseded task can
/// never write after a newer reset or keystroke.
fn publish_if_current(
    state: &watch::Sender<SearchState>,
    current: &AtomicU64,
    generation: u64,
    update: impl FnOnce(&mut SearchState),
) -> bool {
    state.send_if_modified(|s| {
        if current.load(Ordering::SeqCst) != generation {
            return false;
        }
        update(s);
        true
    })
}

impl Drop for SearchSession {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
