//! Debounced remote title search.
//!
//! Each input restarts a debounce timer. When the timer fires the pipeline
//! shows a loading panel and issues one lookup. Every input also bumps a
//! generation counter, and a lookup's outcome is applied only while its
//! generation is still current, so a slow response can never overwrite the
//! state produced by later typing.
//!
//! State is published on a [`tokio::sync::watch`] channel.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::types::errors::SearchError;
use crate::types::search::SearchHit;
use crate::types::settings::SearchSettings;
use crate::types::view::{SearchPanel, SearchPhase, SearchState};

/// The remote collaborator answering title lookups.
pub trait SearchBackend: Send + Sync + 'static {
    fn search(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<SearchHit>, SearchError>> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    pub debounce: Duration,
    pub min_query_chars: usize,
    pub max_results: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::from(&SearchSettings::default())
    }
}

impl From<&SearchSettings> for PipelineConfig {
    fn from(settings: &SearchSettings) -> Self {
        Self {
            debounce: Duration::from_millis(settings.debounce_ms),
            min_query_chars: settings.min_query_chars,
            max_results: settings.max_results,
        }
    }
}

/// State shared between the pipeline and its spawned tasks.
struct Shared {
    generation: AtomicU64,
    lookups: AtomicU64,
    state: watch::Sender<SearchState>,
}

impl Shared {
    /// Replaces the published state unless input arrived after `generation`.
    /// The check runs under the channel's write lock, which `on_input` also
    /// takes, so the two cannot interleave.
    fn publish_if_current(&self, generation: u64, next: SearchState) -> bool {
        self.state.send_if_modified(|current| {
            if self.generation.load(Ordering::SeqCst) != generation {
                return false;
            }
            *current = next;
            true
        })
    }
}

pub struct SearchPipeline<S> {
    backend: Arc<S>,
    config: PipelineConfig,
    timer: Option<JoinHandle<()>>,
    shared: Arc<Shared>,
}

impl<S: SearchBackend> SearchPipeline<S> {
    pub fn new(backend: S, config: PipelineConfig) -> Self {
        Self::with_shared_backend(Arc::new(backend), config)
    }

    pub fn with_shared_backend(backend: Arc<S>, config: PipelineConfig) -> Self {
        let (state, _) = watch::channel(SearchState::default());
        Self {
            backend,
            config,
            timer: None,
            shared: Arc::new(Shared {
                generation: AtomicU64::new(0),
                lookups: AtomicU64::new(0),
                state,
            }),
        }
    }

    pub fn config(&self) -> PipelineConfig {
        self.config
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.shared.state.subscribe()
    }

    pub fn state(&self) -> SearchState {
        self.shared.state.borrow().clone()
    }

    /// Number of lookups sent to the backend so far.
    pub fn lookups_issued(&self) -> u64 {
        self.shared.lookups.load(Ordering::SeqCst)
    }

    /// Handles the search box's current text. Must be called inside a
    /// tokio runtime.
    pub fn on_input(&mut self, text: &str) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        let query = text.trim().to_string();

        if query.chars().count() < self.config.min_query_chars {
            self.shared.state.send_modify(|state| {
                self.shared.generation.fetch_add(1, Ordering::SeqCst);
                *state = SearchState {
                    query,
                    phase: SearchPhase::Idle,
                    panel: SearchPanel::Cleared,
                };
            });
            return;
        }

        let mut generation = 0;
        self.shared.state.send_modify(|state| {
            generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;
            // The panel keeps whatever it showed until the timer fires.
            state.query = query.clone();
            state.phase = SearchPhase::Debouncing;
        });
        debug!(%query, generation, "search debouncing");

        let backend = Arc::clone(&self.backend);
        let shared = Arc::clone(&self.shared);
        let config = self.config;
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(config.debounce).await;
            let pending = SearchState {
                query: query.clone(),
                phase: SearchPhase::Pending,
                panel: SearchPanel::Loading,
            };
            if !shared.publish_if_current(generation, pending) {
                return;
            }
            shared.lookups.fetch_add(1, Ordering::SeqCst);
            // Detached so a later keystroke aborting the timer does not
            // cancel a request already on the wire.
            tokio::spawn(run_lookup(backend, shared, config, query, generation));
        }));
    }

    /// Cancels the debounce timer and returns to idle.
    pub fn reset(&mut self) {
        self.on_input("");
    }
}

impl<S> Drop for SearchPipeline<S> {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

async fn run_lookup<S: SearchBackend>(
    backend: Arc<S>,
    shared: Arc<Shared>,
    config: PipelineConfig,
    query: String,
    generation: u64,
) {
    let outcome = backend.search(&query).await;
    let next = match outcome {
        Ok(mut hits) if !hits.is_empty() => {
            hits.truncate(config.max_results);
            SearchState {
                query: query.clone(),
                phase: SearchPhase::Rendered,
                panel: SearchPanel::Results(hits),
            }
        }
        Ok(_) => SearchState {
            query: query.clone(),
            phase: SearchPhase::Empty,
            panel: SearchPanel::NotFound,
        },
        Err(e) => {
            warn!(%query, error = %e, "search lookup failed");
            SearchState {
                query: query.clone(),
                phase: SearchPhase::Failed,
                panel: SearchPanel::LoadFailed,
            }
        }
    };
    if !shared.publish_if_current(generation, next) {
        debug!(%query, generation, "discarding stale search response");
    }
}
