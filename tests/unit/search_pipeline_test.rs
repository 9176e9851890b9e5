//! Unit tests for the debounced search pipeline.
//!
//! All tests run on a paused tokio clock, so sleeps advance virtual time
//! deterministically.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use animeku::services::search_pipeline::{PipelineConfig, SearchBackend, SearchPipeline};
use animeku::types::errors::SearchError;
use animeku::types::search::SearchHit;
use animeku::types::view::{SearchPanel, SearchPhase};

/// Scripted backend that records every query it receives.
#[derive(Default)]
struct FakeBackend {
    calls: Mutex<Vec<String>>,
    hits: usize,
    fail: bool,
    /// Per-query latency in ms; 50 when absent.
    delays: Vec<(&'static str, u64)>,
}

impl FakeBackend {
    fn with_hits(hits: usize) -> Self {
        Self {
            hits,
            ..Self::default()
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

fn hit(slug: &str) -> SearchHit {
    SearchHit {
        slug: slug.to_string(),
        title: slug.to_uppercase(),
        poster: None,
        kind: Some("TV".to_string()),
        episode: None,
    }
}

impl SearchBackend for FakeBackend {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, SearchError> {
        self.calls.lock().unwrap().push(query.to_string());
        let delay = self
            .delays
            .iter()
            .find(|(q, _)| *q == query)
            .map(|(_, ms)| *ms)
            .unwrap_or(50);
        tokio::time::sleep(Duration::from_millis(delay)).await;
        if self.fail {
            return Err(SearchError::Status(500));
        }
        Ok((0..self.hits).map(|i| hit(&format!("{query}-{i}"))).collect())
    }
}

fn pipeline(backend: &Arc<FakeBackend>) -> SearchPipeline<FakeBackend> {
    SearchPipeline::with_shared_backend(Arc::clone(backend), PipelineConfig::default())
}

async fn advance(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

#[tokio::test(start_paused = true)]
async fn test_short_queries_never_reach_backend() {
    let backend = Arc::new(FakeBackend::with_hits(3));
    let mut search = pipeline(&backend);

    for text in ["", "a", "  b  ", " "] {
        search.on_input(text);
        advance(1_000).await;
        let state = search.state();
        assert_eq!(state.phase, SearchPhase::Idle);
        assert_eq!(state.panel, SearchPanel::Cleared);
    }
    assert!(backend.calls().is_empty());
    assert_eq!(search.lookups_issued(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_burst_of_typing_sends_one_lookup() {
    let backend = Arc::new(FakeBackend::with_hits(2));
    let mut search = pipeline(&backend);

    for text in ["na", "nar", "naru", "narut", "naruto"] {
        search.on_input(text);
        advance(100).await;
    }
    assert_eq!(search.state().phase, SearchPhase::Debouncing);
    assert!(backend.calls().is_empty());

    advance(1_000).await;
    assert_eq!(backend.calls(), vec!["naruto"]);
    assert_eq!(search.lookups_issued(), 1);

    let state = search.state();
    assert_eq!(state.query, "naruto");
    assert_eq!(state.phase, SearchPhase::Rendered);
    assert_eq!(
        state.panel,
        SearchPanel::Results(vec![hit("naruto-0"), hit("naruto-1")])
    );
}

#[tokio::test(start_paused = true)]
async fn test_loading_panel_shows_while_pending() {
    let backend = Arc::new(FakeBackend {
        hits: 1,
        delays: vec![("bleach", 1_000)],
        ..FakeBackend::default()
    });
    let mut search = pipeline(&backend);

    search.on_input("bleach");
    let debouncing = search.state();
    assert_eq!(debouncing.phase, SearchPhase::Debouncing);
    assert_eq!(debouncing.panel, SearchPanel::Cleared);

    advance(450).await;
    let pending = search.state();
    assert_eq!(pending.phase, SearchPhase::Pending);
    assert_eq!(pending.panel, SearchPanel::Loading);

    advance(1_000).await;
    assert_eq!(search.state().phase, SearchPhase::Rendered);
}

#[tokio::test(start_paused = true)]
async fn test_query_is_trimmed_before_lookup() {
    let backend = Arc::new(FakeBackend::with_hits(1));
    let mut search = pipeline(&backend);

    search.on_input("  one piece  ");
    advance(1_000).await;
    assert_eq!(backend.calls(), vec!["one piece"]);
}

#[tokio::test(start_paused = true)]
async fn test_results_are_capped_at_six() {
    let backend = Arc::new(FakeBackend::with_hits(10));
    let mut search = pipeline(&backend);

    search.on_input("gundam");
    advance(1_000).await;

    match search.state().panel {
        SearchPanel::Results(hits) => {
            assert_eq!(hits.len(), 6);
            assert_eq!(hits[0].slug, "gundam-0");
            assert_eq!(hits[5].slug, "gundam-5");
        }
        other => panic!("expected results, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn test_empty_result_shows_not_found() {
    let backend = Arc::new(FakeBackend::with_hits(0));
    let mut search = pipeline(&backend);

    search.on_input("zzzz");
    advance(1_000).await;

    let state = search.state();
    assert_eq!(state.phase, SearchPhase::Empty);
    assert_eq!(state.panel, SearchPanel::NotFound);
}

#[tokio::test(start_paused = true)]
async fn test_backend_failure_shows_failed_panel() {
    let backend = Arc::new(FakeBackend {
        fail: true,
        ..FakeBackend::default()
    });
    let mut search = pipeline(&backend);

    search.on_input("naruto");
    advance(1_000).await;

    let state = search.state();
    assert_eq!(state.phase, SearchPhase::Failed);
    assert_eq!(state.panel, SearchPanel::LoadFailed);
}

#[tokio::test(start_paused = true)]
async fn test_stale_response_is_discarded() {
    let backend = Arc::new(FakeBackend {
        hits: 1,
        delays: vec![("slow", 2_000), ("fast", 10)],
        ..FakeBackend::default()
    });
    let mut search = pipeline(&backend);

    search.on_input("slow");
    advance(450).await;
    assert_eq!(backend.calls(), vec!["slow"]);

    search.on_input("fast");
    advance(500).await;
    assert_eq!(
        search.state().panel,
        SearchPanel::Results(vec![hit("fast-0")])
    );

    // The slow response lands now and must not overwrite "fast".
    advance(3_000).await;
    assert_eq!(backend.calls(), vec!["slow", "fast"]);
    let state = search.state();
    assert_eq!(state.query, "fast");
    assert_eq!(state.panel, SearchPanel::Results(vec![hit("fast-0")]));
}

#[tokio::test(start_paused = true)]
async fn test_shortening_input_clears_panel_and_drops_pending_response() {
    let backend = Arc::new(FakeBackend {
        hits: 1,
        delays: vec![("naruto", 1_000)],
        ..FakeBackend::default()
    });
    let mut search = pipeline(&backend);

    search.on_input("naruto");
    advance(450).await;
    assert_eq!(search.state().panel, SearchPanel::Loading);

    search.on_input("n");
    let cleared = search.state();
    assert_eq!(cleared.phase, SearchPhase::Idle);
    assert_eq!(cleared.panel, SearchPanel::Cleared);

    advance(2_000).await;
    assert_eq!(search.state().panel, SearchPanel::Cleared);
}

#[tokio::test(start_paused = true)]
async fn test_reset_cancels_debounce() {
    let backend = Arc::new(FakeBackend::with_hits(1));
    let mut search = pipeline(&backend);

    search.on_input("naruto");
    advance(100).await;
    search.reset();
    advance(1_000).await;

    assert!(backend.calls().is_empty());
    assert_eq!(search.state().phase, SearchPhase::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_subscribers_see_final_state() {
    let backend = Arc::new(FakeBackend::with_hits(1));
    let mut search = pipeline(&backend);
    let mut rx = search.subscribe();

    search.on_input("haikyuu");
    let rendered = rx
        .wait_for(|s| s.phase == SearchPhase::Rendered)
        .await
        .expect("pipeline alive")
        .clone();
    assert_eq!(rendered.panel, SearchPanel::Results(vec![hit("haikyuu-0")]));
}

#[tokio::test(start_paused = true)]
async fn test_custom_config_applies() {
    let backend = Arc::new(FakeBackend::with_hits(5));
    let config = PipelineConfig {
        debounce: Duration::from_millis(50),
        min_query_chars: 3,
        max_results: 2,
    };
    let mut search = SearchPipeline::with_shared_backend(Arc::clone(&backend), config);

    search.on_input("ab");
    advance(200).await;
    assert!(backend.calls().is_empty());

    search.on_input("abc");
    advance(80).await;
    assert_eq!(backend.calls(), vec!["abc"]);
    advance(100).await;
    match search.state().panel {
        SearchPanel::Results(hits) => assert_eq!(hits.len(), 2),
        other => panic!("expected results, got {other:?}"),
    }
}
