//! View-models handed from the managers to the renderer.

use super::history::HistoryEntry;
use super::search::SearchHit;
use super::watchlist::WatchlistEntry;

/// Short confirmation shown as a toast after a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    AddedToWatchlist,
    RemovedFromWatchlist,
    WatchlistCleared,
    HistoryEntryRemoved,
    HistoryCleared,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::AddedToWatchlist => "Added to watchlist ❤️",
            Notice::RemovedFromWatchlist => "Removed from watchlist",
            Notice::WatchlistCleared => "Watchlist cleared",
            Notice::HistoryEntryRemoved => "History entry removed",
            Notice::HistoryCleared => "History cleared",
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchlistView {
    Empty,
    Entries(Vec<WatchlistEntry>),
}

impl WatchlistView {
    pub fn is_empty(&self) -> bool {
        matches!(self, WatchlistView::Empty)
    }
}

/// A history entry paired with its relative time label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryItem {
    pub entry: HistoryEntry,
    pub watched_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryView {
    Empty,
    Entries(Vec<HistoryItem>),
}

impl HistoryView {
    pub fn is_empty(&self) -> bool {
        matches!(self, HistoryView::Empty)
    }
}

/// Tabs on the collection page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollectionTab {
    #[default]
    Watchlist,
    History,
}

// === Search ===

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    Debouncing,
    Pending,
    Rendered,
    Empty,
    Failed,
}

/// What the search dropdown currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchPanel {
    #[default]
    Cleared,
    Loading,
    Results(Vec<SearchHit>),
    NotFound,
    LoadFailed,
}

/// Snapshot published by the search pipeline after every transition.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchState {
    pub query: String,
    pub phase: SearchPhase,
    pub panel: SearchPanel,
}
