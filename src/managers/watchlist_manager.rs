//! Watchlist Manager for animeku.
//!
//! Implements `WatchlistManagerTrait`: toggling, removing and clearing
//! bookmarked titles, persisted under the `watchlist` key.

use std::collections::HashSet;

use tracing::{debug, info};

use super::Confirm;
use crate::storage::{keys, now_millis, StorageBackend, Store};
use crate::types::view::{Notice, WatchlistView};
use crate::types::watchlist::{BookmarkButtonState, WatchlistEntry, WatchlistToggle};

pub const CLEAR_PROMPT: &str = "Remove everything from your watchlist?";

/// Trait defining watchlist operations.
pub trait WatchlistManagerTrait {
    fn toggle(
        &mut self,
        slug: &str,
        title: &str,
        poster: Option<&str>,
        kind: Option<&str>,
    ) -> WatchlistToggle;
    fn remove(&mut self, slug: &str) -> Notice;
    /// Empties the watchlist if `confirm` agrees. Returns `None` when declined.
    fn clear(&mut self, confirm: &mut dyn Confirm) -> Option<Notice>;
    fn contains(&self, slug: &str) -> bool;
    fn list(&self) -> Vec<WatchlistEntry>;
    fn button_state(&self, slug: &str) -> BookmarkButtonState;
    fn render(&self) -> WatchlistView;
}

/// Watchlist manager borrowing the session store.
pub struct WatchlistManager<'a, B> {
    store: &'a Store<B>,
}

impl<'a, B: StorageBackend> WatchlistManager<'a, B> {
    pub fn new(store: &'a Store<B>) -> Self {
        Self { store }
    }

    fn load(&self) -> Vec<WatchlistEntry> {
        self.store.load(keys::WATCHLIST, Vec::new())
    }

    fn persist(&self, list: &[WatchlistEntry]) {
        self.store.save(keys::WATCHLIST, list);
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

impl<'a, B: StorageBackend> WatchlistManagerTrait for WatchlistManager<'a, B> {
    fn toggle(
        &mut self,
        slug: &str,
        title: &str,
        poster: Option<&str>,
        kind: Option<&str>,
    ) -> WatchlistToggle {
        let mut list = self.load();
        let added = if list.iter().any(|e| e.slug == slug) {
            list.retain(|e| e.slug != slug);
            false
        } else {
            list.insert(
                0,
                WatchlistEntry {
                    slug: slug.to_string(),
                    title: title.to_string(),
                    poster: non_empty(poster),
                    kind: non_empty(kind),
                    added_at: now_millis(),
                },
            );
            true
        };
        // Entries written by older sessions may carry duplicates.
        let mut seen = HashSet::new();
        list.retain(|e| seen.insert(e.slug.clone()));
        self.persist(&list);
        debug!(slug, added, size = list.len(), "watchlist toggled");

        WatchlistToggle {
            added,
            notice: if added {
                Notice::AddedToWatchlist
            } else {
                Notice::RemovedFromWatchlist
            },
            button: BookmarkButtonState::for_membership(added),
        }
    }

    fn remove(&mut self, slug: &str) -> Notice {
        let mut list = self.load();
        list.retain(|e| e.slug != slug);
        self.persist(&list);
        debug!(slug, "watchlist entry removed");
        Notice::RemovedFromWatchlist
    }

    fn clear(&mut self, confirm: &mut dyn Confirm) -> Option<Notice> {
        if !confirm.confirm(CLEAR_PROMPT) {
            return None;
        }
        self.persist(&[]);
        info!("watchlist cleared");
        Some(Notice::WatchlistCleared)
    }

    fn contains(&self, slug: &str) -> bool {
        self.load().iter().any(|e| e.slug == slug)
    }

    fn list(&self) -> Vec<WatchlistEntry> {
        self.load()
    }

    fn button_state(&self, slug: &str) -> BookmarkButtonState {
        BookmarkButtonState::for_membership(self.contains(slug))
    }

    fn render(&self) -> WatchlistView {
        let list = self.load();
        if list.is_empty() {
            WatchlistView::Empty
        } else {
            WatchlistView::Entries(list)
        }
    }
}
