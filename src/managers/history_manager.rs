//! History Manager for animeku.
//!
//! Implements `HistoryManagerTrait`: recording watched episodes, the
//! per-title resume pointer, removal and clearing. History lives under the
//! `history` key, the resume pointers under `progress`.

use tracing::{debug, info};

use super::Confirm;
use crate::storage::{keys, now_millis, StorageBackend, Store};
use crate::types::history::{EpisodeView, HistoryEntry, ProgressMap, ProgressRecord};
use crate::types::view::{HistoryItem, HistoryView, Notice};

/// Default history cap.
pub const DEFAULT_MAX_ENTRIES: usize = 50;

pub const CLEAR_PROMPT: &str = "Remove your whole viewing history?";

/// Trait defining history and progress operations.
pub trait HistoryManagerTrait {
    /// Records an opened episode. Returns `false` (and changes nothing) when
    /// the anime slug is empty.
    fn record_view(&mut self, view: EpisodeView<'_>) -> bool;
    fn remove(&mut self, ep_slug: &str) -> Notice;
    /// Empties history and progress if `confirm` agrees. Returns `None`
    /// when declined.
    fn clear(&mut self, confirm: &mut dyn Confirm) -> Option<Notice>;
    fn list(&self) -> Vec<HistoryEntry>;
    fn progress(&self) -> ProgressMap;
    fn progress_for(&self, anime_slug: &str) -> Option<ProgressRecord>;
    fn render(&self) -> HistoryView;
}

/// History manager borrowing the session store.
pub struct HistoryManager<'a, B> {
    store: &'a Store<B>,
    max_entries: usize,
}

impl<'a, B: StorageBackend> HistoryManager<'a, B> {
    pub fn new(store: &'a Store<B>) -> Self {
        Self::with_capacity(store, DEFAULT_MAX_ENTRIES)
    }

    pub fn with_capacity(store: &'a Store<B>, max_entries: usize) -> Self {
        Self { store, max_entries }
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Same as [`HistoryManagerTrait::render`] with an explicit clock.
    pub fn render_at(&self, now_ms: i64) -> HistoryView {
        let hist = self.load();
        if hist.is_empty() {
            return HistoryView::Empty;
        }
        HistoryView::Entries(
            hist.into_iter()
                .map(|entry| HistoryItem {
                    watched_label: relative_label(entry.watched_at, now_ms),
                    entry,
                })
                .collect(),
        )
    }

    fn load(&self) -> Vec<HistoryEntry> {
        self.store.load(keys::HISTORY, Vec::new())
    }
}

impl<'a, B: StorageBackend> HistoryManagerTrait for HistoryManager<'a, B> {
    fn record_view(&mut self, view: EpisodeView<'_>) -> bool {
        if view.anime_slug.is_empty() {
            debug!(ep_slug = view.ep_slug, "episode opened without anime context, not recorded");
            return false;
        }
        let now = now_millis();

        let mut hist = self.load();
        hist.retain(|h| h.ep_slug != view.ep_slug);
        hist.insert(
            0,
            HistoryEntry {
                anime_slug: view.anime_slug.to_string(),
                anime_title: view.anime_title.to_string(),
                anime_poster: view
                    .anime_poster
                    .filter(|p| !p.is_empty())
                    .map(str::to_string),
                ep_slug: view.ep_slug.to_string(),
                ep_name: view.ep_name.to_string(),
                watched_at: now,
            },
        );
        hist.truncate(self.max_entries);
        self.store.save(keys::HISTORY, &hist);

        let mut progress: ProgressMap = self.store.load(keys::PROGRESS, ProgressMap::new());
        progress.insert(
            view.anime_slug.to_string(),
            ProgressRecord {
                ep_slug: view.ep_slug.to_string(),
                ep_name: view.ep_name.to_string(),
                saved_at: now,
            },
        );
        self.store.save(keys::PROGRESS, &progress);

        debug!(
            anime_slug = view.anime_slug,
            ep_slug = view.ep_slug,
            size = hist.len(),
            "episode recorded"
        );
        true
    }

    fn remove(&mut self, ep_slug: &str) -> Notice {
        let mut hist = self.load();
        hist.retain(|h| h.ep_slug != ep_slug);
        self.store.save(keys::HISTORY, &hist);
        debug!(ep_slug, "history entry removed");
        Notice::HistoryEntryRemoved
    }

    fn clear(&mut self, confirm: &mut dyn Confirm) -> Option<Notice> {
        if !confirm.confirm(CLEAR_PROMPT) {
            return None;
        }
        self.store.save(keys::HISTORY, &Vec::<HistoryEntry>::new());
        self.store.save(keys::PROGRESS, &ProgressMap::new());
        info!("history and progress cleared");
        Some(Notice::HistoryCleared)
    }

    fn list(&self) -> Vec<HistoryEntry> {
        self.load()
    }

    fn progress(&self) -> ProgressMap {
        self.store.load(keys::PROGRESS, ProgressMap::new())
    }

    fn progress_for(&self, anime_slug: &str) -> Option<ProgressRecord> {
        self.progress().remove(anime_slug)
    }

    fn render(&self) -> HistoryView {
        self.render_at(now_millis())
    }
}

/// Coarse "time ago" label: whole minutes, hours or days, floored.
/// Timestamps in the future read as "just now".
pub fn relative_label(then_ms: i64, now_ms: i64) -> String {
    let secs = now_ms.saturating_sub(then_ms).max(0) / 1000;
    if secs < 60 {
        "just now".to_string()
    } else if secs < 3_600 {
        format!("{} minutes ago", secs / 60)
    } else if secs < 86_400 {
        format!("{} hours ago", secs / 3_600)
    } else {
        format!("{} days ago", secs / 86_400)
    }
}
