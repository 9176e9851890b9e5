//! Page controller for animeku.
//!
//! Owns the session [`Store`] and knows which surfaces are mounted on the
//! current page: the detail-page bookmark button and the collection page's
//! watchlist and history panels. Every user action goes through a manager
//! and then re-renders whichever of those surfaces exist, so they never
//! disagree with stored state.

use tracing::{debug, info};

use crate::managers::history_manager::{HistoryManager, HistoryManagerTrait};
use crate::managers::watchlist_manager::{WatchlistManager, WatchlistManagerTrait};
use crate::managers::Confirm;
use crate::platform;
use crate::services::theme_preference::ThemePreference;
use crate::storage::{SqliteStorage, StorageBackend, Store};
use crate::types::errors::StorageError;
use crate::types::history::EpisodeView;
use crate::types::settings::AppSettings;
use crate::types::view::{CollectionTab, Notice};
use crate::types::watchlist::BookmarkButtonState;
use crate::ui::renderer;

/// Title attributes carried by the detail page's hero element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailContext {
    pub slug: String,
    pub title: String,
    pub poster: Option<String>,
    pub kind: Option<String>,
}

impl DetailContext {
    /// Builds the context from hero data attributes (`anime-slug`,
    /// `anime-title`, `anime-poster`, `anime-type`). Returns `None` when the
    /// slug is absent or empty: the page is not a detail page.
    pub fn from_attributes<'a, F>(get: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let slug = get("anime-slug").map(str::trim).filter(|s| !s.is_empty())?;
        let optional = |name: &str| {
            get(name)
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };
        Some(Self {
            slug: slug.to_string(),
            title: get("anime-title").unwrap_or_default().to_string(),
            poster: optional("anime-poster"),
            kind: optional("anime-type"),
        })
    }
}

/// Which surfaces exist on the current page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContext {
    pub detail: Option<DetailContext>,
    pub collection_mounted: bool,
    pub active_tab: CollectionTab,
}

/// Fresh output for every surface an action touched. `None` leaves a
/// surface as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurfaceUpdate {
    pub bookmark_button: Option<BookmarkButtonState>,
    pub watchlist_html: Option<String>,
    pub history_html: Option<String>,
    pub toast: Option<Notice>,
}

pub struct App<B> {
    store: Store<B>,
    settings: AppSettings,
    page: PageContext,
}

impl App<SqliteStorage> {
    /// Opens the SQLite store named in `settings`, or the platform default.
    pub fn open(settings: AppSettings) -> Result<Self, StorageError> {
        let path = settings
            .storage
            .database_path
            .clone()
            .unwrap_or_else(platform::default_database_path);
        info!(path = %path.display(), "opening store");
        Ok(Self::new(SqliteStorage::open(path)?, settings))
    }
}

impl<B: StorageBackend> App<B> {
    pub fn new(backend: B, settings: AppSettings) -> Self {
        let store = Store::with_prefix(backend, settings.storage.key_prefix.clone());
        Self {
            store,
            settings,
            page: PageContext::default(),
        }
    }

    pub fn store(&self) -> &Store<B> {
        &self.store
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn page(&self) -> &PageContext {
        &self.page
    }

    pub fn watchlist(&self) -> WatchlistManager<'_, B> {
        WatchlistManager::new(&self.store)
    }

    pub fn history(&self) -> HistoryManager<'_, B> {
        HistoryManager::with_capacity(&self.store, self.settings.history.max_entries)
    }

    pub fn theme(&self) -> ThemePreference<'_, B> {
        ThemePreference::new(&self.store)
    }

    /// Attaches the controller to a freshly loaded page and renders every
    /// surface it has.
    pub fn mount(&mut self, page: PageContext) -> SurfaceUpdate {
        debug!(
            detail = page.detail.as_ref().map(|d| d.slug.as_str()),
            collection = page.collection_mounted,
            "page mounted"
        );
        self.page = page;
        SurfaceUpdate {
            bookmark_button: self.detail_button(),
            watchlist_html: self.watchlist_html(),
            history_html: self.history_html(),
            toast: None,
        }
    }

    pub fn select_tab(&mut self, tab: CollectionTab) {
        self.page.active_tab = tab;
    }

    /// Bookmark button on a detail page. Does nothing off detail pages.
    pub fn on_bookmark_clicked(&mut self) -> SurfaceUpdate {
        let Some(detail) = self.page.detail.clone() else {
            return SurfaceUpdate::default();
        };
        self.toggle_watchlist(
            &detail.slug,
            &detail.title,
            detail.poster.as_deref(),
            detail.kind.as_deref(),
        )
    }

    pub fn toggle_watchlist(
        &mut self,
        slug: &str,
        title: &str,
        poster: Option<&str>,
        kind: Option<&str>,
    ) -> SurfaceUpdate {
        if slug.is_empty() {
            return SurfaceUpdate::default();
        }
        let outcome = self.watchlist().toggle(slug, title, poster, kind);
        let on_this_title = self.page.detail.as_ref().is_some_and(|d| d.slug == slug);
        SurfaceUpdate {
            bookmark_button: on_this_title.then_some(outcome.button),
            watchlist_html: self.watchlist_html(),
            history_html: None,
            toast: Some(outcome.notice),
        }
    }

    pub fn remove_watchlist_item(&mut self, slug: &str) -> SurfaceUpdate {
        let notice = self.watchlist().remove(slug);
        SurfaceUpdate {
            bookmark_button: self.detail_button(),
            watchlist_html: self.watchlist_html(),
            history_html: None,
            toast: Some(notice),
        }
    }

    pub fn clear_watchlist(&mut self, confirm: &mut dyn Confirm) -> SurfaceUpdate {
        let Some(notice) = self.watchlist().clear(confirm) else {
            return SurfaceUpdate::default();
        };
        SurfaceUpdate {
            bookmark_button: self.detail_button(),
            watchlist_html: self.watchlist_html(),
            history_html: None,
            toast: Some(notice),
        }
    }

    /// An episode page was opened.
    pub fn on_episode_opened(&mut self, view: EpisodeView<'_>) -> SurfaceUpdate {
        if !self.history().record_view(view) {
            return SurfaceUpdate::default();
        }
        SurfaceUpdate {
            history_html: self.history_html(),
            ..SurfaceUpdate::default()
        }
    }

    pub fn remove_history_item(&mut self, ep_slug: &str) -> SurfaceUpdate {
        let notice = self.history().remove(ep_slug);
        SurfaceUpdate {
            history_html: self.history_html(),
            toast: Some(notice),
            ..SurfaceUpdate::default()
        }
    }

    pub fn clear_history(&mut self, confirm: &mut dyn Confirm) -> SurfaceUpdate {
        let Some(notice) = self.history().clear(confirm) else {
            return SurfaceUpdate::default();
        };
        SurfaceUpdate {
            history_html: self.history_html(),
            toast: Some(notice),
            ..SurfaceUpdate::default()
        }
    }

    /// "Clear all" on the collection page acts on the visible tab.
    pub fn clear_active(&mut self, confirm: &mut dyn Confirm) -> SurfaceUpdate {
        match self.page.active_tab {
            CollectionTab::Watchlist => self.clear_watchlist(confirm),
            CollectionTab::History => self.clear_history(confirm),
        }
    }

    fn detail_button(&self) -> Option<BookmarkButtonState> {
        let detail = self.page.detail.as_ref()?;
        Some(self.watchlist().button_state(&detail.slug))
    }

    fn watchlist_html(&self) -> Option<String> {
        self.page
            .collection_mounted
            .then(|| renderer::render_watchlist(&self.watchlist().render()))
    }

    fn history_html(&self) -> Option<String> {
        self.page
            .collection_mounted
            .then(|| renderer::render_history(&self.history().render()))
    }
}
