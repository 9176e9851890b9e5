use serde::{Deserialize, Serialize};

/// A title the user bookmarked to watch later.
///
/// Field names follow the camelCase layout the site has always stored, so
/// existing watchlists keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistEntry {
    pub slug: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Unix epoch milliseconds.
    #[serde(default)]
    pub added_at: i64,
}

impl WatchlistEntry {
    /// Detail page for this title.
    pub fn detail_url(&self) -> String {
        crate::navigation::detail_url(&self.slug)
    }
}

/// Visual state of the bookmark button on a detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookmarkButtonState {
    pub active: bool,
    pub label: &'static str,
}

impl BookmarkButtonState {
    pub const IN_WATCHLIST_LABEL: &'static str = "✓ In Watchlist";
    pub const ADD_LABEL: &'static str = "+ Watchlist";

    pub fn for_membership(in_list: bool) -> Self {
        Self {
            active: in_list,
            label: if in_list {
                Self::IN_WATCHLIST_LABEL
            } else {
                Self::ADD_LABEL
            },
        }
    }
}

/// Result of a watchlist toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchlistToggle {
    pub added: bool,
    pub notice: super::view::Notice,
    pub button: BookmarkButtonState,
}
