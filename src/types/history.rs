use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One watched episode. `ep_slug` is the identity key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    #[serde(default)]
    pub anime_slug: String,
    #[serde(default)]
    pub anime_title: String,
    #[serde(default)]
    pub anime_poster: Option<String>,
    pub ep_slug: String,
    #[serde(default)]
    pub ep_name: String,
    /// Unix epoch milliseconds.
    #[serde(default)]
    pub watched_at: i64,
}

impl HistoryEntry {
    /// Link that resumes this episode.
    pub fn resume_url(&self) -> String {
        crate::navigation::episode_url(&self.ep_slug, &self.anime_slug)
    }
}

/// Last watched episode of a single title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    pub ep_slug: String,
    #[serde(default)]
    pub ep_name: String,
    /// Unix epoch milliseconds.
    #[serde(default)]
    pub saved_at: i64,
}

/// `animeSlug` → last watched episode.
pub type ProgressMap = BTreeMap<String, ProgressRecord>;

/// Arguments of a single "episode opened" event.
#[derive(Debug, Clone, Copy)]
pub struct EpisodeView<'a> {
    pub anime_slug: &'a str,
    pub anime_title: &'a str,
    pub anime_poster: Option<&'a str>,
    pub ep_slug: &'a str,
    pub ep_name: &'a str,
}
