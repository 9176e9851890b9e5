use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

/// A single title returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub slug: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub poster: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub episode: Option<String>,
}

impl SearchHit {
    pub fn detail_url(&self) -> String {
        crate::navigation::detail_url(&self.slug)
    }
}

/// Raw body of `GET /api/search/{query}`.
///
/// The backend has shipped the list under two different keys over time.
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    animes: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    anime_list: Option<Vec<serde_json::Value>>,
}

impl SearchResponse {
    /// Extracts the hit list. `animes` wins over `anime_list`; neither means
    /// no results. Records that do not parse are skipped.
    pub fn into_hits(self) -> Vec<SearchHit> {
        let raw = self.animes.or(self.anime_list).unwrap_or_default();
        raw.into_iter()
            .filter_map(|value| match serde_json::from_value::<SearchHit>(value) {
                Ok(hit) => Some(hit),
                Err(e) => {
                    debug!(error = %e, "skipping malformed search record");
                    None
                }
            })
            .collect()
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
