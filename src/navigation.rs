//! Site routes produced by the controller.

/// `/anime/{slug}`
pub fn detail_url(slug: &str) -> String {
    format!("/anime/{}", encode_component(slug))
}

/// `/episode/{epSlug}?anime={animeSlug}`
pub fn episode_url(ep_slug: &str, anime_slug: &str) -> String {
    format!(
        "/episode/{}?anime={}",
        encode_component(ep_slug),
        encode_component(anime_slug)
    )
}

/// Returns the nav hrefs that should be highlighted for `current_path`.
///
/// A link is active when the path starts with its href; the root link `/`
/// is never highlighted this way because every path would match it.
pub fn active_links<'a>(current_path: &str, hrefs: &[&'a str]) -> Vec<&'a str> {
    hrefs
        .iter()
        .copied()
        .filter(|href| *href != "/" && !href.is_empty() && current_path.starts_with(href))
        .collect()
}

/// Percent-encodes everything outside the RFC 3986 unreserved set.
pub fn encode_component(s: &str) -> String {
    urlencoding::encode(s).into_owned()
}
