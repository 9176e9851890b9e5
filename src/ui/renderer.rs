//! Turns view-models into HTML fragments for the collection page and the
//! search dropdown.
//!
//! Pure functions: nothing here reads storage. Entries missing their key
//! are skipped one by one; missing posters get the placeholder image and
//! missing type badges are omitted.

use std::fmt::Write;

use chrono::DateTime;
use tracing::debug;

use crate::types::search::SearchHit;
use crate::types::view::{HistoryView, Notice, SearchPanel, WatchlistView};
use crate::types::watchlist::WatchlistEntry;

pub const PLACEHOLDER_POSTER: &str = "/static/img/placeholder.svg";

const PLAY_ICON: &str = r#"<svg width="18" height="18" viewBox="0 0 24 24" fill="currentColor"><path d="M5 3l14 9-14 9V3z"/></svg>"#;

/// Escapes text for use in element content and quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn poster_src(poster: Option<&str>) -> String {
    escape_html(poster.filter(|p| !p.trim().is_empty()).unwrap_or(PLACEHOLDER_POSTER))
}

fn empty_state(heading: &str, hint: &str) -> String {
    format!(
        r#"<div class="empty-state"><h3>{}</h3><p>{}</p></div>"#,
        escape_html(heading),
        escape_html(hint)
    )
}

fn added_date(added_at: i64) -> String {
    DateTime::from_timestamp_millis(added_at)
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_default()
}

fn watchlist_card(entry: &WatchlistEntry) -> String {
    let slug = escape_html(&entry.slug);
    let title = escape_html(&entry.title);
    let badge = entry
        .kind
        .as_deref()
        .filter(|k| !k.is_empty())
        .map(|k| format!(r#"<span class="card-badge type">{}</span>"#, escape_html(k)))
        .unwrap_or_default();
    format!(
        r#"<a href="{href}" class="anime-card" data-slug="{slug}"><div class="card-poster"><img src="{poster}" alt="{title}" loading="lazy">{badge}<button class="wl-delete-btn" data-action="remove-watchlist" data-slug="{slug}" title="Remove">×</button></div><div class="card-info"><div class="card-title">{title}</div><div class="card-meta"><span class="card-status">{date}</span></div></div></a>"#,
        href = escape_html(&entry.detail_url()),
        poster = poster_src(entry.poster.as_deref()),
        date = added_date(entry.added_at),
    )
}

pub fn render_watchlist(view: &WatchlistView) -> String {
    let entries = match view {
        WatchlistView::Empty => {
            return empty_state("Your watchlist is empty", "Add favourites from any title page!")
        }
        WatchlistView::Entries(entries) => entries,
    };

    let mut html = String::from(r#"<div class="anime-grid lg">"#);
    for entry in entries {
        if entry.slug.is_empty() {
            debug!("skipping watchlist entry without slug");
            continue;
        }
        html.push_str(&watchlist_card(entry));
    }
    html.push_str("</div>");
    html
}

pub fn render_history(view: &HistoryView) -> String {
    let items = match view {
        HistoryView::Empty => return empty_state("No history yet", "Start watching something!"),
        HistoryView::Entries(items) => items,
    };

    let mut html = String::from(r#"<div class="history-list">"#);
    for item in items {
        let entry = &item.entry;
        if entry.ep_slug.is_empty() {
            debug!("skipping history entry without episode slug");
            continue;
        }
        let _ = write!(
            html,
            r#"<div class="history-item"><a href="{href}" class="history-link"><img src="{poster}" alt="{title}"><div class="history-info"><div class="history-title">{title}</div><div class="history-ep">{ep}</div><div class="history-time">{when}</div></div>{icon}</a><button class="wl-delete-btn" data-action="remove-history" data-ep-slug="{ep_slug}" title="Remove from history">×</button></div>"#,
            href = escape_html(&entry.resume_url()),
            poster = poster_src(entry.anime_poster.as_deref()),
            title = escape_html(&entry.anime_title),
            ep = escape_html(&entry.ep_name),
            when = escape_html(&item.watched_label),
            icon = PLAY_ICON,
            ep_slug = escape_html(&entry.ep_slug),
        );
    }
    html.push_str("</div>");
    html
}

fn search_result(hit: &SearchHit) -> String {
    let mut meta = hit.kind.clone().unwrap_or_default();
    if let Some(ep) = hit.episode.as_deref().filter(|e| !e.is_empty()) {
        if !meta.is_empty() {
            meta.push(' ');
        }
        meta.push_str("· ");
        meta.push_str(ep);
    }
    format!(
        r#"<a href="{href}" class="search-result-item"><img src="{poster}" alt="{title}"><div class="search-result-info"><div class="title">{title}</div><div class="meta">{meta}</div></div></a>"#,
        href = escape_html(&hit.detail_url()),
        poster = poster_src(hit.poster.as_deref()),
        title = escape_html(&hit.title),
        meta = escape_html(&meta),
    )
}

fn search_message(text: &str) -> String {
    format!(r#"<div class="search-message">{}</div>"#, escape_html(text))
}

pub fn render_search_panel(panel: &SearchPanel) -> String {
    match panel {
        SearchPanel::Cleared => String::new(),
        SearchPanel::Loading => search_message("Searching..."),
        SearchPanel::NotFound => search_message("Not found"),
        SearchPanel::LoadFailed => search_message("Failed to load"),
        SearchPanel::Results(hits) => hits
            .iter()
            .filter(|hit| !hit.slug.is_empty())
            .map(search_result)
            .collect(),
    }
}

pub fn render_toast(notice: Notice) -> String {
    format!(r#"<div class="toast">{}</div>"#, escape_html(notice.message()))
}
