//! animeku command-line front end.
//!
//! `demo` walks the watchlist/history flow against an in-memory store,
//! `collection` prints the rendered collection page from the persistent
//! store, and `search` runs one debounced lookup against the site.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::warn;

use animeku::app::{App, DetailContext, PageContext, SurfaceUpdate};
use animeku::managers::history_manager::HistoryManagerTrait;
use animeku::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use animeku::storage::{MemoryStorage, StorageBackend};
use animeku::types::history::EpisodeView;
use animeku::types::settings::AppSettings;
use animeku::types::view::CollectionTab;

#[derive(Parser, Debug)]
#[command(name = "animeku", version, about = "Watchlist, history and search for animeku")]
struct Cli {
    /// Settings file (defaults to the platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Exercise the collection flow on a throwaway store
    Demo,
    /// Print the collection page rendered from the persistent store
    Collection,
    /// Toggle the stored colour scheme
    Theme,
    /// Search the catalog
    Search { query: String },
}

fn load_settings(path: Option<PathBuf>) -> AppSettings {
    let mut engine = SettingsEngine::new(path);
    match engine.load() {
        Ok(settings) => settings,
        Err(e) => {
            warn!(error = %e, "could not load settings, using defaults");
            AppSettings::default()
        }
    }
}

fn print_update(update: &SurfaceUpdate) {
    if let Some(button) = update.bookmark_button {
        println!("  [button] {} (active: {})", button.label, button.active);
    }
    if let Some(notice) = update.toast {
        println!("  [toast]  {}", notice);
    }
    if let Some(html) = &update.watchlist_html {
        println!("  [watchlist] {} bytes", html.len());
    }
    if let Some(html) = &update.history_html {
        println!("  [history]   {} bytes", html.len());
    }
}

fn run_demo<B: StorageBackend>(app: &mut App<B>) {
    let detail = DetailContext {
        slug: "sousou-no-frieren".to_string(),
        title: "Sousou no Frieren".to_string(),
        poster: None,
        kind: Some("TV".to_string()),
    };
    print_update(&app.mount(PageContext {
        detail: Some(detail),
        collection_mounted: true,
        active_tab: CollectionTab::Watchlist,
    }));

    println!("bookmark click:");
    print_update(&app.on_bookmark_clicked());

    println!("episodes opened:");
    for ep in 1..=3 {
        let ep_slug = format!("sousou-no-frieren-episode-{ep}");
        let ep_name = format!("Episode {ep}");
        print_update(&app.on_episode_opened(EpisodeView {
            anime_slug: "sousou-no-frieren",
            anime_title: "Sousou no Frieren",
            anime_poster: None,
            ep_slug: &ep_slug,
            ep_name: &ep_name,
        }));
    }

    if let Some(progress) = app.history().progress_for("sousou-no-frieren") {
        println!("resume at: {} ({})", progress.ep_name, progress.ep_slug);
    }

    println!("clear history (declined):");
    print_update(&app.clear_history(&mut |_: &str| false));
    println!("bookmark click again:");
    print_update(&app.on_bookmark_clicked());
}

#[cfg(feature = "network")]
async fn run_search(settings: &AppSettings, query: &str) -> Result<(), Box<dyn std::error::Error>> {
    use animeku::services::search_client::HttpSearchClient;
    use animeku::services::search_pipeline::{PipelineConfig, SearchPipeline};
    use animeku::types::view::SearchPhase;
    use animeku::ui::renderer;

    let client = HttpSearchClient::new(&settings.search)?;
    let mut pipeline = SearchPipeline::new(client, PipelineConfig::from(&settings.search));
    let mut updates = pipeline.subscribe();
    pipeline.on_input(query);

    loop {
        updates.changed().await?;
        let state = updates.borrow_and_update().clone();
        match state.phase {
            SearchPhase::Rendered | SearchPhase::Empty | SearchPhase::Failed => {
                println!("{}", renderer::render_search_panel(&state.panel));
                return Ok(());
            }
            SearchPhase::Idle => {
                println!("query too short");
                return Ok(());
            }
            SearchPhase::Debouncing | SearchPhase::Pending => {}
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    animeku::logging::init();
    let cli = Cli::parse();
    let settings = load_settings(cli.config);

    match cli.command.unwrap_or(Command::Demo) {
        Command::Demo => {
            let mut app = App::new(MemoryStorage::new(), settings);
            run_demo(&mut app);
        }
        Command::Collection => {
            let mut app = App::open(settings)?;
            let update = app.mount(PageContext {
                detail: None,
                collection_mounted: true,
                active_tab: CollectionTab::Watchlist,
            });
            println!("{}", update.watchlist_html.unwrap_or_default());
            println!("{}", update.history_html.unwrap_or_default());
        }
        Command::Theme => {
            let app = App::open(settings)?;
            println!("theme: {:?}", app.theme().toggle());
        }
        #[cfg(feature = "network")]
        Command::Search { query } => run_search(&settings, &query).await?,
        #[cfg(not(feature = "network"))]
        Command::Search { .. } => {
            return Err("built without the `network` feature".into());
        }
    }
    Ok(())
}
