// animeku services
// Search pipeline and its HTTP backend, settings, theme preference.

#[cfg(feature = "network")]
pub mod search_client;
pub mod search_pipeline;
pub mod settings_engine;
pub mod theme_preference;
