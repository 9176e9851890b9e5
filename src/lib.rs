//! animeku: client-side state for the animeku catalog site.
//!
//! Watchlist, viewing history and resume progress kept in a local key-value
//! store, plus the debounced title search behind the navbar.

pub mod app;
pub mod database;
pub mod logging;
pub mod managers;
pub mod navigation;
pub mod platform;
pub mod services;
pub mod storage;
pub mod types;
pub mod ui;
