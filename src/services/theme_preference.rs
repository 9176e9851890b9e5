//! Persisted dark/light preference. Applying it to the page is the shell's job.
//!
//! The site stores the bare word (`dark` or `light`), not JSON, so this goes
//! through the store's raw accessors.

use tracing::debug;

use crate::storage::{keys, StorageBackend, Store};
use crate::types::settings::ThemeMode;

pub struct ThemePreference<'a, B> {
    store: &'a Store<B>,
}

impl<'a, B: StorageBackend> ThemePreference<'a, B> {
    pub fn new(store: &'a Store<B>) -> Self {
        Self { store }
    }

    /// Stored mode, dark when nothing valid is stored.
    pub fn current(&self) -> ThemeMode {
        self.store
            .load_raw(keys::THEME)
            .and_then(|value| ThemeMode::parse(&value))
            .unwrap_or_default()
    }

    pub fn set(&self, mode: ThemeMode) {
        self.store.save_raw(keys::THEME, mode.as_str());
    }

    /// Flips between dark and light and returns the new mode.
    pub fn toggle(&self) -> ThemeMode {
        let next = self.current().toggled();
        self.set(next);
        debug!(?next, "theme toggled");
        next
    }
}
