// animeku platform paths
//
// - Linux:   $XDG_CONFIG_HOME/animeku, $XDG_DATA_HOME/animeku (XDG defaults otherwise)
// - macOS:   ~/Library/Application Support/animeku
// - Windows: %APPDATA%\animeku

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "animeku";

#[cfg_attr(target_os = "windows", allow(dead_code))]
fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

#[cfg(target_os = "windows")]
fn app_data_dir() -> PathBuf {
    PathBuf::from(
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming")),
    )
    .join(APP_DIR)
}

/// Directory holding `settings.json`.
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        app_data_dir()
    }
    #[cfg(target_os = "macos")]
    {
        home_dir()
            .join("Library")
            .join("Application Support")
            .join(APP_DIR)
    }
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        match env::var("XDG_CONFIG_HOME") {
            Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join(APP_DIR),
            _ => home_dir().join(".config").join(APP_DIR),
        }
    }
}

/// Directory holding the SQLite store.
pub fn get_data_dir() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        app_data_dir()
    }
    #[cfg(target_os = "macos")]
    {
        home_dir()
            .join("Library")
            .join("Application Support")
            .join(APP_DIR)
    }
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        match env::var("XDG_DATA_HOME") {
            Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join(APP_DIR),
            _ => home_dir().join(".local").join("share").join(APP_DIR),
        }
    }
}

/// Default SQLite file location.
pub fn default_database_path() -> PathBuf {
    get_data_dir().join("animeku.db")
}
