// animeku shared type definitions
// Each submodule defines types used across the crate.

pub mod errors;
pub mod history;
pub mod search;
pub mod settings;
pub mod view;
pub mod watchlist;
