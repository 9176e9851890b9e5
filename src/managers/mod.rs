// animeku state managers
// Managers own the collection invariants (identity, order, cap) and persist
// through a shared `Store`. They return view-models; they never render.

pub mod history_manager;
pub mod watchlist_manager;

/// Gate in front of destructive bulk operations.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}
