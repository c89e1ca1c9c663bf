//! Shared application state.

use passage_core::PlanningCatalog;

/// Application state: the static planning catalog, loaded once at startup.
/// Everything here is read-only, so concurrent request handling needs no
/// locking.
pub struct AppState {
    catalog: PlanningCatalog,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            catalog: PlanningCatalog::chesapeake(),
        }
    }

    pub fn catalog(&self) -> &PlanningCatalog {
        &self.catalog
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
