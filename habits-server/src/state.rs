//! Shared application state for the HTTP server.

use std::sync::Arc;

use habits::io::HabitStore;

/// Shared state accessible from all request handlers.
///
/// Holds no habit data itself: every handler reads the collection fresh
/// from the store.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn HabitStore>,
}

impl AppState {
    pub fn new(store: impl HabitStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn store(&self) -> &dyn HabitStore {
        self.store.as_ref()
    }
}
