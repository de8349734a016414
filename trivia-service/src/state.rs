//! Application state management

use std::sync::Arc;

use crate::config::Config;
use crate::repository::TriviaStore;

/// Application state shared across handlers
///
/// The store is injected so handlers never reach for a global connection.
#[derive(Clone)]
pub struct AppState<S> {
    config: Arc<Config>,
    store: S,
}

impl<S: TriviaStore> AppState<S> {
    pub fn new(config: Config, store: S) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the storage backend
    pub fn store(&self) -> &S {
        &self.store
    }
}
