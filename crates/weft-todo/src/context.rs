//! Application context - shared state for the server.

use std::sync::Arc;

use tracing::info;

use crate::pages::Pages;
use crate::store::TaskStore;

/// Configuration for the application server.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Title shown on every page
    pub title: String,

    /// Number of demo tasks to seed the store with at startup
    pub seed: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3333,
            title: "Example Rust web app".to_string(),
            seed: 0,
        }
    }
}

/// Shared context for the application server.
///
/// Holds the compiled page templates and the task store. Templates are
/// immutable and rendered concurrently by request handlers without
/// synchronization; the store synchronizes internally.
pub struct AppContext {
    store: TaskStore,
    pages: Pages,
    title: String,
}

impl AppContext {
    /// Build the context: compile the page templates and seed the store.
    pub fn new(config: &AppConfig) -> Self {
        let store = TaskStore::new();
        for n in 1..=config.seed {
            store.add(format!("demo task #{n}"));
        }
        if config.seed > 0 {
            info!(count = config.seed, "Seeded demo tasks");
        }

        Self {
            store,
            pages: Pages::build(),
            title: config.title.clone(),
        }
    }

    /// Get a handle to the task store.
    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Get the compiled pages.
    pub fn pages(&self) -> &Pages {
        &self.pages
    }

    /// Get the site title.
    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Type alias for the shared context used in axum handlers.
pub type SharedContext = Arc<AppContext>;
