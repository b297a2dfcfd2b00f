//! Shared application state for request handlers.

use std::sync::Arc;
use tera::Tera;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Read-only after startup; handlers never take a lock.
#[derive(Clone)]
pub struct AppState {
    pub tera: Arc<Tera>,
}

impl AppState {
    /// Creates a new application state from the compiled templates.
    pub fn new(tera: Tera) -> Self {
        Self {
            tera: Arc::new(tera),
        }
    }
}
