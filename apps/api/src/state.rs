use std::sync::Arc;

use crate::config::Config;
use crate::notify::Notifier;
use crate::store::DocumentStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Postgres-backed when `DATABASE_URL` is set, in-memory otherwise.
    pub store: Arc<dyn DocumentStore>,
    pub notifier: Arc<dyn Notifier>,
    #[allow(dead_code)]
    pub config: Config,
}
