use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TogetherClient;
use crate::store::ReferenceStore;

/// Shared application state injected into all route handlers via Axum extractors.
/// The reference store is constructed once at startup and immutable thereafter,
/// so sharing it through an `Arc` needs no locking.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ReferenceStore>,
    pub llm: TogetherClient,
    /// Kept for handlers that may need runtime settings; currently only read
    /// at startup.
    #[allow(dead_code)]
    pub config: Config,
}
