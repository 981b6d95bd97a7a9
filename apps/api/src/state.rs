use std::sync::Arc;

use crate::llm_client::ChatModel;
use crate::storage::CalendarStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Storage gateway. Default: PgStore.
    pub store: Arc<dyn CalendarStore>,
    /// Chat-completion backend used by recommendation generation.
    pub llm: Arc<dyn ChatModel>,
}
