//! Shared application state for request handlers.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::anthropic::AnthropicClient;
use crate::assessments::AssessmentCatalog;
use crate::chat::ChatService;
use crate::storage::SqliteStorage;

use super::rate::RateLimiter;

/// State shared by all handlers and the rate-limit middleware.
///
/// Cheap to clone: every field is behind an [`Arc`].
#[derive(Debug, Clone)]
pub struct AppState {
    /// Persistence backend.
    pub storage: Arc<SqliteStorage>,
    /// Chat pipeline wired to the live completion client.
    pub chat: Arc<ChatService<Arc<SqliteStorage>, Arc<AnthropicClient>>>,
    /// Built-in assessment catalog.
    pub catalog: Arc<AssessmentCatalog>,
    /// Shared fixed-window rate limiter.
    pub rate_limiter: Arc<Mutex<RateLimiter>>,
}

impl AppState {
    /// Assemble application state from its backing services.
    #[must_use]
    pub fn new(
        storage: Arc<SqliteStorage>,
        client: Arc<AnthropicClient>,
        rate_limit_max_requests: u32,
        rate_limit_window: Duration,
    ) -> Self {
        let chat = Arc::new(ChatService::new(Arc::clone(&storage), client));
        Self {
            storage,
            chat,
            catalog: Arc::new(AssessmentCatalog::new()),
            rate_limiter: Arc::new(Mutex::new(RateLimiter::new(
                rate_limit_max_requests,
                rate_limit_window,
            ))),
        }
    }
}
