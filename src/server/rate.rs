//! Per-client rate limiting middleware.
//!
//! Fixed-window limiting keyed by client IP. Applied to all `/api/`
//! routes; the health endpoint is exempt.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::{Duration, Instant};

use axum::extract::{ConnectInfo, Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use super::error::ApiError;
use super::state::AppState;

/// Fixed-window request counter per key.
#[derive(Debug)]
pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    windows: HashMap<String, (Instant, u32)>,
}

impl RateLimiter {
    #[must_use]
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            windows: HashMap::new(),
        }
    }

    /// Record a request for `key`.
    ///
    /// # Errors
    ///
    /// Returns the number of seconds until the window resets when the
    /// key has exhausted its budget.
    pub fn check(&mut self, key: &str) -> Result<(), u64> {
        let now = Instant::now();
        let entry = self
            .windows
            .entry(key.to_string())
            .or_insert_with(|| (now, 0));

        if now.duration_since(entry.0) >= self.window {
            *entry = (now, 0);
        }

        if entry.1 >= self.max_requests {
            let elapsed = now.duration_since(entry.0);
            let retry_after = self.window.saturating_sub(elapsed).as_secs().max(1);
            return Err(retry_after);
        }

        entry.1 += 1;
        Ok(())
    }
}

/// Extract a rate-limit key from the request.
///
/// Uses the peer IP when available. Requests without connection info
/// (in-process test clients) share a single bucket.
fn rate_key(req: &Request) -> String {
    req.extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map_or_else(|| "local".to_string(), |info| info.0.ip().to_string())
}

/// Per-client rate limiting. Returns 429 if exceeded.
pub async fn limit(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match limit_inner(&state, req, next).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

async fn limit_inner(
    state: &AppState,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let key = rate_key(&req);

    // MutexGuard is !Send, drop before the .await via block scope
    {
        let mut limiter = state
            .rate_limiter
            .lock()
            .map_err(|_| ApiError::Internal("rate limiter lock poisoned".into()))?;

        limiter
            .check(&key)
            .map_err(|retry_after| ApiError::RateLimited { retry_after })?;
    }

    Ok(next.run(req).await)
}
