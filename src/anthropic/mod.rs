//! Anthropic API client.
//!
//! This module provides:
//! - Direct Claude API integration
//! - Retry logic with exponential backoff
//! - Request validation with size limits
//!
//! # Architecture
//!
//! The client uses `reqwest` for HTTP. Failed requests are retried with
//! exponential backoff when the error is transient (rate limits, overload,
//! timeouts, network failures); authentication and validation errors fail
//! immediately.

mod client;
mod config;
mod types;

pub use client::{AnthropicClient, MAX_CONTENT_LENGTH, MAX_MESSAGES};
pub use config::{
    ClientConfig, DEFAULT_BASE_URL, DEFAULT_MAX_RETRIES, DEFAULT_MAX_TOKENS, DEFAULT_MODEL,
    DEFAULT_RETRY_DELAY_MS, DEFAULT_TIMEOUT_MS,
};
pub use types::{ApiMessage, ApiRequest, ApiResponse, ApiUsage, ContentBlock};
