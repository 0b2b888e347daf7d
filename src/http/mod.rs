//! HTTP client module
//!
//! A reqwest-based client with automatic retries, backoff, and token-bucket
//! rate limiting. The Sell API is read-only for this connector, so only GET
//! is exposed.

mod client;
mod rate_limit;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
