//! Sell API client implementation

use crate::config::TapConfig;
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig, RateLimiterConfig, RequestConfig};
use crate::types::{CustomFieldDefinition, ResourceType};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Page size for paginated collection endpoints
pub const PER_PAGE: usize = 100;

/// Source of custom field definitions.
///
/// The schema builder depends on this trait rather than on [`SellClient`]
/// directly. Definitions are fetched fresh on every call; implementations
/// must not cache.
#[async_trait]
pub trait CustomFieldSource: Send + Sync {
    /// Fetch all custom field definitions for a resource type
    async fn get_custom_fields(
        &self,
        resource: ResourceType,
    ) -> Result<Vec<CustomFieldDefinition>>;
}

/// Sell v2 collection envelope: `{"items": [{"data": {...}, "meta": {...}}]}`
#[derive(Debug, Deserialize)]
struct ItemsEnvelope {
    #[serde(default)]
    items: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct Item {
    data: CustomFieldDefinition,
}

/// Authenticated client for the Zendesk Sell v2 API
pub struct SellClient {
    http: HttpClient,
}

impl SellClient {
    /// Create a client from tap configuration
    pub fn new(config: &TapConfig) -> Result<Self> {
        config.validate()?;

        let backoff = &config.http.retry_backoff;
        let http_config = HttpClientConfig::builder()
            .base_url(config.base_url.clone())
            .timeout(Duration::from_secs(config.http.timeout_seconds))
            .max_retries(config.http.max_retries)
            .backoff(
                backoff.backoff_type,
                Duration::from_millis(backoff.initial_ms),
                Duration::from_millis(backoff.max_ms),
            )
            .rate_limit(RateLimiterConfig::new(
                config.http.requests_per_second,
                config.http.requests_per_second,
            ))
            .bearer_token(&config.access_token)
            .build();

        Ok(Self {
            http: HttpClient::with_config(http_config),
        })
    }

    /// Verify the configured credentials by fetching the current user
    pub async fn check(&self) -> Result<()> {
        let _: serde_json::Value = self.http.get_json("/users/self").await?;
        Ok(())
    }
}

#[async_trait]
impl CustomFieldSource for SellClient {
    async fn get_custom_fields(
        &self,
        resource: ResourceType,
    ) -> Result<Vec<CustomFieldDefinition>> {
        let path = resource.custom_fields_path();
        let mut definitions = Vec::new();
        let mut page: u32 = 1;

        loop {
            let request = RequestConfig::new()
                .query("page", page.to_string())
                .query("per_page", PER_PAGE.to_string());

            let envelope: ItemsEnvelope = self.http.get_json_with_config(&path, request).await?;
            let count = envelope.items.len();
            definitions.extend(envelope.items.into_iter().map(|item| item.data));

            // A short page means the collection is exhausted
            if count < PER_PAGE {
                break;
            }
            page += 1;
        }

        debug!(
            resource = %resource,
            count = definitions.len(),
            pages = page,
            "fetched custom fields"
        );
        Ok(definitions)
    }
}

impl std::fmt::Debug for SellClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SellClient")
            .field("http", &self.http)
            .finish()
    }
}
