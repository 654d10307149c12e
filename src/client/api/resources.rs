//! Authorized resource access trait

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// Read access to API resources
#[async_trait]
pub trait ResourceApi: Send + Sync {
    /// GET an endpoint path with the stored token in the `Authorization` header
    async fn fetch_with_auth(&self, endpoint: &str) -> Result<Value>;

    /// GET the API root without credentials
    async fn api_root(&self) -> Result<Value>;
}
