//! Authentication API trait

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// Authentication operations for the condominium API
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Log in with username and password.
    ///
    /// Returns the parsed response body. When it carries a `token` field the
    /// token is written to the client's token store; on any failure the
    /// store is left untouched.
    async fn login(&self, username: &str, password: &str) -> Result<Value>;
}
