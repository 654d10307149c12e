//! Mock condominium API client for testing
//!
//! Implements the API traits without network access so command handlers can
//! be exercised in unit tests. Login and token semantics mirror the real
//! client: a successful login writes the `token` field to the injected store,
//! and authorized reads record the `Authorization` value they would send.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

use super::api::{AuthApi, ResourceApi};
use super::{AuthToken, MissingTokenHeader};
use crate::error::{ApiError, Result};
use crate::session::{MemoryTokenStore, TokenStore};

/// Mock API client for testing.
///
/// # Example
/// ```ignore
/// let mock = MockCondoClient::new()
///     .with_login_response(json!({"token": "abc"}))
///     .await;
///
/// mock.login("admin", "admin123").await?;
/// assert_eq!(mock.store().get()?, Some(AuthToken::new("abc")));
/// ```
pub struct MockCondoClient {
    /// Body returned from login
    login_response: Arc<Mutex<Value>>,
    /// Bodies returned from fetch_with_auth, keyed by path
    responses: Arc<Mutex<HashMap<String, Value>>>,
    /// Per-path failure statuses
    failures: Arc<Mutex<HashMap<String, u16>>>,
    /// Body returned from api_root
    root: Arc<Mutex<Value>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Injected token slot
    store: Arc<dyn TokenStore>,
    /// Header policy when no token is stored
    missing_token: MissingTokenHeader,
    /// Captured requests for test assertions
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl Default for MockCondoClient {
    fn default() -> Self {
        Self {
            login_response: Arc::new(Mutex::new(Value::Object(Default::default()))),
            responses: Arc::new(Mutex::new(HashMap::new())),
            failures: Arc::new(Mutex::new(HashMap::new())),
            root: Arc::new(Mutex::new(Value::Object(Default::default()))),
            error: Arc::new(Mutex::new(None)),
            store: Arc::new(MemoryTokenStore::new()),
            missing_token: MissingTokenHeader::default(),
            captured_requests: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

/// A captured API request for test assertions.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedRequest {
    /// The API method called (e.g., "login", "fetch_with_auth")
    pub method: String,
    /// Request path
    pub path: String,
    /// Authorization header value that would have been sent
    pub authorization: Option<String>,
}

impl MockCondoClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific token store.
    pub fn with_store(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.store = store;
        self
    }

    /// Use a specific missing-token policy.
    pub fn with_missing_token(mut self, policy: MissingTokenHeader) -> Self {
        self.missing_token = policy;
        self
    }

    /// Configure the body returned from login.
    pub async fn with_login_response(self, body: Value) -> Self {
        *self.login_response.lock().await = body;
        self
    }

    /// Configure the body returned for a path.
    pub async fn with_response(self, path: &str, body: Value) -> Self {
        self.responses.lock().await.insert(path.to_string(), body);
        self
    }

    /// Make a path answer with a failure status.
    pub async fn with_failure(self, path: &str, status: u16) -> Self {
        self.failures.lock().await.insert(path.to_string(), status);
        self
    }

    /// Configure the API root body.
    pub async fn with_root(self, body: Value) -> Self {
        *self.root.lock().await = body;
        self
    }

    /// Configure an error to return on the next call.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// The token store the mock writes to.
    pub fn store(&self) -> &Arc<dyn TokenStore> {
        &self.store
    }

    /// Get all captured requests for test assertions.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }

    /// Take the pending error, if any.
    async fn take_error(&self) -> Option<ApiError> {
        self.error.lock().await.take()
    }

    async fn capture_request(&self, method: &str, path: &str, authorization: Option<String>) {
        self.captured_requests.lock().await.push(CapturedRequest {
            method: method.to_string(),
            path: path.to_string(),
            authorization,
        });
    }
}

#[async_trait]
impl AuthApi for MockCondoClient {
    async fn login(&self, _username: &str, _password: &str) -> Result<Value> {
        self.capture_request("login", "/usuarios/login/", None).await;

        if let Some(err) = self.take_error().await {
            return Err(err.into());
        }

        let body = self.login_response.lock().await.clone();
        if let Some(token) = AuthToken::from_login_body(&body) {
            self.store.set(token)?;
        }
        Ok(body)
    }
}

#[async_trait]
impl ResourceApi for MockCondoClient {
    async fn fetch_with_auth(&self, endpoint: &str) -> Result<Value> {
        let token = self.store.get()?;
        let authorization = self.missing_token.header_value(token.as_ref());
        self.capture_request("fetch_with_auth", endpoint, authorization)
            .await;

        if let Some(err) = self.take_error().await {
            return Err(err.into());
        }
        if let Some(status) = self.failures.lock().await.get(endpoint) {
            return Err(ApiError::Http { status: *status }.into());
        }

        Ok(self
            .responses
            .lock()
            .await
            .get(endpoint)
            .cloned()
            .unwrap_or_else(|| Value::Array(Vec::new())))
    }

    async fn api_root(&self) -> Result<Value> {
        self.capture_request("api_root", "/", None).await;

        if let Some(err) = self.take_error().await {
            return Err(err.into());
        }
        Ok(self.root.lock().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde_json::json;

    #[tokio::test]
    async fn test_mock_login_writes_store() {
        let mock = MockCondoClient::new()
            .with_login_response(json!({"token": "abc"}))
            .await;

        let body = mock.login("admin", "admin123").await.unwrap();

        assert_eq!(body, json!({"token": "abc"}));
        assert_eq!(mock.store().get().unwrap(), Some(AuthToken::new("abc")));
    }

    #[tokio::test]
    async fn test_mock_error_is_consumed_once() {
        let mock = MockCondoClient::new()
            .with_error(ApiError::Http { status: 401 })
            .await;

        assert!(mock.login("admin", "bad").await.is_err());
        assert!(mock.store().get().unwrap().is_none());
        assert!(mock.login("admin", "admin123").await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_with_shared_store_and_omit_policy() {
        let store: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::new());
        let mock = MockCondoClient::new()
            .with_store(store.clone())
            .with_missing_token(MissingTokenHeader::Omit)
            .with_login_response(json!({"token": "shared"}))
            .await;

        mock.fetch_with_auth("/usuarios/perfil/").await.unwrap();
        mock.login("admin", "admin123").await.unwrap();
        mock.fetch_with_auth("/usuarios/perfil/").await.unwrap();

        assert_eq!(store.get().unwrap(), Some(AuthToken::new("shared")));
        let captured = mock.captured_requests().await;
        assert_eq!(captured[0].authorization, None);
        assert_eq!(captured[2].authorization.as_deref(), Some("Token shared"));
    }

    #[tokio::test]
    async fn test_mock_captures_authorization() {
        let mock = MockCondoClient::new();

        mock.fetch_with_auth("/usuarios/perfil/").await.unwrap();
        mock.store().set(AuthToken::new("abc")).unwrap();
        mock.fetch_with_auth("/usuarios/perfil/").await.unwrap();

        let captured = mock.captured_requests().await;
        assert_eq!(captured.len(), 2);
        assert_eq!(captured[0].authorization.as_deref(), Some("Token null"));
        assert_eq!(captured[1].authorization.as_deref(), Some("Token abc"));
    }

    #[tokio::test]
    async fn test_mock_failure_status() {
        let mock = MockCondoClient::new()
            .with_failure("/finanzas/pagos/", 500)
            .await;

        let err = mock.fetch_with_auth("/finanzas/pagos/").await.unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::Http { status: 500 })));
    }
}
