//! Condominium API client implementation

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, Method, RequestBuilder, header};
use serde_json::Value;

use super::cors::{self, AllowOrigin, PreflightResult};
use super::endpoints::Endpoint;
use super::{AuthApi, AuthToken, Credentials, MissingTokenHeader, ResourceApi};
use crate::config::DEFAULT_API_URL;
use crate::error::{ApiError, Result};
use crate::session::TokenStore;

/// Request timeout applied to every call
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Condominium API client
///
/// Holds no token itself: every authorized request reads the current token
/// from the injected [`TokenStore`], and a successful login writes to it.
pub struct CondoClient {
    http: HttpClient,
    base_url: String,
    store: Arc<dyn TokenStore>,
    missing_token: MissingTokenHeader,
}

impl CondoClient {
    /// Create a client for the default local backend
    #[allow(dead_code)]
    pub fn new(store: Arc<dyn TokenStore>) -> Result<Self> {
        Self::with_base_url(DEFAULT_API_URL, store)
    }

    /// Create a client for a custom API base URL
    pub fn with_base_url(base_url: impl Into<String>, store: Arc<dyn TokenStore>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(ApiError::from)?;

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            http,
            base_url,
            store,
            missing_token: MissingTokenHeader::default(),
        })
    }

    /// Choose what to send when no token is stored
    pub fn missing_token_header(mut self, policy: MissingTokenHeader) -> Self {
        self.missing_token = policy;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.http
            .request(method, url)
            .header(header::ACCEPT, "application/json")
    }

    /// Send a request and decode a JSON body, mapping failure statuses
    async fn send_json(&self, request: RequestBuilder, url: &str) -> Result<Value> {
        let response = request.send().await.map_err(ApiError::from)?;

        let status = response.status();
        log::debug!("{} -> {}", url, status);

        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
            }
            .into());
        }

        let body = response.text().await.map_err(ApiError::from)?;
        let value = serde_json::from_str(&body).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse response from {}: {}", url, e))
        })?;

        Ok(value)
    }

    /// Send a CORS preflight for `path` as a browser at `origin` would.
    ///
    /// Any HTTP status is reported rather than treated as an error; only a
    /// failed round trip is an error.
    pub async fn preflight(&self, path: &str, origin: &str) -> Result<PreflightResult> {
        let url = self.url(path);
        log::debug!("OPTIONS {} (origin {})", url, origin);

        let response = self
            .request(Method::OPTIONS, &url)
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, cors::REQUEST_METHOD)
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, cors::REQUEST_HEADERS)
            .send()
            .await
            .map_err(ApiError::from)
            .inspect_err(|e| log::error!("Preflight to {} failed: {}", url, e))?;

        let status = response.status();
        log::debug!("{} -> {}", url, status);

        let headers: BTreeMap<String, String> = response
            .headers()
            .iter()
            .filter(|(name, _)| name.as_str().starts_with("access-control-"))
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();

        let allow_origin = AllowOrigin::classify(
            origin,
            headers
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN.as_str())
                .map(String::as_str),
        );

        Ok(PreflightResult {
            origin: origin.to_string(),
            path: path.to_string(),
            status: status.as_u16(),
            allow_origin,
            headers,
        })
    }

    async fn login_inner(&self, credentials: &Credentials) -> Result<Value> {
        let url = self.url(Endpoint::Login.path());
        log::debug!("POST {} (user {})", url, credentials.username);

        let request = self.request(Method::POST, &url).json(credentials);
        let body = self.send_json(request, &url).await?;

        match AuthToken::from_login_body(&body) {
            Some(token) => {
                self.store.set(token)?;
                log::info!("Login succeeded for {}; token stored", credentials.username);
            }
            _ => log::info!("Login response carried no token"),
        }

        Ok(body)
    }

    async fn fetch_inner(&self, endpoint: &str) -> Result<Value> {
        let token = self.store.get()?;
        let url = self.url(endpoint);
        log::debug!("GET {}", url);

        let mut request = self
            .request(Method::GET, &url)
            .header(header::CONTENT_TYPE, "application/json");

        if token.is_none() {
            log::warn!(
                "No stored token for {} (missing-token policy: {})",
                endpoint,
                self.missing_token
            );
        }
        if let Some(value) = self.missing_token.header_value(token.as_ref()) {
            request = request.header(header::AUTHORIZATION, value);
        }

        self.send_json(request, &url).await
    }
}

#[async_trait]
impl AuthApi for CondoClient {
    async fn login(&self, username: &str, password: &str) -> Result<Value> {
        let credentials = Credentials::new(username, password);
        self.login_inner(&credentials)
            .await
            .inspect_err(|e| log::error!("Login failed: {}", e))
    }
}

#[async_trait]
impl ResourceApi for CondoClient {
    async fn fetch_with_auth(&self, endpoint: &str) -> Result<Value> {
        self.fetch_inner(endpoint)
            .await
            .inspect_err(|e| log::error!("Authorized request to {} failed: {}", endpoint, e))
    }

    async fn api_root(&self) -> Result<Value> {
        let url = self.url("/");
        let request = self.request(Method::GET, &url);
        self.send_json(request, &url)
            .await
            .inspect_err(|e| log::error!("API root request failed: {}", e))
    }
}
