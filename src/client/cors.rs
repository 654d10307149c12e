//! CORS preflight diagnostics.
//!
//! The client sends the same OPTIONS request a browser would before a
//! cross-origin login and reports what the backend allowed. Nothing here
//! enforces CORS; it only reads the `Access-Control-Allow-*` headers.

use std::collections::BTreeMap;

use serde::Serialize;

/// Dev-server origins a browser front end usually runs on (CRA, Vite)
pub const DEFAULT_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://localhost:5173"];

/// Method announced in `Access-Control-Request-Method`
pub const REQUEST_METHOD: &str = "POST";

/// Headers announced in `Access-Control-Request-Headers`
pub const REQUEST_HEADERS: &str = "Content-Type";

/// How `Access-Control-Allow-Origin` answered the requesting origin
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AllowOrigin {
    /// Echoes the requesting origin
    Exact,
    /// `*`, any origin
    Wildcard,
    /// Header absent; a browser would block the request
    Missing,
    /// Names some other origin
    Mismatch { value: String },
}

impl AllowOrigin {
    /// Classify the header value returned for `origin`
    pub fn classify(origin: &str, header: Option<&str>) -> Self {
        match header.map(str::trim) {
            None | Some("") => AllowOrigin::Missing,
            Some("*") => AllowOrigin::Wildcard,
            Some(value) if value.trim_end_matches('/') == origin.trim_end_matches('/') => {
                AllowOrigin::Exact
            }
            Some(value) => AllowOrigin::Mismatch {
                value: value.to_string(),
            },
        }
    }

    /// Whether a browser at the origin would be let through
    pub fn is_allowed(&self) -> bool {
        matches!(self, AllowOrigin::Exact | AllowOrigin::Wildcard)
    }
}

/// Result of one preflight request
#[derive(Debug, Clone, Serialize)]
pub struct PreflightResult {
    pub origin: String,
    pub path: String,
    pub status: u16,
    pub allow_origin: AllowOrigin,
    /// Every `access-control-*` response header, lowercase names
    pub headers: BTreeMap<String, String>,
}

impl PreflightResult {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Preflight answered with 2xx and the origin is allowed
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status) && self.allow_origin.is_allowed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_allow_origin() {
        let origin = "http://localhost:3000";

        assert_eq!(
            AllowOrigin::classify(origin, Some("http://localhost:3000")),
            AllowOrigin::Exact
        );
        assert_eq!(AllowOrigin::classify(origin, Some("*")), AllowOrigin::Wildcard);
        assert_eq!(AllowOrigin::classify(origin, None), AllowOrigin::Missing);
        assert_eq!(AllowOrigin::classify(origin, Some("  ")), AllowOrigin::Missing);
        assert_eq!(
            AllowOrigin::classify(origin, Some("http://localhost:5173")),
            AllowOrigin::Mismatch {
                value: "http://localhost:5173".to_string()
            }
        );
    }

    #[test]
    fn test_preflight_ok_needs_success_and_allowed_origin() {
        let mut result = PreflightResult {
            origin: "http://localhost:3000".to_string(),
            path: "/usuarios/login/".to_string(),
            status: 200,
            allow_origin: AllowOrigin::Wildcard,
            headers: BTreeMap::new(),
        };
        assert!(result.is_ok());

        result.allow_origin = AllowOrigin::Missing;
        assert!(!result.is_ok());

        result.allow_origin = AllowOrigin::Exact;
        result.status = 403;
        assert!(!result.is_ok());
    }
}
