//! Authentication models

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Login credentials, supplied per call and never persisted
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}

/// Opaque token issued by the login endpoint
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Token carried by a login response body, if any.
    ///
    /// A non-empty string is taken verbatim and a non-zero number is taken in
    /// its decimal form. Empty strings, zero, null and a missing field yield
    /// no token. Any other JSON type is ignored with a warning.
    pub fn from_login_body(body: &Value) -> Option<Self> {
        match body.get("token")? {
            Value::String(token) if !token.is_empty() => Some(Self::new(token.as_str())),
            Value::Number(n) if n.as_f64() != Some(0.0) => Some(Self::new(n.to_string())),
            Value::String(_) | Value::Number(_) | Value::Null => None,
            other => {
                log::warn!(
                    "Ignoring login token of unexpected JSON type: {}",
                    json_type(other)
                );
                None
            }
        }
    }

    /// Value of the `Authorization` header for this token
    pub fn header_value(&self) -> String {
        format!("Token {}", self.0)
    }

    /// Short form safe for terminal output: first four characters only
    pub fn masked(&self) -> String {
        let prefix: String = self.0.chars().take(4).collect();
        format!("{}…", prefix)
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuthToken({})", self.masked())
    }
}

/// What to put in the `Authorization` header when no token is stored.
///
/// `LiteralNull` reproduces the long-standing behavior of sending
/// `Token null`, which the backend rejects as an invalid token rather than
/// treating the request as anonymous. `Omit` drops the header instead.
/// Switching the default changes what the backend sees, so it stays opt-in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum MissingTokenHeader {
    /// Send `Authorization: Token null`
    #[default]
    LiteralNull,
    /// Send no `Authorization` header
    Omit,
}

impl MissingTokenHeader {
    /// Header value for an optional token under this policy
    pub fn header_value(self, token: Option<&AuthToken>) -> Option<String> {
        match (token, self) {
            (Some(token), _) => Some(token.header_value()),
            (None, MissingTokenHeader::LiteralNull) => Some("Token null".to_string()),
            (None, MissingTokenHeader::Omit) => None,
        }
    }
}

impl fmt::Display for MissingTokenHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingTokenHeader::LiteralNull => write!(f, "literal-null"),
            MissingTokenHeader::Omit => write!(f, "omit"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_credentials_serialize_as_login_body() {
        let creds = Credentials::new("admin", "admin123");
        let body = serde_json::to_value(&creds).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"username": "admin", "password": "admin123"})
        );
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let creds = Credentials::new("admin", "admin123");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("admin"));
        assert!(!debug.contains("admin123"));
    }

    #[test]
    fn test_token_from_login_body() {
        assert_eq!(
            AuthToken::from_login_body(&json!({"token": "abc"})),
            Some(AuthToken::new("abc"))
        );
        assert_eq!(
            AuthToken::from_login_body(&json!({"token": 12345})),
            Some(AuthToken::new("12345"))
        );
    }

    #[test]
    fn test_token_from_login_body_without_usable_token() {
        for body in [
            json!({"detail": "ok"}),
            json!({"token": ""}),
            json!({"token": 0}),
            json!({"token": null}),
            json!({"token": true}),
            json!({"token": {"key": "abc"}}),
            json!(["token"]),
        ] {
            assert_eq!(AuthToken::from_login_body(&body), None, "body: {}", body);
        }
    }

    #[test]
    fn test_token_header_is_verbatim() {
        let token = AuthToken::new("abc");
        assert_eq!(token.header_value(), "Token abc");
    }

    #[test]
    fn test_token_debug_is_masked() {
        let token = AuthToken::new("9944b09199c62bcf9418ad846dd0e4bbdfc6ee4b");
        let debug = format!("{:?}", token);
        assert_eq!(debug, "AuthToken(9944…)");
    }

    #[test]
    fn test_missing_token_policies() {
        let token = AuthToken::new("abc");

        assert_eq!(
            MissingTokenHeader::LiteralNull.header_value(Some(&token)),
            Some("Token abc".to_string())
        );
        assert_eq!(
            MissingTokenHeader::Omit.header_value(Some(&token)),
            Some("Token abc".to_string())
        );
        assert_eq!(
            MissingTokenHeader::LiteralNull.header_value(None),
            Some("Token null".to_string())
        );
        assert_eq!(MissingTokenHeader::Omit.header_value(None), None);
    }
}
