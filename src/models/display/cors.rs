//! CORS preflight display model

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use crate::client::cors::{AllowOrigin, PreflightResult};

/// Preflight result for table output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct CorsDisplay {
    #[tabled(rename = "ORIGIN")]
    pub origin: String,

    #[tabled(rename = "STATUS")]
    pub status: u16,

    #[tabled(rename = "ALLOW-ORIGIN")]
    pub allow_origin: String,

    #[tabled(rename = "ALLOW-METHODS")]
    pub allow_methods: String,

    #[tabled(rename = "RESULT")]
    pub result: String,
}

impl From<&PreflightResult> for CorsDisplay {
    fn from(preflight: &PreflightResult) -> Self {
        let allow_origin = match &preflight.allow_origin {
            AllowOrigin::Exact => "exact".to_string(),
            AllowOrigin::Wildcard => "*".to_string(),
            AllowOrigin::Missing => "missing".to_string(),
            AllowOrigin::Mismatch { value } => format!("other ({})", value),
        };

        let result = if preflight.is_ok() {
            "✓ allowed".green().to_string()
        } else {
            "✗ blocked".red().to_string()
        };

        Self {
            origin: preflight.origin.clone(),
            status: preflight.status,
            allow_origin,
            allow_methods: preflight
                .header("access-control-allow-methods")
                .unwrap_or("-")
                .to_string(),
            result,
        }
    }
}
