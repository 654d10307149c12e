//! Endpoint catalog display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::Endpoint;

/// Catalog entry for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct EndpointDisplay {
    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "GROUP")]
    pub group: String,

    /// HTTP method the endpoint is used with
    #[tabled(rename = "METHOD")]
    pub method: String,

    #[tabled(rename = "PATH")]
    pub path: String,
}

impl From<Endpoint> for EndpointDisplay {
    fn from(endpoint: Endpoint) -> Self {
        let method = if endpoint.is_readable() { "GET" } else { "POST" };
        Self {
            name: endpoint.name().to_string(),
            group: endpoint.group().to_string(),
            method: method.to_string(),
            path: endpoint.path().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_display_readable() {
        let display = EndpointDisplay::from(Endpoint::ControlAcceso);

        assert_eq!(display.name, "controlAcceso");
        assert_eq!(display.group, "seguridad");
        assert_eq!(display.method, "GET");
        assert_eq!(display.path, "/seguridad/control-acceso/");
    }

    #[test]
    fn test_endpoint_display_post_only() {
        let display = EndpointDisplay::from(Endpoint::Registro);
        assert_eq!(display.method, "POST");
        assert_eq!(display.group, "usuarios");
    }
}
