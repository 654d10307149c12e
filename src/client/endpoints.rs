//! Static catalog of API endpoint paths
//!
//! Paths are relative to the API base URL and always carry a leading and a
//! trailing slash, as Django's router expects.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// A logical endpoint of the condominium API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Endpoint {
    // Authentication
    Login,
    Registro,
    // User management
    Residentes,
    Perfil,
    // Condominium
    Propiedades,
    Amenidades,
    Reservas,
    // Security
    Visitantes,
    ControlAcceso,
    // Finance
    Pagos,
    Recibos,
    // Maintenance
    Solicitudes,
    // Notifications
    Notificaciones,
}

impl Endpoint {
    /// Every catalog entry, in catalog order
    pub const ALL: [Endpoint; 13] = [
        Endpoint::Login,
        Endpoint::Registro,
        Endpoint::Residentes,
        Endpoint::Perfil,
        Endpoint::Propiedades,
        Endpoint::Amenidades,
        Endpoint::Reservas,
        Endpoint::Visitantes,
        Endpoint::ControlAcceso,
        Endpoint::Pagos,
        Endpoint::Recibos,
        Endpoint::Solicitudes,
        Endpoint::Notificaciones,
    ];

    /// Logical name used on the command line and in JSON output
    pub const fn name(self) -> &'static str {
        match self {
            Endpoint::Login => "login",
            Endpoint::Registro => "registro",
            Endpoint::Residentes => "residentes",
            Endpoint::Perfil => "perfil",
            Endpoint::Propiedades => "propiedades",
            Endpoint::Amenidades => "amenidades",
            Endpoint::Reservas => "reservas",
            Endpoint::Visitantes => "visitantes",
            Endpoint::ControlAcceso => "controlAcceso",
            Endpoint::Pagos => "pagos",
            Endpoint::Recibos => "recibos",
            Endpoint::Solicitudes => "solicitudes",
            Endpoint::Notificaciones => "notificaciones",
        }
    }

    /// Path relative to the API base URL
    pub const fn path(self) -> &'static str {
        match self {
            Endpoint::Login => "/usuarios/login/",
            Endpoint::Registro => "/usuarios/registro/",
            Endpoint::Residentes => "/usuarios/residentes/",
            Endpoint::Perfil => "/usuarios/perfil/",
            Endpoint::Propiedades => "/condominio/propiedades/",
            Endpoint::Amenidades => "/condominio/amenidades/",
            Endpoint::Reservas => "/condominio/reservas/",
            Endpoint::Visitantes => "/seguridad/visitantes/",
            Endpoint::ControlAcceso => "/seguridad/control-acceso/",
            Endpoint::Pagos => "/finanzas/pagos/",
            Endpoint::Recibos => "/finanzas/recibos/",
            Endpoint::Solicitudes => "/mantenimiento/solicitudes/",
            Endpoint::Notificaciones => "/notificaciones/notificaciones/",
        }
    }

    /// API area the endpoint belongs to (first path segment)
    pub fn group(self) -> &'static str {
        self.path()
            .trim_start_matches('/')
            .split('/')
            .next()
            .unwrap_or_default()
    }

    /// Whether a plain authorized GET makes sense for this endpoint.
    ///
    /// Login and registration only accept POST.
    pub const fn is_readable(self) -> bool {
        !matches!(self, Endpoint::Login | Endpoint::Registro)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Endpoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Endpoint::ALL
            .into_iter()
            .find(|e| e.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown endpoint '{}'", s))
    }
}

/// The full name → path catalog
pub fn catalog() -> [(&'static str, &'static str); 13] {
    Endpoint::ALL.map(|e| (e.name(), e.path()))
}

/// Resolve a command-line target into a request path.
///
/// Accepts a catalog name (`perfil`) or a raw path (`/usuarios/perfil/`);
/// raw paths without a leading slash get one.
pub fn resolve_target(target: &str) -> String {
    if let Ok(endpoint) = target.parse::<Endpoint>() {
        return endpoint.path().to_string();
    }
    if target.starts_with('/') {
        target.to_string()
    } else {
        format!("/{}", target)
    }
}
