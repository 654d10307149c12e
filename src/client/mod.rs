//! Condominium API client

pub mod api;
pub mod condo;
pub mod cors;
pub mod endpoints;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod probe;

pub use api::{AuthApi, ResourceApi};
pub use condo::CondoClient;
pub use endpoints::Endpoint;
#[cfg(test)]
pub use mock::MockCondoClient;
pub use models::{ApiWelcome, AuthToken, Credentials, MissingTokenHeader};

/// Full condominium API surface
///
/// Blanket-implemented for every type that provides all sub-traits.
pub trait CondoApi: AuthApi + ResourceApi {}

impl<T: AuthApi + ResourceApi> CondoApi for T {}
