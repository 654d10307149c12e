//! Condominium API data models
//!
//! Domain endpoint payloads are passed through as `serde_json::Value`;
//! only the authentication types and the API root document are typed.

mod auth;
mod welcome;

pub use auth::{AuthToken, Credentials, MissingTokenHeader};
pub use welcome::{ApiWelcome, item_count};
