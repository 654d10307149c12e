//! API trait definitions split by responsibility
//!
//! - [`AuthApi`] - Login
//! - [`ResourceApi`] - Authorized reads and the API root
//!
//! The [`CondoApi`](super::CondoApi) super-trait combines both.

mod auth;
mod resources;

pub use auth::AuthApi;
pub use resources::ResourceApi;
