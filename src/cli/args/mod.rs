//! Shared CLI argument types

mod common;
mod global;

pub use common::{ConfigKey, OutputFormat};
pub use global::GlobalOptions;
