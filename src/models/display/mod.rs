//! Display model implementations for table and JSON output
//!
//! Display models transform client types into CLI-friendly formats
//! with appropriate column names and serialization.

mod cors;
mod endpoint;
mod probe;

pub use cors::CorsDisplay;
pub use endpoint::EndpointDisplay;
pub use probe::ProbeDisplay;
