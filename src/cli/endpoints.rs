//! Endpoints command implementation

use crate::cli::OutputFormat;
use crate::client::Endpoint;
use crate::error::Result;
use crate::models::EndpointDisplay;
use crate::output::print_rows;

/// Run the endpoints command
pub fn run(format: OutputFormat) -> Result<()> {
    let rows: Vec<EndpointDisplay> = Endpoint::ALL.into_iter().map(EndpointDisplay::from).collect();
    print_rows(&rows, format)
}
