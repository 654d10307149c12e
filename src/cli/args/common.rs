//! Common CLI types shared across commands

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Table format - human-readable, one row per entry (default)
    #[default]
    Table,
    /// JSON format - structured for scripts
    Json,
}

/// Settable configuration keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ConfigKey {
    /// Base URL of the API (e.g. http://127.0.0.1:8000/api)
    ApiUrl,
    /// Path of the token file
    SessionFile,
    /// Authorization header sent without a stored token: literal-null or omit
    MissingToken,
}
