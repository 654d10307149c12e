//! Command execution context
//!
//! Provides a unified context for command execution, eliminating boilerplate
//! for config loading, token store wiring, and client initialization.

use std::sync::Arc;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::{CondoClient, MissingTokenHeader};
use crate::config::Config;
use crate::error::Result;
use crate::session::{FileTokenStore, TokenStore};

/// Context for command execution containing config, client, and runtime options.
pub struct CommandContext {
    /// Effective configuration (file merged with CLI/env overrides)
    pub config: Config,
    /// Token store shared with the client
    pub store: Arc<FileTokenStore>,
    /// API client reading and writing `store`
    pub client: CondoClient,
    /// Output format preference
    pub format: OutputFormat,
    /// Effective missing-token header policy
    pub missing_token: MissingTokenHeader,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// A missing config file is not an error; defaults apply.
    ///
    /// # Errors
    /// Returns error if the config file exists but cannot be parsed, or if
    /// the effective API URL is not an absolute http(s) URL.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_or_default(opts.config_ref())?
            .with_overrides(opts.api_url_ref(), opts.session_file_ref());
        config.validate()?;

        let missing_token = opts
            .missing_token
            .unwrap_or(config.preferences.missing_token);

        let store = Arc::new(FileTokenStore::new(config.session_path()?));
        let client = CondoClient::with_base_url(config.api_url(), store.clone())?
            .missing_token_header(missing_token);

        log::debug!(
            "Using API {} with token file {}",
            client.base_url(),
            store.path().display()
        );

        Ok(Self {
            config,
            store,
            client,
            format: opts.format,
            missing_token,
        })
    }

    /// Whether a token is currently stored
    pub fn has_token(&self) -> Result<bool> {
        Ok(self.store.get()?.is_some())
    }
}
