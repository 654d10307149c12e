//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod check;
pub mod completions;
pub mod config;
pub mod context;
pub mod cors;
pub mod endpoints;
pub mod get;
pub mod login;
pub mod status;

pub use args::{ConfigKey, GlobalOptions, OutputFormat};
pub use context::CommandContext;

use crate::client::MissingTokenHeader;
use crate::client::probe::DEFAULT_MAX_CONCURRENT;

/// condoctl - command-line companion for the Condominium Management API
#[derive(Parser, Debug)]
#[command(name = "condoctl")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "CONDOCTL_FORMAT",
        default_value = "table",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "CONDOCTL_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// API base URL (default http://127.0.0.1:8000/api)
    #[arg(long, global = true, env = "CONDOCTL_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Override token file location
    #[arg(long, global = true, env = "CONDOCTL_SESSION_FILE", hide_env = true)]
    pub session_file: Option<String>,

    /// Authorization header to send when no token is stored
    #[arg(long, global = true, env = "CONDOCTL_MISSING_TOKEN", hide_env = true)]
    pub missing_token: Option<MissingTokenHeader>,

    /// Enable debug logging
    #[arg(long, global = true, env = "CONDOCTL_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and store the returned token
    #[command(after_help = "EXAMPLES:\n  \
            condoctl login                             # Prompt for credentials\n  \
            condoctl login -u admin                    # Prompt for password only\n  \
            CONDOCTL_PASSWORD=... condoctl login -u admin")]
    Login {
        /// Username (prompted when omitted)
        #[arg(long, short = 'u', env = "CONDOCTL_USERNAME", hide_env = true)]
        username: Option<String>,

        /// Password (prompted when omitted)
        #[arg(
            long,
            short = 'p',
            env = "CONDOCTL_PASSWORD",
            hide_env = true,
            hide_env_values = true
        )]
        password: Option<String>,

        /// Verify credentials without writing the token file
        #[arg(long)]
        no_save: bool,
    },

    /// Fetch an endpoint with the stored token
    #[command(after_help = "EXAMPLES:\n  \
            condoctl get perfil                        # By catalog name\n  \
            condoctl get /usuarios/perfil/             # By path\n  \
            condoctl get pagos --format json | jq '.data'")]
    Get {
        /// Catalog name (see `condoctl endpoints`) or path relative to the API URL
        endpoint: String,
    },

    /// List the endpoint catalog
    #[command(visible_alias = "ls")]
    Endpoints,

    /// Check connectivity: API root, then every readable endpoint
    Check {
        /// Extra paths to probe besides the catalog
        paths: Vec<String>,

        /// Probe only the given paths, not the catalog
        #[arg(long, requires = "paths")]
        only: bool,

        /// Maximum probes in flight
        #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENT)]
        concurrency: usize,
    },

    /// Check the CORS preflight a browser front end would send
    #[command(after_help = "EXAMPLES:\n  \
            condoctl cors                              # localhost:3000 and :5173 against login\n  \
            condoctl cors --origin https://condo.example\n  \
            condoctl cors --endpoint perfil --format json")]
    Cors {
        /// Origin to test (repeatable; defaults to the local dev servers)
        #[arg(long = "origin", value_name = "URL")]
        origins: Vec<String>,

        /// Catalog name or path to preflight
        #[arg(long, default_value = "login")]
        endpoint: String,
    },

    /// Show configuration and login status
    Status,

    /// View or change configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Display version information
    Version,

    /// Generate shell completions
    #[command(after_help = "\
Install:
  bash:   condoctl completion bash > /etc/bash_completion.d/condoctl
  zsh:    condoctl completion zsh > \"${fpath[1]}/_condoctl\"
  fish:   condoctl completion fish > ~/.config/fish/completions/condoctl.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Set a configuration value and save it
    Set {
        /// Key to set
        #[arg(value_enum)]
        key: ConfigKey,

        /// New value
        value: String,
    },
}
