//! Configuration commands

use clap::ValueEnum;
use colored::Colorize;
use serde_json::json;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, ConfigKey};
use crate::client::MissingTokenHeader;
use crate::config::{Config, validate_api_url};
use crate::error::{ConfigError, Result};
use crate::output::print_value;

/// Print the effective configuration (file values merged with overrides)
pub fn show(opts: &GlobalOptions, ctx: &CommandContext) -> Result<()> {
    let config_path = Config::resolve_path(opts.config_ref())?;
    let value = json!({
        "config_file": config_path.display().to_string(),
        "api_url": ctx.config.api_url(),
        "session_file": ctx.store.path().display().to_string(),
        "missing_token": ctx.missing_token.to_string(),
    });
    print_value(&value, ctx.format)
}

/// Set a key in the config file and save it.
///
/// Only the file is touched; `--api-url` and friends are not written back.
/// The file is read without validation so a broken value can be replaced;
/// the whole config is validated again before saving.
pub fn set(opts: &GlobalOptions, key: ConfigKey, value: &str) -> Result<()> {
    let mut config = Config::load_for_edit(opts.config_ref())?;
    apply(&mut config, key, value)?;
    config.save_at(opts.config_ref())?;

    let path = Config::resolve_path(opts.config_ref())?;
    println!(
        "{} Saved {} = {} to {}",
        "✓".green(),
        key_name(key),
        value.bold(),
        path.display()
    );
    Ok(())
}

/// Apply one key to a config value, validating it first
pub fn apply(config: &mut Config, key: ConfigKey, value: &str) -> Result<()> {
    match key {
        ConfigKey::ApiUrl => {
            let url = value.trim_end_matches('/');
            validate_api_url(url)?;
            config.api_url = Some(url.to_string());
        }
        ConfigKey::SessionFile => {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid("session_file must not be empty".into()).into());
            }
            config.session_file = Some(value.to_string());
        }
        ConfigKey::MissingToken => {
            config.preferences.missing_token = <MissingTokenHeader as ValueEnum>::from_str(value, true)
                .map_err(|_| {
                    ConfigError::Invalid(format!(
                        "missing_token must be 'literal-null' or 'omit', got '{}'",
                        value
                    ))
                })?;
        }
    }
    Ok(())
}

fn key_name(key: ConfigKey) -> &'static str {
    match key {
        ConfigKey::ApiUrl => "api_url",
        ConfigKey::SessionFile => "session_file",
        ConfigKey::MissingToken => "missing_token",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_apply_api_url_trims_trailing_slash() {
        let mut config = Config::default();
        apply(&mut config, ConfigKey::ApiUrl, "https://condo.example/api/").unwrap();
        assert_eq!(config.api_url(), "https://condo.example/api");
    }

    #[test]
    fn test_apply_rejects_bad_values() {
        let mut config = Config::default();
        assert!(apply(&mut config, ConfigKey::ApiUrl, "condo.example").is_err());
        assert!(apply(&mut config, ConfigKey::MissingToken, "empty").is_err());
        assert!(apply(&mut config, ConfigKey::SessionFile, "  ").is_err());
        assert!(config.api_url.is_none());
    }

    #[test]
    fn test_set_round_trips_through_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        let opts = GlobalOptions {
            config: Some(path.to_string_lossy().to_string()),
            ..Default::default()
        };

        set(&opts, ConfigKey::MissingToken, "omit").unwrap();
        set(&opts, ConfigKey::ApiUrl, "http://10.0.0.5:8000/api").unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.preferences.missing_token, MissingTokenHeader::Omit);
        assert_eq!(loaded.api_url(), "http://10.0.0.5:8000/api");
    }

    #[test]
    fn test_set_repairs_invalid_url_in_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "api_url: localhost:8000/api\n").unwrap();
        let opts = GlobalOptions {
            config: Some(path.to_string_lossy().to_string()),
            ..Default::default()
        };

        set(&opts, ConfigKey::ApiUrl, "http://127.0.0.1:8000/api").unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.api_url(), "http://127.0.0.1:8000/api");
    }

    #[test]
    fn test_set_other_key_keeps_invalid_url_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "api_url: localhost:8000/api\n").unwrap();
        let opts = GlobalOptions {
            config: Some(path.to_string_lossy().to_string()),
            ..Default::default()
        };

        assert!(set(&opts, ConfigKey::MissingToken, "omit").is_err());
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "api_url: localhost:8000/api\n");
    }
}
