//! Configuration management for condoctl

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::client::MissingTokenHeader;
use crate::error::{ConfigError, Result};

/// Base URL of a locally running backend
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api";

/// Directory under the home directory holding config and session files
const APP_DIR: &str = ".condoctl";

const CONFIG_FILE: &str = "config.yaml";
const SESSION_FILE: &str = "session.yaml";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the API, without a trailing slash
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Where the auth token is persisted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_file: Option<String>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// What to send as Authorization when no token has been stored
    #[serde(default)]
    pub missing_token: MissingTokenHeader,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        Ok(app_dir()?.join(CONFIG_FILE))
    }

    /// Resolve an optional override into the config file path
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let config = Self::load_unchecked(path)?;
        config.validate()?;

        Ok(config)
    }

    /// Parse a config file without validating its values.
    ///
    /// Used when editing, so a bad value can be overwritten.
    pub fn load_unchecked(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&contents).map_err(ConfigError::from)?)
    }

    /// Unvalidated counterpart of [`Config::load_or_default`] for editing
    pub fn load_for_edit(path: Option<&str>) -> Result<Self> {
        let path = Self::resolve_path(path)?;
        if path.exists() {
            Self::load_unchecked(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration, falling back to defaults when the file is absent
    pub fn load_or_default(path: Option<&str>) -> Result<Self> {
        let path = Self::resolve_path(path)?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            log::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save configuration to the resolved path
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(&Self::resolve_path(path)?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;
        write_private(path, &contents)?;

        Ok(())
    }

    /// Effective API base URL
    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    /// Effective token file path
    pub fn session_path(&self) -> Result<PathBuf> {
        match &self.session_file {
            Some(p) => Ok(PathBuf::from(p)),
            None => Ok(app_dir()?.join(SESSION_FILE)),
        }
    }

    /// Apply command-line and environment overrides on top of the file values
    pub fn with_overrides(mut self, api_url: Option<&str>, session_file: Option<&str>) -> Self {
        if let Some(url) = api_url {
            self.api_url = Some(url.to_string());
        }
        if let Some(file) = session_file {
            self.session_file = Some(file.to_string());
        }
        self
    }

    /// Reject API URLs that are not absolute http(s) URLs
    pub fn validate(&self) -> Result<()> {
        if let Some(url) = &self.api_url {
            validate_api_url(url)?;
        }
        Ok(())
    }
}

/// Check that a base URL is an absolute http(s) URL
pub fn validate_api_url(url: &str) -> Result<()> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!(
            "api_url must start with http:// or https://, got '{}'",
            url
        ))
        .into())
    }
}

fn app_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(ConfigError::Invalid(
        "Could not determine home directory".to_string(),
    ))?;

    Ok(home.join(APP_DIR))
}

/// Write a file readable only by the current user, creating parent directories.
pub(crate) fn write_private(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(path, contents)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = std::fs::metadata(path)?.permissions();
        perms.set_mode(0o600);
        std::fs::set_permissions(path, perms)?;
    }

    Ok(())
}
