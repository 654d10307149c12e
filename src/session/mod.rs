//! Token storage
//!
//! The client never reaches for global state: it is handed a [`TokenStore`]
//! and reads the token back from it on every authorized request.
//!
//! - [`MemoryTokenStore`] keeps the token for the lifetime of the process.
//! - [`FileTokenStore`] persists it to a YAML file under the fixed key
//!   `authToken`, so separate CLI invocations share one login.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::client::AuthToken;
use crate::config::write_private;
use crate::error::{Error, Result};

/// Key the token is stored under
pub const TOKEN_KEY: &str = "authToken";

/// A single token slot.
///
/// Writes are last-writer-wins; concurrent writers are not coordinated.
pub trait TokenStore: Send + Sync {
    /// Read the stored token, if any
    fn get(&self) -> Result<Option<AuthToken>>;

    /// Replace the stored token
    fn set(&self, token: AuthToken) -> Result<()>;
}

/// In-process token slot
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: RwLock<Option<AuthToken>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a token
    #[allow(dead_code)]
    pub fn with_token(token: AuthToken) -> Self {
        Self {
            slot: RwLock::new(Some(token)),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Result<Option<AuthToken>> {
        let slot = self
            .slot
            .read()
            .map_err(|_| Error::Other("token store lock poisoned".to_string()))?;
        Ok(slot.clone())
    }

    fn set(&self, token: AuthToken) -> Result<()> {
        let mut slot = self
            .slot
            .write()
            .map_err(|_| Error::Other("token store lock poisoned".to_string()))?;
        *slot = Some(token);
        Ok(())
    }
}

/// On-disk layout of the session file
#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionFile {
    #[serde(rename = "authToken", skip_serializing_if = "Option::is_none")]
    auth_token: Option<AuthToken>,
}

/// Token slot backed by a YAML file
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Result<Option<AuthToken>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(None);
        }

        let session: SessionFile = serde_yaml::from_str(&contents)?;
        Ok(session.auth_token)
    }

    fn set(&self, token: AuthToken) -> Result<()> {
        let session = SessionFile {
            auth_token: Some(token),
        };
        let contents = serde_yaml::to_string(&session)?;
        write_private(&self.path, &contents)?;

        log::debug!("Stored {} in {}", TOKEN_KEY, self.path.display());
        Ok(())
    }
}
