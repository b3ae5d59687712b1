//! On-disk storage for the CLI login session.
//!
//! The session lives at `~/.rxcheck/session.json` (or `$RXCHECK_HOME/session.json`).
//! The directory is created `0700` and the file `0600` on Unix.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AuthError;
use crate::session::Session;

const SESSION_FILE_NAME: &str = "session.json";

/// A session file at a fixed path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store rooted at `dir`.
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(SESSION_FILE_NAME),
        }
    }

    /// Store rooted at `$RXCHECK_HOME`, falling back to `~/.rxcheck`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::SessionStoreError` if neither location resolves.
    pub fn default_location() -> Result<Self, AuthError> {
        if let Ok(home) = std::env::var("RXCHECK_HOME") {
            if !home.trim().is_empty() {
                return Ok(Self::in_dir(Path::new(&home)));
            }
        }
        dirs::home_dir()
            .map(|home| Self::in_dir(&home.join(".rxcheck")))
            .ok_or_else(|| {
                AuthError::SessionStoreError("home directory not found; cannot store session".into())
            })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist `session`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::SessionStoreError` on any I/O or encoding failure.
    pub fn save(&self, session: &Session) -> Result<(), AuthError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AuthError::SessionStoreError(format!("mkdir {}: {e}", parent.display()))
            })?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                    tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
                }
            }
        }

        let json = serde_json::to_string_pretty(session)
            .map_err(|e| AuthError::SessionStoreError(format!("encode session: {e}")))?;
        fs::write(&self.path, json).map_err(|e| {
            AuthError::SessionStoreError(format!("write {}: {e}", self.path.display()))
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600)).map_err(|e| {
                AuthError::SessionStoreError(format!("chmod {}: {e}", self.path.display()))
            })?;
        }

        tracing::debug!(path = %self.path.display(), "session stored");
        Ok(())
    }

    /// Read the stored session, if any.
    ///
    /// A missing or blank file is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::SessionStoreError` if the file exists but cannot be
    /// read or parsed.
    pub fn load(&self) -> Result<Option<Session>, AuthError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(|e| {
            AuthError::SessionStoreError(format!("read {}: {e}", self.path.display()))
        })?;
        if content.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&content).map(Some).map_err(|e| {
            AuthError::SessionStoreError(format!("parse {}: {e}", self.path.display()))
        })
    }

    /// Remove the stored session. Returns whether a file was removed.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::SessionStoreError` if the file cannot be removed.
    pub fn clear(&self) -> Result<bool, AuthError> {
        if !self.path.exists() {
            return Ok(false);
        }
        fs::remove_file(&self.path).map_err(|e| {
            AuthError::SessionStoreError(format!("failed to delete {}: {e}", self.path.display()))
        })?;
        Ok(true)
    }
}
