//! Authenticated session: active backend endpoint plus user role.
//!
//! The session is an explicit object handed down to whoever needs it,
//! persisted as a single JSON file under the platform config dir. It is
//! written at login and read back when a dashboard starts; there is no
//! expiry or rotation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Session persistence errors.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no config directory available on this platform")]
    NoConfigDir,
}

pub type SessionResult<T> = Result<T, SessionError>;

/// Role tag attached to the session at login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Patient,
    Doctor,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Patient => "patient",
            Role::Doctor => "doctor",
            Role::Admin => "admin",
        }
    }
}

/// The active session: which backend to talk to and as whom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Backend endpoint identifier (base URL)
    pub endpoint: String,
    pub role: Role,
    /// Principal id the backend authenticated
    pub principal_id: String,
}

impl Session {
    pub fn new(
        endpoint: impl Into<String>,
        role: Role,
        principal_id: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            role,
            principal_id: principal_id.into(),
        }
    }

    /// Default on-disk location: `<config dir>/carebase/session.json`.
    pub fn default_path() -> SessionResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("carebase").join("session.json"))
            .ok_or(SessionError::NoConfigDir)
    }

    /// Load a previously saved session; `Ok(None)` when none exists.
    pub fn load_from<P: AsRef<Path>>(path: P) -> SessionResult<Option<Session>> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(path)?;
        let session = serde_json::from_str(&raw)?;
        debug!("loaded session from {}", path.display());
        Ok(Some(session))
    }

    /// Persist the session, creating parent directories as needed.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> SessionResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        debug!("saved session to {}", path.display());
        Ok(())
    }

    /// Load from the default path.
    pub fn load() -> SessionResult<Option<Session>> {
        Self::load_from(Self::default_path()?)
    }

    /// Save to the default path.
    pub fn save(&self) -> SessionResult<()> {
        self.save_to(Self::default_path()?)
    }
}
