use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ClientError;
use crate::models::UserProfile;

const APP_DIR: &str = "todo_client";
const STATE_FILE: &str = "session.json";

/// What survives between runs: the signed-in user and their refresh token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSession {
    pub user: Option<UserProfile>,
    #[serde(rename = "refreshToken")]
    pub refresh_token: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SessionStorage {
    path: PathBuf,
}

impl SessionStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `TODO_CLIENT_STATE` overrides the default `<data dir>/todo_client/session.json`.
    pub fn from_env() -> Result<Self, ClientError> {
        if let Ok(path) = std::env::var("TODO_CLIENT_STATE") {
            return Ok(Self::new(path));
        }

        let data_dir = dirs::data_dir()
            .ok_or_else(|| ClientError::Storage("no data directory on this platform".to_string()))?;
        Ok(Self::new(data_dir.join(APP_DIR).join(STATE_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing or unreadable file yields an empty session; a corrupt one is removed.
    pub fn load(&self) -> PersistedSession {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return PersistedSession::default(),
        };

        match serde_json::from_str(&raw) {
            Ok(session) => session,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Discarding corrupt session file");
                let _ = fs::remove_file(&self.path);
                PersistedSession::default()
            }
        }
    }

    pub fn save(&self, session: &PersistedSession) -> Result<(), ClientError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| ClientError::Storage(e.to_string()))?;
        }
        let json =
            serde_json::to_string_pretty(session).map_err(|e| ClientError::Storage(e.to_string()))?;
        write_private(&self.path, json.as_bytes()).map_err(|e| ClientError::Storage(e.to_string()))
    }

    pub fn clear(&self) -> Result<(), ClientError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ClientError::Storage(e.to_string())),
        }
    }
}

/// The file holds a refresh token, so on unix it is readable by the owner only,
/// including when it already existed with wider permissions.
#[cfg(unix)]
fn write_private(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    file.set_permissions(fs::Permissions::from_mode(0o600))?;
    file.write_all(contents)
}

#[cfg(not(unix))]
fn write_private(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    fs::write(path, contents)
}

#[cfg(test)]
pub(crate) fn temp_storage(label: &str) -> SessionStorage {
    let path = std::env::temp_dir()
        .join(format!("todo_client_{label}_{}", uuid::Uuid::new_v4()))
        .join(STATE_FILE);
    SessionStorage::new(path)
}
