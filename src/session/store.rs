//! File-backed key/value store for session data

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    sync::RwLock,
};
use thiserror::Error;
use tracing::debug;

/// Key under which the bearer token is stored
pub const TOKEN_KEY: &str = "UT";

const SESSION_FILE: &str = "session.json";

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Session storage I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Session file is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}

pub type SessionResult<T> = Result<T, SessionError>;

/// Write-through key/value store persisted as `<data_dir>/session.json`
#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl SessionStore {
    /// Open the store in `data_dir`, reading any existing session file
    pub fn open<P: AsRef<Path>>(data_dir: P) -> SessionResult<Self> {
        let path = data_dir.as_ref().join(SESSION_FILE);
        let entries = if path.exists() {
            debug!("Loading session from: {}", path.display());
            let content = fs::read_to_string(&path).map_err(|source| SessionError::Io {
                path: path.clone(),
                source,
            })?;
            if content.trim().is_empty() {
                HashMap::new()
            } else {
                serde_json::from_str(&content)?
            }
        } else {
            HashMap::new()
        };

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self, key: &str) -> Option<String> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.get(key).cloned()
    }

    pub fn save(&self, key: &str, value: &str) -> SessionResult<()> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)
    }

    pub fn remove(&self, key: &str) -> SessionResult<()> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        if entries.remove(key).is_some() {
            self.persist(&entries)?;
        }
        Ok(())
    }

    pub fn clear(&self) -> SessionResult<()> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.clear();
        self.persist(&entries)
    }

    /// Stored bearer token, if any
    pub fn token(&self) -> Option<String> {
        self.load(TOKEN_KEY).filter(|token| !token.is_empty())
    }

    pub fn has_token(&self) -> bool {
        self.token().is_some()
    }

    fn persist(&self, entries: &HashMap<String, String>) -> SessionResult<()> {
        let io_err = |source: std::io::Error| SessionError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let content = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, content).map_err(io_err)?;
        debug!("Session saved to: {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_token_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::open(dir.path()).unwrap();
        assert!(!store.has_token());

        store.save(TOKEN_KEY, "abc.def").unwrap();

        let reopened = SessionStore::open(dir.path()).unwrap();
        assert_eq!(reopened.token().as_deref(), Some("abc.def"));
    }

    #[test]
    fn test_remove_and_clear() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::open(dir.path()).unwrap();
        store.save(TOKEN_KEY, "t").unwrap();
        store.save("theme", "dark").unwrap();

        store.remove(TOKEN_KEY).unwrap();
        assert!(store.token().is_none());
        assert_eq!(store.load("theme").as_deref(), Some("dark"));

        store.clear().unwrap();
        let reopened = SessionStore::open(dir.path()).unwrap();
        assert!(reopened.load("theme").is_none());
    }

    #[test]
    fn test_empty_token_counts_as_missing() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::open(dir.path()).unwrap();
        store.save(TOKEN_KEY, "").unwrap();
        assert!(!store.has_token());
    }

    #[test]
    fn test_corrupt_session_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(SESSION_FILE), "not json").unwrap();
        assert!(matches!(
            SessionStore::open(dir.path()),
            Err(SessionError::Corrupt(_))
        ));
    }
}
