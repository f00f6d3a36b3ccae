//! @acp:module "File Session Store"
//! @acp:summary "Session storage persisted to one JSON file per session id"
//! @acp:domain cli
//! @acp:layer io
//!
//! The CLI has no browser tab to hold session storage, so each session gets a
//! small JSON file under the session directory. Ending a session deletes its
//! file, which clears everything stored for it.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::SessionStore;
use crate::error::{FolioError, Result};

/// On-disk session document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionFile {
    pub id: String,
    pub started_at: DateTime<Utc>,
    #[serde(default)]
    pub entries: BTreeMap<String, String>,
}

/// Session store backed by `<dir>/<id>.json`
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
    data: SessionFile,
}

impl FileSessionStore {
    /// Start a new session with a fresh id
    pub fn create(dir: &Path) -> Result<Self> {
        let id = Uuid::new_v4().to_string();
        let store = Self {
            path: session_path(dir, &id),
            data: SessionFile {
                id,
                started_at: Utc::now(),
                entries: BTreeMap::new(),
            },
        };
        store.save()?;
        tracing::debug!("Started session {}", store.data.id);
        Ok(store)
    }

    /// Open a session, starting it empty if no file exists yet
    pub fn open(dir: &Path, id: &str) -> Result<Self> {
        validate_id(id)?;
        let path = session_path(dir, id);
        if !path.exists() {
            tracing::debug!("Session {} has no storage yet, starting empty", id);
            return Ok(Self {
                path,
                data: SessionFile {
                    id: id.to_string(),
                    started_at: Utc::now(),
                    entries: BTreeMap::new(),
                },
            });
        }

        let parsed = std::fs::read(&path)
            .map_err(FolioError::from)
            .and_then(|bytes| serde_json::from_slice::<SessionFile>(&bytes).map_err(FolioError::from));
        let data = match parsed {
            Ok(data) => data,
            Err(e) => {
                // An unreadable session behaves like a fresh one
                tracing::warn!("Discarding unreadable session file {}: {}", path.display(), e);
                SessionFile {
                    id: id.to_string(),
                    started_at: Utc::now(),
                    entries: BTreeMap::new(),
                }
            }
        };
        Ok(Self { path, data })
    }

    /// Open an existing session; fails if it was never started or has ended
    pub fn open_existing(dir: &Path, id: &str) -> Result<Self> {
        validate_id(id)?;
        if !session_path(dir, id).exists() {
            return Err(FolioError::UnknownSession(id.to_string()));
        }
        Self::open(dir, id)
    }

    /// End the session, deleting its storage
    pub fn end(self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        tracing::debug!("Ended session {}", self.data.id);
        Ok(())
    }

    /// List session ids stored in a directory.
    ///
    /// Files whose names are not valid session ids are skipped.
    pub fn list(dir: &Path) -> Result<Vec<String>> {
        if !dir.exists() {
            return Ok(Vec::new());
        }
        let mut ids = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().map(|e| e == "json").unwrap_or(false) {
                match path.file_stem().and_then(|s| s.to_str()) {
                    Some(stem) if validate_id(stem).is_ok() => ids.push(stem.to_string()),
                    _ => tracing::debug!("Skipping non-session file {}", path.display()),
                }
            }
        }
        ids.sort();
        Ok(ids)
    }

    pub fn id(&self) -> &str {
        &self.data.id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn data(&self) -> &SessionFile {
        &self.data
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.data)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.data.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.data.entries.insert(key.to_string(), value.to_string());
        self.save()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.data.entries.remove(key).is_some() {
            self.save()?;
        }
        Ok(())
    }
}

fn session_path(dir: &Path, id: &str) -> PathBuf {
    dir.join(format!("{}.json", id))
}

/// Session ids become file names, so keep them to a safe alphabet
fn validate_id(id: &str) -> Result<()> {
    let valid = !id.is_empty()
        && id.len() <= 64
        && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(FolioError::InvalidSession(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_writes_file() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::create(dir.path()).unwrap();
        assert!(store.path().exists());
        assert!(Uuid::parse_str(store.id()).is_ok());
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let mut store = FileSessionStore::create(dir.path()).unwrap();
        store.set("folio.variant", "C").unwrap();
        let id = store.id().to_string();

        let reopened = FileSessionStore::open(dir.path(), &id).unwrap();
        assert_eq!(reopened.get("folio.variant").as_deref(), Some("C"));
    }

    #[test]
    fn test_end_clears_storage() {
        let dir = TempDir::new().unwrap();
        let mut store = FileSessionStore::create(dir.path()).unwrap();
        store.set("folio.variant", "A").unwrap();
        let id = store.id().to_string();
        store.end().unwrap();

        assert!(FileSessionStore::open_existing(dir.path(), &id).is_err());
        let fresh = FileSessionStore::open(dir.path(), &id).unwrap();
        assert!(fresh.get("folio.variant").is_none());
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("broken.json"), "{not json").unwrap();
        let store = FileSessionStore::open(dir.path(), "broken").unwrap();
        assert!(store.get("folio.variant").is_none());
    }

    #[test]
    fn test_non_utf8_file_starts_empty() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("visitor.json"), [0xff, 0xfe, 0x00]).unwrap();
        let mut store = FileSessionStore::open(dir.path(), "visitor").unwrap();
        assert!(store.get("folio.variant").is_none());

        // The next write replaces the unreadable file
        store.set("folio.variant", "B").unwrap();
        let reopened = FileSessionStore::open(dir.path(), "visitor").unwrap();
        assert_eq!(reopened.get("folio.variant").as_deref(), Some("B"));
    }

    #[test]
    fn test_rejects_path_like_ids() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            FileSessionStore::open(dir.path(), "../escape"),
            Err(FolioError::InvalidSession(_))
        ));
        assert!(matches!(
            FileSessionStore::open_existing(dir.path(), "notes v2"),
            Err(FolioError::InvalidSession(_))
        ));
        assert!(FileSessionStore::open(dir.path(), "").is_err());
    }

    #[test]
    fn test_list_skips_foreign_files() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::create(dir.path()).unwrap();
        std::fs::write(dir.path().join("notes v2.json"), "{}").unwrap();
        std::fs::write(dir.path().join("readme.txt"), "").unwrap();

        assert_eq!(FileSessionStore::list(dir.path()).unwrap(), vec![store.id().to_string()]);
    }

    #[test]
    fn test_list_sessions() {
        let dir = TempDir::new().unwrap();
        assert!(FileSessionStore::list(&dir.path().join("missing")).unwrap().is_empty());

        let a = FileSessionStore::create(dir.path()).unwrap();
        let b = FileSessionStore::create(dir.path()).unwrap();
        let mut expected = vec![a.id().to_string(), b.id().to_string()];
        expected.sort();
        assert_eq!(FileSessionStore::list(dir.path()).unwrap(), expected);
    }
}
