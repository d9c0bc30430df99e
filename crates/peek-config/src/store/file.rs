//! JSON file-backed state store.
//!
//! Every `set_value` rewrites the whole file atomically (write to `.tmp`,
//! then rename) so a crash mid-write never leaves a truncated file.

use std::path::{Path, PathBuf};

use peek_common::StoreError;
use tracing::{debug, warn};

use super::StateStore;

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    data: serde_json::Map<String, serde_json::Value>,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty store; an
    /// unreadable or malformed one is an error.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let data = match std::fs::read_to_string(path) {
            Ok(content) if content.trim().is_empty() => serde_json::Map::new(),
            Ok(content) => match serde_json::from_str::<serde_json::Value>(&content) {
                Ok(serde_json::Value::Object(map)) => map,
                Ok(_) => {
                    return Err(StoreError::Corrupt(format!(
                        "{} does not contain a JSON object",
                        path.display()
                    )))
                }
                Err(e) => {
                    return Err(StoreError::Corrupt(format!("{}: {e}", path.display())));
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => serde_json::Map::new(),
            Err(source) => {
                return Err(StoreError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        debug!(path = %path.display(), keys = data.len(), "state store opened");
        Ok(Self {
            path: path.to_path_buf(),
            data,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        let io_err = |source: std::io::Error| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        let json = serde_json::to_string_pretty(&self.data).map_err(|e| StoreError::Serialize {
            key: "*".into(),
            reason: e.to_string(),
        })?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, &json).map_err(io_err)?;

        if let Err(e) = std::fs::rename(&tmp_path, &self.path) {
            // Rename can fail on Windows when the target is open elsewhere.
            warn!("atomic rename failed ({e}), falling back to direct write");
            std::fs::write(&self.path, &json).map_err(io_err)?;
            let _ = std::fs::remove_file(&tmp_path);
        }
        Ok(())
    }
}

impl StateStore for FileStore {
    fn get_value(&self, key: &str) -> Option<serde_json::Value> {
        self.data.get(key).cloned()
    }

    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), StoreError> {
        self.data.insert(key.to_string(), value);
        self.flush()
    }
}
