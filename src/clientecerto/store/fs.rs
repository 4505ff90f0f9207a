use super::KeyValueStore;
use crate::error::{ClienteError, Result};
use std::fs;
use std::path::{Path, PathBuf};

const FILE_PREFIX: &str = "client-";
const FILE_EXT: &str = ".json";

/// File-backed store: one JSON document per key inside `root`.
///
/// Writes go through a temp file and rename so a crash mid-write never
/// leaves a half-written record behind.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}{}{}", FILE_PREFIX, key, FILE_EXT))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ClienteError::Io)?;
        }
        Ok(())
    }

    /// Extracts the key from an entry filename, or `None` for files that are
    /// not store entries (config, temp files, strays).
    fn key_of(file_name: &str) -> Option<String> {
        let stem = file_name.strip_prefix(FILE_PREFIX)?.strip_suffix(FILE_EXT)?;
        if stem.is_empty() {
            None
        } else {
            Some(stem.to_string())
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.entry_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let value = fs::read_to_string(path).map_err(ClienteError::Io)?;
        Ok(Some(value))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;
        let path = self.entry_path(key);
        let tmp = self.root.join(format!("{}{}.tmp", FILE_PREFIX, key));
        fs::write(&tmp, value).map_err(ClienteError::Io)?;
        fs::rename(&tmp, &path).map_err(ClienteError::Io)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.entry_path(key);
        if path.exists() {
            fs::remove_file(path).map_err(ClienteError::Io)?;
        }
        Ok(())
    }

    fn all_keys(&self) -> Result<Vec<String>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(ClienteError::Io)? {
            let entry = entry.map_err(ClienteError::Io)?;
            if let Some(name) = entry.file_name().to_str() {
                if let Some(key) = Self::key_of(name) {
                    keys.push(key);
                }
            }
        }
        Ok(keys)
    }

    fn multi_get(&self, keys: &[String]) -> Result<Vec<(String, Option<String>)>> {
        keys.iter()
            .map(|key| Ok((key.clone(), self.get(key)?)))
            .collect()
    }

    fn multi_remove(&mut self, keys: &[String]) -> Result<()> {
        for key in keys {
            self.remove(key)?;
        }
        Ok(())
    }
}
