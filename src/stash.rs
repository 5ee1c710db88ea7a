//! File-backed key-value stash.
//!
//! One pretty-printed JSON object holds every string shortly persists:
//! the link table under its own key plus a few scalar settings. Reads
//! load the whole file; every mutation rewrites it through a sibling
//! temp file and a rename, so a reader sees either the old content or
//! the new, never a torn write.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

use crate::errors::{Result, ShortlyError};

pub struct Stash {
    path: PathBuf,
}

impl Stash {
    /// Open a stash at the given path. No I/O happens until the first
    /// access; a missing file reads as empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Stash { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read one value
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let map = self.read_map()?;
        Ok(map.get(key).cloned())
    }

    /// Write one value, rewriting the whole file
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    /// Remove one value, returning what was there
    pub fn remove(&self, key: &str) -> Result<Option<String>> {
        let mut map = self.read_map()?;
        let old = map.remove(key);
        if old.is_some() {
            self.write_map(&map)?;
        }
        Ok(old)
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => match serde_json::from_str::<BTreeMap<String, String>>(&content) {
                Ok(map) => Ok(map),
                Err(e) => {
                    error!("Failed to parse stash file {}: {}", self.path.display(), e);
                    Err(ShortlyError::stash_corrupt(format!(
                        "Failed to parse stash file {}: {}",
                        self.path.display(),
                        e
                    )))
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Stash file {} not found, treating as empty", self.path.display());
                Ok(BTreeMap::new())
            }
            Err(e) => Err(ShortlyError::file_operation(format!(
                "Failed to read stash file {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(map)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
