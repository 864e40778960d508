//! Owner-keyed snapshot cache on local disk.
//!
//! One JSON file per collection and owner (`tasks_<owner>.json`), overwritten
//! after every successful fetch and read back only when a fetch fails. There
//! is no write queue and no merge on reconnect.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StoreError;

/// Which owner-scoped collection a snapshot holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Tasks,
    Categories,
    Projects,
}

impl Collection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tasks => "tasks",
            Self::Categories => "categories",
            Self::Projects => "projects",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SnapshotCache {
    dir: PathBuf,
}

/// Owner ids become file name components. Bytes outside `[A-Za-z0-9-]` are
/// written as `%XX`, so distinct ids never share a file.
fn file_key(owner_id: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";

    let mut key = String::with_capacity(owner_id.len());
    for byte in owner_id.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' {
            key.push(char::from(byte));
        } else {
            key.push('%');
            key.push(char::from(HEX[usize::from(byte >> 4)]));
            key.push(char::from(HEX[usize::from(byte & 0x0f)]));
        }
    }
    key
}

impl SnapshotCache {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn path(&self, collection: Collection, owner_id: &str) -> PathBuf {
        self.dir
            .join(format!("{}_{}.json", collection.as_str(), file_key(owner_id)))
    }

    /// Replace the snapshot for `owner_id`.
    ///
    /// Writes to a sibling temp file and renames it so readers never see a
    /// partial snapshot.
    pub fn write<T: Serialize>(
        &self,
        collection: Collection,
        owner_id: &str,
        records: &[T],
    ) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| StoreError::Cache(format!("mkdir {}: {e}", self.dir.display())))?;
        let path = self.path(collection, owner_id);
        let tmp = path.with_extension("json.tmp");
        let json = serde_json::to_vec(records).map_err(|e| StoreError::Parse(e.to_string()))?;
        fs::write(&tmp, json)
            .map_err(|e| StoreError::Cache(format!("write {}: {e}", tmp.display())))?;
        fs::rename(&tmp, &path)
            .map_err(|e| StoreError::Cache(format!("rename {}: {e}", path.display())))?;
        Ok(())
    }

    /// The last snapshot for `owner_id`, or `None` if none was ever written.
    pub fn read<T: DeserializeOwned>(
        &self,
        collection: Collection,
        owner_id: &str,
    ) -> Result<Option<Vec<T>>, StoreError> {
        let path = self.path(collection, owner_id);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::Cache(format!("read {}: {e}", path.display()))),
        };
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| StoreError::Parse(format!("{}: {e}", path.display())))
    }

    /// Drop every snapshot belonging to `owner_id`.
    pub fn clear(&self, owner_id: &str) -> Result<(), StoreError> {
        for collection in [Collection::Tasks, Collection::Categories, Collection::Projects] {
            let path = self.path(collection, owner_id);
            match fs::remove_file(&path) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    return Err(StoreError::Cache(format!("remove {}: {e}", path.display())));
                }
            }
        }
        Ok(())
    }
}
