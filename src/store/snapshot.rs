//! Snapshot files in a working directory

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, info};

use super::{read_snapshot, write_snapshot};
use crate::config::SNAPSHOT_PREFIX;
use crate::models::snapshot::{Snapshot, SnapshotError};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no snapshot file found in {}", dir.display())]
    NoSnapshot { dir: PathBuf },

    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed snapshot file: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid snapshot table: {0}")]
    Snapshot(#[from] SnapshotError),
}

/// A snapshot together with the file it came from.
#[derive(Debug, Clone)]
pub struct LoadedSnapshot {
    pub path: PathBuf,
    pub snapshot: Snapshot,
}

impl LoadedSnapshot {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Reads and writes `<prefix><YYYY-MM-DD>.csv` files in one directory.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    dir: PathBuf,
    prefix: String,
}

impl SnapshotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_prefix(dir, SNAPSHOT_PREFIX)
    }

    pub fn with_prefix(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn file_name_for(&self, date: NaiveDate) -> String {
        format!("{}{}.csv", self.prefix, date.format("%Y-%m-%d"))
    }

    fn matches(&self, name: &str) -> bool {
        name.starts_with(&self.prefix) && name.ends_with(".csv")
    }

    /// Most recently modified snapshot file; ties go to the later file name.
    pub fn latest_path(&self) -> Result<Option<PathBuf>, StoreError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let mut latest: Option<(SystemTime, PathBuf)> = None;
        for entry in entries {
            let entry = entry?;
            let name = entry.file_name();
            if !self.matches(&name.to_string_lossy()) {
                continue;
            }
            let metadata = entry.metadata()?;
            if !metadata.is_file() {
                continue;
            }
            let candidate = (metadata.modified()?, entry.path());
            if latest.as_ref().map_or(true, |current| candidate > *current) {
                latest = Some(candidate);
            }
        }

        Ok(latest.map(|(_, path)| path))
    }

    pub fn load(&self, path: &Path) -> Result<Snapshot, StoreError> {
        let file = File::open(path)?;
        let snapshot = read_snapshot(BufReader::new(file))?;
        debug!(path = %path.display(), rows = snapshot.len(), "Loaded snapshot");
        Ok(snapshot)
    }

    /// Load the most recent snapshot file.
    pub fn load_latest(&self) -> Result<LoadedSnapshot, StoreError> {
        let path = self.latest_path()?.ok_or_else(|| StoreError::NoSnapshot {
            dir: self.dir.clone(),
        })?;
        let snapshot = self.load(&path)?;
        Ok(LoadedSnapshot { path, snapshot })
    }

    /// Write `snapshot` as the file for `date`, replacing any previous one.
    pub fn write(&self, snapshot: &Snapshot, date: NaiveDate) -> Result<PathBuf, StoreError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(self.file_name_for(date));
        let file = File::create(&path)?;
        write_snapshot(snapshot, BufWriter::new(file))?;

        info!(path = %path.display(), rows = snapshot.len(), "Wrote snapshot");
        Ok(path)
    }
}
