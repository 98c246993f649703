//! JSON file snapshot source.

use super::{SnapshotSource, SnapshotSourceError};
use crate::domain::PoolStatePreviewInputs;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, info};

/// Reads snapshots from disk.
///
/// If `root` is a directory, the snapshot for `pool` lives at
/// `<root>/<pool>.json`; otherwise `root` itself is the snapshot and the pool
/// argument only labels log lines.
#[derive(Debug, Clone)]
pub struct FileSnapshotSource {
    root: PathBuf,
}

impl FileSnapshotSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    async fn resolve(&self, pool: &str) -> Result<PathBuf, SnapshotSourceError> {
        let metadata = tokio::fs::metadata(&self.root)
            .await
            .map_err(|e| map_io_error(e, &self.root.display().to_string()))?;
        if metadata.is_dir() {
            Ok(self.root.join(format!("{}.json", pool)))
        } else {
            Ok(self.root.clone())
        }
    }
}

fn map_io_error(err: std::io::Error, what: &str) -> SnapshotSourceError {
    if err.kind() == ErrorKind::NotFound {
        SnapshotSourceError::NotFound(what.to_string())
    } else {
        SnapshotSourceError::Io(format!("{}: {}", what, err))
    }
}

#[async_trait]
impl SnapshotSource for FileSnapshotSource {
    async fn fetch_snapshot(
        &self,
        pool: &str,
    ) -> Result<PoolStatePreviewInputs, SnapshotSourceError> {
        let path = self.resolve(pool).await?;
        debug!(pool = %pool, path = %path.display(), "Reading snapshot");

        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| map_io_error(e, &path.display().to_string()))?;
        let inputs: PoolStatePreviewInputs = serde_json::from_slice(&bytes)
            .map_err(|e| SnapshotSourceError::Parse(format!("{}: {}", path.display(), e)))?;

        info!(
            pool = %pool,
            pending_intervals = inputs.pending_commits.len(),
            "Loaded snapshot"
        );
        Ok(inputs)
    }
}
