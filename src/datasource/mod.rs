//! Snapshot provider abstraction for assembling projection inputs.

use crate::domain::PoolStatePreviewInputs;
use async_trait::async_trait;
use std::fmt;

pub mod file;
pub mod mock;

pub use file::FileSnapshotSource;
pub use mock::MockSnapshotSource;

/// Source of complete pool snapshots.
///
/// Implementations hand back plain data; pending commits must already be
/// ordered by update interval.
#[async_trait]
pub trait SnapshotSource: Send + Sync + fmt::Debug {
    /// Fetch the current snapshot for a pool.
    ///
    /// # Arguments
    /// * `pool` - Pool identifier (address or name, source specific)
    ///
    /// # Returns
    /// Projection inputs using the spot price transformer
    async fn fetch_snapshot(&self, pool: &str)
        -> Result<PoolStatePreviewInputs, SnapshotSourceError>;
}

/// Error type for snapshot source operations.
#[derive(Debug, Clone)]
pub enum SnapshotSourceError {
    /// No snapshot known for the pool
    NotFound(String),
    /// Reading the underlying storage failed
    Io(String),
    /// Snapshot could not be decoded
    Parse(String),
}

impl fmt::Display for SnapshotSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotSourceError::NotFound(pool) => write!(f, "Snapshot not found: {}", pool),
            SnapshotSourceError::Io(msg) => write!(f, "IO error: {}", msg),
            SnapshotSourceError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for SnapshotSourceError {}
