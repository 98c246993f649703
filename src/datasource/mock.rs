//! Mock snapshot source for testing without chain access.

use super::{SnapshotSource, SnapshotSourceError};
use crate::domain::PoolStatePreviewInputs;
use async_trait::async_trait;
use std::collections::HashMap;

/// Mock snapshot source that returns predefined snapshots by pool name.
#[derive(Debug, Clone, Default)]
pub struct MockSnapshotSource {
    snapshots: HashMap<String, PoolStatePreviewInputs>,
}

impl MockSnapshotSource {
    /// Create a new mock snapshot source with no pools.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a snapshot for a pool, replacing any previous one.
    pub fn with_snapshot(mut self, pool: &str, inputs: PoolStatePreviewInputs) -> Self {
        self.snapshots.insert(pool.to_string(), inputs);
        self
    }
}

#[async_trait]
impl SnapshotSource for MockSnapshotSource {
    async fn fetch_snapshot(
        &self,
        pool: &str,
    ) -> Result<PoolStatePreviewInputs, SnapshotSourceError> {
        self.snapshots
            .get(pool)
            .cloned()
            .ok_or_else(|| SnapshotSourceError::NotFound(pool.to_string()))
    }
}
