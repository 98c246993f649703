use crate::config::ConfigError;
use crate::datasource::SnapshotSourceError;
use crate::engine::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotSourceError),
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}
