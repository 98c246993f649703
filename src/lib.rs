pub mod config;
pub mod datasource;
pub mod domain;
pub mod engine;
pub mod error;
pub mod orchestration;

pub use config::Config;
pub use datasource::{FileSnapshotSource, MockSnapshotSource, SnapshotSource, SnapshotSourceError};
pub use domain::{
    Decimal, Direction, PendingCommitAggregate, PoolSide, PoolStatePreview,
    PoolStatePreviewInputs, ValueTransfer,
};
pub use engine::{calc_next_value_transfer, calc_pool_state_preview, validate_preview_inputs};
pub use error::AppError;
pub use orchestration::Previewer;
