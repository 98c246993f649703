//! Domain types for leveraged pool state previews.
//!
//! This module provides:
//! - Lossless numeric handling via Decimal wrapper
//! - Domain primitives: Direction, PoolSide
//! - Pending commit aggregates and the projection input/output shapes

pub mod commit;
pub mod decimal;
pub mod preview;
pub mod primitives;

pub use commit::PendingCommitAggregate;
pub use decimal::Decimal;
pub use preview::{PoolStatePreview, PoolStatePreviewInputs, ValueTransfer};
pub use primitives::{Direction, PoolSide};
