//! Pure computation engine for pool state previews.
//!
//! Nothing here performs I/O or keeps state between calls; every function
//! maps plain inputs to a fresh output.

pub mod oracle;
pub mod pricing;
pub mod projector;
pub mod schedule;
pub mod validation;
pub mod value_transfer;

pub use oracle::{
    moving_average_price_transformer, spot_price, spot_price_transformer, MovingAverageParams,
    OraclePriceTransformer,
};
pub use pricing::{
    calc_apy, calc_effective_long_gain, calc_effective_short_gain, calc_notional_value,
    calc_skew, calc_token_price,
};
pub use projector::{apply_pending_commit, calc_pool_state_preview, ProjectionState};
pub use schedule::get_expected_execution_timestamp;
pub use validation::{validate_preview_inputs, ValidationError};
pub use value_transfer::{
    calc_direction, calc_next_value_transfer, calc_percentage_loss_transfer, calc_ratio,
};
