//! Projection input snapshot and projected output.

use crate::domain::{Decimal, PendingCommitAggregate};
use crate::engine::oracle::{spot_price_transformer, OraclePriceTransformer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Complete snapshot handed to the projector for one call.
///
/// Everything except the price transformer is plain data and round-trips
/// through JSON. A deserialized snapshot starts with the spot transformer.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolStatePreviewInputs {
    pub leverage: Decimal,
    pub long_balance: Decimal,
    pub short_balance: Decimal,
    /// Outstanding long supply, excluding tokens already queued for burn.
    pub long_token_supply: Decimal,
    /// Outstanding short supply, excluding tokens already queued for burn.
    pub short_token_supply: Decimal,
    pub pending_long_token_burn: Decimal,
    pub pending_short_token_burn: Decimal,
    /// Price the pool last rebalanced against.
    pub last_oracle_price: Decimal,
    /// Newest observed oracle price.
    pub current_oracle_price: Decimal,
    /// Chronologically ordered, one entry per pending update interval.
    #[serde(default)]
    pub pending_commits: Vec<PendingCommitAggregate>,
    #[serde(skip, default = "spot_price_transformer")]
    pub oracle_price_transformer: OraclePriceTransformer,
}

impl PoolStatePreviewInputs {
    /// Replace the oracle price strategy, keeping every other field.
    pub fn with_oracle_price_transformer(mut self, transformer: OraclePriceTransformer) -> Self {
        self.oracle_price_transformer = transformer;
        self
    }
}

impl fmt::Debug for PoolStatePreviewInputs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PoolStatePreviewInputs")
            .field("leverage", &self.leverage)
            .field("long_balance", &self.long_balance)
            .field("short_balance", &self.short_balance)
            .field("long_token_supply", &self.long_token_supply)
            .field("short_token_supply", &self.short_token_supply)
            .field("pending_long_token_burn", &self.pending_long_token_burn)
            .field("pending_short_token_burn", &self.pending_short_token_burn)
            .field("last_oracle_price", &self.last_oracle_price)
            .field("current_oracle_price", &self.current_oracle_price)
            .field("pending_commits", &self.pending_commits)
            .finish_non_exhaustive()
    }
}

/// Signed quote-asset amounts moved by one rebalance. Always zero-sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueTransfer {
    pub long_value_transfer: Decimal,
    pub short_value_transfer: Decimal,
}

impl ValueTransfer {
    pub fn none() -> Self {
        Self::default()
    }
}

/// Current (display) state alongside the state projected after every
/// pending interval has executed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolStatePreview {
    pub current_skew: Decimal,
    pub current_long_balance: Decimal,
    pub current_short_balance: Decimal,
    /// Supply with pending burns added back.
    pub current_long_supply: Decimal,
    pub current_short_supply: Decimal,
    pub current_long_token_price: Decimal,
    pub current_short_token_price: Decimal,
    pub current_oracle_price: Decimal,

    pub expected_skew: Decimal,
    pub expected_long_balance: Decimal,
    pub expected_short_balance: Decimal,
    pub expected_long_supply: Decimal,
    pub expected_short_supply: Decimal,
    pub expected_long_token_price: Decimal,
    pub expected_short_token_price: Decimal,
    /// Mint value minus burn value summed over every pending interval.
    pub total_net_pending_long: Decimal,
    pub total_net_pending_short: Decimal,
    /// Smoothed oracle price after the last pending interval.
    pub expected_oracle_price: Decimal,

    pub pending_commits: Vec<PendingCommitAggregate>,
}
