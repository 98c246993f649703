use crate::domain::{Decimal, PendingCommitAggregate, PoolStatePreview, PoolStatePreviewInputs};

use super::pricing::{calc_skew, calc_token_price};
use super::value_transfer::calc_next_value_transfer;

/// Running balances, supplies and smoothed price carried between intervals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionState {
    pub long_balance: Decimal,
    pub short_balance: Decimal,
    pub long_supply: Decimal,
    pub short_supply: Decimal,
    /// Smoothed oracle price the last applied rebalance settled at.
    pub oracle_price: Decimal,
    pub net_pending_long: Decimal,
    pub net_pending_short: Decimal,
}

impl ProjectionState {
    /// Starting point: current balances, supply with pending burns added back.
    pub fn from_inputs(inputs: &PoolStatePreviewInputs) -> Self {
        Self {
            long_balance: inputs.long_balance,
            short_balance: inputs.short_balance,
            long_supply: inputs.long_token_supply + inputs.pending_long_token_burn,
            short_supply: inputs.short_token_supply + inputs.pending_short_token_burn,
            oracle_price: inputs.last_oracle_price,
            net_pending_long: Decimal::zero(),
            net_pending_short: Decimal::zero(),
        }
    }
}

/// Execution price of one side while a burn is in flight.
///
/// Burned tokens still count towards supply until the interval executes.
/// With nothing outstanding the raw balance stands in for the price.
fn execution_price(balance: Decimal, supply: Decimal, burn: Decimal) -> Decimal {
    let outstanding = supply + burn;
    if !outstanding.is_positive() {
        return balance;
    }
    balance / outstanding
}

/// Tokens minted for `mint_value` at `price`; a zero price mints at parity.
fn tokens_for_value(mint_value: Decimal, price: Decimal) -> Decimal {
    if price.is_zero() {
        return mint_value;
    }
    mint_value / price
}

/// Apply a single pending interval: rebalance against the next smoothed
/// price, then execute that interval's mints and burns.
pub fn apply_pending_commit(
    state: &mut ProjectionState,
    commit: &PendingCommitAggregate,
    inputs: &PoolStatePreviewInputs,
) {
    let price_before = state.oracle_price;
    let price_after = (inputs.oracle_price_transformer)(price_before, inputs.current_oracle_price);

    let transfer = calc_next_value_transfer(
        price_before,
        price_after,
        inputs.leverage,
        state.long_balance,
        state.short_balance,
    );
    state.long_balance += transfer.long_value_transfer;
    state.short_balance += transfer.short_value_transfer;
    state.oracle_price = price_after;

    let total_long_burn = commit.total_long_burn();
    let total_short_burn = commit.total_short_burn();

    let long_token_price = execution_price(state.long_balance, state.long_supply, total_long_burn);
    let short_token_price =
        execution_price(state.short_balance, state.short_supply, total_short_burn);

    let total_long_mint =
        commit.long_mint_settlement + commit.short_burn_long_mint_pool_tokens * short_token_price;
    let total_short_mint =
        commit.short_mint_settlement + commit.long_burn_short_mint_pool_tokens * long_token_price;

    let net_long = total_long_mint - total_long_burn * long_token_price;
    let net_short = total_short_mint - total_short_burn * short_token_price;

    state.net_pending_long += net_long;
    state.net_pending_short += net_short;
    state.long_balance += net_long;
    state.short_balance += net_short;

    state.long_supply =
        state.long_supply - total_long_burn + tokens_for_value(total_long_mint, long_token_price);
    state.short_supply = state.short_supply - total_short_burn
        + tokens_for_value(total_short_mint, short_token_price);

    tracing::trace!(
        update_interval_id = commit.update_interval_id,
        price_before = %price_before,
        price_after = %price_after,
        long_value_transfer = %transfer.long_value_transfer,
        long_token_price = %long_token_price,
        short_token_price = %short_token_price,
        "Applied pending interval"
    );
}

/// Project the pool state after every pending interval has executed.
///
/// Intervals are folded strictly in queue order; each one rebalances against
/// the balances left by the previous one. Inputs are assumed valid, see
/// [`super::validation::validate_preview_inputs`].
pub fn calc_pool_state_preview(inputs: &PoolStatePreviewInputs) -> PoolStatePreview {
    let initial = ProjectionState::from_inputs(inputs);
    let mut state = initial.clone();

    for commit in &inputs.pending_commits {
        apply_pending_commit(&mut state, commit, inputs);
    }

    tracing::debug!(
        intervals = inputs.pending_commits.len(),
        expected_long_balance = %state.long_balance,
        expected_short_balance = %state.short_balance,
        expected_oracle_price = %state.oracle_price,
        "Projected pool state"
    );

    PoolStatePreview {
        current_skew: calc_skew(initial.short_balance, initial.long_balance),
        current_long_balance: initial.long_balance,
        current_short_balance: initial.short_balance,
        current_long_supply: initial.long_supply,
        current_short_supply: initial.short_supply,
        current_long_token_price: calc_token_price(initial.long_balance, initial.long_supply),
        current_short_token_price: calc_token_price(initial.short_balance, initial.short_supply),
        current_oracle_price: inputs.current_oracle_price,

        expected_skew: calc_skew(state.short_balance, state.long_balance),
        expected_long_balance: state.long_balance,
        expected_short_balance: state.short_balance,
        expected_long_supply: state.long_supply,
        expected_short_supply: state.short_supply,
        expected_long_token_price: calc_token_price(state.long_balance, state.long_supply),
        expected_short_token_price: calc_token_price(state.short_balance, state.short_supply),
        total_net_pending_long: state.net_pending_long,
        total_net_pending_short: state.net_pending_short,
        expected_oracle_price: state.oracle_price,

        pending_commits: inputs.pending_commits.clone(),
    }
}
