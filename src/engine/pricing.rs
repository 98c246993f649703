//! Pure pricing helpers: token price, skew, notional value, gains, APY.

use crate::domain::Decimal;
use rust_decimal_macros::dec;

/// Rebalances per year used when compounding an APR.
pub const COMPOUNDING_PERIODS_PER_YEAR: i64 = 52;

/// Quote value per pool token.
///
/// An empty side (no supply or no value) prices at parity, `1`.
pub fn calc_token_price(total_quote_value: Decimal, token_supply: Decimal) -> Decimal {
    if token_supply.is_zero() || total_quote_value.is_zero() {
        return Decimal::one();
    }
    total_quote_value / token_supply
}

/// Long balance over short balance, `1` if either side is empty.
pub fn calc_skew(short_balance: Decimal, long_balance: Decimal) -> Decimal {
    if short_balance.is_zero() || long_balance.is_zero() {
        return Decimal::one();
    }
    long_balance / short_balance
}

/// Quote value of `num_tokens` at `token_price`.
pub fn calc_notional_value(token_price: Decimal, num_tokens: Decimal) -> Decimal {
    token_price * num_tokens
}

/// Leverage actually felt by a long holder given the current balances.
///
/// Returns zero when the long side is empty.
pub fn calc_effective_long_gain(
    short_balance: Decimal,
    long_balance: Decimal,
    leverage: Decimal,
) -> Decimal {
    if long_balance.is_zero() {
        return Decimal::zero();
    }
    short_balance / long_balance * leverage
}

/// Leverage actually felt by a short holder given the current balances.
///
/// Returns zero when the short side is empty.
pub fn calc_effective_short_gain(
    short_balance: Decimal,
    long_balance: Decimal,
    leverage: Decimal,
) -> Decimal {
    if short_balance.is_zero() {
        return Decimal::zero();
    }
    long_balance / short_balance * leverage
}

/// APY from an APR compounded weekly: `(1 + apr / 52)^52 - 1`.
///
/// Saturates at [`Decimal::max_value`] when the compounded value overflows.
pub fn calc_apy(apr: Decimal) -> Decimal {
    let periods = Decimal::new(dec!(52));
    (Decimal::one() + apr / periods)
        .checked_powi(COMPOUNDING_PERIODS_PER_YEAR)
        .map(|compounded| compounded - Decimal::one())
        .unwrap_or_else(Decimal::max_value)
}
