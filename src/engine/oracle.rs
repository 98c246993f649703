//! Oracle price transformer strategies.
//!
//! A transformer maps `(previous_smoothed_price, raw_current_price)` to the
//! next smoothed price. The projector only ever sees the function value, so
//! spot and moving-average oracles are swapped by passing a different one.

use crate::domain::Decimal;
use std::sync::Arc;

/// Shared, thread-safe price transformer.
pub type OraclePriceTransformer = Arc<dyn Fn(Decimal, Decimal) -> Decimal + Send + Sync>;

/// Spot oracle: the pool rebalances against the raw observed price.
pub fn spot_price(_previous: Decimal, current: Decimal) -> Decimal {
    current
}

pub fn spot_price_transformer() -> OraclePriceTransformer {
    Arc::new(spot_price)
}

/// Parameters of a simple-moving-average oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovingAverageParams {
    /// Samples in the averaging window.
    pub num_periods: u32,
    /// Seconds between oracle samples.
    pub sma_update_interval: u64,
    /// Seconds between pool rebalances.
    pub pool_update_interval: u64,
}

impl MovingAverageParams {
    /// Fresh samples the oracle records during one pool update interval.
    pub fn samples_per_update(&self) -> u64 {
        if self.sma_update_interval == 0 {
            return 1;
        }
        (self.pool_update_interval / self.sma_update_interval).max(1)
    }

    /// Fraction of the window replaced by fresh samples each pool interval.
    pub fn weight(&self) -> Decimal {
        if self.num_periods == 0 {
            return Decimal::one();
        }
        let periods = u64::from(self.num_periods);
        let fresh = self.samples_per_update().min(periods);
        Decimal::from(fresh) / Decimal::from(periods)
    }

    /// Move `previous` toward `current` by this oracle's per-interval weight.
    pub fn smooth(&self, previous: Decimal, current: Decimal) -> Decimal {
        let weight = self.weight();
        if weight == Decimal::one() {
            return current;
        }
        previous + (current - previous) * weight
    }
}

/// Moving-average oracle that treats the window as filled with `previous`
/// and pushes `samples_per_update` copies of `current` each pool interval.
pub fn moving_average_price_transformer(
    num_periods: u32,
    sma_update_interval: u64,
    pool_update_interval: u64,
) -> OraclePriceTransformer {
    let params = MovingAverageParams {
        num_periods,
        sma_update_interval,
        pool_update_interval,
    };
    Arc::new(move |previous, current| params.smooth(previous, current))
}
