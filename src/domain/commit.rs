//! Pending commitment aggregates for not-yet-executed update intervals.

use crate::domain::Decimal;
use serde::{Deserialize, Serialize};

/// Summed commit amounts for one pending update interval.
///
/// Settlement amounts are in the quote asset; everything suffixed
/// `pool_tokens` is counted in pool tokens of the side being burned.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingCommitAggregate {
    /// Update interval this aggregate executes in. Queues are ordered by it.
    #[serde(default)]
    pub update_interval_id: u64,
    pub long_mint_settlement: Decimal,
    pub long_burn_pool_tokens: Decimal,
    pub short_mint_settlement: Decimal,
    pub short_burn_pool_tokens: Decimal,
    /// Short tokens burned and re-minted as long.
    pub short_burn_long_mint_pool_tokens: Decimal,
    /// Long tokens burned and re-minted as short.
    pub long_burn_short_mint_pool_tokens: Decimal,
}

impl PendingCommitAggregate {
    /// An aggregate with every amount set to zero.
    pub fn empty(update_interval_id: u64) -> Self {
        Self {
            update_interval_id,
            ..Default::default()
        }
    }

    /// Long tokens leaving the long side, including flips to short.
    pub fn total_long_burn(&self) -> Decimal {
        self.long_burn_pool_tokens + self.long_burn_short_mint_pool_tokens
    }

    /// Short tokens leaving the short side, including flips to long.
    pub fn total_short_burn(&self) -> Decimal {
        self.short_burn_pool_tokens + self.short_burn_long_mint_pool_tokens
    }

    /// Named amounts, used by validation to report the offending field.
    pub fn fields(&self) -> [(&'static str, Decimal); 6] {
        [
            ("longMintSettlement", self.long_mint_settlement),
            ("longBurnPoolTokens", self.long_burn_pool_tokens),
            ("shortMintSettlement", self.short_mint_settlement),
            ("shortBurnPoolTokens", self.short_burn_pool_tokens),
            (
                "shortBurnLongMintPoolTokens",
                self.short_burn_long_mint_pool_tokens,
            ),
            (
                "longBurnShortMintPoolTokens",
                self.long_burn_short_mint_pool_tokens,
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        Decimal::from_str_canonical(s).unwrap()
    }

    #[test]
    fn test_empty_is_all_zero() {
        let commit = PendingCommitAggregate::empty(7);
        assert_eq!(commit.update_interval_id, 7);
        assert!(commit.fields().iter().all(|(_, v)| v.is_zero()));
    }

    #[test]
    fn test_total_burns_include_flips() {
        let commit = PendingCommitAggregate {
            long_burn_pool_tokens: d("500"),
            long_burn_short_mint_pool_tokens: d("25"),
            short_burn_pool_tokens: d("10"),
            short_burn_long_mint_pool_tokens: d("40"),
            ..PendingCommitAggregate::empty(1)
        };
        assert_eq!(commit.total_long_burn(), d("525"));
        assert_eq!(commit.total_short_burn(), d("50"));
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "updateIntervalId": 3,
            "longMintSettlement": "1000",
            "longBurnPoolTokens": "500",
            "shortMintSettlement": 1000,
            "shortBurnPoolTokens": "0",
            "shortBurnLongMintPoolTokens": "0",
            "longBurnShortMintPoolTokens": "0"
        }"#;
        let commit: PendingCommitAggregate = serde_json::from_str(json).unwrap();
        assert_eq!(commit.update_interval_id, 3);
        assert_eq!(commit.long_mint_settlement, d("1000"));
        assert_eq!(commit.short_mint_settlement, d("1000"));
    }
}
