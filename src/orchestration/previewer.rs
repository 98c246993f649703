use crate::config::Config;
use crate::datasource::SnapshotSource;
use crate::domain::PoolStatePreview;
use crate::engine::{calc_pool_state_preview, validate_preview_inputs};
use crate::error::AppError;
use std::sync::Arc;

/// Fetches a snapshot, applies the configured oracle strategy and projects it.
#[derive(Clone)]
pub struct Previewer {
    source: Arc<dyn SnapshotSource>,
    config: Config,
}

impl Previewer {
    pub fn new(source: Arc<dyn SnapshotSource>, config: Config) -> Self {
        Self { source, config }
    }

    /// Project the pool's state after all of its pending intervals execute.
    pub async fn preview(&self, pool: &str) -> Result<PoolStatePreview, AppError> {
        let inputs = self
            .source
            .fetch_snapshot(pool)
            .await?
            .with_oracle_price_transformer(self.config.price_transformer());

        if self.config.validate_commits {
            if let Err(e) = validate_preview_inputs(&inputs) {
                tracing::warn!(pool = %pool, error = %e, "Rejected snapshot");
                return Err(e.into());
            }
        }

        Ok(calc_pool_state_preview(&inputs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OracleMode;
    use crate::datasource::MockSnapshotSource;
    use crate::domain::{Decimal, PendingCommitAggregate, PoolStatePreviewInputs};
    use crate::engine::spot_price_transformer;

    fn d(s: &str) -> Decimal {
        Decimal::from_str_canonical(s).unwrap()
    }

    fn config(validate_commits: bool) -> Config {
        Config {
            snapshot_path: "unused".to_string(),
            pool: "BTC-3x".to_string(),
            oracle_mode: OracleMode::Sma,
            sma_periods: 4,
            sma_update_interval_secs: 3600,
            pool_update_interval_secs: 3600,
            validate_commits,
        }
    }

    fn snapshot(commits: Vec<PendingCommitAggregate>) -> PoolStatePreviewInputs {
        PoolStatePreviewInputs {
            leverage: d("3"),
            long_balance: d("1000"),
            short_balance: d("1000"),
            long_token_supply: d("1000"),
            short_token_supply: d("1000"),
            pending_long_token_burn: Decimal::zero(),
            pending_short_token_burn: Decimal::zero(),
            last_oracle_price: d("100"),
            current_oracle_price: d("120"),
            pending_commits: commits,
            oracle_price_transformer: spot_price_transformer(),
        }
    }

    #[tokio::test]
    async fn test_preview_uses_configured_transformer() {
        let source = MockSnapshotSource::new()
            .with_snapshot("BTC-3x", snapshot(vec![PendingCommitAggregate::empty(1)]));
        let previewer = Previewer::new(Arc::new(source), config(true));

        let preview = previewer.preview("BTC-3x").await.unwrap();
        assert_eq!(preview.expected_oracle_price, d("105"));
    }

    #[tokio::test]
    async fn test_preview_rejects_out_of_order_queue() {
        let commits = vec![
            PendingCommitAggregate::empty(2),
            PendingCommitAggregate::empty(1),
        ];
        let source = MockSnapshotSource::new().with_snapshot("BTC-3x", snapshot(commits));
        let previewer = Previewer::new(Arc::new(source), config(true));

        let err = previewer.preview("BTC-3x").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_preview_skips_validation_when_disabled() {
        let commits = vec![
            PendingCommitAggregate::empty(2),
            PendingCommitAggregate::empty(1),
        ];
        let source = MockSnapshotSource::new().with_snapshot("BTC-3x", snapshot(commits));
        let previewer = Previewer::new(Arc::new(source), config(false));

        let preview = previewer.preview("BTC-3x").await.unwrap();
        assert_eq!(preview.pending_commits.len(), 2);
    }

    #[tokio::test]
    async fn test_preview_unknown_pool() {
        let previewer = Previewer::new(Arc::new(MockSnapshotSource::new()), config(true));
        let err = previewer.preview("ETH-3x").await.unwrap_err();
        assert!(matches!(err, AppError::Snapshot(_)));
    }
}
