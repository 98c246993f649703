//! Optional precondition checks for projection inputs.
//!
//! The projector itself trusts its inputs. Callers that assemble snapshots
//! from untrusted sources run this pass first.

use crate::domain::{Decimal, PoolStatePreviewInputs};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid commit queue at index {index}: {reason}")]
    InvalidCommitQueue { index: usize, reason: String },
    #[error("Invalid snapshot field {field}: {reason}")]
    InvalidSnapshot { field: &'static str, reason: String },
}

fn require_non_negative(field: &'static str, value: Decimal) -> Result<(), ValidationError> {
    if value.is_negative() {
        return Err(ValidationError::InvalidSnapshot {
            field,
            reason: format!("must be non-negative, got {}", value),
        });
    }
    Ok(())
}

/// Check leverage, non-negativity of every amount, and that pending
/// intervals are strictly increasing by update interval id.
pub fn validate_preview_inputs(inputs: &PoolStatePreviewInputs) -> Result<(), ValidationError> {
    if !inputs.leverage.is_positive() {
        return Err(ValidationError::InvalidSnapshot {
            field: "leverage",
            reason: format!("must be positive, got {}", inputs.leverage),
        });
    }

    require_non_negative("longBalance", inputs.long_balance)?;
    require_non_negative("shortBalance", inputs.short_balance)?;
    require_non_negative("longTokenSupply", inputs.long_token_supply)?;
    require_non_negative("shortTokenSupply", inputs.short_token_supply)?;
    require_non_negative("pendingLongTokenBurn", inputs.pending_long_token_burn)?;
    require_non_negative("pendingShortTokenBurn", inputs.pending_short_token_burn)?;
    require_non_negative("lastOraclePrice", inputs.last_oracle_price)?;
    require_non_negative("currentOraclePrice", inputs.current_oracle_price)?;

    let mut previous_id: Option<u64> = None;
    for (index, commit) in inputs.pending_commits.iter().enumerate() {
        if let Some((field, value)) = commit.fields().into_iter().find(|(_, v)| v.is_negative()) {
            return Err(ValidationError::InvalidCommitQueue {
                index,
                reason: format!("{} must be non-negative, got {}", field, value),
            });
        }

        if let Some(prev) = previous_id {
            if commit.update_interval_id <= prev {
                return Err(ValidationError::InvalidCommitQueue {
                    index,
                    reason: format!(
                        "update interval {} does not follow {}",
                        commit.update_interval_id, prev
                    ),
                });
            }
        }
        previous_id = Some(commit.update_interval_id);
    }

    Ok(())
}
