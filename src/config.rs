use crate::engine::oracle::{
    moving_average_price_transformer, spot_price_transformer, OraclePriceTransformer,
};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Config {
    pub snapshot_path: String,
    pub pool: String,
    pub oracle_mode: OracleMode,
    pub sma_periods: u32,
    pub sma_update_interval_secs: u64,
    pub pool_update_interval_secs: u64,
    pub validate_commits: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OracleMode {
    Spot,
    Sma,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let snapshot_path = env_map
            .get("SNAPSHOT_PATH")
            .cloned()
            .ok_or_else(|| ConfigError::MissingEnv("SNAPSHOT_PATH".to_string()))?;

        let pool = env_map
            .get("POOL")
            .cloned()
            .unwrap_or_else(|| "default".to_string());

        let oracle_mode = match env_map
            .get("ORACLE_MODE")
            .map(|s| s.as_str())
            .unwrap_or("spot")
        {
            "spot" => OracleMode::Spot,
            "sma" => OracleMode::Sma,
            other => {
                return Err(ConfigError::InvalidValue(
                    "ORACLE_MODE".to_string(),
                    format!("must be spot or sma, got {}", other),
                ))
            }
        };

        let sma_periods = parse_or_default::<u32>(&env_map, "SMA_PERIODS", "1", "u32")?;
        let sma_update_interval_secs =
            parse_or_default::<u64>(&env_map, "SMA_UPDATE_INTERVAL_SECS", "3600", "u64")?;
        let pool_update_interval_secs =
            parse_or_default::<u64>(&env_map, "POOL_UPDATE_INTERVAL_SECS", "3600", "u64")?;

        let validate_commits = match env_map
            .get("VALIDATE_COMMITS")
            .map(|s| s.as_str())
            .unwrap_or("true")
        {
            "true" | "1" => true,
            "false" | "0" => false,
            other => {
                return Err(ConfigError::InvalidValue(
                    "VALIDATE_COMMITS".to_string(),
                    format!("must be true or false, got {}", other),
                ))
            }
        };

        Ok(Config {
            snapshot_path,
            pool,
            oracle_mode,
            sma_periods,
            sma_update_interval_secs,
            pool_update_interval_secs,
            validate_commits,
        })
    }

    /// Oracle price strategy selected by `ORACLE_MODE`.
    pub fn price_transformer(&self) -> OraclePriceTransformer {
        match self.oracle_mode {
            OracleMode::Spot => spot_price_transformer(),
            OracleMode::Sma => moving_average_price_transformer(
                self.sma_periods,
                self.sma_update_interval_secs,
                self.pool_update_interval_secs,
            ),
        }
    }
}

fn parse_or_default<T: std::str::FromStr>(
    env_map: &HashMap<String, String>,
    key: &str,
    default: &str,
    type_name: &str,
) -> Result<T, ConfigError> {
    env_map
        .get(key)
        .map(|s| s.as_str())
        .unwrap_or(default)
        .parse::<T>()
        .map_err(|_| {
            ConfigError::InvalidValue(key.to_string(), format!("must be a valid {}", type_name))
        })
}
