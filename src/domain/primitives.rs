//! Domain primitives: Direction, PoolSide.

use serde::{Deserialize, Serialize};

/// Direction of an oracle price move between two rebalances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// New price above the old one; the long side gains.
    Up,
    /// Prices are equal; nothing moves.
    #[serde(rename = "nochange")]
    NoChange,
    /// New price below the old one; the short side gains.
    Down,
}

impl Direction {
    /// The side that receives value for this move, if any.
    pub fn winning_side(&self) -> Option<PoolSide> {
        match self {
            Direction::Up => Some(PoolSide::Long),
            Direction::Down => Some(PoolSide::Short),
            Direction::NoChange => None,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::NoChange => write!(f, "nochange"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// One of the two sides of a leveraged pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoolSide {
    Long,
    Short,
}

impl std::fmt::Display for PoolSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PoolSide::Long => write!(f, "long"),
            PoolSide::Short => write!(f, "short"),
        }
    }
}
