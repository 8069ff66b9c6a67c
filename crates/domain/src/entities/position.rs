use crate::entities::token::{Address, TokenPair};
use crate::fees::FeeTier;
use serde::{Deserialize, Serialize};

/// A concentrated-liquidity position as read from the position manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub token0: Address,
    pub token1: Address,
    pub fee_tier: FeeTier,
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub liquidity: u128,
}

impl Position {
    /// Returns true if the position provides liquidity at `current_tick`.
    ///
    /// The range is half-open: `tick_lower <= current_tick < tick_upper`.
    #[must_use]
    pub fn is_active(&self, current_tick: i32) -> bool {
        current_tick >= self.tick_lower && current_tick < self.tick_upper
    }

    /// Returns true if the position belongs to the pool identified by `pair` and `fee_tier`.
    #[must_use]
    pub fn belongs_to(&self, pair: &TokenPair, fee_tier: FeeTier) -> bool {
        self.fee_tier == fee_tier && pair.matches(&self.token0, &self.token1)
    }
}
