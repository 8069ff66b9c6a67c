use crate::entities::token::{Address, TokenPair};
use crate::fees::FeeTier;
use crate::math::price_tick::sqrt_price_x96_to_price;
use ethers::types::U256;
use serde::{Deserialize, Serialize};

/// Identity of a pool: its token pair and fee tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolKey {
    pub pair: TokenPair,
    pub fee_tier: FeeTier,
}

impl PoolKey {
    pub fn new(pair: TokenPair, fee_tier: FeeTier) -> Self {
        Self { pair, fee_tier }
    }

    /// Token addresses in factory order (smaller first).
    #[must_use]
    pub fn ordered_tokens(&self) -> (Address, Address) {
        self.pair.sorted()
    }
}

/// Pool state sampled once per poll cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolSnapshot {
    pub current_tick: i32,
    pub sqrt_price_x96: U256,
    pub total_liquidity: u128,
    /// Unix seconds at which the snapshot was taken.
    pub timestamp: i64,
}

impl PoolSnapshot {
    /// Price of token0 in token1, adjusted for token decimals.
    #[must_use]
    pub fn price(&self, token0_decimals: u8, token1_decimals: u8) -> f64 {
        sqrt_price_x96_to_price(self.sqrt_price_x96, token0_decimals, token1_decimals)
    }
}
