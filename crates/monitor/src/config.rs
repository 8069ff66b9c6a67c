use clmm_depth_domain::entities::{PoolKey, TokenPair};
use clmm_depth_domain::fees::FeeTier;
use clmm_depth_domain::metrics::DEFAULT_WINDOW_CAPACITY;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Engine settings, fixed for the lifetime of the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Token pair of the monitored pool, in either order.
    pub pair: TokenPair,
    /// Fee tier of the monitored pool.
    pub fee_tier: FeeTier,
    /// Seconds between poll cycles.
    pub poll_interval_secs: u64,
    /// Samples kept per address for the rolling average.
    pub window_capacity: usize,
    /// Decimals of the pool's token0, for price display.
    pub token0_decimals: u8,
    /// Decimals of the pool's token1, for price display.
    pub token1_decimals: u8,
}

impl MonitorConfig {
    /// Creates a config with default cadence and window for `pair`.
    pub fn new(pair: TokenPair, fee_tier: FeeTier) -> Self {
        Self {
            pair,
            fee_tier,
            poll_interval_secs: 60,
            window_capacity: DEFAULT_WINDOW_CAPACITY,
            token0_decimals: 18,
            token1_decimals: 18,
        }
    }

    /// Identity of the monitored pool.
    pub fn pool_key(&self) -> PoolKey {
        PoolKey::new(self.pair, self.fee_tier)
    }

    /// Poll period as a duration.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}
