//! Pool resolution and per-cycle pool sampling.

use clmm_depth_domain::entities::{Address, PoolKey, PoolSnapshot};
use clmm_depth_protocols::{LiquiditySource, ProtocolError};
use tracing::{debug, error, info, warn};

/// Operating mode, chosen once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolMode {
    /// The pool exists and is sampled every cycle.
    Active { pool: Address },
    /// No pool could be resolved; cycles emit placeholder records.
    Degraded,
}

impl PoolMode {
    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded)
    }
}

/// Resolves the monitored pool and samples its state.
#[derive(Debug, Clone, Copy)]
pub struct PoolSampler {
    key: PoolKey,
}

impl PoolSampler {
    pub fn new(key: PoolKey) -> Self {
        Self { key }
    }

    /// Resolves the pool address once.
    ///
    /// A zero address or a lookup error selects [`PoolMode::Degraded`].
    pub async fn resolve(&self, source: &dyn LiquiditySource) -> PoolMode {
        let (token0, token1) = self.key.ordered_tokens();
        match source.resolve_pool(token0, token1, self.key.fee_tier).await {
            Ok(pool) if !pool.is_zero() => {
                info!(
                    pool = %pool,
                    token0 = %token0,
                    token1 = %token1,
                    fee_tier = %self.key.fee_tier,
                    "Resolved pool"
                );
                PoolMode::Active { pool }
            }
            Ok(_) => {
                warn!(
                    token0 = %token0,
                    token1 = %token1,
                    fee_tier = %self.key.fee_tier,
                    "No pool exists for pair, running in degraded mode"
                );
                PoolMode::Degraded
            }
            Err(e) => {
                warn!(error = %e, "Pool resolution failed, running in degraded mode");
                PoolMode::Degraded
            }
        }
    }

    /// Reads the pool state for one cycle.
    ///
    /// # Errors
    /// Returns the data-source error; the caller skips the cycle.
    pub async fn sample(
        &self,
        source: &dyn LiquiditySource,
        pool: Address,
    ) -> Result<PoolSnapshot, ProtocolError> {
        match source.pool_state(pool).await {
            Ok(snapshot) => {
                debug!(
                    pool = %pool,
                    tick = snapshot.current_tick,
                    liquidity = snapshot.total_liquidity,
                    "Sampled pool"
                );
                Ok(snapshot)
            }
            Err(e) => {
                error!(pool = %pool, error = %e, "Failed to sample pool state");
                Err(e)
            }
        }
    }
}
