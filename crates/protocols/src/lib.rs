//! On-chain data sources for the liquidity-depth monitor.
//!
//! The monitor only talks to the [`LiquiditySource`] trait. The shipped
//! implementation reads Uniswap v3 contracts through an `ethers` provider.

pub mod error;
pub mod provider;
pub mod uniswap_v3;

pub use error::ProtocolError;
pub use provider::connect;
pub use uniswap_v3::{UniswapV3Config, UniswapV3Source};

use async_trait::async_trait;
use clmm_depth_domain::U256;
use clmm_depth_domain::entities::{Address, PoolSnapshot, Position};
use clmm_depth_domain::fees::FeeTier;

/// Read-only view of positions and pool state.
#[async_trait]
pub trait LiquiditySource: Send + Sync {
    /// Lists the position token IDs owned by `owner`.
    async fn position_ids(&self, owner: Address) -> Result<Vec<U256>, ProtocolError>;

    /// Reads one position by token ID.
    async fn position(&self, token_id: U256) -> Result<Position, ProtocolError>;

    /// Looks up the canonical pool for an ordered token pair and fee tier.
    /// Returns the zero address when no such pool exists.
    async fn resolve_pool(
        &self,
        token0: Address,
        token1: Address,
        fee_tier: FeeTier,
    ) -> Result<Address, ProtocolError>;

    /// Reads the pool's current tick, square-root price and in-range liquidity.
    async fn pool_state(&self, pool: Address) -> Result<PoolSnapshot, ProtocolError>;
}
