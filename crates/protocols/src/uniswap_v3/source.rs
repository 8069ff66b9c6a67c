use super::bindings::{NonfungiblePositionManager, UniswapV3Factory, UniswapV3Pool};
use crate::LiquiditySource;
use crate::error::ProtocolError;
use async_trait::async_trait;
use clmm_depth_domain::U256;
use clmm_depth_domain::entities::{Address, PoolSnapshot, Position};
use clmm_depth_domain::fees::FeeTier;
use ethers::contract::ContractError;
use ethers::providers::Middleware;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::debug;

/// Contract addresses and call limits of a Uniswap v3 deployment.
#[derive(Debug, Clone, Copy)]
pub struct UniswapV3Config {
    /// Factory used to resolve pools.
    pub factory: Address,
    /// NonfungiblePositionManager holding positions.
    pub position_manager: Address,
    /// Upper bound on a single contract call.
    pub request_timeout: Duration,
}

/// Reads Uniswap v3 positions and pools through an `ethers` middleware.
pub struct UniswapV3Source<M> {
    client: Arc<M>,
    factory: UniswapV3Factory<M>,
    position_manager: NonfungiblePositionManager<M>,
    request_timeout: Duration,
}

impl<M: Middleware + 'static> UniswapV3Source<M> {
    /// Creates a new source.
    pub fn new(client: Arc<M>, config: UniswapV3Config) -> Self {
        Self {
            factory: UniswapV3Factory::new(config.factory.0, client.clone()),
            position_manager: NonfungiblePositionManager::new(
                config.position_manager.0,
                client.clone(),
            ),
            client,
            request_timeout: config.request_timeout,
        }
    }

    async fn call<T, F>(&self, method: &'static str, request: F) -> Result<T, ProtocolError>
    where
        F: Future<Output = Result<T, ContractError<M>>>,
    {
        match timeout(self.request_timeout, request).await {
            Ok(result) => result.map_err(|e| ProtocolError::Call {
                method,
                message: e.to_string(),
            }),
            Err(_) => Err(ProtocolError::Timeout {
                method,
                after: self.request_timeout,
            }),
        }
    }
}

#[async_trait]
impl<M: Middleware + 'static> LiquiditySource for UniswapV3Source<M> {
    async fn position_ids(&self, owner: Address) -> Result<Vec<U256>, ProtocolError> {
        let count = self
            .call("balanceOf", self.position_manager.balance_of(owner.0).call())
            .await?;
        if count > U256::from(u32::MAX) {
            return Err(ProtocolError::InvalidResponse(format!(
                "implausible position count {count}"
            )));
        }
        let count = count.low_u64();
        debug!(owner = %owner, count, "Listing positions");

        let mut ids = Vec::with_capacity(count as usize);
        for index in 0..count {
            let id = self
                .call(
                    "tokenOfOwnerByIndex",
                    self.position_manager
                        .token_of_owner_by_index(owner.0, U256::from(index))
                        .call(),
                )
                .await?;
            ids.push(id);
        }
        Ok(ids)
    }

    async fn position(&self, token_id: U256) -> Result<Position, ProtocolError> {
        let (_, _, token0, token1, fee, tick_lower, tick_upper, liquidity, ..) = self
            .call("positions", self.position_manager.positions(token_id).call())
            .await?;

        Ok(Position {
            token0: token0.into(),
            token1: token1.into(),
            fee_tier: FeeTier(fee),
            tick_lower,
            tick_upper,
            liquidity,
        })
    }

    async fn resolve_pool(
        &self,
        token0: Address,
        token1: Address,
        fee_tier: FeeTier,
    ) -> Result<Address, ProtocolError> {
        let pool = self
            .call(
                "getPool",
                self.factory.get_pool(token0.0, token1.0, fee_tier.raw()).call(),
            )
            .await?;
        Ok(pool.into())
    }

    async fn pool_state(&self, pool: Address) -> Result<PoolSnapshot, ProtocolError> {
        let contract = UniswapV3Pool::new(pool.0, self.client.clone());
        let (sqrt_price_x96, current_tick, ..) =
            self.call("slot0", contract.slot_0().call()).await?;
        let total_liquidity = self.call("liquidity", contract.liquidity().call()).await?;

        Ok(PoolSnapshot {
            current_tick,
            sqrt_price_x96,
            total_liquidity,
            timestamp: chrono::Utc::now().timestamp(),
        })
    }
}
