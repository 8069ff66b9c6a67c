//! Uniswap v3 protocol adapter.
//!
//! This module reads Uniswap v3 state through `eth_call`:
//! - Position token IDs and details from the NonfungiblePositionManager
//! - Pool addresses from the factory
//! - Tick, price and liquidity from the pool

/// Generated contract bindings.
pub mod bindings;
/// [`crate::LiquiditySource`] implementation.
pub mod source;

pub use source::{UniswapV3Config, UniswapV3Source};

/// Uniswap v3 factory (mainnet).
pub const FACTORY_ADDRESS: &str = "0x1F98431c8aD98523631AE4a59f267346ea31F984";

/// NonfungiblePositionManager (mainnet).
pub const POSITION_MANAGER_ADDRESS: &str = "0xC36442b4a4522E871399CD717aBDD847Ab11FE88";
