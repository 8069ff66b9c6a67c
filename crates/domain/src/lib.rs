//! Domain model for the CLMM liquidity-depth monitor.
//!
//! This crate holds the pure, I/O-free part of the engine:
//! - Addresses, positions, token pairs and pool snapshots
//! - Tick-range membership and active liquidity aggregation
//! - Square-root price conversion
//! - Fixed-capacity rolling windows for trailing averages

/// Domain errors.
pub mod error;
/// Core entities.
pub mod entities;
/// Fee tier definition.
pub mod fees;
/// Liquidity and price math.
pub mod math;
/// Rolling metrics.
pub mod metrics;
/// Value objects.
pub mod value_objects;

pub use error::DomainError;
/// 256-bit unsigned integer used for token IDs and `sqrtPriceX96`.
pub use ethers::types::U256;
