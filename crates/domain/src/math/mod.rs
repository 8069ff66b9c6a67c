/// Active liquidity aggregation.
pub mod active_liquidity;
/// Tick and square-root price conversions.
pub mod price_tick;
