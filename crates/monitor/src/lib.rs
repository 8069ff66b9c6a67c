//! Liquidity-concentration monitoring engine.
//!
//! This crate drives the periodic sampling loop:
//! - Position filtering and caching at startup
//! - Pool resolution and per-cycle pool sampling
//! - Per-address active liquidity share and rolling average
//! - Record formatting and emission to a sink
//! - Active / degraded mode state machine with non-overlapping cycles

/// Prelude module for convenient imports.
pub mod prelude;

/// Monitor configuration.
pub mod config;
/// Monitor errors.
pub mod error;
/// Position filtering.
pub mod position_filter;
/// Record formatting.
pub mod record;
/// Pool resolution and sampling.
pub mod sampler;
/// Poll scheduler and mode state machine.
pub mod scheduler;
/// Per-address tracking state.
pub mod state;

#[cfg(test)]
pub(crate) mod testing;
