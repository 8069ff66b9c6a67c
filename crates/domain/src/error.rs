use thiserror::Error;

/// Errors raised while building domain values from external input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The string is not a 20-byte hex address.
    #[error("invalid address `{0}`: expected 0x followed by 40 hex characters")]
    InvalidAddress(String),
    /// A rolling window cannot hold zero values.
    #[error("rolling window capacity must be at least 1")]
    ZeroWindowCapacity,
}
