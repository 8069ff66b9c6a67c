use clmm_depth_data::DataError;
use clmm_depth_domain::DomainError;
use thiserror::Error;

/// Errors raised by the monitoring engine.
#[derive(Debug, Error)]
pub enum MonitorError {
    /// Invalid engine configuration.
    #[error("invalid configuration: {0}")]
    Config(#[from] DomainError),
    /// The poll interval must be non-zero.
    #[error("poll interval must be at least one second")]
    ZeroInterval,
    /// The record sink failed.
    #[error("record sink error: {0}")]
    Sink(#[from] DataError),
}
