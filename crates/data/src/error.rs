use clmm_depth_domain::DomainError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by roster loading and record sinks.
#[derive(Debug, Error)]
pub enum DataError {
    /// The roster file could not be read.
    #[error("cannot read roster {path}: {source}")]
    RosterUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A roster line is not a valid address.
    #[error("roster line {line}: {source}")]
    InvalidRosterEntry {
        line: usize,
        #[source]
        source: DomainError,
    },
    /// Sink I/O failure.
    #[error("sink i/o error: {0}")]
    Io(#[from] std::io::Error),
}
