use std::time::Duration;
use thiserror::Error;

/// Errors raised while talking to the chain.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The RPC endpoint is not a valid URL.
    #[error("invalid rpc endpoint `{url}`: {message}")]
    InvalidEndpoint { url: String, message: String },
    /// A contract call failed in transport, in the node or while decoding.
    #[error("{method} call failed: {message}")]
    Call {
        method: &'static str,
        message: String,
    },
    /// A contract call did not answer in time.
    #[error("{method} call timed out after {after:?}")]
    Timeout {
        method: &'static str,
        after: Duration,
    },
    /// The node answered with a value the monitor cannot use.
    #[error("unexpected response: {0}")]
    InvalidResponse(String),
}
