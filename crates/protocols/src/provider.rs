//! HTTP JSON-RPC provider construction.

use crate::error::ProtocolError;
use ethers::providers::{Http, Provider};
use tracing::debug;

/// Builds an HTTP provider for `url`.
///
/// # Errors
/// Returns an error if `url` is not a valid endpoint URL.
pub fn connect(url: &str) -> Result<Provider<Http>, ProtocolError> {
    let provider = Provider::<Http>::try_from(url).map_err(|e| ProtocolError::InvalidEndpoint {
        url: url.to_string(),
        message: e.to_string(),
    })?;
    debug!(url, "Provider configured");
    Ok(provider)
}
