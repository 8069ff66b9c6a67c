//! Address roster loading.
//!
//! One address per line. Blank lines and lines starting with `#` are
//! ignored; repeated addresses are tracked once.

use crate::error::DataError;
use clmm_depth_domain::entities::Address;
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

/// Reads and parses the roster file.
///
/// # Errors
/// Returns an error if the file cannot be read or a line is not an address.
pub async fn load_roster(path: impl AsRef<Path>) -> Result<Vec<Address>, DataError> {
    let path = path.as_ref();
    let contents =
        tokio::fs::read_to_string(path)
            .await
            .map_err(|source| DataError::RosterUnreadable {
                path: path.to_path_buf(),
                source,
            })?;
    let addresses = parse_roster(&contents)?;
    info!(path = %path.display(), addresses = addresses.len(), "Loaded address roster");
    Ok(addresses)
}

/// Parses roster contents, preserving first-seen order.
///
/// # Errors
/// Returns an error naming the first line that is not an address.
pub fn parse_roster(contents: &str) -> Result<Vec<Address>, DataError> {
    let mut seen = HashSet::new();
    let mut addresses = Vec::new();

    for (index, raw) in contents.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let address: Address = line
            .parse()
            .map_err(|source| DataError::InvalidRosterEntry {
                line: index + 1,
                source,
            })?;
        if seen.insert(address) {
            addresses.push(address);
        } else {
            warn!(address = %address, line = index + 1, "Duplicate roster entry ignored");
        }
    }

    Ok(addresses)
}
