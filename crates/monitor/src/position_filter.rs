//! Startup loading of each address's pool-matching positions.

use clmm_depth_domain::entities::{Address, Position, TokenPair};
use clmm_depth_domain::fees::FeeTier;
use clmm_depth_protocols::{LiquiditySource, ProtocolError};
use futures::future::join_all;
use tracing::{debug, info, warn};

/// Outcome of loading one address's positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub address: Address,
    /// Positions in the monitored pool.
    pub positions: Vec<Position>,
    /// Positions in other pools, dropped.
    pub discarded: usize,
    /// Whether the data source failed for this address.
    pub failed: bool,
}

/// Keeps only positions in the configured pool.
#[derive(Debug, Clone, Copy)]
pub struct PositionFilter {
    pair: TokenPair,
    fee_tier: FeeTier,
}

impl PositionFilter {
    pub fn new(pair: TokenPair, fee_tier: FeeTier) -> Self {
        Self { pair, fee_tier }
    }

    /// Checks a single position against the pool identity.
    pub fn matches(&self, position: &Position) -> bool {
        position.belongs_to(&self.pair, self.fee_tier)
    }

    /// Retains matching positions, preserving order.
    pub fn filter(&self, positions: Vec<Position>) -> Vec<Position> {
        positions.into_iter().filter(|p| self.matches(p)).collect()
    }

    /// Fetches and filters the positions of one address.
    ///
    /// A data-source failure is logged and reported as zero positions.
    pub async fn load(&self, source: &dyn LiquiditySource, address: Address) -> LoadReport {
        match fetch_positions(source, address).await {
            Ok(all) => {
                let total = all.len();
                let positions = self.filter(all);
                let discarded = total - positions.len();
                debug!(
                    address = %address,
                    retained = positions.len(),
                    discarded,
                    "Loaded positions"
                );
                LoadReport {
                    address,
                    positions,
                    discarded,
                    failed: false,
                }
            }
            Err(e) => {
                warn!(address = %address, error = %e, "Failed to fetch positions, treating as none");
                LoadReport {
                    address,
                    positions: Vec::new(),
                    discarded: 0,
                    failed: true,
                }
            }
        }
    }

    /// Loads every address concurrently and waits for all of them.
    /// Reports come back in the order of `addresses`.
    pub async fn load_all(
        &self,
        source: &dyn LiquiditySource,
        addresses: &[Address],
    ) -> Vec<LoadReport> {
        let reports = join_all(addresses.iter().map(|a| self.load(source, *a))).await;

        let retained: usize = reports.iter().map(|r| r.positions.len()).sum();
        let discarded: usize = reports.iter().map(|r| r.discarded).sum();
        let failed = reports.iter().filter(|r| r.failed).count();
        info!(
            addresses = reports.len(),
            retained,
            discarded,
            failed,
            "Position cache built"
        );
        reports
    }
}

async fn fetch_positions(
    source: &dyn LiquiditySource,
    address: Address,
) -> Result<Vec<Position>, ProtocolError> {
    let ids = source.position_ids(address).await?;
    let mut positions = Vec::with_capacity(ids.len());
    for id in ids {
        positions.push(source.position(id).await?);
    }
    Ok(positions)
}
