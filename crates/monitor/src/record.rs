//! Builds time-series records from per-address cycle results.

use chrono::{DateTime, TimeZone};
use clmm_depth_domain::entities::{Address, PoolSnapshot, TimeSeriesRecord};
use clmm_depth_domain::value_objects::Percentage;
use tracing::info;

/// Timestamp layout of the time-series log.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats records for one poll cycle.
#[derive(Debug, Clone, Copy)]
pub struct RecordFormatter {
    token0_decimals: u8,
    token1_decimals: u8,
}

impl RecordFormatter {
    pub fn new(token0_decimals: u8, token1_decimals: u8) -> Self {
        Self {
            token0_decimals,
            token1_decimals,
        }
    }

    /// Formats the shared cycle timestamp.
    pub fn timestamp<Tz: TimeZone>(&self, at: &DateTime<Tz>) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        at.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Record for an address while the pool is being sampled.
    pub fn sampled(
        &self,
        timestamp: &str,
        address: Address,
        active_liquidity: u128,
        percentage: f64,
        rolling_average: f64,
        snapshot: &PoolSnapshot,
    ) -> TimeSeriesRecord {
        TimeSeriesRecord {
            timestamp: timestamp.to_string(),
            address,
            active_liquidity,
            percentage_of_depth: Percentage(percentage),
            rolling_average: Percentage(rolling_average),
            current_tick: Some(snapshot.current_tick),
            current_price: Some(snapshot.price(self.token0_decimals, self.token1_decimals)),
        }
    }

    /// Record for an address in degraded mode.
    pub fn degraded(&self, timestamp: &str, address: Address, rolling_average: f64) -> TimeSeriesRecord {
        TimeSeriesRecord {
            timestamp: timestamp.to_string(),
            address,
            active_liquidity: 0,
            percentage_of_depth: Percentage::ZERO,
            rolling_average: Percentage(rolling_average),
            current_tick: None,
            current_price: None,
        }
    }

    /// Surfaces records to the operator log.
    pub fn log(&self, records: &[TimeSeriesRecord]) {
        for record in records {
            info!(
                address = %record.address,
                active_liquidity = record.active_liquidity,
                share = %record.percentage_of_depth,
                rolling_avg = %record.rolling_average,
                "{}",
                record.to_csv_row()
            );
        }
    }
}
