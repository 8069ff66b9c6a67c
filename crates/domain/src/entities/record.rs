use crate::entities::token::Address;
use crate::value_objects::Percentage;
use serde::{Deserialize, Serialize};

/// Header row of the time-series log.
pub const CSV_HEADER: &str =
    "timestamp,address,activeLiquidity,percentageOfDepth,rolling72minAvg,currentTick,currentPrice";

/// Placeholder written when no pool is available.
pub const UNAVAILABLE: &str = "N/A";

/// One row of the time-series log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesRecord {
    /// Local wall-clock time of the poll cycle, `%Y-%m-%d %H:%M:%S`.
    pub timestamp: String,
    pub address: Address,
    pub active_liquidity: u128,
    pub percentage_of_depth: Percentage,
    pub rolling_average: Percentage,
    /// `None` in no-pool mode.
    pub current_tick: Option<i32>,
    /// `None` in no-pool mode.
    pub current_price: Option<f64>,
}

impl TimeSeriesRecord {
    /// Renders the record as one CSV line, without the trailing newline.
    #[must_use]
    pub fn to_csv_row(&self) -> String {
        let tick = self
            .current_tick
            .map_or_else(|| UNAVAILABLE.to_string(), |t| t.to_string());
        let price = self
            .current_price
            .map_or_else(|| UNAVAILABLE.to_string(), |p| format!("{p:.6}"));
        format!(
            "{},{},{},{},{},{},{}",
            self.timestamp,
            self.address,
            self.active_liquidity,
            self.percentage_of_depth,
            self.rolling_average,
            tick,
            price
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> TimeSeriesRecord {
        TimeSeriesRecord {
            timestamp: "2025-01-01 00:00:00".to_string(),
            address: Address::from_bytes([0xab; 20]),
            active_liquidity: 500,
            percentage_of_depth: Percentage(50.0),
            rolling_average: Percentage(25.0),
            current_tick: Some(-7),
            current_price: Some(1.0),
        }
    }

    #[test]
    fn test_row_with_pool() {
        assert_eq!(
            record().to_csv_row(),
            "2025-01-01 00:00:00,0xabababababababababababababababababababab,500,50.00%,25.00%,-7,1.000000"
        );
    }

    #[test]
    fn test_row_without_pool() {
        let r = TimeSeriesRecord {
            active_liquidity: 0,
            percentage_of_depth: Percentage::ZERO,
            current_tick: None,
            current_price: None,
            ..record()
        };
        assert!(r.to_csv_row().ends_with(",0,0.00%,25.00%,N/A,N/A"));
    }

    #[test]
    fn test_header_column_count() {
        assert_eq!(CSV_HEADER.split(',').count(), record().to_csv_row().split(',').count());
    }
}
