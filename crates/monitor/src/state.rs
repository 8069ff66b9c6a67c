//! Per-address state owned by the monitor.

use crate::position_filter::LoadReport;
use clmm_depth_domain::DomainError;
use clmm_depth_domain::entities::{Address, Position};
use clmm_depth_domain::metrics::RollingWindow;
use std::collections::HashMap;

/// One roster address with its cached positions and rolling window.
#[derive(Debug, Clone)]
pub struct TrackedAddress {
    pub address: Address,
    /// Fixed after startup.
    pub positions: Vec<Position>,
    pub window: RollingWindow,
}

/// All tracked addresses, in roster order, with lookup by address.
#[derive(Debug, Clone, Default)]
pub struct MonitorState {
    tracked: Vec<TrackedAddress>,
    index: HashMap<Address, usize>,
}

impl MonitorState {
    /// Builds the state from startup load reports.
    ///
    /// # Errors
    /// Returns an error if `window_capacity` is zero.
    pub fn from_reports(
        reports: Vec<LoadReport>,
        window_capacity: usize,
    ) -> Result<Self, DomainError> {
        let mut state = Self::default();
        for report in reports {
            state.insert(report.address, report.positions, window_capacity)?;
        }
        Ok(state)
    }

    fn insert(
        &mut self,
        address: Address,
        positions: Vec<Position>,
        window_capacity: usize,
    ) -> Result<(), DomainError> {
        let window = RollingWindow::new(window_capacity)?;
        if let Some(&i) = self.index.get(&address) {
            self.tracked[i].positions = positions;
            return Ok(());
        }
        self.index.insert(address, self.tracked.len());
        self.tracked.push(TrackedAddress {
            address,
            positions,
            window,
        });
        Ok(())
    }

    pub fn get(&self, address: &Address) -> Option<&TrackedAddress> {
        self.index.get(address).map(|&i| &self.tracked[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrackedAddress> {
        self.tracked.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut TrackedAddress> {
        self.tracked.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.tracked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracked.is_empty()
    }
}
