//! Poll scheduler and mode state machine.
//!
//! The mode is fixed at startup:
//! - Active: sample the pool, then compute share and rolling average per address
//! - Degraded: no pool, push zero for every address and emit `N/A` records
//!
//! Cycles never overlap: a cycle borrows the monitor mutably, and the loop
//! awaits each cycle before polling the next tick. A cycle that overruns the
//! period delays the next one instead of queueing a burst.

use crate::config::MonitorConfig;
use crate::error::MonitorError;
use crate::position_filter::PositionFilter;
use crate::record::RecordFormatter;
use crate::sampler::{PoolMode, PoolSampler};
use crate::state::MonitorState;
use chrono::{DateTime, Local, TimeZone};
use clmm_depth_data::RecordSink;
use clmm_depth_domain::entities::{Address, PoolSnapshot, TimeSeriesRecord};
use clmm_depth_domain::math::active_liquidity::{active_liquidity, depth_percentage};
use clmm_depth_domain::value_objects::Percentage;
use clmm_depth_protocols::LiquiditySource;
use std::future::Future;
use std::sync::Arc;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, error, info, warn};


/// Result of one poll cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Records were emitted, one per tracked address.
    Emitted { records: usize },
    /// Pool sampling failed; nothing was emitted or updated.
    Skipped,
}

/// The monitoring engine.
pub struct Monitor {
    config: MonitorConfig,
    source: Arc<dyn LiquiditySource>,
    sink: Box<dyn RecordSink>,
    sampler: PoolSampler,
    formatter: RecordFormatter,
    mode: PoolMode,
    state: MonitorState,
    /// Completed cycles, emitted or skipped.
    cycles: u64,
}

impl Monitor {
    /// Resolves the pool, loads every address's positions and builds the state.
    ///
    /// Pool and position failures are tolerated (degraded mode, empty
    /// positions); only invalid configuration is an error.
    ///
    /// # Errors
    /// Returns an error if the interval or window capacity is zero.
    pub async fn bootstrap(
        config: MonitorConfig,
        source: Arc<dyn LiquiditySource>,
        sink: Box<dyn RecordSink>,
        roster: &[Address],
    ) -> Result<Self, MonitorError> {
        if config.poll_interval_secs == 0 {
            return Err(MonitorError::ZeroInterval);
        }

        let sampler = PoolSampler::new(config.pool_key());
        let mode = sampler.resolve(source.as_ref()).await;

        let filter = PositionFilter::new(config.pair, config.fee_tier);
        let reports = filter.load_all(source.as_ref(), roster).await;
        let state = MonitorState::from_reports(reports, config.window_capacity)?;

        info!(
            mode = ?mode,
            addresses = state.len(),
            sink = sink.backend_type(),
            "Monitor ready"
        );

        Ok(Self {
            formatter: RecordFormatter::new(config.token0_decimals, config.token1_decimals),
            config,
            source,
            sink,
            sampler,
            mode,
            state,
            cycles: 0,
        })
    }

    /// Operating mode chosen at startup.
    pub fn mode(&self) -> PoolMode {
        self.mode
    }

    /// Per-address state.
    pub fn state(&self) -> &MonitorState {
        &self.state
    }

    /// Number of cycles run so far.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Runs one cycle stamped with the current local time.
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        self.run_cycle_at(&Local::now()).await
    }

    /// Runs one cycle stamped with `at`.
    ///
    /// Upstream and sink failures are logged; they never abort the cycle loop.
    pub async fn run_cycle_at<Tz: TimeZone>(&mut self, at: &DateTime<Tz>) -> CycleOutcome
    where
        Tz::Offset: std::fmt::Display,
    {
        self.cycles += 1;
        let timestamp = self.formatter.timestamp(at);

        let records = match self.mode {
            PoolMode::Active { pool } => {
                let Ok(snapshot) = self.sampler.sample(self.source.as_ref(), pool).await else {
                    warn!(cycle = self.cycles, "Skipping cycle");
                    return CycleOutcome::Skipped;
                };
                self.sampled_records(&timestamp, &snapshot)
            }
            PoolMode::Degraded => self.degraded_records(&timestamp),
        };

        self.formatter.log(&records);
        if let Err(e) = self.sink.append(&records).await {
            error!(
                cycle = self.cycles,
                sink = self.sink.backend_type(),
                error = %e,
                "Failed to append records"
            );
        }

        CycleOutcome::Emitted {
            records: records.len(),
        }
    }

    fn sampled_records(&mut self, timestamp: &str, snapshot: &PoolSnapshot) -> Vec<TimeSeriesRecord> {
        let formatter = self.formatter;
        let mut records = Vec::with_capacity(self.state.len());
        let mut in_range = 0usize;
        let mut roster_share = 0.0;

        for tracked in self.state.iter_mut() {
            let active = active_liquidity(&tracked.positions, snapshot.current_tick);
            let percentage = depth_percentage(active, snapshot.total_liquidity);
            let average = tracked.window.push_and_average(percentage);
            if active > 0 {
                in_range += 1;
            }
            roster_share += percentage;
            records.push(formatter.sampled(
                timestamp,
                tracked.address,
                active,
                percentage,
                average,
                snapshot,
            ));
        }

        info!(
            cycle = self.cycles,
            tick = snapshot.current_tick,
            total_liquidity = snapshot.total_liquidity,
            in_range,
            roster_share = %Percentage(roster_share),
            "Cycle complete"
        );
        records
    }

    fn degraded_records(&mut self, timestamp: &str) -> Vec<TimeSeriesRecord> {
        let formatter = self.formatter;
        let records: Vec<TimeSeriesRecord> = self
            .state
            .iter_mut()
            .map(|tracked| {
                let average = tracked.window.push_and_average(0.0);
                formatter.degraded(timestamp, tracked.address, average)
            })
            .collect();

        info!(cycle = self.cycles, addresses = records.len(), "Cycle complete (no pool)");
        records
    }

    /// Runs cycles on the configured period until `shutdown` resolves.
    ///
    /// The first cycle runs immediately. A cycle that overruns the period
    /// delays the next one; missed ticks are not replayed. Shutdown is checked
    /// before each tick and takes effect once the running cycle completes.
    ///
    /// # Errors
    /// Returns an error if the sink cannot be flushed on exit.
    pub async fn run_until<F>(&mut self, shutdown: F) -> Result<(), MonitorError>
    where
        F: Future<Output = ()>,
    {
        let mut ticker = interval(self.config.poll_interval());
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        info!(
            interval_secs = self.config.poll_interval_secs,
            mode = ?self.mode,
            "Starting poll loop"
        );

        loop {
            tokio::select! {
                biased;
                _ = &mut shutdown => {
                    info!(cycles = self.cycles, "Shutdown requested");
                    break;
                }
                _ = ticker.tick() => {
                    let outcome = self.run_cycle().await;
                    debug!(cycle = self.cycles, ?outcome, "Cycle finished");
                }
            }
        }

        self.finish().await
    }

    /// Flushes the sink.
    ///
    /// # Errors
    /// Returns an error if the sink cannot be flushed.
    pub async fn finish(&mut self) -> Result<(), MonitorError> {
        self.sink.flush().await?;
        Ok(())
    }
}
