//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use clmm_depth_monitor::prelude::*;
//! ```

pub use crate::config::MonitorConfig;
pub use crate::error::MonitorError;
pub use crate::position_filter::{LoadReport, PositionFilter};
pub use crate::record::RecordFormatter;
pub use crate::sampler::{PoolMode, PoolSampler};
pub use crate::scheduler::{CycleOutcome, Monitor};
pub use crate::state::{MonitorState, TrackedAddress};
