//! File-backed inputs and outputs of the monitor.
//!
//! - Address roster loading
//! - Append-only record sinks (CSV file, in-memory)

pub mod error;
pub mod roster;
pub mod sinks;

pub use error::DataError;
pub use roster::{load_roster, parse_roster};
pub use sinks::{CsvFileSink, MemorySink, RecordSink};
